use crate::models::TimeEntry;
use crate::utils::parse_work_date;
use chrono::NaiveDateTime;
use std::cmp::Ordering;
use std::collections::HashSet;

/// Distinct work dates, sorted by calendar value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DateAxis {
    dates: Vec<String>,
}

impl DateAxis {
    /// Collect the distinct `work_date` strings of `entries` in ascending
    /// calendar order.
    ///
    /// Identical strings collapse into one column. Strings that do not parse
    /// as a date go last, ordered lexically among themselves.
    pub fn from_entries(entries: &[TimeEntry]) -> Self {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut keyed: Vec<(Option<NaiveDateTime>, &str)> = Vec::new();

        for e in entries {
            if seen.insert(e.work_date.as_str()) {
                keyed.push((parse_work_date(&e.work_date), e.work_date.as_str()));
            }
        }

        keyed.sort_by(|(pa, sa), (pb, sb)| match (pa, pb) {
            (Some(a), Some(b)) => a.cmp(b).then_with(|| sa.cmp(sb)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => sa.cmp(sb),
        });

        Self {
            dates: keyed.into_iter().map(|(_, s)| s.to_string()).collect(),
        }
    }

    pub fn dates(&self) -> &[String] {
        &self.dates
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}
