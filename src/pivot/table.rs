use super::DateAxis;
use std::borrow::Cow;
use std::fmt;

/// Label used for the synthetic total row in encoded output.
pub const TOTAL_LABEL: &str = "total";

/// Prefix reserved for project labels that would otherwise be ambiguous.
pub const PROJECT_ESCAPE: &str = "project:";

/// Identity of a pivot row.
///
/// The total row is its own variant, so a project whose id is literally
/// `"total"` stays a separate row.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RowKey {
    Project(String),
    Total,
}

impl RowKey {
    /// Label written in exported files.
    ///
    /// `total` only ever names the total row: a project called `total`, or
    /// one already starting with `project:`, is written as `project:<id>`.
    pub fn label(&self) -> Cow<'_, str> {
        match self {
            RowKey::Project(p) if p == TOTAL_LABEL || p.starts_with(PROJECT_ESCAPE) => {
                Cow::Owned(format!("{PROJECT_ESCAPE}{p}"))
            }
            RowKey::Project(p) => Cow::Borrowed(p),
            RowKey::Total => Cow::Borrowed(TOTAL_LABEL),
        }
    }

    pub fn is_total(&self) -> bool {
        matches!(self, RowKey::Total)
    }
}

impl fmt::Display for RowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// One output row: summed hours per axis column.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectRow {
    pub key: RowKey,
    pub hours: Vec<f64>,
}

impl ProjectRow {
    pub(crate) fn zeroed(key: RowKey, columns: usize) -> Self {
        Self {
            key,
            hours: vec![0.0; columns],
        }
    }

    /// `true` when no column holds a non-zero amount (NaN counts as empty).
    pub fn is_empty(&self) -> bool {
        self.hours.iter().all(|h| *h == 0.0 || h.is_nan())
    }

    pub fn sum(&self) -> f64 {
        self.hours.iter().sum()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PivotTable {
    pub axis: DateAxis,
    pub rows: Vec<ProjectRow>,
}

impl PivotTable {
    /// Header labels: `project` followed by the axis dates.
    pub fn headers(&self) -> Vec<&str> {
        std::iter::once("project")
            .chain(self.axis.dates().iter().map(String::as_str))
            .collect()
    }

    pub fn total(&self) -> Option<&ProjectRow> {
        self.rows.iter().find(|r| r.key.is_total())
    }

    pub fn project(&self, id: &str) -> Option<&ProjectRow> {
        self.rows
            .iter()
            .find(|r| matches!(&r.key, RowKey::Project(p) if p == id))
    }

    /// Hours of `row` for the given axis date, if that date is on the axis.
    pub fn cell(&self, row: &ProjectRow, date: &str) -> Option<f64> {
        let col = self.axis.dates().iter().position(|d| d == date)?;
        row.hours.get(col).copied()
    }
}
