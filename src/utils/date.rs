use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Formati accettati per `work_date`, dal più comune al meno comune.
const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parse a work date into a comparable calendar value.
///
/// Accepts `YYYY-MM-DD` (unpadded month/day allowed), ISO date-times with or
/// without seconds, and RFC 3339 timestamps. Returns `None` otherwise.
pub fn parse_work_date(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();

    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return d.and_hms_opt(0, 0, 0);
    }

    for fmt in DATETIME_FORMATS.iter() {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }

    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.naive_utc())
}
