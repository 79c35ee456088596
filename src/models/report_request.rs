use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Body of the report POST: which employee and which date interval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRequest {
    pub employee_id: i64,
    pub from_date: String,
    pub to_date: String,
}

impl ReportRequest {
    pub fn new(employee_id: i64, from_date: &str, to_date: &str) -> Self {
        Self {
            employee_id,
            from_date: from_date.to_string(),
            to_date: to_date.to_string(),
        }
    }

    /// Build a request from the optional CLI flags.
    ///
    /// - all three given → `Some(request)`
    /// - none given → `None`
    /// - partial → error
    pub fn from_parts(
        employee: Option<i64>,
        from: Option<&str>,
        to: Option<&str>,
    ) -> AppResult<Option<Self>> {
        match (employee, from, to) {
            (Some(id), Some(f), Some(t)) => Ok(Some(Self::new(id, f, t))),
            (None, None, None) => Ok(None),
            _ => Err(AppError::InvalidPayload(
                "--employee, --from and --to must be given together".to_string(),
            )),
        }
    }
}

/// Legacy positional form `"<employeeId>,<fromDate>,<toDate>"`.
///
/// Kept only for callers still sending the old string payload. The id is
/// trimmed; both dates are passed through verbatim.
impl FromStr for ReportRequest {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        let parts: Vec<&str> = s.split(',').collect();

        let [id, from, to] = parts.as_slice() else {
            return Err(AppError::InvalidPayload(format!(
                "expected 'employeeId,fromDate,toDate', got '{s}'"
            )));
        };

        // solo l'id viene ripulito, le date passano così come sono
        let employee_id: i64 = id
            .trim()
            .parse()
            .map_err(|_| AppError::InvalidPayload(format!("invalid employee id '{id}'")))?;

        if from.trim().is_empty() || to.trim().is_empty() {
            return Err(AppError::InvalidPayload(
                "from/to dates must not be empty".to_string(),
            ));
        }

        Ok(Self::new(employee_id, from, to))
    }
}
