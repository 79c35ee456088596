use serde::{Deserialize, Deserializer, Serialize};

/// One logged duration of work against an optional project on a given date.
///
/// `project == None` marks a placeholder row ("no work logged that day"):
/// it only counts towards the `total` row of a pivot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeEntry {
    pub hours: f64,
    pub work_date: String,
    #[serde(default, deserialize_with = "deserialize_project")]
    pub project: Option<String>,
}

impl TimeEntry {
    pub fn new(hours: f64, work_date: &str, project: Option<&str>) -> Self {
        Self {
            hours,
            work_date: work_date.to_string(),
            project: project.map(str::to_string),
        }
    }

    /// Parse a JSON array of entries (API response body or local file).
    pub fn list_from_json(bytes: &[u8]) -> serde_json::Result<Vec<TimeEntry>> {
        serde_json::from_slice(bytes)
    }
}

/// The API sends project ids either as strings or as plain numbers.
#[derive(Deserialize)]
#[serde(untagged)]
enum ProjectId {
    Text(String),
    Int(i64),
    Float(f64),
}

fn deserialize_project<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<ProjectId>::deserialize(deserializer)?;
    Ok(raw.map(|p| match p {
        ProjectId::Text(s) => s,
        ProjectId::Int(n) => n.to_string(),
        ProjectId::Float(f) => f.to_string(),
    }))
}
