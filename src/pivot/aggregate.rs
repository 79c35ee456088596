use super::{DateAxis, PivotTable, ProjectRow, RowKey};
use crate::models::TimeEntry;
use std::collections::HashMap;

/// Pivot time entries into a project × date table.
///
/// - project rows only see entries with a project
/// - the total row sums *every* entry, placeholders included
/// - project rows with no hours at all are dropped, total is always kept
pub fn pivot(entries: &[TimeEntry]) -> PivotTable {
    let axis = DateAxis::from_entries(entries);
    let columns: HashMap<&str, usize> = axis
        .dates()
        .iter()
        .enumerate()
        .map(|(i, d)| (d.as_str(), i))
        .collect();

    let mut rows: Vec<ProjectRow> = Vec::new();
    let mut row_index: HashMap<&str, usize> = HashMap::new();

    for e in entries {
        let Some(project) = e.project.as_deref() else {
            continue;
        };

        let idx = *row_index.entry(project).or_insert_with(|| {
            rows.push(ProjectRow::zeroed(
                RowKey::Project(project.to_string()),
                axis.len(),
            ));
            rows.len() - 1
        });

        // la data è sempre presente: l'asse è costruito dalle stesse entry
        if let Some(&col) = columns.get(e.work_date.as_str()) {
            rows[idx].hours[col] += e.hours;
        }
    }

    let mut total = ProjectRow::zeroed(RowKey::Total, axis.len());
    for e in entries {
        if let Some(&col) = columns.get(e.work_date.as_str()) {
            total.hours[col] += e.hours;
        }
    }

    rows.retain(|r| !r.is_empty());
    rows.push(total);

    tracing::debug!(
        entries = entries.len(),
        dates = axis.len(),
        rows = rows.len(),
        "pivot built"
    );

    PivotTable { axis, rows }
}
