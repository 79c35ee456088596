use crate::delivery::{Delivered, FileDelivery};
use crate::errors::{AppError, AppResult};
use crate::export::{EncoderOptions, ExportFormat, encode};
use crate::fetch::ApiClient;
use crate::models::{ReportRequest, TimeEntry};
use crate::pivot::{PivotTable, pivot};
use std::fs;
use std::path::PathBuf;

/// Where the time entries of a pivot export come from.
#[derive(Debug, Clone)]
pub enum EntrySource {
    /// Local JSON array of entries.
    File(PathBuf),
    /// API endpoint returning a JSON array of entries.
    Api {
        target: String,
        request: Option<ReportRequest>,
    },
}

/// Pivot-and-export: load entries, pivot, encode, deliver.
pub struct ExportLogic;

impl ExportLogic {
    pub fn load_entries(
        source: &EntrySource,
        client: Option<&ApiClient>,
    ) -> AppResult<Vec<TimeEntry>> {
        match source {
            EntrySource::File(path) => {
                tracing::info!(path = %path.display(), "reading entries from file");
                let bytes = fs::read(path)?;
                Ok(TimeEntry::list_from_json(&bytes)?)
            }
            EntrySource::Api { target, request } => {
                let client = client.ok_or(AppError::MissingToken)?;
                client.fetch_entries(target, request.as_ref())
            }
        }
    }

    /// Pivot `entries` and deliver the encoded table.
    ///
    /// The file name always gets the format suffix appended
    /// (see [`ExportFormat::file_name`]).
    pub fn pivot_and_export(
        entries: &[TimeEntry],
        format: ExportFormat,
        filename: &str,
        delivery: &dyn FileDelivery,
    ) -> AppResult<(PivotTable, Delivered)> {
        let table = pivot(entries);
        let bytes = encode(&table, format, &EncoderOptions::default())?;
        let delivered = delivery.deliver(&format.file_name(filename), &bytes)?;
        Ok((table, delivered))
    }
}
