// src/export/mod.rs

mod csv;
mod json;
mod options;
mod xlsx;

pub use options::EncoderOptions;

use crate::errors::AppResult;
use crate::pivot::PivotTable;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Csv,
    Xlsx,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Json => "json",
        }
    }

    /// Suffix appended to every pivot export file name.
    ///
    /// CSV keeps its `.csv` suffix even though the content is tab separated:
    /// existing consumers open the files by that extension.
    pub fn suffix(&self) -> &'static str {
        match self {
            ExportFormat::Csv => ".csv",
            ExportFormat::Xlsx => ".xlsx",
            ExportFormat::Json => ".json",
        }
    }

    /// Final file name for a pivot export: the suffix is always appended,
    /// whatever the caller already put in `name`.
    pub fn file_name(&self, name: &str) -> String {
        format!("{}{}", name, self.suffix())
    }
}

/// Encode a pivot table into the bytes of the requested format.
pub fn encode(
    table: &PivotTable,
    format: ExportFormat,
    opts: &EncoderOptions,
) -> AppResult<Vec<u8>> {
    let bytes = match format {
        ExportFormat::Csv => csv::encode_csv(table, opts)?,
        ExportFormat::Xlsx => xlsx::encode_xlsx(table, opts)?,
        ExportFormat::Json => json::encode_json(table)?,
    };

    tracing::debug!(format = format.as_str(), bytes = bytes.len(), "pivot encoded");
    Ok(bytes)
}
