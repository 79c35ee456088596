//! Unified application error type.
//! All modules (fetch, pivot, export, delivery, cli) return AppError to keep
//! the error handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Network
    // ---------------------------
    /// The request never completed (DNS, connect, TLS, broken body...).
    #[error("Transport error: {0}")]
    Transport(#[from] ureq::Error),

    /// The server answered with a non-success status.
    /// `detail` is the parsed error body (or the raw text as a JSON string).
    #[error("Request rejected with HTTP {status}: {detail}")]
    Rejected {
        status: u16,
        detail: serde_json::Value,
    },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Missing API token: set `token` in the config file, RTIMESHEET_TOKEN or --token")]
    MissingToken,

    #[error("No API base URI configured and '{0}' is not an absolute URL")]
    MissingApiUri(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid arguments: {0}")]
    InvalidArgs(String),

    #[error("Invalid request payload: {0}")]
    InvalidPayload(String),

    #[error("Invalid time entries: {0}")]
    InvalidEntries(#[from] serde_json::Error),

    // ---------------------------
    // Encoding errors
    // ---------------------------
    #[error("CSV encoding error: {0}")]
    Csv(#[from] csv::Error),

    #[error("XLSX encoding error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("Encoding error: {0}")]
    Encoding(String),

    // ---------------------------
    // Delivery errors
    // ---------------------------
    #[error("Invalid output file name: '{0}'")]
    InvalidFilename(String),

    #[error("Delivery cancelled: existing file '{0}' not overwritten")]
    DeliveryCancelled(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),
}

pub type AppResult<T> = Result<T, AppError>;
