use super::{Delivered, FileDelivery};
use crate::errors::AppResult;
use std::io::{self, Write};

/// Writes the bytes to standard output, for piping into other tools.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutDelivery;

impl FileDelivery for StdoutDelivery {
    fn deliver(&self, filename: &str, bytes: &[u8]) -> AppResult<Delivered> {
        let mut out = io::stdout().lock();
        out.write_all(bytes)?;
        out.flush()?;

        tracing::info!(filename, bytes = bytes.len(), "file written to stdout");
        Ok(Delivered::Stdout { bytes: bytes.len() })
    }
}
