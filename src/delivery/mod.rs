//! File delivery: hand finished bytes to the user under a given name.
//!
//! The fetch and pivot logic only see the `FileDelivery` trait; each
//! hosting context provides its own implementation.

mod directory;
mod overwrite;
mod stdout;

pub use directory::DirectoryDelivery;
pub use stdout::StdoutDelivery;

use crate::errors::AppResult;
use std::fmt;
use std::path::PathBuf;

/// Where a delivered file ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivered {
    File(PathBuf),
    Stdout { bytes: usize },
}

impl fmt::Display for Delivered {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Delivered::File(path) => write!(f, "{}", path.display()),
            Delivered::Stdout { bytes } => write!(f, "<stdout> ({bytes} bytes)"),
        }
    }
}

pub trait FileDelivery {
    /// Save `bytes` under `filename`. Must not leave temporary resources
    /// behind, whatever the outcome.
    fn deliver(&self, filename: &str, bytes: &[u8]) -> AppResult<Delivered>;
}
