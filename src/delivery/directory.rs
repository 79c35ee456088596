use super::overwrite::ensure_writable;
use super::{Delivered, FileDelivery};
use crate::errors::AppResult;
use crate::utils::path::validate_file_name;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

/// Saves files into a local directory.
///
/// Bytes go to a temporary file next to the target, which is then renamed
/// into place. The temporary file is removed on drop, so an interrupted
/// delivery never leaves a partial file behind.
#[derive(Debug, Clone)]
pub struct DirectoryDelivery {
    dir: PathBuf,
    force: bool,
}

impl DirectoryDelivery {
    pub fn new(dir: impl Into<PathBuf>, force: bool) -> Self {
        Self {
            dir: dir.into(),
            force,
        }
    }

    pub fn dir(&self) -> &PathBuf {
        &self.dir
    }
}

impl FileDelivery for DirectoryDelivery {
    fn deliver(&self, filename: &str, bytes: &[u8]) -> AppResult<Delivered> {
        let name = validate_file_name(filename)?;
        let target = self.dir.join(name);

        ensure_writable(&target, self.force)?;
        fs::create_dir_all(&self.dir)?;

        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        tracing::debug!(tmp = %tmp.path().display(), "staging delivery");

        tmp.write_all(bytes)?;
        tmp.flush()?;
        tmp.persist(&target).map_err(|e| e.error)?;

        tracing::info!(path = %target.display(), bytes = bytes.len(), "file delivered");
        Ok(Delivered::File(target))
    }
}
