// src/delivery/overwrite.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Decide whether `path` may be (over)written.
///
/// - target missing, or `force` → Ok
/// - target present → ask on stdin; anything but y/yes cancels
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    warning(format!("The file '{}' already exists.", path.display()));
    if confirm_overwrite(&mut io::stdin().lock())? {
        info("Existing file will be overwritten.");
        Ok(())
    } else {
        Err(AppError::DeliveryCancelled(path.display().to_string()))
    }
}

/// Prompt on stderr, read one answer line. EOF counts as "no".
fn confirm_overwrite<R: BufRead>(input: &mut R) -> AppResult<bool> {
    eprint!("Overwrite? [y/N]: ");
    io::stderr().flush().ok();

    let mut answer = String::new();
    input.read_line(&mut answer)?;

    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}
