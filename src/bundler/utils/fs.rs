//! File system utilities for volume staging.
//!
//! Provides whole-file writes with automatic directory creation and
//! path-aware error reporting.

use crate::bundler::error::{Error, ErrorExt, Result};
use std::path::Path;

/// Writes `contents` to `path` in a single call, replacing any existing file.
///
/// Parent directories are created as needed. Callers assemble the complete
/// buffer first so a failed build never leaves a truncated file behind.
pub fn write_file(path: &Path, contents: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).fs_context("failed to create directory", parent)?;
    }
    std::fs::write(path, contents).fs_context("failed to write", path)
}

/// Creates `path` and any missing parents.
pub fn create_dir_all(path: &Path) -> Result<()> {
    std::fs::create_dir_all(path).fs_context("failed to create directory", path)
}

/// Copies a regular file from one path to another, creating any parent
/// directories of the destination path as necessary.
///
/// Fails if the source path is a directory or doesn't exist.
pub fn copy_file(from: &Path, to: &Path) -> Result<()> {
    if !from.exists() {
        return Err(Error::GenericError(format!("{from:?} does not exist")));
    }
    if !from.is_file() {
        return Err(Error::GenericError(format!("{from:?} is not a file")));
    }
    if let Some(dest_dir) = to.parent() {
        std::fs::create_dir_all(dest_dir).fs_context("failed to create directory", dest_dir)?;
    }
    std::fs::copy(from, to).fs_context("failed to copy to", to)?;
    Ok(())
}
