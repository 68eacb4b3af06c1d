//! Filesystem identity lookups and volume boundary detection.

use crate::bundler::error::Result;
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};

/// Name reported for the boot volume mounted at `/`.
pub const ROOT_VOLUME_NAME: &str = "Macintosh HD";

/// File type as far as alias records care.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    File,
    Directory,
    /// Sockets, devices, fifos
    Other,
}

/// Result of a `stat` call.
#[derive(Debug, Clone, PartialEq)]
pub struct FileStat {
    pub kind: FileKind,
    /// Device the file lives on
    pub device: u64,
    pub inode: u64,
    pub modified: DateTime<Utc>,
}

/// Filesystem metadata needed to build an alias record.
pub trait FileSystem {
    /// Follows symlinks, like `stat(2)`.
    fn stat(&self, path: &Path) -> Result<FileStat>;

    /// Display name of the volume mounted at `volume_root`.
    fn volume_name(&self, volume_root: &Path) -> Result<String>;
}

/// [`FileSystem`] backed by the host's `stat(2)`.
///
/// Volume names are taken from the mount point, which matches how disk
/// images attach under `/Volumes/<name>`. Hosts without device and inode
/// numbers cannot stat for alias records.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostFileSystem;

impl FileSystem for HostFileSystem {
    #[cfg(unix)]
    fn stat(&self, path: &Path) -> Result<FileStat> {
        use crate::bundler::error::ErrorExt;
        use std::os::unix::fs::MetadataExt;

        let meta = std::fs::metadata(path).fs_context("failed to stat", path)?;
        let kind = if meta.is_dir() {
            FileKind::Directory
        } else if meta.is_file() {
            FileKind::File
        } else {
            FileKind::Other
        };
        let modified = meta
            .modified()
            .fs_context("failed to read modification time of", path)?;

        Ok(FileStat {
            kind,
            device: meta.dev(),
            inode: meta.ino(),
            modified: modified.into(),
        })
    }

    #[cfg(not(unix))]
    fn stat(&self, path: &Path) -> Result<FileStat> {
        crate::bail!(
            "cannot read device and inode numbers for {} on this platform",
            path.display()
        )
    }

    fn volume_name(&self, volume_root: &Path) -> Result<String> {
        Ok(volume_root
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| ROOT_VOLUME_NAME.to_string()))
    }
}

/// Walks up from `start` until the parent is on another device or is the
/// same inode (the filesystem root), returning the last path on the volume.
pub fn find_volume(fs: &dyn FileSystem, start: &Path, start_stat: &FileStat) -> Result<PathBuf> {
    let mut last_path = start.to_path_buf();
    let mut last_device = start_stat.device;
    let mut last_inode = start_stat.inode;

    while let Some(parent) = last_path.parent() {
        let parent_stat = fs.stat(parent)?;
        if parent_stat.device != last_device || parent_stat.inode == last_inode {
            break;
        }

        last_device = parent_stat.device;
        last_inode = parent_stat.inode;
        last_path = parent.to_path_buf();
    }

    log::debug!("{} is on volume {}", start.display(), last_path.display());
    Ok(last_path)
}
