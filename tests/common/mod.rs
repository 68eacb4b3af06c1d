//! Shared fixtures for integration tests
#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use kodegen_bundler_dsstore::bundler::{
    Error, Result,
    platform::macos::alias::{FileKind, FileStat, FileSystem, HostFileSystem},
};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// In-memory filesystem keyed by absolute path.
#[derive(Default)]
pub struct FakeFs {
    nodes: HashMap<PathBuf, FileStat>,
}

impl FakeFs {
    pub fn with(mut self, path: &str, kind: FileKind, device: u64, inode: u64) -> Self {
        self.nodes.insert(
            PathBuf::from(path),
            FileStat {
                kind,
                device,
                inode,
                modified: created(),
            },
        );
        self
    }
}

impl FileSystem for FakeFs {
    fn stat(&self, path: &Path) -> Result<FileStat> {
        self.nodes
            .get(path)
            .cloned()
            .ok_or_else(|| Error::GenericError(format!("no such file: {}", path.display())))
    }

    fn volume_name(&self, volume_root: &Path) -> Result<String> {
        HostFileSystem.volume_name(volume_root)
    }
}

/// Timestamp every fake node reports.
pub fn created() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap()
}

/// A boot volume with a disk image attached at `/Volumes/Installer`.
pub fn installer_fs() -> FakeFs {
    FakeFs::default()
        .with("/", FileKind::Directory, 1, 2)
        .with("/Volumes", FileKind::Directory, 1, 3)
        .with("/Users", FileKind::Directory, 1, 30)
        .with("/Users/me", FileKind::Directory, 1, 40)
        .with("/Users/me/bg.png", FileKind::File, 1, 50)
        .with("/Volumes/Installer", FileKind::Directory, 7, 2)
        .with("/Volumes/Installer/.background", FileKind::Directory, 7, 20)
        .with(
            "/Volumes/Installer/.background/background.png",
            FileKind::File,
            7,
            21,
        )
        .with("/Volumes/Installer/bg.png", FileKind::File, 7, 22)
        .with("/Volumes/Installer/MyApp.app", FileKind::Directory, 7, 23)
        .with("/Volumes/Installer/socket", FileKind::Other, 7, 24)
}
