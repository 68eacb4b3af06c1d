//! Building an alias record for a path on disk.

use super::record::{
    ALIAS_VERSION, AliasInfo, Extra, FsSignature, Parent, Target, TargetKind, Volume, VolumeKind,
};
use super::volume::{FileKind, FileSystem, find_volume};
use crate::bundler::{
    error::{Error, ErrorExt, Result},
    utils::encoding::{utf16_len, utf16be},
};
use path_absolutize::Absolutize;
use std::path::Path;

/// TLV carrying the parent directory's name.
const EXTRA_PARENT_NAME: i16 = 0;
/// TLV carrying the parent directory's id.
const EXTRA_PARENT_ID: i16 = 1;
/// TLV carrying the UTF-16 target filename.
const EXTRA_UNICODE_FILENAME: i16 = 14;
/// TLV carrying the UTF-16 volume name.
const EXTRA_UNICODE_VOLUME_NAME: i16 = 15;
/// TLV carrying the POSIX path relative to the volume root.
const EXTRA_POSIX_PATH: i16 = 18;
/// TLV carrying the volume's mount point.
const EXTRA_VOLUME_MOUNT_POINT: i16 = 19;

/// Creates an alias record that Finder can resolve back to `target`.
///
/// Relative paths are made absolute against the working directory without
/// resolving symlinks. The target must be a regular file or directory strictly
/// below the root of the volume it lives on.
pub fn create_alias_record(target: &Path, fs: &dyn FileSystem) -> Result<Vec<u8>> {
    let target = target
        .absolutize()
        .fs_context("failed to resolve", target)?
        .into_owned();

    let target_stat = fs.stat(&target)?;
    let kind = match target_stat.kind {
        FileKind::File => TargetKind::File,
        FileKind::Directory => TargetKind::Directory,
        FileKind::Other => return Err(Error::UnsupportedTargetType { path: target }),
    };

    let volume_root = find_volume(fs, &target, &target_stat)?;
    let not_within_volume = || Error::NotWithinVolume {
        target: target.clone(),
        volume: volume_root.clone(),
    };

    let relative = target
        .strip_prefix(&volume_root)
        .ok()
        .filter(|rel| !rel.as_os_str().is_empty())
        .ok_or_else(not_within_volume)?;
    let parent_path = target.parent().ok_or_else(not_within_volume)?;
    let filename = target
        .file_name()
        .ok_or_else(not_within_volume)?
        .to_string_lossy()
        .into_owned();

    let parent_stat = fs.stat(parent_path)?;
    let volume_stat = fs.stat(&volume_root)?;
    let volume_name = fs.volume_name(&volume_root)?;

    let parent_name = if parent_path == volume_root {
        volume_name.clone()
    } else {
        parent_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| volume_name.clone())
    };

    let posix_path = format!("/{}", relative.to_string_lossy());
    let mount_point = volume_root.to_string_lossy().into_owned();
    let parent_id = parent_stat.inode as u32;

    let extra = vec![
        Extra::new(EXTRA_PARENT_NAME, parent_name.as_bytes().to_vec())?,
        Extra::new(EXTRA_PARENT_ID, parent_id.to_be_bytes().to_vec())?,
        Extra::new(EXTRA_UNICODE_FILENAME, counted_utf16(&filename))?,
        Extra::new(EXTRA_UNICODE_VOLUME_NAME, counted_utf16(&volume_name))?,
        Extra::new(EXTRA_POSIX_PATH, posix_path.into_bytes())?,
        Extra::new(EXTRA_VOLUME_MOUNT_POINT, mount_point.into_bytes())?,
    ];

    let volume_kind = if volume_root == Path::new("/") {
        VolumeKind::Local
    } else {
        VolumeKind::Other
    };

    let info = AliasInfo {
        version: ALIAS_VERSION,
        target: Target {
            kind,
            filename,
            id: target_stat.inode as u32,
            created: target_stat.modified,
        },
        volume: Volume {
            name: volume_name,
            created: volume_stat.modified,
            signature: FsSignature::HfsPlus,
            kind: volume_kind,
        },
        parent: Parent {
            id: parent_id,
            name: parent_name,
        },
        extra,
    };

    let record = info.encode()?;
    log::info!(
        "created alias record for {} ({} bytes)",
        target.display(),
        record.len()
    );
    Ok(record)
}

/// `u16` UTF-16 unit count followed by the UTF-16BE text.
fn counted_utf16(s: &str) -> Vec<u8> {
    let mut data = (utf16_len(s) as u16).to_be_bytes().to_vec();
    data.extend(utf16be(s));
    data
}
