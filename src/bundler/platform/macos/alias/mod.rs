//! Classic Mac OS alias records.
//!
//! An alias is a resolvable reference to a file: Finder stores one inside the
//! `icvp` entry of a `.DS_Store` to locate a folder's background picture.
//!
//! # Architecture
//!
//! - `record` - fixed-layout version 2 encoding with its TLV trailer
//! - `volume` - `stat` capability and volume boundary detection
//! - `create` - assembling a record from what the filesystem reports

mod create;
mod record;
mod volume;

pub use create::create_alias_record;
pub use record::{
    ALIAS_VERSION, AliasInfo, Extra, FsSignature, MAX_FILENAME_LEN, MAX_VOLUME_NAME_LEN, Parent,
    Target, TargetKind, Volume, VolumeKind, apple_date,
};
pub use volume::{FileKind, FileStat, FileSystem, HostFileSystem, ROOT_VOLUME_NAME, find_volume};
