//! Typed `.DS_Store` records and their on-disk framing.
//!
//! Every record is framed as:
//!
//! ```text
//! u32   filename length in UTF-16 units
//! [u16] filename, NFD-normalized, UTF-16BE
//! [u8;4] entry type code   (Iloc, bwsp, icvp, BKGD, vSrn)
//! [u8;4] data type tag     (blob, long)
//! ...   payload
//! ```

mod bkgd;
mod bwsp;
mod icvp;
mod iloc;

pub use bkgd::Background;
pub use bwsp::WorkspaceSettings;
pub use icvp::{BackgroundType, IconViewPreferences};
pub use iloc::IconLocation;

use super::compare::fast_unicode_compare;
use super::bplist::PlistEncoder;
use crate::bundler::{
    error::{Error, Result},
    utils::encoding::{nfd, utf16be},
};
use bytes::{BufMut, BytesMut};
use std::cmp::Ordering;

/// Filename Finder uses for records describing the folder itself.
pub const SELF_MARKER: &str = ".";

/// Four-character record type codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryType {
    /// `BKGD`, legacy background descriptor
    Background,
    /// `Iloc`, icon position
    IconLocation,
    /// `bwsp`, window geometry and chrome
    WorkspaceSettings,
    /// `icvp`, icon view options
    IconViewPreferences,
    /// `vSrn`, format version
    Version,
}

impl EntryType {
    /// The on-disk type code.
    pub fn code(self) -> &'static str {
        match self {
            Self::Background => "BKGD",
            Self::IconLocation => "Iloc",
            Self::WorkspaceSettings => "bwsp",
            Self::IconViewPreferences => "icvp",
            Self::Version => "vSrn",
        }
    }
}

/// Four-character payload type tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    /// Length-prefixed opaque bytes
    Blob,
    /// Big-endian `u32`
    Long,
}

impl DataType {
    /// The on-disk tag.
    pub fn code(self) -> &'static str {
        match self {
            Self::Blob => "blob",
            Self::Long => "long",
        }
    }
}

/// Payload of a single entry.
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    /// Position of one item in the window
    IconLocation(IconLocation),
    /// Window bounds and sidebar flags
    WorkspaceSettings(WorkspaceSettings),
    /// Icon view configuration
    IconViewPreferences(IconViewPreferences),
    /// Legacy background descriptor
    Background(Background),
    /// Format version
    Version(u32),
}

impl Record {
    /// Type code this payload is stored under.
    pub fn entry_type(&self) -> EntryType {
        match self {
            Self::IconLocation(_) => EntryType::IconLocation,
            Self::WorkspaceSettings(_) => EntryType::WorkspaceSettings,
            Self::IconViewPreferences(_) => EntryType::IconViewPreferences,
            Self::Background(_) => EntryType::Background,
            Self::Version(_) => EntryType::Version,
        }
    }

    /// Tag describing how the payload is laid out.
    pub fn data_type(&self) -> DataType {
        match self {
            Self::Version(_) => DataType::Long,
            _ => DataType::Blob,
        }
    }
}

/// One `.DS_Store` record: a filename, a type and a payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    filename: String,
    record: Record,
}

impl Entry {
    /// Creates an entry; the filename is normalized to NFD.
    pub fn new(filename: &str, record: Record) -> Self {
        Self {
            filename: nfd(filename),
            record,
        }
    }

    /// Icon position for `filename`.
    pub fn icon_location(filename: &str, x: u32, y: u32) -> Self {
        Self::new(filename, Record::IconLocation(IconLocation { x, y }))
    }

    /// Window settings for the folder itself.
    pub fn workspace_settings(settings: WorkspaceSettings) -> Self {
        Self::new(SELF_MARKER, Record::WorkspaceSettings(settings))
    }

    /// Icon view preferences for the folder itself.
    pub fn icon_view_preferences(prefs: IconViewPreferences) -> Self {
        Self::new(SELF_MARKER, Record::IconViewPreferences(prefs))
    }

    /// Legacy background descriptor for the folder itself.
    pub fn background(background: Background) -> Self {
        Self::new(SELF_MARKER, Record::Background(background))
    }

    /// Version entry for the folder itself.
    pub fn version(value: u32) -> Self {
        Self::new(SELF_MARKER, Record::Version(value))
    }

    /// NFD-normalized filename.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Record type.
    pub fn entry_type(&self) -> EntryType {
        self.record.entry_type()
    }

    /// Payload tag.
    pub fn data_type(&self) -> DataType {
        self.record.data_type()
    }

    /// Typed payload.
    pub fn record(&self) -> &Record {
        &self.record
    }

    /// Consumes the entry, returning its payload.
    pub fn into_record(self) -> Record {
        self.record
    }

    pub(crate) fn record_mut(&mut self) -> &mut Record {
        &mut self.record
    }

    pub(crate) fn set_record(&mut self, record: Record) {
        self.record = record;
    }

    /// Whether this entry occupies the `(filename, entry_type)` slot.
    ///
    /// `filename` must already be normalized.
    pub(crate) fn has_key(&self, filename: &str, entry_type: EntryType) -> bool {
        self.filename == filename && self.entry_type() == entry_type
    }

    /// Encodes the payload that follows the data type tag.
    pub fn encode(&self, encoder: &dyn PlistEncoder) -> Result<Vec<u8>> {
        let plist_error = |source| Error::PlistEncode {
            entry: self.entry_type().code().to_string(),
            filename: self.filename.clone(),
            source,
        };

        match &self.record {
            Record::IconLocation(iloc) => Ok(iloc.encode()),
            Record::WorkspaceSettings(bwsp) => bwsp.encode(encoder).map_err(plist_error),
            Record::IconViewPreferences(icvp) => icvp.encode(encoder).map_err(plist_error),
            Record::Background(bkgd) => bkgd.encode(),
            Record::Version(value) => Ok(value.to_be_bytes().to_vec()),
        }
    }

    /// Encodes the complete framed record.
    pub fn frame(&self, encoder: &dyn PlistEncoder) -> Result<Vec<u8>> {
        let payload = self.encode(encoder)?;
        let name = utf16be(&self.filename);

        let mut buf = BytesMut::with_capacity(4 + name.len() + 8 + payload.len());
        buf.put_u32((name.len() / 2) as u32);
        buf.put_slice(&name);
        buf.put_slice(self.entry_type().code().as_bytes());
        buf.put_slice(self.data_type().code().as_bytes());
        buf.put_slice(&payload);

        log::debug!(
            "framed {} record for {:?}: {} bytes",
            self.entry_type().code(),
            self.filename,
            buf.len()
        );
        Ok(buf.to_vec())
    }
}

/// Finder's on-disk order: filename first, then type code.
pub fn compare_entries(a: &Entry, b: &Entry) -> Ordering {
    fast_unicode_compare(&a.filename, &b.filename)
        .then_with(|| fast_unicode_compare(a.entry_type().code(), b.entry_type().code()))
}
