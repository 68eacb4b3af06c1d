//! `.DS_Store` document builder and serializer.
//!
//! Records Finder's window geometry, icon positions and background for a
//! folder, typically the root of a disk image volume.
//!
//! # Architecture
//!
//! - `compare` - HFS+ name ordering used for on-disk record order
//! - `bplist` - length-prefixed binary plist payloads
//! - `entry` - typed records and their framing
//! - `skeleton` - the embedded empty container records are spliced into
//!
//! # Example
//!
//! ```no_run
//! use kodegen_bundler_dsstore::bundler::platform::macos::dsstore::DsStore;
//!
//! # fn example() -> kodegen_bundler_dsstore::bundler::Result<()> {
//! let mut store = DsStore::new();
//! store.set_window(640, 480, 0, 0);
//! store.set_icon_size(100.0);
//! store.set_icon_position("MyApp.app", 160, 240);
//! store.set_icon_position("Applications", 480, 240);
//! store.write("/Volumes/MyApp/.DS_Store".as_ref())?;
//! # Ok(())
//! # }
//! ```

mod bplist;
mod compare;
mod entry;
mod skeleton;

pub use bplist::{BinaryPlistEncoder, PlistEncoder, wrap};
pub use compare::fast_unicode_compare;
pub use entry::{
    Background, BackgroundType, DataType, Entry, EntryType, IconLocation, IconViewPreferences,
    Record, SELF_MARKER, WorkspaceSettings, compare_entries,
};
pub use skeleton::{
    ENTRY_COUNT_OFFSET, RECORDS_CAPACITY, RECORDS_OFFSET, SKELETON, SKELETON_LEN, is_intact,
};

use super::alias::{FileSystem, create_alias_record};
use crate::bundler::{
    error::{Error, Result},
    utils::{encoding::nfd, fs},
};
use bytes::{BufMut, BytesMut};
use std::{fmt, path::Path};

/// An in-memory `.DS_Store` document.
///
/// Entries are keyed by `(filename, entry type)`; every setter is an upsert.
pub struct DsStore {
    entries: Vec<Entry>,
    encoder: Box<dyn PlistEncoder>,
}

impl Default for DsStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for DsStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DsStore")
            .field("entries", &self.entries)
            .finish_non_exhaustive()
    }
}

impl DsStore {
    /// Empty document using [`BinaryPlistEncoder`].
    pub fn new() -> Self {
        Self::with_encoder(BinaryPlistEncoder)
    }

    /// Empty document using a caller-supplied plist encoder.
    pub fn with_encoder(encoder: impl PlistEncoder + 'static) -> Self {
        Self {
            entries: Vec::new(),
            encoder: Box::new(encoder),
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the document has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up an entry by name and type.
    pub fn get(&self, filename: &str, entry_type: EntryType) -> Option<&Entry> {
        let filename = nfd(filename);
        self.entries
            .iter()
            .find(|e| e.has_key(&filename, entry_type))
    }

    /// Inserts `entry`, replacing the payload of any entry with the same key.
    pub fn upsert(&mut self, entry: Entry) {
        match self.position(entry.filename(), entry.entry_type()) {
            Some(index) => self.entries[index].set_record(entry.into_record()),
            None => self.entries.push(entry),
        }
    }

    /// Sets the window bounds, keeping any existing sidebar flags.
    pub fn set_window(&mut self, width: i32, height: i32, x: i32, y: i32) {
        match self.position(SELF_MARKER, EntryType::WorkspaceSettings) {
            Some(index) => {
                if let Record::WorkspaceSettings(bwsp) = self.entries[index].record_mut() {
                    bwsp.x = x;
                    bwsp.y = y;
                    bwsp.width = width;
                    bwsp.height = height;
                }
            }
            None => self.upsert(Entry::workspace_settings(WorkspaceSettings::new(
                x, y, width, height,
            ))),
        }
    }

    /// Sets the icon size in points.
    pub fn set_icon_size(&mut self, size: f64) {
        self.update_icon_view(|icvp| icvp.icon_size = size);
    }

    /// Sets the label font size in points.
    pub fn set_label_size(&mut self, size: f64) {
        self.update_icon_view(|icvp| icvp.text_size = size);
    }

    /// Places labels below icons (`true`) or to their right.
    pub fn set_label_placement(&mut self, bottom: bool) {
        self.update_icon_view(|icvp| icvp.label_on_bottom = bottom);
    }

    /// Uses the system default background.
    pub fn set_background_default(&mut self) {
        self.update_icon_view(IconViewPreferences::set_background_default);
    }

    /// Uses a solid background; components are in `0.0..=1.0`.
    pub fn set_background_color(&mut self, r: f64, g: f64, b: f64) {
        self.update_icon_view(|icvp| icvp.set_background_color(r, g, b));
    }

    /// Uses a pre-built alias record as the background picture.
    pub fn set_background_image_alias(&mut self, alias: Vec<u8>) {
        self.update_icon_view(|icvp| icvp.set_background_image_alias(alias));
    }

    /// Uses the picture at `path` as the background.
    ///
    /// The image must already be where it will live on the final volume;
    /// Finder resolves it through the alias record created here.
    pub fn set_background_image(&mut self, path: &Path) -> Result<()> {
        self.set_background_image_with(path, &super::alias::HostFileSystem)
    }

    /// [`set_background_image`](Self::set_background_image) with an explicit filesystem.
    pub fn set_background_image_with(&mut self, path: &Path, fs: &dyn FileSystem) -> Result<()> {
        let alias = create_alias_record(path, fs)?;
        self.set_background_image_alias(alias);
        Ok(())
    }

    /// Sets the position of the item named `name`.
    pub fn set_icon_position(&mut self, name: &str, x: u32, y: u32) {
        self.upsert(Entry::icon_location(name, x, y));
    }

    /// Sets the legacy background descriptor.
    pub fn set_background_descriptor(&mut self, background: Background) {
        self.upsert(Entry::background(background));
    }

    /// Sets the `vSrn` entry.
    pub fn set_version(&mut self, version: u32) {
        self.upsert(Entry::version(version));
    }

    /// Entries in on-disk order.
    pub fn build(&self) -> Vec<&Entry> {
        let mut sorted: Vec<&Entry> = self.entries.iter().collect();
        sorted.sort_by(|a, b| compare_entries(a, b));
        sorted
    }

    /// Serializes the document into the skeleton.
    ///
    /// The result is always [`SKELETON_LEN`] bytes long.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let entries = self.build();
        let count = entries.len() as u32;

        let mut region = BytesMut::with_capacity(RECORDS_CAPACITY);
        region.put_u32(0);
        region.put_u32(count);
        for entry in &entries {
            region.put_slice(&entry.frame(self.encoder.as_ref())?);
        }

        if region.len() > RECORDS_CAPACITY {
            return Err(Error::DocumentTooLarge {
                size: region.len(),
                capacity: RECORDS_CAPACITY,
            });
        }
        region.resize(RECORDS_CAPACITY, 0);

        let mut buf = SKELETON.to_vec();
        buf[ENTRY_COUNT_OFFSET..ENTRY_COUNT_OFFSET + 4].copy_from_slice(&count.to_be_bytes());
        buf[RECORDS_OFFSET..RECORDS_OFFSET + RECORDS_CAPACITY].copy_from_slice(&region);
        Ok(buf)
    }

    /// Serializes the document and writes it to `path`, replacing any existing file.
    pub fn write(&self, path: &Path) -> Result<()> {
        let bytes = self.to_bytes()?;
        fs::write_file(path, &bytes)?;
        log::info!(
            "wrote {} entries to {} ({} bytes)",
            self.entries.len(),
            path.display(),
            bytes.len()
        );
        Ok(())
    }

    fn position(&self, filename: &str, entry_type: EntryType) -> Option<usize> {
        let filename = nfd(filename);
        self.entries
            .iter()
            .position(|e| e.has_key(&filename, entry_type))
    }

    fn update_icon_view(&mut self, update: impl FnOnce(&mut IconViewPreferences)) {
        let index = match self.position(SELF_MARKER, EntryType::IconViewPreferences) {
            Some(index) => index,
            None => {
                self.entries
                    .push(Entry::icon_view_preferences(IconViewPreferences::default()));
                self.entries.len() - 1
            }
        };
        if let Record::IconViewPreferences(icvp) = self.entries[index].record_mut() {
            update(icvp);
        }
    }
}
