//! Version 2 alias record encoding.
//!
//! ```text
//! 0    u32   creator code (0)
//! 4    u16   total record length
//! 6    u16   version (2)
//! 8    u16   target kind
//! 10   u8+27 volume name (Pascal string)
//! 38   u32   volume creation date
//! 42   [2]   filesystem signature
//! 44   u16   volume kind
//! 46   u32   parent directory id
//! 50   u8+63 target filename (Pascal string)
//! 114  u32   target id
//! 118  u32   target creation date
//! 122  [8]   file type and creator (zero)
//! 130  u16   nlvlFrom, u16 nlvlTo (0xFFFF)
//! 134  u32   volume attributes, u16 volume fs id
//! 140  [10]  reserved
//! 150  extra TLVs, then 0xFFFF 0x0000
//! ```

use crate::bundler::error::{Error, Result};
use bytes::{BufMut, BytesMut};
use chrono::{DateTime, Utc};

/// The only record version this encoder writes.
pub const ALIAS_VERSION: u16 = 2;

/// Longest target filename, in bytes.
pub const MAX_FILENAME_LEN: usize = 63;

/// Longest volume name, in bytes.
pub const MAX_VOLUME_NAME_LEN: usize = 27;

const FIXED_LEN: usize = 150;
const TERMINATOR_LEN: usize = 4;
const VOLUME_ATTRIBUTES: u32 = 0x0000_0D02;

/// Seconds from 1904-01-01T00:00:00Z to the Unix epoch.
const APPLE_EPOCH_OFFSET: i64 = 2_082_844_800;

/// Converts a timestamp to classic Mac OS seconds since 1904, rounded.
///
/// Dates before 1904 clamp to 0, dates past 2040 clamp to `u32::MAX`.
pub fn apple_date(time: &DateTime<Utc>) -> u32 {
    let millis = time.timestamp_millis() + APPLE_EPOCH_OFFSET * 1000;
    (millis + 500)
        .div_euclid(1000)
        .clamp(0, i64::from(u32::MAX)) as u32
}

/// What the alias points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    File,
    Directory,
}

impl TargetKind {
    fn code(self) -> u16 {
        match self {
            Self::File => 0,
            Self::Directory => 1,
        }
    }
}

/// Kind of volume the target lives on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeKind {
    Local,
    Network,
    Floppy400,
    Floppy800,
    Floppy1400,
    Other,
}

impl VolumeKind {
    fn code(self) -> u16 {
        match self {
            Self::Local => 0,
            Self::Network => 1,
            Self::Floppy400 => 2,
            Self::Floppy800 => 3,
            Self::Floppy1400 => 4,
            Self::Other => 5,
        }
    }
}

/// Two-byte filesystem signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsSignature {
    /// `BD`, HFS
    Hfs,
    /// `H+`, HFS+
    HfsPlus,
    /// `HX`, case-sensitive HFS+
    Hfsx,
}

impl FsSignature {
    fn bytes(self) -> &'static [u8; 2] {
        match self {
            Self::Hfs => b"BD",
            Self::HfsPlus => b"H+",
            Self::Hfsx => b"HX",
        }
    }
}

/// The aliased file or directory.
#[derive(Debug, Clone, PartialEq)]
pub struct Target {
    pub kind: TargetKind,
    /// At most 63 bytes
    pub filename: String,
    /// Catalog node id (inode)
    pub id: u32,
    pub created: DateTime<Utc>,
}

/// The volume containing the target.
#[derive(Debug, Clone, PartialEq)]
pub struct Volume {
    /// At most 27 bytes
    pub name: String,
    pub created: DateTime<Utc>,
    pub signature: FsSignature,
    pub kind: VolumeKind,
}

/// The target's parent directory.
#[derive(Debug, Clone, PartialEq)]
pub struct Parent {
    pub id: u32,
    pub name: String,
}

/// Type-length-value record in the alias trailer.
///
/// Odd-length data is followed by one zero pad byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extra {
    pub kind: i16,
    pub length: u16,
    pub data: Vec<u8>,
}

impl Extra {
    /// Builds a TLV whose length is taken from `data`.
    pub fn new(kind: i16, data: Vec<u8>) -> Result<Self> {
        let length = u16::try_from(data.len()).map_err(|_| Error::FieldTooLong {
            field: "extra record",
            len: data.len(),
            max: usize::from(u16::MAX),
        })?;
        Ok(Self { kind, length, data })
    }

    fn validate(&self) -> Result<()> {
        if self.kind < 0 {
            return Err(Error::InvalidExtraType(self.kind));
        }
        if usize::from(self.length) != self.data.len() {
            return Err(Error::ExtraLengthMismatch {
                kind: self.kind,
                declared: self.length,
                actual: self.data.len(),
            });
        }
        Ok(())
    }

    fn encoded_len(&self) -> usize {
        let len = usize::from(self.length);
        4 + len + (len & 1)
    }
}

/// Everything an alias record stores.
#[derive(Debug, Clone, PartialEq)]
pub struct AliasInfo {
    pub version: u16,
    pub target: Target,
    pub volume: Volume,
    pub parent: Parent,
    pub extra: Vec<Extra>,
}

impl AliasInfo {
    /// Serializes the record.
    ///
    /// The header declares the total length up front; the written length must
    /// match it exactly or encoding fails with
    /// [`Error::InternalLengthMismatch`].
    pub fn encode(&self) -> Result<Vec<u8>> {
        if self.version != ALIAS_VERSION {
            return Err(Error::UnsupportedAliasVersion(self.version));
        }
        for extra in &self.extra {
            extra.validate()?;
        }

        let declared = FIXED_LEN
            + self.extra.iter().map(Extra::encoded_len).sum::<usize>()
            + TERMINATOR_LEN;
        let declared_u16 = u16::try_from(declared).map_err(|_| Error::FieldTooLong {
            field: "alias record",
            len: declared,
            max: usize::from(u16::MAX),
        })?;

        let mut buf = BytesMut::with_capacity(declared);
        buf.put_u32(0);
        buf.put_u16(declared_u16);
        buf.put_u16(self.version);
        buf.put_u16(self.target.kind.code());
        put_pascal(&mut buf, "volume name", &self.volume.name, MAX_VOLUME_NAME_LEN)?;
        buf.put_u32(apple_date(&self.volume.created));
        buf.put_slice(self.volume.signature.bytes());
        buf.put_u16(self.volume.kind.code());
        buf.put_u32(self.parent.id);
        put_pascal(&mut buf, "target filename", &self.target.filename, MAX_FILENAME_LEN)?;
        buf.put_u32(self.target.id);
        buf.put_u32(apple_date(&self.target.created));
        buf.put_bytes(0, 8);
        buf.put_u16(0xFFFF);
        buf.put_u16(0xFFFF);
        buf.put_u32(VOLUME_ATTRIBUTES);
        buf.put_u16(0);
        buf.put_bytes(0, 10);

        for extra in &self.extra {
            buf.put_u16(extra.kind as u16);
            buf.put_u16(extra.length);
            buf.put_slice(&extra.data);
            if extra.length % 2 != 0 {
                buf.put_u8(0);
            }
        }

        buf.put_u16(0xFFFF);
        buf.put_u16(0);

        if buf.len() != declared {
            return Err(Error::InternalLengthMismatch {
                expected: declared,
                actual: buf.len(),
            });
        }

        log::debug!(
            "encoded alias record for {:?}: {} bytes, {} extras",
            self.target.filename,
            buf.len(),
            self.extra.len()
        );
        Ok(buf.to_vec())
    }
}

/// Length byte followed by `max` bytes of zero-padded text.
fn put_pascal(buf: &mut BytesMut, field: &'static str, value: &str, max: usize) -> Result<()> {
    let bytes = value.as_bytes();
    if bytes.len() > max {
        return Err(Error::FieldTooLong {
            field,
            len: bytes.len(),
            max,
        });
    }
    buf.put_u8(bytes.len() as u8);
    buf.put_slice(bytes);
    buf.put_bytes(0, max - bytes.len());
    Ok(())
}
