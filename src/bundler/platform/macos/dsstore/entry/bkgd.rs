use crate::bundler::error::{Error, Result};
use bytes::{BufMut, BytesMut};

const DEFAULT: [u8; 4] = *b"DefB";
const COLOR: [u8; 4] = *b"ClrB";
const PICTURE: [u8; 4] = *b"PctB";

/// Legacy background descriptor (`BKGD`): a 4-byte kind and 8 bytes of data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Background {
    kind: [u8; 4],
    data: [u8; 8],
}

impl Default for Background {
    fn default() -> Self {
        Self {
            kind: DEFAULT,
            data: [0; 8],
        }
    }
}

impl Background {
    /// 16-bit-per-channel solid colour.
    pub fn color(r: u16, g: u16, b: u16) -> Self {
        let mut data = [0; 8];
        data[0..2].copy_from_slice(&r.to_be_bytes());
        data[2..4].copy_from_slice(&g.to_be_bytes());
        data[4..6].copy_from_slice(&b.to_be_bytes());
        Self { kind: COLOR, data }
    }

    /// Picture stored in a `pict` entry of `byte_length` bytes.
    pub fn picture(byte_length: u32) -> Self {
        let mut data = [0; 8];
        data[0..4].copy_from_slice(&byte_length.to_be_bytes());
        Self {
            kind: PICTURE,
            data,
        }
    }

    /// Descriptor from raw bytes, as read from an existing file.
    ///
    /// The kind is not checked until the entry is encoded.
    pub fn from_raw(kind: [u8; 4], data: [u8; 8]) -> Self {
        Self { kind, data }
    }

    /// The 4-byte kind code.
    pub fn kind(&self) -> [u8; 4] {
        self.kind
    }

    /// `u32 12`, kind, data.
    pub(super) fn encode(&self) -> Result<Vec<u8>> {
        if ![DEFAULT, COLOR, PICTURE].contains(&self.kind) {
            return Err(Error::UnsupportedVariant {
                entry: "BKGD".to_string(),
                kind: String::from_utf8_lossy(&self.kind).into_owned(),
            });
        }

        let mut buf = BytesMut::with_capacity(16);
        buf.put_u32(12);
        buf.put_slice(&self.kind);
        buf.put_slice(&self.data);
        Ok(buf.to_vec())
    }
}
