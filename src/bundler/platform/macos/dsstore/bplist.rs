//! Binary property-list payloads embedded in `blob` entries.

use crate::bundler::error::PlistSourceError;
use bytes::{BufMut, BytesMut};
use plist::{Dictionary, Value};

/// Encodes a dictionary as a binary property list.
///
/// Injected into [`DsStore`](super::DsStore) so callers can substitute their own
/// encoder; the default is [`BinaryPlistEncoder`].
pub trait PlistEncoder {
    /// Returns the `bplist00` bytes for `dict`.
    fn encode(&self, dict: &Dictionary) -> Result<Vec<u8>, PlistSourceError>;
}

/// [`PlistEncoder`] backed by the `plist` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct BinaryPlistEncoder;

impl PlistEncoder for BinaryPlistEncoder {
    fn encode(&self, dict: &Dictionary) -> Result<Vec<u8>, PlistSourceError> {
        let mut out = Vec::new();
        Value::Dictionary(dict.clone()).to_writer_binary(&mut out)?;
        Ok(out)
    }
}

/// Prefixes a plist with its big-endian `u32` length.
pub fn wrap(plist: &[u8]) -> Vec<u8> {
    let mut buf = BytesMut::with_capacity(plist.len() + 4);
    buf.put_u32(plist.len() as u32);
    buf.put_slice(plist);
    buf.to_vec()
}
