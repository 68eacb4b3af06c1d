//! Text encodings shared by the Finder record formats.

use unicode_normalization::UnicodeNormalization;

/// Canonical decomposition (NFD), the form Finder stores names in.
pub fn nfd(s: &str) -> String {
    s.nfd().collect()
}

/// UTF-16 big-endian bytes, no BOM.
pub fn utf16be(s: &str) -> Vec<u8> {
    s.encode_utf16().flat_map(u16::to_be_bytes).collect()
}

/// Number of UTF-16 code units in `s`.
pub fn utf16_len(s: &str) -> usize {
    s.encode_utf16().count()
}
