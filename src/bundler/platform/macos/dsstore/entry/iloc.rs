use bytes::{BufMut, BytesMut};

/// Trailer Finder writes after every icon position.
const ILOC_TRAILER: [u8; 4] = [0xFF, 0xFF, 0xFF, 0x00];

/// Icon position, in points from the window's top-left corner to the icon centre.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconLocation {
    /// Horizontal centre
    pub x: u32,
    /// Vertical centre
    pub y: u32,
}

impl IconLocation {
    /// `u32 16`, `u32 x`, `u32 y`, `FF FF FF 00`, four zero bytes.
    pub(super) fn encode(&self) -> Vec<u8> {
        let mut buf = BytesMut::with_capacity(20);
        buf.put_u32(16);
        buf.put_u32(self.x);
        buf.put_u32(self.y);
        buf.put_slice(&ILOC_TRAILER);
        buf.put_bytes(0, 4);
        buf.to_vec()
    }
}
