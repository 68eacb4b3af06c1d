//! Empty `.DS_Store` container that serialized records are spliced into.
//!
//! Layout of the embedded asset (allocator offsets are relative to byte 4):
//!
//! ```text
//! 0x0000  00000001 "Bud1" 00000800 00000800 00000800 + 16 reserved bytes
//! 0x0044  DSDB block: root node 2, levels 0, records N, nodes 1, page 0x1000
//! 0x0804  allocator info: 3 block addresses, DSDB -> block 1, free lists
//! 0x1004  leaf node: P 0, count N, records ...
//! ```

/// The embedded empty document.
pub static SKELETON: &[u8] = include_bytes!("../../../../../assets/DSStore-clean");

/// Total length of every written document.
pub const SKELETON_LEN: usize = 8196;

/// Offset of the DSDB record count.
pub const ENTRY_COUNT_OFFSET: usize = 76;

/// Offset of the leaf node that holds the records.
pub const RECORDS_OFFSET: usize = 4100;

/// Bytes available to the leaf node, header included.
pub const RECORDS_CAPACITY: usize = 3840;

const MAGIC: &[u8; 8] = b"\x00\x00\x00\x01Bud1";

/// Checks the asset against the offsets the serializer patches.
pub fn is_intact() -> bool {
    SKELETON.len() == SKELETON_LEN
        && SKELETON.starts_with(MAGIC)
        && RECORDS_OFFSET + RECORDS_CAPACITY <= SKELETON.len()
}
