//! Shared helpers for filesystem access and record text encoding.

pub mod encoding;
pub mod fs;
