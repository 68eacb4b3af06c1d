//! macOS Finder metadata formats.

pub mod alias;
pub mod dmg;
pub mod dsstore;
