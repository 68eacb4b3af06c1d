//! Platform-specific packaging formats.

pub mod macos;
