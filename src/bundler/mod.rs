//! Finder layout writer for macOS disk images.
//!
//! - [`platform::macos::dsstore`] - `.DS_Store` documents
//! - [`platform::macos::alias`] - alias records for background pictures
//! - [`platform::macos::dmg`] - applying a [`settings::DmgLayout`] to a volume

pub mod error;
pub mod platform;
pub mod settings;
pub mod utils;

pub use error::{Error, ErrorExt, Result};
pub use platform::macos::dmg::apply_dmg_customizations;
pub use platform::macos::dsstore::DsStore;
pub use settings::DmgLayout;
