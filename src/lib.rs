//! Finder window layout writer for macOS disk images
//!
//! This library writes the binary metadata Finder reads when it opens a
//! disk image volume:
//! - `.DS_Store` documents (window bounds, icon size and positions, background)
//! - alias records pointing at the background picture
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod bundler;
pub mod cli;
pub mod error;

// Re-export commonly used types
pub use bundler::{DmgLayout, DsStore};
pub use error::{BundlerError, CliError, Result};
