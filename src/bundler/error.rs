//! Error types for Finder metadata and alias record encoding.
//!
//! Every failure is returned to the caller. Nothing here is retried and no
//! partially encoded buffer ever reaches the filesystem.

use std::{
    io,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Result type alias for bundler operations
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed error returned by an injected plist encoder.
pub type PlistSourceError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors produced while building `.DS_Store` documents and alias records.
#[derive(Error, Debug)]
pub enum Error {
    /// A background descriptor carries a sub-kind Finder does not understand.
    #[error("unsupported {entry} variant: {kind}")]
    UnsupportedVariant {
        /// Entry type code, e.g. `BKGD`
        entry: String,
        /// Offending sub-kind code
        kind: String,
    },

    /// The injected property-list encoder failed.
    #[error("failed to encode property list for `{entry}` entry of {filename:?}: {source}")]
    PlistEncode {
        /// Entry type code
        entry: String,
        /// Filename the entry belongs to
        filename: String,
        /// Encoder error
        #[source]
        source: PlistSourceError,
    },

    /// Encoded entries do not fit in the skeleton's leaf node.
    #[error("document too large: {size} bytes of records exceed the {capacity}-byte leaf node")]
    DocumentTooLarge {
        /// Bytes needed
        size: usize,
        /// Bytes available
        capacity: usize,
    },

    /// Alias targets must be regular files or directories.
    #[error("alias target is not a file or directory: {}", path.display())]
    UnsupportedTargetType {
        /// Target path
        path: PathBuf,
    },

    /// A fixed-width alias field overflowed.
    #[error("{field} is {len} bytes, limit is {max}")]
    FieldTooLong {
        /// Field name
        field: &'static str,
        /// Actual length in bytes
        len: usize,
        /// Maximum length in bytes
        max: usize,
    },

    /// The target is not strictly below the volume it was found on.
    #[error("{} is not within volume {}", target.display(), volume.display())]
    NotWithinVolume {
        /// Target path
        target: PathBuf,
        /// Detected volume root
        volume: PathBuf,
    },

    /// The encoder wrote a different number of bytes than it allocated.
    #[error("internal alias length mismatch: allocated {expected} bytes, wrote {actual}")]
    InternalLengthMismatch {
        /// Declared length
        expected: usize,
        /// Written length
        actual: usize,
    },

    /// Only version 2 alias records can be encoded.
    #[error("unsupported alias record version {0}")]
    UnsupportedAliasVersion(u16),

    /// An extra TLV declares a length that differs from its data.
    #[error("extra record {kind} declares {declared} bytes but carries {actual}")]
    ExtraLengthMismatch {
        /// TLV type
        kind: i16,
        /// Declared length
        declared: u16,
        /// Data length
        actual: usize,
    },

    /// Extra TLV types are non-negative; -1 is reserved for the terminator.
    #[error("invalid extra record type {0}")]
    InvalidExtraType(i16),

    /// A window layout failed validation.
    #[error("invalid layout: {0}")]
    InvalidLayout(String),

    /// Filesystem failure with the operation and path that caused it.
    #[error("{context} {}: {source}", path.display())]
    Fs {
        /// What was being attempted
        context: &'static str,
        /// Path involved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: io::Error,
    },

    /// TOML layout parsing errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON layout parsing errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO errors without path context
    #[error("{0}")]
    IoError(#[from] io::Error),

    /// Anything else
    #[error("{0}")]
    GenericError(String),
}

/// Attaches path context to `io::Result`s.
pub trait ErrorExt<T> {
    /// Converts the error into [`Error::Fs`] naming the operation and path.
    fn fs_context(self, context: &'static str, path: &Path) -> Result<T>;
}

impl<T> ErrorExt<T> for std::result::Result<T, io::Error> {
    fn fs_context(self, context: &'static str, path: &Path) -> Result<T> {
        self.map_err(|source| Error::Fs {
            context,
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Returns early with [`Error::GenericError`].
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::bundler::Error::GenericError(format!($($arg)*)))
    };
}
