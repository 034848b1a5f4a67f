//! Primary error enum shared by every helper in the crate.

use std::path::PathBuf;

use thiserror::Error;

use crate::format::{BoxError, Format};

/// Result alias used throughout the crate.
pub type DataResult<T> = Result<T, DataError>;

/// Errors raised by file helpers, the merge engine and value conversions.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DataError {
    /// Reading or writing a file failed.
    #[error("I/O error on '{path}': {source}")]
    Io {
        /// File the operation targeted.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: std::io::Error,
    },

    /// File contents could not be parsed in the expected format.
    #[error("Failed to parse {format} document '{path}': {source}")]
    Parse {
        /// File that held the malformed document.
        path: PathBuf,
        /// Format the contents were parsed as.
        format: Format,
        /// Error reported by the format backend.
        #[source]
        source: BoxError,
    },

    /// A value could not be rendered in the requested format.
    #[error("Failed to encode value as {format}: {source}")]
    Encode {
        /// Format the value was rendered as.
        format: Format,
        /// Error reported by the format backend.
        #[source]
        source: BoxError,
    },

    /// No format is associated with the file extension.
    #[error("Cannot infer a document format for '{path}'")]
    UnsupportedFormat {
        /// File whose extension was not recognised.
        path: PathBuf,
    },

    /// The merge engine tried to assign a key into a value that cannot hold
    /// keys.
    #[error("Cannot merge keys into {found} at '{path}'")]
    Merge {
        /// Dotted key path of the offending target; `<root>` for the top
        /// level.
        path: String,
        /// Kind of value found at `path`.
        found: &'static str,
    },

    /// Converting between a typed value and its JSON form failed.
    #[error("Value conversion failed: {0}")]
    Convert(#[from] serde_json::Error),

    /// Input is not a valid numeric identifier.
    #[error("Invalid UIN '{input}': expected 5 to 11 digits without a leading zero")]
    InvalidUin {
        /// Rejected input in its string form.
        input: String,
    },
}
