//! Reading and writing serialized documents on disk.
//!
//! Blocking helpers use `std::fs`; the async variants (feature `async`)
//! delegate to `tokio::fs`. Both share the decode and encode steps below so
//! failures are reported identically.

mod blocking;
#[cfg(feature = "async")]
mod nonblocking;

pub use blocking::{read_detected_sync, read_sync, read_sync_with, write_sync};
#[cfg(feature = "async")]
pub use nonblocking::{read, read_detected, read_with, write};

use std::path::Path;

use serde::{Serialize, de::DeserializeOwned};

use crate::{DataError, DataResult, Format, YamlOptions};

/// Resolve the format for `path` from its extension.
fn detect(path: &Path) -> DataResult<Format> {
    Format::from_path(path).ok_or_else(|| DataError::UnsupportedFormat {
        path: path.to_path_buf(),
    })
}

fn decode_document<T: DeserializeOwned>(
    path: &Path,
    format: Format,
    data: &str,
    options: YamlOptions,
) -> DataResult<T> {
    let value = format
        .decode(data, options)
        .map_err(|err| DataError::parse(path, format, err))?;
    tracing::debug!(
        path = %path.display(),
        %format,
        bytes = data.len(),
        "read document"
    );
    Ok(value)
}

fn encode_document<T: Serialize>(format: Format, value: &T) -> DataResult<String> {
    format
        .encode(value)
        .map_err(|err| DataError::encode(format, err))
}

fn log_written(path: &Path, format: Format, bytes: usize) {
    tracing::debug!(path = %path.display(), %format, bytes, "wrote document");
}
