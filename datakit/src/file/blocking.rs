//! Blocking document I/O on top of `std::fs`.

use std::path::Path;

use serde::{Serialize, de::DeserializeOwned};

use crate::{DataResult, Format, PathResultExt, YamlOptions};

use super::{decode_document, detect, encode_document, log_written};

/// Read and parse the document at `path` as `format`.
///
/// # Errors
///
/// Returns [`crate::DataError::Io`] when the file cannot be read and
/// [`crate::DataError::Parse`] when its contents are malformed or do not fit
/// `T`.
pub fn read_sync<T: DeserializeOwned>(path: impl AsRef<Path>, format: Format) -> DataResult<T> {
    read_sync_with(path, format, YamlOptions::default())
}

/// Like [`read_sync`] with explicit YAML reader options.
///
/// # Errors
///
/// See [`read_sync`].
pub fn read_sync_with<T: DeserializeOwned>(
    path: impl AsRef<Path>,
    format: Format,
    options: YamlOptions,
) -> DataResult<T> {
    let file = path.as_ref();
    let data = std::fs::read_to_string(file).with_path(file)?;
    decode_document(file, format, &data, options)
}

/// Read a document whose format is inferred from the file extension.
///
/// # Errors
///
/// Returns [`crate::DataError::UnsupportedFormat`] for unrecognised
/// extensions, otherwise the errors of [`read_sync`].
pub fn read_detected_sync<T: DeserializeOwned>(path: impl AsRef<Path>) -> DataResult<T> {
    let file = path.as_ref();
    read_sync(file, detect(file)?)
}

/// Serialize `value` as `format` and write it to `path`, replacing any
/// existing file.
///
/// # Errors
///
/// Returns [`crate::DataError::Encode`] when `value` cannot be represented in
/// `format` and [`crate::DataError::Io`] when the file cannot be written.
pub fn write_sync<T: Serialize>(path: impl AsRef<Path>, format: Format, value: &T) -> DataResult<()> {
    let file = path.as_ref();
    let data = encode_document(format, value)?;
    std::fs::write(file, &data).with_path(file)?;
    log_written(file, format, data.len());
    Ok(())
}
