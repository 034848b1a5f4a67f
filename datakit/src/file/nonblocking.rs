//! Async document I/O on top of `tokio::fs`.
//!
//! Only the filesystem access is awaited; parsing and rendering run inline
//! on the calling task.

use std::path::Path;

use serde::{Serialize, de::DeserializeOwned};

use crate::{DataResult, Format, PathResultExt, YamlOptions};

use super::{decode_document, detect, encode_document, log_written};

/// Async counterpart of [`super::read_sync`].
///
/// # Errors
///
/// Returns [`crate::DataError::Io`] when the file cannot be read and
/// [`crate::DataError::Parse`] when its contents are malformed.
pub async fn read<T: DeserializeOwned>(path: impl AsRef<Path>, format: Format) -> DataResult<T> {
    read_with(path, format, YamlOptions::default()).await
}

/// Async counterpart of [`super::read_sync_with`].
///
/// # Errors
///
/// See [`read`].
pub async fn read_with<T: DeserializeOwned>(
    path: impl AsRef<Path>,
    format: Format,
    options: YamlOptions,
) -> DataResult<T> {
    let file = path.as_ref();
    let data = tokio::fs::read_to_string(file).await.with_path(file)?;
    decode_document(file, format, &data, options)
}

/// Async counterpart of [`super::read_detected_sync`].
///
/// # Errors
///
/// Returns [`crate::DataError::UnsupportedFormat`] for unrecognised
/// extensions, otherwise the errors of [`read`].
pub async fn read_detected<T: DeserializeOwned>(path: impl AsRef<Path>) -> DataResult<T> {
    let file = path.as_ref();
    let format = detect(file)?;
    read(file, format).await
}

/// Async counterpart of [`super::write_sync`].
///
/// The value is rendered before the file is opened, so an encoding failure
/// never truncates an existing file.
///
/// # Errors
///
/// Returns [`crate::DataError::Encode`] or [`crate::DataError::Io`].
pub async fn write<T: Serialize>(
    path: impl AsRef<Path>,
    format: Format,
    value: &T,
) -> DataResult<()> {
    let file = path.as_ref();
    let data = encode_document(format, value)?;
    tokio::fs::write(file, data.as_bytes()).await.with_path(file)?;
    log_written(file, format, data.len());
    Ok(())
}
