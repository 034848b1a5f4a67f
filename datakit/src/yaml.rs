//! YAML convenience layer.
//!
//! Thin wrappers that fix the document format to [`Format::Yaml`]. Reads use
//! YAML 1.2 semantics by default (see [`YamlOptions`]); values can be any
//! `DeserializeOwned` type, with [`serde_json::Value`] serving untyped data.
//!
//! # Examples
//!
//! ```rust
//! use serde_json::{Value, json};
//!
//! let doc = datakit::yaml::to_string(&json!({"name": "demo", "ports": [80, 443]}))?;
//! let back: Value = datakit::yaml::from_str(&doc)?;
//! assert_eq!(back["ports"][1], 443);
//! # Ok::<_, datakit::DataError>(())
//! ```

use std::path::Path;

use serde::{Serialize, de::DeserializeOwned};

use crate::{DataError, DataResult, Format, YamlOptions, file};

/// Pseudo path reported for documents parsed from memory.
pub const INLINE_SOURCE: &str = "<inline>";

/// Parse a YAML document held in memory.
///
/// # Errors
///
/// Returns [`DataError::Parse`] with the path [`INLINE_SOURCE`] when the
/// input is malformed or does not fit `T`.
pub fn from_str<T: DeserializeOwned>(input: &str) -> DataResult<T> {
    from_str_with(input, YamlOptions::default())
}

/// Like [`from_str`] with explicit reader options.
///
/// # Errors
///
/// See [`from_str`].
pub fn from_str_with<T: DeserializeOwned>(input: &str, options: YamlOptions) -> DataResult<T> {
    Format::Yaml
        .decode(input, options)
        .map_err(|err| DataError::parse(Path::new(INLINE_SOURCE), Format::Yaml, err))
}

/// Render `value` as a YAML document.
///
/// # Errors
///
/// Returns [`DataError::Encode`] when `value` cannot be represented in YAML.
pub fn to_string<T: Serialize>(value: &T) -> DataResult<String> {
    Format::Yaml
        .encode(value)
        .map_err(|err| DataError::encode(Format::Yaml, err))
}

/// Read and parse the YAML file at `path`, blocking the current thread.
///
/// # Errors
///
/// Returns [`DataError::Io`] if the file is missing or unreadable and
/// [`DataError::Parse`] if its content is malformed.
pub fn read_sync<T: DeserializeOwned>(path: impl AsRef<Path>) -> DataResult<T> {
    file::read_sync(path, Format::Yaml)
}

/// Blocking read with explicit reader options.
///
/// # Errors
///
/// See [`read_sync`].
pub fn read_sync_with<T: DeserializeOwned>(
    path: impl AsRef<Path>,
    options: YamlOptions,
) -> DataResult<T> {
    file::read_sync_with(path, Format::Yaml, options)
}

/// Render `value` as YAML and write it to `path`, blocking the current
/// thread.
///
/// # Errors
///
/// Returns [`DataError::Io`] if the path is unwritable and
/// [`DataError::Encode`] if `value` cannot be rendered.
pub fn write_sync<T: Serialize>(path: impl AsRef<Path>, value: &T) -> DataResult<()> {
    file::write_sync(path, Format::Yaml, value)
}

/// Read and parse the YAML file at `path` without blocking.
///
/// # Errors
///
/// Same conditions as [`read_sync`].
#[cfg(feature = "async")]
pub async fn read<T: DeserializeOwned>(path: impl AsRef<Path>) -> DataResult<T> {
    file::read(path, Format::Yaml).await
}

/// Non-blocking read with explicit reader options.
///
/// # Errors
///
/// Same conditions as [`read_sync`].
#[cfg(feature = "async")]
pub async fn read_with<T: DeserializeOwned>(
    path: impl AsRef<Path>,
    options: YamlOptions,
) -> DataResult<T> {
    file::read_with(path, Format::Yaml, options).await
}

/// Render `value` as YAML and write it to `path` without blocking.
///
/// # Errors
///
/// Same conditions as [`write_sync`].
#[cfg(feature = "async")]
pub async fn write<T: Serialize>(path: impl AsRef<Path>, value: &T) -> DataResult<()> {
    file::write(path, Format::Yaml, value).await
}
