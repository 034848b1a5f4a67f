//! Constructors for `DataError` variants carrying context.

use std::path::Path;

use crate::format::{BoxError, Format};

use super::DataError;

impl DataError {
    /// Construct a [`DataError::Io`] for `path`.
    #[must_use]
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Construct a [`DataError::Parse`] for `path`.
    #[must_use]
    pub fn parse(path: &Path, format: Format, source: impl Into<BoxError>) -> Self {
        Self::Parse {
            path: path.to_path_buf(),
            format,
            source: source.into(),
        }
    }

    /// Construct a [`DataError::Encode`].
    #[must_use]
    pub fn encode(format: Format, source: impl Into<BoxError>) -> Self {
        Self::Encode {
            format,
            source: source.into(),
        }
    }

    /// Construct a [`DataError::Merge`] from the key path walked so far.
    ///
    /// # Examples
    ///
    /// ```
    /// use datakit::DataError;
    ///
    /// let err = DataError::merge(&["server", "port"], "number");
    /// assert_eq!(err.to_string(), "Cannot merge keys into number at 'server.port'");
    /// ```
    #[must_use]
    pub fn merge<S: AsRef<str>>(path: &[S], found: &'static str) -> Self {
        let rendered = if path.is_empty() {
            "<root>".to_owned()
        } else {
            path.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(".")
        };
        Self::Merge {
            path: rendered,
            found,
        }
    }

    /// Returns the I/O error kind when this error wraps a file access failure.
    #[must_use]
    pub fn io_kind(&self) -> Option<std::io::ErrorKind> {
        match self {
            Self::Io { source, .. } => Some(source.kind()),
            _ => None,
        }
    }
}
