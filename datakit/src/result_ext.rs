//! Extensions for attaching file context to I/O results.
//!
//! These helpers replace repetitive `.map_err(|e| DataError::io(path, e))`
//! chains at call sites that touch the filesystem.
//!
//! # Examples
//!
//! ```
//! use datakit::{DataResult, PathResultExt};
//! use std::path::Path;
//!
//! fn size(path: &Path) -> DataResult<u64> {
//!     Ok(std::fs::metadata(path).with_path(path)?.len())
//! }
//!
//! let err = size(Path::new("does/not/exist")).unwrap_err();
//! assert_eq!(err.io_kind(), Some(std::io::ErrorKind::NotFound));
//! ```

use std::path::Path;

use crate::{DataError, DataResult};

/// Maps `std::io::Result<T>` into [`DataResult<T>`] tagged with a path.
pub trait PathResultExt<T> {
    /// Attach `path` to an I/O failure.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::Io`] carrying `path` when the input is `Err`.
    fn with_path(self, path: &Path) -> DataResult<T>;
}

impl<T> PathResultExt<T> for std::io::Result<T> {
    fn with_path(self, path: &Path) -> DataResult<T> {
        self.map_err(|e| DataError::io(path, e))
    }
}
