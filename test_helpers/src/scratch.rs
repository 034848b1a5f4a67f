//! Temporary directories for tests that touch the filesystem.
//!
//! A [`ScratchDir`] owns a fresh directory under the system temp location
//! and removes it on drop. Paths are exposed as UTF-8 so assertions can
//! format them without lossy conversion.
//!
//! # Examples
//!
//! ```
//! use test_helpers::ScratchDir;
//!
//! let scratch = ScratchDir::new().expect("create scratch dir");
//! let path = scratch.write("config.yaml", "name: demo\n").expect("write file");
//! assert_eq!(scratch.read("config.yaml").expect("read file"), "name: demo\n");
//! assert!(path.starts_with(scratch.path()));
//! ```

use anyhow::{Context, Result, anyhow};
use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

/// Self-cleaning directory for file based tests.
#[derive(Debug)]
pub struct ScratchDir {
    root: Utf8PathBuf,
    _dir: TempDir,
}

impl ScratchDir {
    /// Create a new, empty scratch directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or its path is not
    /// valid UTF-8.
    pub fn new() -> Result<Self> {
        let dir = tempfile::tempdir().context("create temporary directory")?;
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf())
            .map_err(|non_utf8| anyhow!("temp dir is not valid UTF-8: {}", non_utf8.display()))?;
        Ok(Self { root, _dir: dir })
    }

    /// Root of the scratch directory.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.root
    }

    /// Path of `name` inside the scratch directory; the file need not exist.
    #[must_use]
    pub fn join(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    /// Write `contents` to `name`, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if a directory or the file cannot be written.
    pub fn write(&self, name: &str, contents: &str) -> Result<Utf8PathBuf> {
        let path = self.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| format!("create {parent}"))?;
        }
        std::fs::write(&path, contents).with_context(|| format!("write {path}"))?;
        Ok(path)
    }

    /// Read `name` back as UTF-8 text.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn read(&self, name: &str) -> Result<String> {
        let path = self.join(name);
        std::fs::read_to_string(&path).with_context(|| format!("read {path}"))
    }
}
