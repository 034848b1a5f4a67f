//! Small utilities for structured data.
//!
//! - [`yaml`]: read and write YAML files, blocking or async, plus in-memory
//!   parsing and rendering. [`file`] generalises the same helpers over every
//!   supported [`Format`].
//! - [`check_uin`] and [`Uin`]: numeric user identifier validation.
//! - [`get_stack`]: capture the caller's stack as [`StackFrame`] values.
//! - [`deep_merge`] and [`deep_clone`]: recursive merge of mapping objects
//!   and independent copies of serde data.
//!
//! All operations are stateless. Failures surface as [`DataError`] and are
//! never swallowed; logging goes through `tracing` and is left to the
//! caller's subscriber.
//!
//! ```rust
//! use serde_json::json;
//!
//! let mut settings = json!({"server": {"host": "localhost", "port": 8080}});
//! datakit::deep_merge(&mut settings, Some(&json!({"server": {"port": 9090}})))?;
//! assert_eq!(settings["server"]["host"], "localhost");
//! assert_eq!(settings["server"]["port"], 9090);
//! # Ok::<_, datakit::DataError>(())
//! ```

mod error;
pub mod file;
mod format;
pub mod object;
mod options;
mod result_ext;
mod stack;
mod uin;
pub mod yaml;

pub use error::{DataError, DataResult};
pub use format::Format;
pub use object::{MAX_INDEX_GAP, MergeSemantics, deep_clone, deep_merge, deep_merge_with, merge_typed};
pub use options::{DuplicateKeys, YamlOptions};
pub use result_ext::PathResultExt;
pub use stack::{StackFrame, get_stack};
pub use uin::{Uin, check_uin, check_uin_str};
