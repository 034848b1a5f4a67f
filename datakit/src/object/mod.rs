//! Generic object utilities: deep merge and deep clone.
//!
//! Both operate on serde data. Untyped documents use
//! [`serde_json::Value`], where [`Value::Object`](serde_json::Value::Object)
//! plays the role of a mapping object.

mod clone;
mod merge;

pub use clone::deep_clone;
pub use merge::{MAX_INDEX_GAP, MergeSemantics, deep_merge, deep_merge_with, merge_typed};
