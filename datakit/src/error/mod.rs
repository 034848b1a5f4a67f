//! Error types produced by the datakit helpers.

mod constructors;
mod types;

pub use types::{DataError, DataResult};
