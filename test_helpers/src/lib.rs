//! Test helpers shared across crates.
//!
//! Provides throwaway scratch directories for file round trips and small
//! text normalisers for comparing rendered documents.

pub mod scratch;
pub mod text;

pub use scratch::ScratchDir;
