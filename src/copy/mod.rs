//! Core copy operations.
//!
//! This module provides the single-file primitive and the sequential
//! pairwise driver that the `copy` and `copy-list` steps run.

mod file;
mod list;
mod utils;

// Re-export public API
pub use file::copy_file;
pub use list::{CopyStats, LENGTH_MISMATCH_DIAGNOSTIC, copy_pairs};
