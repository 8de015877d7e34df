//! dirtree - draw a directory as an ASCII tree
//!
//! Building and rendering are separate steps: [`TreeBuilder`] reads the
//! filesystem into owned [`Entry`] values, and [`TreeFormatter`] (or the
//! free [`render`] function) turns them into text.

pub mod error;
pub mod exit_codes;
pub mod logging;
pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{Error, Result};
pub use output::{OutputConfig, TreeFormatter, render, size_label, write_tree};
pub use tree::{BuilderConfig, Entry, EntryKind, TreeBuilder, build};
