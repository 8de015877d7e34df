//! Tree rendering
//!
//! - `config` - Output configuration types
//! - `utils` - Connector glyphs, prefix fragments, size labels, sibling order
//! - `tree` - The formatter itself, plain and coloured

mod config;
mod tree;
mod utils;

pub use config::OutputConfig;
pub use tree::{TreeFormatter, render, write_tree};
pub use utils::{
    BLANK_INDENT, BRANCH, LAST_BRANCH, PIPE_INDENT, child_prefixes, connector, size_label,
    sorted_siblings,
};
