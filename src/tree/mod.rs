//! Directory tree building
//!
//! Reads a directory recursively into a tree of owned [`Entry`] values.
//! The root path itself is never an entry: building yields its children.

mod builder;
mod config;
mod entry;

pub use builder::{TreeBuilder, build};
pub use config::BuilderConfig;
pub use entry::{Entry, EntryKind};
