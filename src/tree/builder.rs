//! TreeBuilder - reads a directory into an in-memory hierarchy

use std::fs;
use std::path::Path;

use tracing::{debug, trace};

use crate::error::{Error, Result};

use super::config::BuilderConfig;
use super::entry::Entry;

/// Recursive, depth-first directory reader.
///
/// Children are kept in the order the filesystem enumerates them; sorting
/// is left to the renderer. Symlinks are never followed: they are listed
/// like files, with the size of the link itself.
pub struct TreeBuilder {
    config: BuilderConfig,
}

impl TreeBuilder {
    pub fn new(config: BuilderConfig) -> Self {
        Self { config }
    }

    /// Read everything below `root`. The root itself is not part of the result.
    ///
    /// The first listing or stat failure aborts the whole build.
    pub fn build(&self, root: &Path) -> Result<Vec<Entry>> {
        self.build_dir(root, 0)
    }

    fn build_dir(&self, path: &Path, depth: usize) -> Result<Vec<Entry>> {
        debug!(path = %path.display(), depth, "reading directory");

        let listing = fs::read_dir(path).map_err(|e| Error::io(path, e))?;
        let mut entries = Vec::new();

        for item in listing {
            let item = item.map_err(|e| Error::io(path, e))?;
            let entry_path = item.path();
            let meta = fs::symlink_metadata(&entry_path).map_err(|e| Error::io(&entry_path, e))?;
            let name = item.file_name().to_string_lossy().into_owned();

            if meta.is_dir() {
                let children = self.build_dir(&entry_path, depth + 1)?;
                entries.push(Entry::dir(name, meta.len(), children));
                continue;
            }

            if !self.config.include_files {
                continue;
            }

            trace!(path = %entry_path.display(), size = meta.len(), "file");
            entries.push(Entry::file(name, meta.len()));
        }

        Ok(entries)
    }
}

/// Build the hierarchy below `path`, optionally including files.
pub fn build(path: impl AsRef<Path>, include_files: bool) -> Result<Vec<Entry>> {
    TreeBuilder::new(BuilderConfig { include_files }).build(path.as_ref())
}
