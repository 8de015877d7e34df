//! Configuration types for the tree builder

/// Configuration for directory traversal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuilderConfig {
    /// List regular files (and anything else that is not a directory)
    /// alongside directories. When false only directories are kept.
    pub include_files: bool,
}

impl BuilderConfig {
    pub fn dirs_only() -> Self {
        Self {
            include_files: false,
        }
    }

    pub fn with_files() -> Self {
        Self {
            include_files: true,
        }
    }
}
