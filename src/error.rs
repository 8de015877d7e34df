//! Error types shared by the builder, the renderer and the CLI

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Bad command line. Raised before any filesystem access.
    #[error("{0}")]
    Usage(String),

    /// Listing or stat failure somewhere in the traversal.
    #[error("cannot read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The rendered tree could not be written out.
    #[error("error writing output: {0}")]
    Output(#[source] io::Error),
}

impl Error {
    pub fn io(path: &Path, source: io::Error) -> Self {
        Error::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// The path that failed, for I/O errors.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Error::Io { path, .. } => Some(path),
            Error::Usage(_) | Error::Output(_) => None,
        }
    }
}
