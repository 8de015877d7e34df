//! Process exit codes for the `dirtree` binary.

use crate::error::Error;

/// The tree was written.
pub const OK: i32 = 0;
/// Traversal or output failed; nothing useful was printed.
pub const FAILURE: i32 = 1;
/// The command line was rejected before touching the filesystem.
pub const USAGE: i32 = 2;

pub fn for_error(err: &Error) -> i32 {
    match err {
        Error::Usage(_) => USAGE,
        Error::Io { .. } | Error::Output(_) => FAILURE,
    }
}
