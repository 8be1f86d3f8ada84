//! Error types for host table operations.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors returned by [`HostTable`](crate::table::HostTable).
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to access hosts file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The backup copy could not be written; the hosts file was left untouched.
    #[error("failed to back up hosts file to {}: {source}", path.display())]
    Backup {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("record index {index} out of range (table has {len} records)")]
    IndexOutOfRange { index: usize, len: usize },
}

impl Error {
    /// True for failures of the backing store (read, write or backup).
    pub fn is_io(&self) -> bool {
        matches!(self, Error::Io { .. } | Error::Backup { .. })
    }
}

/// Result type alias using our Error.
pub type Result<T> = std::result::Result<T, Error>;
