use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by storage backends.
///
/// The store never surfaces these to its callers; they are logged and the
/// operation degrades. Backends and the store's `try_*` methods return them
/// so failures can still be observed.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error for {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed day data: {0}")]
    Parse(String),

    #[error("Failed to serialize day data: {0}")]
    Serialize(String),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}
