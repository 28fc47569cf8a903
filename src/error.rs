//! Non-fatal per-entry failures reported on the diagnostic stream

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A failure that degrades one record but never stops the walk.
#[derive(Debug, Error)]
pub enum EntryError {
    /// The entry could not be stat'ed (following symlinks).
    #[error("stat {}: {source}", path.display())]
    Stat {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The entry is a symlink whose target chain could not be resolved.
    #[error("resolve link {}: {source}", path.display())]
    ResolveLink {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Write a diagnostic line for `error` to stderr.
pub fn report(error: &EntryError) {
    eprintln!("lsdirf: {}", error);
}
