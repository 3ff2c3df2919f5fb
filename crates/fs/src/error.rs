//! Error types for cleanup operations
//!
//! A directory sweep keeps going past individual failures; everything that
//! survived the sweep is reported at the end in one
//! [`ClearError::Partial`].

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A single entry that could not be removed during a directory sweep.
#[derive(Debug, Error)]
#[error("failed to remove {}: {source}", path.display())]
pub struct EntryError {
    /// The entry that survived the sweep.
    pub path: PathBuf,
    /// The underlying I/O failure.
    #[source]
    pub source: io::Error,
}

/// Failure of a cleanup operation.
#[derive(Debug, Error)]
pub enum ClearError {
    /// The directory itself could not be read, so no entry was attempted.
    #[error("cannot read directory {}: {source}", path.display())]
    ReadDir {
        /// The unreadable directory.
        path: PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// Some entries could not be removed; the rest were.
    #[error("{} of {attempted} entries could not be removed from {}", failures.len(), dir.display())]
    Partial {
        /// The directory that was being cleared.
        dir: PathBuf,
        /// How many entries were attempted in total.
        attempted: usize,
        /// The entries that survived, in directory order.
        failures: Vec<EntryError>,
    },

    /// A single-file removal failed.
    #[error("failed to remove file {}: {source}", path.display())]
    RemoveFile {
        /// The file that could not be removed.
        path: PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str) -> EntryError {
        EntryError {
            path: PathBuf::from(name),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        }
    }

    #[test]
    fn partial_error_counts_failures() {
        let err = ClearError::Partial {
            dir: PathBuf::from("/tmp/logs"),
            attempted: 5,
            failures: vec![entry("/tmp/logs/a"), entry("/tmp/logs/b")],
        };
        assert_eq!(
            err.to_string(),
            "2 of 5 entries could not be removed from /tmp/logs",
        );
    }

    #[test]
    fn entry_error_names_the_path() {
        assert_eq!(
            entry("/tmp/logs/a").to_string(),
            "failed to remove /tmp/logs/a: denied",
        );
    }
}
