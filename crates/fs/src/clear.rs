//! Directory and file clearing

use std::fs;
use std::io;
use std::path::Path;

use tracing::warn;

use crate::error::{ClearError, EntryError};

/// What to do with a failure once the operation has finished.
///
/// Per-entry failures are always logged as they happen; the policy only
/// decides the fate of the final, aggregated error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Return the error to the caller.
    #[default]
    Propagate,
    /// Log the error at `warn` and report success.
    LogOnly,
}

/// Deletes every entry under `path`, keeping the directory itself.
///
/// Regular files and symlinks are unlinked; subdirectories are removed
/// recursively. Every entry is attempted even when earlier ones fail; each
/// failure is logged at `warn` as it happens, and the survivors are
/// reported together as [`ClearError::Partial`] once the sweep is over.
///
/// # Examples
///
/// ```no_run
/// lumber_fs::clear_directory("./cache")?;
/// # Ok::<(), lumber_fs::ClearError>(())
/// ```
pub fn clear_directory(path: impl AsRef<Path>) -> Result<(), ClearError> {
    let dir = path.as_ref();
    let entries = fs::read_dir(dir).map_err(|source| ClearError::ReadDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut attempted = 0usize;
    let mut failures = Vec::new();
    for entry in entries {
        attempted += 1;
        let entry_path = match entry {
            Ok(entry) => entry.path(),
            Err(source) => {
                // An entry vanished or became unreadable mid-iteration;
                // there is no path to retry, so record it against the
                // directory.
                warn!(dir = %dir.display(), error = %source, "unreadable directory entry");
                failures.push(EntryError {
                    path: dir.to_path_buf(),
                    source,
                });
                continue;
            }
        };
        if let Err(source) = remove_entry(&entry_path) {
            warn!(path = %entry_path.display(), error = %source, "failed to delete entry");
            failures.push(EntryError {
                path: entry_path,
                source,
            });
        }
    }

    if failures.is_empty() {
        Ok(())
    } else {
        Err(ClearError::Partial {
            dir: dir.to_path_buf(),
            attempted,
            failures,
        })
    }
}

/// [`clear_directory`] with an explicit [`FailurePolicy`].
pub fn clear_directory_with(
    path: impl AsRef<Path>,
    policy: FailurePolicy,
) -> Result<(), ClearError> {
    apply_policy(clear_directory(path), policy)
}

/// Deletes the single file at `path`.
///
/// # Examples
///
/// ```no_run
/// lumber_fs::clear_file("./app.pid")?;
/// # Ok::<(), lumber_fs::ClearError>(())
/// ```
pub fn clear_file(path: impl AsRef<Path>) -> Result<(), ClearError> {
    let path = path.as_ref();
    fs::remove_file(path).map_err(|source| {
        warn!(path = %path.display(), error = %source, "failed to delete file");
        ClearError::RemoveFile {
            path: path.to_path_buf(),
            source,
        }
    })
}

/// [`clear_file`] with an explicit [`FailurePolicy`].
pub fn clear_file_with(path: impl AsRef<Path>, policy: FailurePolicy) -> Result<(), ClearError> {
    apply_policy(clear_file(path), policy)
}

// Symlinks must not be followed: symlink_metadata reports the link itself,
// so a symlink to a directory is unlinked rather than descended into.
fn remove_entry(path: &Path) -> io::Result<()> {
    let file_type = fs::symlink_metadata(path)?.file_type();
    if file_type.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    }
}

fn apply_policy(result: Result<(), ClearError>, policy: FailurePolicy) -> Result<(), ClearError> {
    match (result, policy) {
        (Err(error), FailurePolicy::LogOnly) => {
            warn!(error = %error, "cleanup failure suppressed by policy");
            Ok(())
        }
        (result, _) => result,
    }
}
