//! # lumber-fs
//!
//! Best-effort filesystem cleanup helpers.
//!
//! [`clear_directory`] deletes every entry under a path, attempting all of
//! them even when some fail, and reports the surviving failures together in
//! one aggregated error. [`clear_file`] deletes a single file. Both have
//! `_with` variants taking a [`FailurePolicy`] that decides whether the
//! final error propagates or is only logged.
//!
//! Deletion is not transactional: a failed run may leave some entries
//! removed and others in place.
//!
//! # Examples
//!
//! ```no_run
//! use lumber_fs::{FailurePolicy, clear_directory_with};
//!
//! // Empty the cache directory; survivors are logged, not returned.
//! clear_directory_with("./cache", FailurePolicy::LogOnly)?;
//! # Ok::<(), lumber_fs::ClearError>(())
//! ```

pub mod clear;
pub mod error;

pub use clear::{
    FailurePolicy, clear_directory, clear_directory_with, clear_file, clear_file_with,
};
pub use error::{ClearError, EntryError};
