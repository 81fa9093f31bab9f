//! Error type for note store operations.

use std::path::PathBuf;
use thiserror::Error;

use crate::infra::FsError;

/// Errors that can occur during note store operations.
///
/// A missing note is not an error: reads return `None` and deletes return
/// `false` instead.
#[derive(Debug, Error)]
pub enum StoreError {
    /// `create` found a file already at the note's path.
    #[error("note '{title}' already exists")]
    AlreadyExists { title: String, path: PathBuf },

    /// An underlying filesystem operation failed.
    #[error(transparent)]
    Fs(#[from] FsError),
}

/// Result type for note store operations.
pub type StoreResult<T> = Result<T, StoreError>;
