//! Records returned by note store queries.

use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};

/// A note as seen in a directory listing.
///
/// Built from the file name and filesystem metadata only; the content is
/// not read.
#[derive(Debug, Clone, PartialEq)]
pub struct NoteInfo {
    title: String,
    path: PathBuf,
    created: DateTime<Local>,
    modified: DateTime<Local>,
    size: u64,
}

impl NoteInfo {
    pub fn new(
        title: impl Into<String>,
        path: PathBuf,
        created: DateTime<Local>,
        modified: DateTime<Local>,
        size: u64,
    ) -> Self {
        Self {
            title: title.into(),
            path,
            created,
            modified,
            size,
        }
    }

    /// Title recovered from the file name.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Absolute path of the note file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creation (or status change) time reported by the filesystem.
    pub fn created(&self) -> DateTime<Local> {
        self.created
    }

    /// Last write time reported by the filesystem.
    pub fn modified(&self) -> DateTime<Local> {
        self.modified
    }

    /// File size in bytes.
    pub fn size(&self) -> u64 {
        self.size
    }
}

/// A note matching a search query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    title: String,
    snippet: String,
    match_count: usize,
}

impl SearchHit {
    pub fn new(title: impl Into<String>, snippet: impl Into<String>, match_count: usize) -> Self {
        Self {
            title: title.into(),
            snippet: snippet.into(),
            match_count,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Excerpt around the first match.
    pub fn snippet(&self) -> &str {
        &self.snippet
    }

    /// Number of non-overlapping, case-insensitive occurrences of the query.
    pub fn match_count(&self) -> usize {
        self.match_count
    }
}
