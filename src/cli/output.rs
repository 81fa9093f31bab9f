//! Output format types for CLI commands.

use clap::ValueEnum;
use serde::Serialize;

use crate::domain::{NoteInfo, SearchHit};

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for programmatic consumption
    Json,
    /// Plain file paths, one per line
    Paths,
}

/// Wrapper for serializable command output.
#[derive(Debug, Serialize)]
pub struct Output<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> Output<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// A single note in listing output.
#[derive(Debug, Serialize)]
pub struct NoteListing {
    pub title: String,
    pub path: String,
    pub created: String,
    pub modified: String,
    pub size: u64,
}

impl From<&NoteInfo> for NoteListing {
    fn from(note: &NoteInfo) -> Self {
        Self {
            title: note.title().to_string(),
            path: note.path().to_string_lossy().to_string(),
            created: note.created().to_rfc3339(),
            modified: note.modified().to_rfc3339(),
            size: note.size(),
        }
    }
}

/// A single search hit.
#[derive(Debug, Serialize)]
pub struct SearchListing {
    pub title: String,
    pub path: String,
    pub snippet: String,
    pub matches: usize,
}

/// A note referenced by title, with its resolved path.
#[derive(Debug, Serialize)]
pub struct TitleListing {
    pub title: String,
    pub path: String,
}

impl SearchListing {
    pub fn new(hit: &SearchHit, path: String) -> Self {
        Self {
            title: hit.title().to_string(),
            path,
            snippet: hit.snippet().to_string(),
            matches: hit.match_count(),
        }
    }
}
