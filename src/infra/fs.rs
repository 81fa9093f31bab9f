//! File I/O operations for note files.
//!
//! Every call goes straight to the filesystem; nothing is cached. Writes
//! are plain overwrites with no temp-file staging.

use chrono::{DateTime, Local};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::{DirEntry, WalkDir};

use crate::domain::NOTE_EXTENSION;

/// Errors during file system operations on notes.
#[derive(Debug, Error)]
pub enum FsError {
    #[error("I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("path is not a directory: {path}")]
    NotADirectory { path: PathBuf },

    #[error("invalid encoding in {path}: {encoding}")]
    InvalidEncoding { path: PathBuf, encoding: String },
}

impl FsError {
    fn io(path: &Path, source: io::Error) -> Self {
        FsError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Filesystem metadata for a single note file.
#[derive(Debug, Clone, Copy)]
pub struct FileStats {
    pub created: DateTime<Local>,
    pub modified: DateTime<Local>,
    pub size: u64,
}

/// Creates `dir` and all missing parents.
///
/// # Errors
///
/// Returns `FsError::NotADirectory` if `dir` exists but is a file.
pub fn ensure_dir(dir: &Path) -> Result<(), FsError> {
    if dir.exists() && !dir.is_dir() {
        return Err(FsError::NotADirectory { path: dir.into() });
    }
    fs::create_dir_all(dir).map_err(|e| FsError::io(dir, e))
}

/// Reads a note file as UTF-8 text, returning `None` if it does not exist.
///
/// # Errors
///
/// Returns `FsError::InvalidEncoding` if the file is UTF-16 or not valid UTF-8.
/// Returns `FsError::Io` for any other read failure.
pub fn read_text(path: &Path) -> Result<Option<String>, FsError> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(FsError::io(path, e)),
    };
    decode(bytes, path).map(Some)
}

fn decode(bytes: Vec<u8>, path: &Path) -> Result<String, FsError> {
    if bytes.starts_with(&[0xFF, 0xFE]) {
        return Err(FsError::InvalidEncoding {
            path: path.into(),
            encoding: "UTF-16 LE detected (byte order mark FF FE); convert to UTF-8".into(),
        });
    }
    if bytes.starts_with(&[0xFE, 0xFF]) {
        return Err(FsError::InvalidEncoding {
            path: path.into(),
            encoding: "UTF-16 BE detected (byte order mark FE FF); convert to UTF-8".into(),
        });
    }

    String::from_utf8(bytes).map_err(|e| FsError::InvalidEncoding {
        path: path.into(),
        encoding: format!("invalid UTF-8 at byte {}", e.utf8_error().valid_up_to()),
    })
}

/// Overwrites `path` with `content`, creating the parent directory first.
pub fn write_text(path: &Path, content: &str) -> Result<(), FsError> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    fs::write(path, content).map_err(|e| FsError::io(path, e))
}

/// Writes `content` to `path` only if no file is there yet.
///
/// Returns `false` without touching the file when it already exists.
pub fn write_new(path: &Path, content: &str) -> Result<bool, FsError> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    match fs::OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(mut file) => {
            use std::io::Write;
            file.write_all(content.as_bytes())
                .map_err(|e| FsError::io(path, e))?;
            Ok(true)
        }
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => Ok(false),
        Err(e) => Err(FsError::io(path, e)),
    }
}

/// Removes `path`, returning whether a file was actually removed.
pub fn remove_file(path: &Path) -> Result<bool, FsError> {
    match fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(FsError::io(path, e)),
    }
}

/// Reads creation time, modification time and size of a file.
///
/// Falls back to the modification time on platforms that do not report
/// a creation time.
pub fn file_stats(path: &Path) -> Result<FileStats, FsError> {
    let meta = fs::metadata(path).map_err(|e| FsError::io(path, e))?;
    let modified = meta.modified().map_err(|e| FsError::io(path, e))?;
    let created = meta.created().unwrap_or(modified);

    Ok(FileStats {
        created: DateTime::<Local>::from(created),
        modified: DateTime::<Local>::from(modified),
        size: meta.len(),
    })
}

/// Lists the note files directly inside `dir` (no recursion).
///
/// A note file is any regular file whose name ends in `.md`. Returned
/// paths are absolute (joined onto `dir`) and in no particular order.
///
/// # Errors
///
/// Returns `FsError::NotADirectory` if the path is not a directory.
/// Returns `FsError::Io` if the directory cannot be read.
pub fn scan_notes_directory(dir: &Path) -> Result<Vec<PathBuf>, FsError> {
    if !dir.is_dir() {
        return Err(FsError::NotADirectory { path: dir.into() });
    }

    let walker = WalkDir::new(dir)
        .follow_links(true)
        .min_depth(1)
        .max_depth(1);

    let mut paths = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(dir).to_path_buf();
            let source = e
                .into_io_error()
                .unwrap_or_else(|| io::Error::other("directory walk failed"));
            FsError::Io { path, source }
        })?;
        if entry.file_type().is_file() && has_md_extension(&entry) {
            paths.push(entry.into_path());
        }
    }
    Ok(paths)
}

fn has_md_extension(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|s| s.ends_with(NOTE_EXTENSION))
}
