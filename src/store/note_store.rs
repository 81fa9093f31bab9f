//! Filesystem-backed note store.

use chrono::Local;
use std::cmp::Reverse;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

use super::error::{StoreError, StoreResult};
use super::search::{SNIPPET_CONTEXT, count_matches, snippet};
use crate::domain::{
    NoteInfo, SearchHit, extract_links, link_key, link_matches, note_filename, title_from_path,
};
use crate::infra::{
    ensure_dir, file_stats, new_note_content, read_text, remove_file, scan_notes_directory,
    write_new, write_text,
};

/// A directory of Markdown notes addressed by title.
///
/// Holds nothing but the directory path. Every operation goes back to the
/// filesystem, so results always reflect what is on disk. There is no
/// locking: callers must not run operations concurrently against the same
/// directory.
#[derive(Debug, Clone)]
pub struct NoteStore {
    notes_dir: PathBuf,
}

impl NoteStore {
    /// Opens a store rooted at `notes_dir`, creating the directory and its
    /// parents if needed.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Fs` if the directory cannot be created.
    pub fn open(notes_dir: impl Into<PathBuf>) -> StoreResult<Self> {
        let notes_dir = notes_dir.into();
        ensure_dir(&notes_dir)?;
        debug!(dir = %notes_dir.display(), "opened note store");
        Ok(Self { notes_dir })
    }

    /// The directory holding the notes.
    pub fn notes_dir(&self) -> &Path {
        &self.notes_dir
    }

    /// Resolves the file path for a title. Pure; touches no files.
    pub fn path_for(&self, title: &str) -> PathBuf {
        self.notes_dir.join(note_filename(title))
    }

    /// Recovers a title from a note path. Lossy for titles containing
    /// uppercase letters, underscores or slashes.
    pub fn title_for(path: &Path) -> String {
        title_from_path(path)
    }

    /// Creates a note with a generated frontmatter block and heading.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::AlreadyExists` if a file is already at the
    /// note's path, or `StoreError::Fs` if writing fails.
    pub fn create(&self, title: &str) -> StoreResult<PathBuf> {
        let path = self.path_for(title);
        let content = new_note_content(title, Local::now());

        if !write_new(&path, &content)? {
            return Err(StoreError::AlreadyExists {
                title: title.to_string(),
                path,
            });
        }

        debug!(title, path = %path.display(), "created note");
        Ok(path)
    }

    /// Returns the full content of a note, or `None` if it does not exist.
    pub fn read(&self, title: &str) -> StoreResult<Option<String>> {
        Ok(read_text(&self.path_for(title))?)
    }

    /// Replaces a note's content, creating the file if it is missing.
    ///
    /// The content is written as given; no frontmatter is added.
    pub fn update(&self, title: &str, content: &str) -> StoreResult<PathBuf> {
        let path = self.path_for(title);
        write_text(&path, content)?;
        debug!(title, bytes = content.len(), "updated note");
        Ok(path)
    }

    /// Deletes a note, returning whether a file was removed.
    pub fn delete(&self, title: &str) -> StoreResult<bool> {
        let removed = remove_file(&self.path_for(title))?;
        debug!(title, removed, "deleted note");
        Ok(removed)
    }

    /// Returns true if a file exists at the note's path.
    pub fn exists(&self, title: &str) -> bool {
        self.path_for(title).exists()
    }

    /// Returns the note's path, creating the note first if it is missing.
    ///
    /// This is what an editor should be pointed at.
    pub fn path_or_create(&self, title: &str) -> StoreResult<PathBuf> {
        match self.create(title) {
            Ok(path) => Ok(path),
            Err(StoreError::AlreadyExists { path, .. }) => Ok(path),
            Err(e) => Err(e),
        }
    }

    /// Lists every note in the directory, most recently modified first.
    ///
    /// Notes with equal modification times keep the directory scan order.
    pub fn list_all(&self) -> StoreResult<Vec<NoteInfo>> {
        if !self.notes_dir.exists() {
            return Ok(Vec::new());
        }

        let mut notes = Vec::new();
        for path in scan_notes_directory(&self.notes_dir)? {
            let stats = file_stats(&path)?;
            let title = title_from_path(&path);
            notes.push(NoteInfo::new(
                title,
                path,
                stats.created,
                stats.modified,
                stats.size,
            ));
        }

        notes.sort_by_key(|n| Reverse(n.modified()));
        trace!(count = notes.len(), "listed notes");
        Ok(notes)
    }

    /// Titles of notes containing a link to `title`, in listing order.
    ///
    /// Scans the whole directory on every call. Each linking note appears
    /// once however many times it links, and a note linking to itself is
    /// included.
    pub fn backlinks_to(&self, title: &str) -> StoreResult<Vec<String>> {
        let target_key = link_key(title);
        let mut backlinks = Vec::new();

        for note in self.list_all()? {
            let Some(content) = read_text(note.path())? else {
                continue;
            };
            if extract_links(&content)
                .iter()
                .any(|link| link_matches(link, &target_key))
            {
                backlinks.push(note.title().to_string());
            }
        }

        debug!(title, count = backlinks.len(), "computed backlinks");
        Ok(backlinks)
    }

    /// Case-insensitive substring search over note contents.
    ///
    /// Results are ordered by match count, highest first; notes with the
    /// same count keep listing order. Empty notes and notes without a match
    /// are left out. An empty query matches every other note.
    pub fn search(&self, query: &str) -> StoreResult<Vec<SearchHit>> {
        let mut hits = Vec::new();
        for note in self.list_all()? {
            let Some(content) = read_text(note.path())?.filter(|c| !c.is_empty()) else {
                continue;
            };
            let matches = count_matches(&content, query);
            if matches == 0 {
                continue;
            }
            hits.push(SearchHit::new(
                note.title(),
                snippet(&content, query, SNIPPET_CONTEXT),
                matches,
            ));
        }

        hits.sort_by_key(|h| Reverse(h.match_count()));
        debug!(query, count = hits.len(), "searched notes");
        Ok(hits)
    }
}
