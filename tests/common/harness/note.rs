//! Builder for test notes with sensible defaults.

use anada::infra::new_note_content;
use chrono::Local;

/// Builder for creating test notes with sensible defaults.
///
/// By default the content starts with the same frontmatter and heading a
/// freshly created note has, followed by the body.
#[derive(Debug, Clone)]
pub struct TestNote {
    title: String,
    body: String,
    frontmatter: bool,
    modified_secs: Option<u64>,
}

impl TestNote {
    /// Creates a new test note with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: String::new(),
            frontmatter: true,
            modified_secs: None,
        }
    }

    /// Sets the body content (builder method).
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Writes the body alone, with no frontmatter or heading.
    pub fn raw(mut self) -> Self {
        self.frontmatter = false;
        self
    }

    /// Pins the file's modification time, in seconds after the epoch.
    pub fn modified_at(mut self, secs: u64) -> Self {
        self.modified_secs = Some(secs);
        self
    }

    /// Returns the title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the modification time to apply, if any.
    pub fn modified_secs(&self) -> Option<u64> {
        self.modified_secs
    }

    /// The full file content.
    pub fn content(&self) -> String {
        if self.frontmatter {
            format!("{}{}", new_note_content(&self.title, Local::now()), self.body)
        } else {
            self.body.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===========================================
    // TestNote Builder
    // ===========================================

    #[test]
    fn test_note_defaults_to_frontmatter() {
        let note = TestNote::new("Plan").body("details\n");
        let content = note.content();
        assert!(content.starts_with("---\ncreated: "));
        assert!(content.contains("# Plan\n\n"));
        assert!(content.ends_with("details\n"));
    }

    #[test]
    fn test_note_raw_is_body_only() {
        let note = TestNote::new("Plan").body("just this").raw();
        assert_eq!(note.content(), "just this");
    }

    #[test]
    fn test_note_modified_at() {
        let note = TestNote::new("Old").modified_at(1_000);
        assert_eq!(note.modified_secs(), Some(1_000));
        assert_eq!(note.title(), "Old");
    }
}
