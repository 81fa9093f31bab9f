//! Mapping between note titles and note file names.

use std::path::Path;

/// File extension every note carries on disk.
pub const NOTE_EXTENSION: &str = ".md";

/// Converts a title to its note file name.
///
/// - Converts to lowercase
/// - Replaces spaces and forward slashes with underscores
/// - Appends `.md` unless the result already ends with it
///
/// The mapping is lossy: titles that differ only in case, or only in
/// space versus underscore, produce the same file name and are therefore
/// the same note.
///
/// # Examples
///
/// ```
/// use anada::domain::note_filename;
///
/// assert_eq!(note_filename("Project Plan"), "project_plan.md");
/// assert_eq!(note_filename("a/b"), "a_b.md");
/// assert_eq!(note_filename("readme.md"), "readme.md");
/// ```
pub fn note_filename(title: &str) -> String {
    let mut name = title.to_lowercase().replace([' ', '/'], "_");
    if !name.ends_with(NOTE_EXTENSION) {
        name.push_str(NOTE_EXTENSION);
    }
    name
}

/// Recovers a display title from a note path.
///
/// Takes the file name without its extension and turns underscores back
/// into spaces. Case is not restored.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use anada::domain::title_from_path;
///
/// assert_eq!(title_from_path(Path::new("/notes/project_plan.md")), "project plan");
/// ```
pub fn title_from_path(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().replace('_', " "))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    #[test]
    fn filename_lowercases_and_joins_words() {
        assert_eq!(note_filename("Meeting Notes"), "meeting_notes.md");
    }

    #[test]
    fn filename_replaces_slashes() {
        assert_eq!(note_filename("2024/Q1 Review"), "2024_q1_review.md");
    }

    #[test]
    fn filename_keeps_existing_extension() {
        assert_eq!(note_filename("Notes.md"), "notes.md");
        assert_eq!(note_filename("notes.MD"), "notes.md");
    }

    #[test]
    fn filename_keeps_punctuation() {
        assert_eq!(note_filename("What? Why!"), "what?_why!.md");
    }

    #[test]
    fn filename_is_deterministic() {
        let title = "Some Title / With Parts";
        assert_eq!(note_filename(title), note_filename(title));
    }

    #[test]
    fn case_variants_collide() {
        assert_eq!(note_filename("Foo Bar"), note_filename("foo bar"));
        assert_eq!(note_filename("foo bar"), note_filename("foo_bar"));
    }

    #[test]
    fn title_from_path_restores_spaces() {
        let path = PathBuf::from("notes/weekly_review.md");
        assert_eq!(title_from_path(&path), "weekly review");
    }

    #[test]
    fn title_from_path_keeps_inner_dots() {
        let path = PathBuf::from("v1.2_release.md");
        assert_eq!(title_from_path(&path), "v1.2 release");
    }

    #[test]
    fn round_trip_holds_for_lowercase_titles() {
        for title in ["shopping list", "ideas", "rust: ownership notes"] {
            let path = PathBuf::from(note_filename(title));
            assert_eq!(title_from_path(&path), title);
        }
    }

    #[test]
    fn round_trip_is_lossy_for_case_and_slashes() {
        let path = PathBuf::from(note_filename("Project Plan"));
        assert_eq!(title_from_path(&path), "project plan");

        let path = PathBuf::from(note_filename("a/b"));
        assert_eq!(title_from_path(&path), "a b");
    }
}
