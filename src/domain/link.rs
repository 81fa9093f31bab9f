//! Wiki-link extraction and comparison keys.

use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

use super::title::NOTE_EXTENSION;

// `[[` then one or more non-`]` characters then `]]`
static WIKILINK_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[\[([^\]]+)\]\]").unwrap());

/// Extracts the target text of every `[[...]]` link in `text`.
///
/// This is a flat pattern scan, not a Markdown parse: links inside code
/// spans, code blocks or HTML comments are returned too. Targets come back
/// in order of appearance, duplicates included, exactly as written.
///
/// # Examples
///
/// ```
/// use anada::domain::extract_links;
///
/// let links = extract_links("See [[Project Plan]] and [[project plan]] again");
/// assert_eq!(links, vec!["Project Plan", "project plan"]);
/// ```
pub fn extract_links(text: &str) -> Vec<String> {
    WIKILINK_RE
        .captures_iter(text)
        .map(|cap| cap[1].to_string())
        .collect()
}

/// Byte ranges of every `[[...]]` token in `text`, brackets included.
pub fn link_spans(text: &str) -> Vec<Range<usize>> {
    WIKILINK_RE.find_iter(text).map(|m| m.range()).collect()
}

/// Comparison key for matching a link target against a note title.
///
/// Lowercases and replaces spaces with underscores. Slashes are left
/// alone, unlike file names.
pub fn link_key(text: &str) -> String {
    text.to_lowercase().replace(' ', "_")
}

/// Returns true if a link written as `link` refers to the note keyed by
/// `target_key` (see [`link_key`]).
///
/// Also accepts the key with every `.md` removed, for targets typed with
/// an explicit extension.
pub fn link_matches(link: &str, target_key: &str) -> bool {
    let key = link_key(link);
    key == target_key || key == target_key.replace(NOTE_EXTENSION, "")
}
