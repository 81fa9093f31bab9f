//! Match counting and snippet extraction for content search.

/// Characters of context kept on each side of the first match.
pub const SNIPPET_CONTEXT: usize = 50;

const ELLIPSIS: &str = "...";

/// Counts non-overlapping occurrences of `query` in `content`, ignoring case.
///
/// An empty query matches at every character boundary, so it counts one
/// more than the number of characters.
pub fn count_matches(content: &str, query: &str) -> usize {
    content.to_lowercase().matches(&query.to_lowercase()).count()
}

/// Cuts an excerpt of `content` around the first case-insensitive match of
/// `query`.
///
/// The window spans `context` characters before the match through
/// `context` characters after it, clipped to the content. An ellipsis marks
/// each side that was cut, and the result is trimmed of surrounding
/// whitespace. Without a match, the first `2 * context` characters are
/// returned as is.
pub fn snippet(content: &str, query: &str, context: usize) -> String {
    let content_lower = content.to_lowercase();
    let query_lower = query.to_lowercase();

    let Some(byte_idx) = content_lower.find(&query_lower) else {
        return content.chars().take(context * 2).collect();
    };

    // Positions are counted in characters so the window never splits a
    // multi-byte character.
    let idx = content_lower[..byte_idx].chars().count();
    let total = content.chars().count();
    let start = idx.saturating_sub(context);
    let end = (idx + query.chars().count() + context).min(total);

    let window: String = content
        .chars()
        .skip(start)
        .take(end.saturating_sub(start))
        .collect();

    let mut out = String::with_capacity(window.len() + 2 * ELLIPSIS.len());
    if start > 0 {
        out.push_str(ELLIPSIS);
    }
    out.push_str(&window);
    if end < total {
        out.push_str(ELLIPSIS);
    }
    out.trim().to_string()
}
