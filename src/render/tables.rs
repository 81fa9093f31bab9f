//! Tables for note listings and search results.

use tabled::{Table, Tabled, settings::Style};

use super::theme::{Role, Theme};
use crate::domain::{NoteInfo, SearchHit};

const LIST_TITLE_WIDTH: usize = 28;
const SEARCH_TITLE_WIDTH: usize = 22;
const PREVIEW_WIDTH: usize = 100;
const LIVE_TITLE_WIDTH: usize = 25;
const LIVE_PREVIEW_WIDTH: usize = 80;
const LIVE_LIMIT: usize = 5;

#[derive(Tabled)]
struct NoteRow {
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Modified")]
    modified: String,
    #[tabled(rename = "Size")]
    size: String,
}

#[derive(Tabled)]
struct SearchRow {
    #[tabled(rename = "Note")]
    note: String,
    #[tabled(rename = "Preview")]
    preview: String,
    #[tabled(rename = "Matches")]
    matches: usize,
}

#[derive(Tabled)]
struct StatusRow {
    #[tabled(rename = "Metric")]
    metric: String,
    #[tabled(rename = "Value")]
    value: String,
}

#[derive(Tabled)]
struct RecentRow {
    #[tabled(rename = "Note")]
    note: String,
    #[tabled(rename = "Modified")]
    modified: String,
    #[tabled(rename = "Size")]
    size: String,
}

/// Cuts `s` to `max` characters, marking the cut with `...`.
pub fn truncate_with_ellipsis(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let head: String = s.chars().take(max).collect();
        format!("{}...", head)
    }
}

/// Renders the note listing: a heading line, then one row per note.
pub fn notes_table(notes: &[NoteInfo], theme: &Theme) -> String {
    if notes.is_empty() {
        return empty_notes_hint(theme);
    }

    let rows: Vec<NoteRow> = notes
        .iter()
        .map(|note| NoteRow {
            title: truncate_with_ellipsis(note.title(), LIST_TITLE_WIDTH),
            modified: note.modified().format("%Y-%m-%d %H:%M").to_string(),
            size: format!("{} B", note.size()),
        })
        .collect();

    let heading = format!("Notes ({} total)", notes.len());
    let table = Table::new(&rows).with(Style::rounded()).to_string();
    format!("{}\n{}\n", theme.paint(&heading, Role::Header), table)
}

/// Renders search results with the query highlighted in each preview.
pub fn search_table(hits: &[SearchHit], query: &str, theme: &Theme) -> String {
    if hits.is_empty() {
        return no_results_hint(query, theme);
    }

    let rows = search_rows(hits, query, SEARCH_TITLE_WIDTH, PREVIEW_WIDTH, theme);
    let heading = format!("Search Results for '{}' ({} found)", query, hits.len());
    let table = Table::new(&rows).with(Style::rounded()).to_string();
    format!("{}\n{}\n", theme.paint(&heading, Role::Header), table)
}

/// Compact results for live search: the top five hits with shorter
/// previews, a count of the rest and a reminder of the sub-commands.
pub fn live_search_table(hits: &[SearchHit], query: &str, theme: &Theme) -> String {
    if hits.is_empty() {
        return format!(
            "{}\n",
            theme.paint(&format!("No results for '{}'", query), Role::Muted)
        );
    }

    let top = &hits[..hits.len().min(LIVE_LIMIT)];
    let rows = search_rows(top, query, LIVE_TITLE_WIDTH, LIVE_PREVIEW_WIDTH, theme);
    let mut out = Table::new(&rows).with(Style::rounded()).to_string();
    out.push('\n');
    if hits.len() > LIVE_LIMIT {
        let more = format!("... and {} more results", hits.len() - LIVE_LIMIT);
        out.push_str(&format!("{}\n", theme.paint(&more, Role::Muted)));
    }
    let hint = "Type 'show <title>' to view a note, 'clear' to reset, or 'exit' to leave";
    out.push_str(&format!("\n{}\n", theme.paint(hint, Role::Muted)));
    out
}

fn search_rows(
    hits: &[SearchHit],
    query: &str,
    title_width: usize,
    preview_width: usize,
    theme: &Theme,
) -> Vec<SearchRow> {
    hits.iter()
        .map(|hit| SearchRow {
            note: truncate_with_ellipsis(hit.title(), title_width),
            preview: highlight(&preview_text(hit.snippet(), preview_width), query, theme),
            matches: hit.match_count(),
        })
        .collect()
}

/// Renders `(metric, value)` pairs under an "Anada Status" heading.
pub fn status_table(metrics: &[(&str, String)], theme: &Theme) -> String {
    let rows: Vec<StatusRow> = metrics
        .iter()
        .map(|(metric, value)| StatusRow {
            metric: metric.to_string(),
            value: value.clone(),
        })
        .collect();

    let table = Table::new(&rows).with(Style::rounded()).to_string();
    format!("{}\n{}\n", theme.paint("Anada Status", Role::Header), table)
}

/// Compact table of the most recently modified notes.
pub fn recent_table(notes: &[NoteInfo], theme: &Theme) -> String {
    let rows: Vec<RecentRow> = notes
        .iter()
        .map(|note| RecentRow {
            note: truncate_with_ellipsis(note.title(), SEARCH_TITLE_WIDTH),
            modified: note.modified().format("%m-%d %H:%M").to_string(),
            size: format!("{} B", note.size()),
        })
        .collect();

    let table = Table::new(&rows).with(Style::rounded()).to_string();
    format!("{}\n{}\n", theme.paint("Recent Notes", Role::Header), table)
}

fn preview_text(snippet: &str, width: usize) -> String {
    let flat = snippet.split_whitespace().collect::<Vec<_>>().join(" ");
    truncate_with_ellipsis(&flat, width)
}

// Exact-case occurrences only; the match count itself is case-insensitive.
fn highlight(text: &str, query: &str, theme: &Theme) -> String {
    if query.is_empty() || !theme.is_styled() {
        return text.to_string();
    }
    text.replace(query, &theme.paint(query, Role::Highlight))
}

fn empty_notes_hint(theme: &Theme) -> String {
    format!(
        "{}\n{}\n",
        theme.paint("No notes found.", Role::Warning),
        theme.paint("Create one with: new <title>", Role::Muted)
    )
}

fn no_results_hint(query: &str, theme: &Theme) -> String {
    format!(
        "{}\n{}\n",
        theme.paint(&format!("No notes match '{}'.", query), Role::Warning),
        theme.paint("Try a shorter or different search term.", Role::Muted)
    )
}
