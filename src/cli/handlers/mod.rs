//! Command handlers for the CLI.
//!
//! Handlers write to any `io::Write`, so the interactive shell reuses them
//! and tests can capture what they print.

mod delete;
mod links;
mod list;
mod new;
mod prefs;
mod search;
mod show_edit;


use anyhow::{Result, bail};

// Re-export public items
pub use delete::{confirm_delete, handle_delete};
pub use links::{handle_backlinks, handle_links};
pub use list::handle_list;
pub use new::handle_new;
pub use prefs::{handle_editor, handle_status, handle_theme, handle_user};
pub use search::handle_search;
pub use show_edit::{CommandEditor, EditorLauncher, handle_edit, handle_show, open_in_editor};

// ===========================================
// Shared Utilities
// ===========================================

/// Rejects blank titles. Others pass through as given, surrounding
/// whitespace included.
pub(crate) fn require_title(title: &str) -> Result<&str> {
    if title.trim().is_empty() {
        bail!("title cannot be empty");
    }
    Ok(title)
}

/// Usage hints shown after switching to or opening a known editor.
pub(crate) fn editor_tip(editor: &str) -> Option<&'static str> {
    match editor {
        "vim" | "nvim" => Some("Press 'i' to edit, ':wq' to save & exit, ':q!' to quit"),
        "nano" => Some("Ctrl+O to save, Ctrl+X to exit"),
        _ => None,
    }
}
