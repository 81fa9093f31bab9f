//! Terminal presentation: themes, Markdown rendering and tables

mod markdown;
mod tables;
mod theme;

pub use markdown::{render_markdown, render_note};
pub use tables::{
    live_search_table, notes_table, recent_table, search_table, status_table,
    truncate_with_ellipsis,
};
pub use theme::{DEFAULT_THEME, Palette, Role, Shade, THEME_NAMES, Theme};
