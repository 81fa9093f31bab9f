//! Core types: titles, wiki-links, listing and search records

mod link;
mod note;
mod title;

pub use link::{extract_links, link_key, link_matches, link_spans};
pub use note::{NoteInfo, SearchHit};
pub use title::{NOTE_EXTENSION, note_filename, title_from_path};
