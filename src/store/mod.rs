//! Note store: title-addressed CRUD, listing, backlinks and search

mod error;
mod note_store;
mod search;

pub use error::{StoreError, StoreResult};
pub use note_store::NoteStore;
pub use search::{SNIPPET_CONTEXT, count_matches, snippet};
