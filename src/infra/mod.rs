//! File I/O and frontmatter handling

mod frontmatter;
mod fs;

pub use frontmatter::{Frontmatter, ParseError, ParsedNote, new_note_content, parse, split};
pub use fs::{
    FileStats, FsError, ensure_dir, file_stats, read_text, remove_file, scan_notes_directory,
    write_new, write_text,
};
