//! List command handler.

use anyhow::{Context, Result};
use std::io::Write;

use crate::cli::Workspace;
use crate::cli::output::{NoteListing, Output, OutputFormat};
use crate::render::notes_table;

pub fn handle_list<W: Write>(ws: &Workspace, format: OutputFormat, out: &mut W) -> Result<()> {
    let notes = ws.store().list_all().with_context(|| {
        format!(
            "failed to list notes in {}",
            ws.store().notes_dir().display()
        )
    })?;

    match format {
        OutputFormat::Human => {
            write!(out, "{}", notes_table(&notes, ws.theme()))?;
        }
        OutputFormat::Json => {
            let listings: Vec<NoteListing> = notes.iter().map(NoteListing::from).collect();
            let output = Output::new(listings);
            writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?;
        }
        OutputFormat::Paths => {
            for note in &notes {
                writeln!(out, "{}", note.path().display())?;
            }
        }
    }
    Ok(())
}
