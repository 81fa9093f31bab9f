//! New note command handler.

use anyhow::Result;
use std::io::Write;
use std::path::PathBuf;

use super::require_title;
use crate::cli::Workspace;
use crate::render::Role;

/// Creates a note and reports where it was written.
///
/// # Errors
///
/// Fails if the title is blank or a note already exists at its path; the
/// latter keeps the underlying `StoreError` so callers can downcast it.
pub fn handle_new<W: Write>(ws: &Workspace, title: &str, out: &mut W) -> Result<PathBuf> {
    let title = require_title(title)?;
    let path = ws.store().create(title)?;

    let theme = ws.theme();
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    writeln!(out, "{}", theme.paint(&format!("Created: {}", name), Role::Success))?;
    writeln!(
        out,
        "{}",
        theme.paint(&format!("Saved to: {}", path.display()), Role::Muted)
    )?;

    Ok(path)
}
