//! Delete command handler.

use anyhow::{Context, Result, bail};
use dialoguer::Confirm;
use std::io::{self, IsTerminal, Write};

use super::require_title;
use crate::cli::Workspace;
use crate::render::Role;

/// Asks on the terminal whether to delete a note. Defaults to no.
///
/// # Errors
///
/// Fails when stdin is not a terminal, since there is nobody to ask.
pub fn confirm_delete(title: &str) -> Result<bool> {
    if !io::stdin().is_terminal() {
        bail!("refusing to delete '{}' without confirmation (use --yes)", title);
    }
    Confirm::new()
        .with_prompt(format!("Delete '{}'?", title))
        .default(false)
        .interact()
        .context("failed to read confirmation")
}

/// Deletes a note once `confirm` agrees.
///
/// `confirm` is only asked after the note is known to exist.
pub fn handle_delete<W, F>(ws: &Workspace, title: &str, confirm: F, out: &mut W) -> Result<()>
where
    W: Write,
    F: FnOnce(&str) -> Result<bool>,
{
    let title = require_title(title)?;
    if !ws.store().exists(title) {
        bail!("note not found: '{}'", title);
    }

    let theme = ws.theme();
    if !confirm(title)? {
        writeln!(out, "{}", theme.paint("Cancelled", Role::Muted))?;
        return Ok(());
    }

    ws.store().delete(title)?;
    writeln!(
        out,
        "{}",
        theme.paint(&format!("Deleted: {}", title), Role::Success)
    )?;
    Ok(())
}
