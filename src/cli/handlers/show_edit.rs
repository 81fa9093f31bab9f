//! Show and Edit command handlers.

use anyhow::{Context, Result, bail};
use std::io::Write;
use std::path::Path;
use std::process::Command;
use tracing::debug;

use super::{editor_tip, require_title};
use crate::cli::Workspace;
use crate::render::{Role, render_note};

/// Renders a note, optionally followed by the notes linking to it.
pub fn handle_show<W: Write>(
    ws: &Workspace,
    title: &str,
    with_backlinks: bool,
    out: &mut W,
) -> Result<()> {
    let title = require_title(title)?;
    let Some(content) = ws.store().read(title)? else {
        bail!("note not found: '{}'", title);
    };

    let backlinks = if with_backlinks {
        ws.store()
            .backlinks_to(title)
            .with_context(|| format!("failed to compute backlinks for '{}'", title))?
    } else {
        Vec::new()
    };

    write!(out, "{}", render_note(&content, &backlinks, ws.theme()))?;
    Ok(())
}

/// Trait for launching an editor (allows mocking in tests).
pub trait EditorLauncher {
    fn open(&self, path: &Path) -> Result<()>;
}

/// Launches a shell-style editor command such as `code --wait`.
#[derive(Debug, Clone)]
pub struct CommandEditor {
    command: String,
}

impl CommandEditor {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }
}

impl EditorLauncher for CommandEditor {
    fn open(&self, path: &Path) -> Result<()> {
        open_in_editor(path, &self.command)
    }
}

/// Opens a file in the given editor command and waits for it to exit.
pub fn open_in_editor(path: &Path, editor: &str) -> Result<()> {
    // Parse editor command (may include args like "code --wait")
    let parts: Vec<&str> = editor.split_whitespace().collect();
    let Some((cmd, args)) = parts.split_first() else {
        bail!("editor command is empty");
    };

    debug!(editor, path = %path.display(), "launching editor");
    let status = Command::new(cmd)
        .args(args)
        .arg(path)
        .status()
        .with_context(|| format!("failed to launch editor '{}'", editor))?;

    if !status.success() {
        bail!("editor '{}' exited with non-zero status", editor);
    }

    Ok(())
}

/// Opens a note in the editor, creating it first if it does not exist.
pub fn handle_edit<E: EditorLauncher + ?Sized, W: Write>(
    ws: &Workspace,
    title: &str,
    editor: &E,
    out: &mut W,
) -> Result<()> {
    let title = require_title(title)?;
    let path = ws.store().path_or_create(title)?;
    let theme = ws.theme();

    let editor_cmd = ws.config().editor();
    writeln!(
        out,
        "{}",
        theme.paint(&format!("Opening in: {}", editor_cmd), Role::Muted)
    )?;
    if let Some(tip) = editor_tip(&editor_cmd) {
        writeln!(out, "{}", theme.paint(tip, Role::Muted))?;
    }
    out.flush()?;

    editor.open(&path)?;

    writeln!(
        out,
        "{}",
        theme.paint(&format!("Note saved to: {}", path.display()), Role::Success)
    )?;
    Ok(())
}
