//! Settings and status handlers (theme, editor, user, status).

use anyhow::{Context, Result};
use std::io::Write;

use super::editor_tip;
use crate::cli::Workspace;
use crate::render::{Role, THEME_NAMES, recent_table, status_table};

const RECENT_LIMIT: usize = 5;

/// Shows the current theme, or switches to `name`.
pub fn handle_theme<W: Write>(ws: &mut Workspace, name: Option<&str>, out: &mut W) -> Result<()> {
    let Some(name) = name.map(str::trim).filter(|n| !n.is_empty()) else {
        let theme = ws.theme();
        writeln!(
            out,
            "{} {}",
            theme.paint("Current theme:", Role::Header),
            theme.paint(theme.name(), Role::Warning)
        )?;
        writeln!(
            out,
            "{}",
            theme.paint(
                &format!("Available themes: {}", THEME_NAMES.join(", ")),
                Role::Muted
            )
        )?;
        return Ok(());
    };

    ws.set_theme(name)?;
    writeln!(
        out,
        "{}",
        ws.theme()
            .paint(&format!("Theme changed to: {}", name), Role::Success)
    )?;
    Ok(())
}

/// Shows the current editor, or switches to `name` after checking `PATH`.
pub fn handle_editor<W: Write>(
    ws: &mut Workspace,
    name: Option<&str>,
    out: &mut W,
) -> Result<()> {
    let Some(name) = name.map(str::trim).filter(|n| !n.is_empty()) else {
        let theme = ws.theme();
        let current = ws.config().editor();
        writeln!(
            out,
            "{} {}",
            theme.paint("Current editor:", Role::Header),
            theme.paint(&current, Role::Warning)
        )?;
        if let Some(tip) = editor_tip(&current) {
            writeln!(out, "{}", theme.paint(tip, Role::Muted))?;
        }
        writeln!(
            out,
            "{}",
            theme.paint("To change: editor nano (or any editor on PATH)", Role::Muted)
        )?;
        return Ok(());
    };

    ws.set_editor(name)?;
    let theme = ws.theme();
    writeln!(
        out,
        "{}",
        theme.paint(&format!("Editor changed to: {}", name), Role::Success)
    )?;
    if let Some(tip) = editor_tip(name) {
        writeln!(out, "{}", theme.paint(&format!("Tip: {}", tip), Role::Muted))?;
    }
    Ok(())
}

/// Shows the current user name, or sets it.
pub fn handle_user<W: Write>(ws: &mut Workspace, name: Option<&str>, out: &mut W) -> Result<()> {
    let Some(name) = name.map(str::trim).filter(|n| !n.is_empty()) else {
        let theme = ws.theme();
        match ws.config().user_name.as_deref() {
            Some(user) => writeln!(
                out,
                "{} {}",
                theme.paint("Current user:", Role::Header),
                theme.paint(user, Role::Warning)
            )?,
            None => writeln!(out, "{}", theme.paint("No user name set", Role::Muted))?,
        }
        writeln!(
            out,
            "{}",
            theme.paint("To change: user \"Your Name\"", Role::Muted)
        )?;
        return Ok(());
    };

    ws.set_user_name(name)?;
    writeln!(
        out,
        "{}",
        ws.theme()
            .paint(&format!("User name set to: {}", name), Role::Success)
    )?;
    Ok(())
}

/// Prints note totals, the active settings and the most recent notes.
pub fn handle_status<W: Write>(ws: &Workspace, out: &mut W) -> Result<()> {
    let notes = ws
        .store()
        .list_all()
        .context("failed to list notes for status")?;
    let theme = ws.theme();

    let last_modified = notes
        .first()
        .map(|n| n.modified().format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "Never".to_string());

    let metrics = [
        ("Total Notes", notes.len().to_string()),
        ("Last Modified", last_modified),
        ("Current Theme", theme.name().to_string()),
        ("Editor", ws.config().editor()),
        (
            "Notes Directory",
            ws.store().notes_dir().display().to_string(),
        ),
    ];
    write!(out, "{}", status_table(&metrics, theme))?;
    writeln!(out)?;

    if notes.is_empty() {
        writeln!(
            out,
            "{}",
            theme.paint(
                "No notes created yet. Use 'new <title>' to create your first note!",
                Role::Muted
            )
        )?;
    } else {
        let recent = &notes[..notes.len().min(RECENT_LIMIT)];
        write!(out, "{}", recent_table(recent, theme))?;
    }
    Ok(())
}
