//! Link-related command handlers (links, backlinks).

use anyhow::{Context, Result, bail};
use std::io::Write;

use super::require_title;
use crate::cli::Workspace;
use crate::cli::output::{Output, OutputFormat, TitleListing};
use crate::domain::extract_links;
use crate::render::{Role, Theme};

/// Lists the wiki-link targets written in a note, in order of appearance.
pub fn handle_links<W: Write>(ws: &Workspace, title: &str, out: &mut W) -> Result<()> {
    let title = require_title(title)?;
    let Some(content) = ws.store().read(title)? else {
        bail!("note not found: '{}'", title);
    };

    let links = extract_links(&content);
    let theme = ws.theme();
    if links.is_empty() {
        writeln!(
            out,
            "{}",
            theme.paint(&format!("No links found in '{}'", title), Role::Muted)
        )?;
        return Ok(());
    }

    print_link_list(out, theme, &format!("Links in '{}':", title), &links)
}

/// Lists notes that link to `title`. The target does not need to exist.
pub fn handle_backlinks<W: Write>(
    ws: &Workspace,
    title: &str,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    let title = require_title(title)?;
    let store = ws.store();
    let backlinks = store
        .backlinks_to(title)
        .with_context(|| format!("failed to compute backlinks for '{}'", title))?;

    match format {
        OutputFormat::Human => {
            let theme = ws.theme();
            if backlinks.is_empty() {
                writeln!(
                    out,
                    "{}",
                    theme.paint(&format!("No backlinks found for '{}'", title), Role::Muted)
                )?;
            } else {
                print_link_list(out, theme, &format!("Backlinks to '{}':", title), &backlinks)?;
            }
        }
        OutputFormat::Json => {
            let listings: Vec<TitleListing> = backlinks
                .iter()
                .map(|t| TitleListing {
                    title: t.clone(),
                    path: store.path_for(t).to_string_lossy().to_string(),
                })
                .collect();
            let output = Output::new(listings);
            writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?;
        }
        OutputFormat::Paths => {
            for t in &backlinks {
                writeln!(out, "{}", store.path_for(t).display())?;
            }
        }
    }
    Ok(())
}

fn print_link_list<W: Write>(
    out: &mut W,
    theme: &Theme,
    heading: &str,
    titles: &[String],
) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", theme.paint(heading, Role::Header))?;
    writeln!(out)?;
    for t in titles {
        writeln!(out, "  {}", theme.paint(&format!("[[{}]]", t), Role::Link))?;
    }
    Ok(())
}
