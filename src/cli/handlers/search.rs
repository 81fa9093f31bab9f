//! Search command handler.

use anyhow::{Context, Result};
use std::io::Write;

use crate::cli::Workspace;
use crate::cli::output::{Output, OutputFormat, SearchListing};
use crate::render::search_table;

pub fn handle_search<W: Write>(
    ws: &Workspace,
    query: &str,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    let store = ws.store();
    let hits = store
        .search(query)
        .with_context(|| format!("failed to search for '{}'", query))?;

    match format {
        OutputFormat::Human => {
            write!(out, "{}", search_table(&hits, query, ws.theme()))?;
        }
        OutputFormat::Json => {
            let listings: Vec<SearchListing> = hits
                .iter()
                .map(|hit| {
                    let path = store.path_for(hit.title());
                    SearchListing::new(hit, path.to_string_lossy().to_string())
                })
                .collect();
            let output = Output::new(listings);
            writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?;
        }
        OutputFormat::Paths => {
            for hit in &hits {
                writeln!(out, "{}", store.path_for(hit.title()).display())?;
            }
        }
    }
    Ok(())
}
