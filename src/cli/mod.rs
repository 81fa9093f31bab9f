//! CLI command definitions and handlers

pub mod config;
pub mod handlers;
pub mod logging;
pub mod output;
mod workspace;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use output::OutputFormat;
pub use workspace::Workspace;

/// anada - terminal notes with wiki-links, backlinks and search
#[derive(Parser, Debug)]
#[command(name = "anada", version, about, long_about = None)]
pub struct Cli {
    /// Notes directory (overrides config file)
    #[arg(short = 'd', long, global = true)]
    pub dir: Option<PathBuf>,

    /// Config file to use instead of the default location
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Starts the interactive shell when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new note
    New(NewArgs),

    /// Show a note's contents
    Show(ShowArgs),

    /// Edit a note in your editor, creating it if missing
    #[command(alias = "open")]
    Edit(EditArgs),

    /// Delete a note
    Delete(DeleteArgs),

    /// List all notes, most recently modified first
    #[command(alias = "ls")]
    List(ListArgs),

    /// Full-text search across notes
    Search(SearchArgs),

    /// Show the wiki-links inside a note
    #[command(alias = "link")]
    Links(LinksArgs),

    /// Show notes that link to a given note
    Backlinks(BacklinksArgs),

    /// Show or change the color theme
    Theme(ThemeArgs),

    /// Show or change the editor
    Editor(EditorArgs),

    /// Show or change the user name
    User(UserArgs),

    /// Show note counts and current settings
    Status,

    /// Generate shell completions
    Completions(CompletionsArgs),

    /// Start the interactive shell
    Shell,
}

/// Arguments for the `new` command
#[derive(Parser, Debug)]
pub struct NewArgs {
    /// Note title
    pub title: String,

    /// Open in editor after creation
    #[arg(short, long)]
    pub edit: bool,
}

/// Arguments for the `show` command
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Note title
    pub title: String,

    /// Append the notes linking here
    #[arg(short, long)]
    pub backlinks: bool,
}

/// Arguments for the `edit` command
#[derive(Parser, Debug)]
pub struct EditArgs {
    /// Note title
    pub title: String,
}

/// Arguments for the `delete` command
#[derive(Parser, Debug)]
pub struct DeleteArgs {
    /// Note title
    pub title: String,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the `list` command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `search` command
#[derive(Parser, Debug)]
pub struct SearchArgs {
    /// Search query (case-insensitive)
    pub query: String,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `links` command
#[derive(Parser, Debug)]
pub struct LinksArgs {
    /// Note title
    pub title: String,
}

/// Arguments for the `backlinks` command
#[derive(Parser, Debug)]
pub struct BacklinksArgs {
    /// Note title
    pub title: String,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `theme` command
#[derive(Parser, Debug)]
pub struct ThemeArgs {
    /// Theme to switch to (default, dark, nord)
    pub name: Option<String>,
}

/// Arguments for the `editor` command
#[derive(Parser, Debug)]
pub struct EditorArgs {
    /// Editor command to switch to; must be on PATH
    pub name: Option<String>,
}

/// Arguments for the `user` command
#[derive(Parser, Debug)]
pub struct UserArgs {
    /// Name to greet in the shell
    pub name: Option<String>,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, zsh, fish)
    #[arg(value_enum)]
    pub shell: Shell,
}
