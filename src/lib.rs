//! anada - terminal notes with wiki-links, backlinks and search

pub mod cli;
pub mod domain;
pub mod infra;
pub mod render;
pub mod shell;
pub mod store;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use std::io::{self, IsTerminal};

use cli::{
    Cli, Command, Workspace,
    config::Config,
    handlers::{
        CommandEditor, confirm_delete, handle_backlinks, handle_delete, handle_edit,
        handle_editor, handle_links, handle_list, handle_new, handle_search, handle_show,
        handle_status, handle_theme, handle_user,
    },
    logging,
};
use shell::{Shell, StreamInput, TerminalInput};
use store::NoteStore;

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Some(Command::Completions(args)) = &cli.command {
        clap_complete::generate(args.shell, &mut Cli::command(), "anada", &mut io::stdout());
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let notes_dir = config.notes_dir(cli.dir.as_ref());
    let store = NoteStore::open(&notes_dir)
        .with_context(|| format!("failed to open notes directory: {}", notes_dir.display()))?;
    let mut ws = Workspace::new(store, config, io::stdout().is_terminal())?;

    let Some(command) = cli.command else {
        return run_shell(&mut ws);
    };

    let mut out = io::stdout().lock();
    match command {
        Command::New(args) => {
            handle_new(&ws, &args.title, &mut out)?;
            if args.edit {
                let editor = CommandEditor::new(ws.config().editor());
                handle_edit(&ws, &args.title, &editor, &mut out)?;
            }
            Ok(())
        }
        Command::Show(args) => handle_show(&ws, &args.title, args.backlinks, &mut out),
        Command::Edit(args) => {
            let editor = CommandEditor::new(ws.config().editor());
            handle_edit(&ws, &args.title, &editor, &mut out)
        }
        Command::Delete(args) => handle_delete(
            &ws,
            &args.title,
            |title| if args.yes { Ok(true) } else { confirm_delete(title) },
            &mut out,
        ),
        Command::List(args) => handle_list(&ws, args.format, &mut out),
        Command::Search(args) => handle_search(&ws, &args.query, args.format, &mut out),
        Command::Links(args) => handle_links(&ws, &args.title, &mut out),
        Command::Backlinks(args) => handle_backlinks(&ws, &args.title, args.format, &mut out),
        Command::Theme(args) => handle_theme(&mut ws, args.name.as_deref(), &mut out),
        Command::Editor(args) => handle_editor(&mut ws, args.name.as_deref(), &mut out),
        Command::User(args) => handle_user(&mut ws, args.name.as_deref(), &mut out),
        Command::Status => handle_status(&ws, &mut out),
        Command::Shell => {
            drop(out);
            run_shell(&mut ws)
        }
        Command::Completions(_) => Ok(()),
    }
}

/// Runs the shell with line editing on a terminal, or over piped stdin.
fn run_shell(ws: &mut Workspace) -> Result<()> {
    let out = io::stdout();
    if io::stdin().is_terminal() {
        Shell::new(ws, TerminalInput::new(), out).run()
    } else {
        Shell::new(ws, StreamInput::new(io::stdin().lock()), out).run()
    }
}
