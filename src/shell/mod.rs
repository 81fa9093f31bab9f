//! The interactive `notes>` shell.
//!
//! Reads commands from a [`LineSource`] and runs them through the same
//! handlers as the one-shot CLI. A failing command prints its error and the
//! loop carries on; only end of input or `quit` stops it.

mod command;
mod input;

pub use command::ShellCommand;
pub use input::{LineSource, StreamInput, TerminalInput};

use anyhow::{Context, Result};
use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};
use std::io::Write;
use tracing::debug;

use crate::cli::Workspace;
use crate::cli::handlers::{
    CommandEditor, EditorLauncher, handle_backlinks, handle_delete, handle_edit, handle_editor,
    handle_links, handle_list, handle_new, handle_search, handle_show, handle_status,
    handle_theme, handle_user,
};
use crate::cli::output::OutputFormat;
use crate::render::{Role, THEME_NAMES, live_search_table};
use crate::store::StoreError;

pub const PROMPT: &str = "notes> ";
const LIVE_PROMPT: &str = "search> ";

const MENU_ITEMS: &[(&str, &str)] = &[
    ("new", "Create a new note"),
    ("list", "List all notes"),
    ("search", "Search notes"),
    ("live-search", "Search with live preview"),
    ("theme", "Change theme"),
    ("editor", "Configure editor"),
    ("status", "Show status information"),
    ("help", "Show help"),
    ("quit", "Exit Anada"),
];

const MENU_EDITORS: &[&str] = &["nano", "vim", "code --wait", "emacs", "micro"];

/// Whether the loop should keep reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Stop,
}

/// A running shell session.
pub struct Shell<'w, L, W> {
    ws: &'w mut Workspace,
    input: L,
    out: W,
    editor: Option<Box<dyn EditorLauncher + 'w>>,
}

impl<'w, L: LineSource, W: Write> Shell<'w, L, W> {
    pub fn new(ws: &'w mut Workspace, input: L, out: W) -> Self {
        Self {
            ws,
            input,
            out,
            editor: None,
        }
    }

    /// Uses `editor` instead of the configured editor command.
    pub fn with_editor(mut self, editor: impl EditorLauncher + 'w) -> Self {
        self.editor = Some(Box::new(editor));
        self
    }

    /// Consumes the shell, returning its output writer.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Runs until `quit` or end of input.
    pub fn run(&mut self) -> Result<()> {
        self.welcome()?;

        loop {
            let Some(line) = self.input.read_line(PROMPT)? else {
                break;
            };
            let Some(command) = ShellCommand::parse(&line) else {
                continue;
            };

            debug!(?command, "dispatching shell command");
            match self.dispatch(command) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Stop) => break,
                Err(err) => self.report(&err)?,
            }
            self.out.flush()?;
        }

        let bye = self.ws.theme().paint("Goodbye!", Role::Muted);
        writeln!(self.out, "{}", bye)?;
        self.out.flush()?;
        Ok(())
    }

    fn welcome(&mut self) -> Result<()> {
        if self.ws.config().user_name.is_none() && self.input.is_interactive() {
            writeln!(
                self.out,
                "\nWelcome to Anada! Let's personalize your experience."
            )?;
            self.out.flush()?;
            if let Some(name) = self.input.read_line("What's your name? ")?
                && !name.trim().is_empty()
            {
                self.ws.set_user_name(&name)?;
                writeln!(self.out, "Nice to meet you, {}!", name.trim())?;
            }
        }

        let theme = self.ws.theme();
        let greeting = match self.ws.config().user_name.as_deref() {
            Some(name) => format!("Welcome back, {}!", name),
            None => "Welcome to Anada!".to_string(),
        };
        writeln!(
            self.out,
            "{} - terminal notes with wiki-links",
            theme.paint("Anada", Role::Accent)
        )?;
        writeln!(self.out, "{}", greeting)?;
        writeln!(
            self.out,
            "Notes directory: {}",
            theme.paint(
                &self.ws.store().notes_dir().display().to_string(),
                Role::Muted
            )
        )?;
        writeln!(
            self.out,
            "Type {} for all commands or {} to exit.\n",
            theme.paint("help", Role::Accent),
            theme.paint("quit", Role::Accent)
        )?;
        Ok(())
    }

    fn report(&mut self, err: &anyhow::Error) -> Result<()> {
        let role = match err.downcast_ref::<StoreError>() {
            Some(StoreError::AlreadyExists { .. }) => Role::Warning,
            _ => Role::Error,
        };
        debug!("shell command failed: {err:#}");
        let message = self.ws.theme().paint(&format!("Error: {err:#}"), role);
        writeln!(self.out, "{}", message)?;
        Ok(())
    }

    fn usage(&mut self, usage: &str) -> Result<Flow> {
        let message = self.ws.theme().paint(&format!("Usage: {}", usage), Role::Error);
        writeln!(self.out, "{}", message)?;
        Ok(Flow::Continue)
    }

    fn dispatch(&mut self, command: ShellCommand<'_>) -> Result<Flow> {
        match command {
            ShellCommand::Help => self.help()?,
            ShellCommand::Quit => return Ok(Flow::Stop),
            ShellCommand::Clear => {
                queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
            }
            ShellCommand::Status => handle_status(self.ws, &mut self.out)?,
            ShellCommand::Menu => return self.menu(),
            ShellCommand::List => handle_list(self.ws, OutputFormat::Human, &mut self.out)?,
            ShellCommand::New("") => return self.usage("new <title>"),
            ShellCommand::New(title) => {
                handle_new(self.ws, title, &mut self.out)?;
                let hint = self.ws.theme().paint("Use 'edit' to open it.", Role::Muted);
                writeln!(self.out, "{}", hint)?;
            }
            ShellCommand::Edit("") => return self.usage("edit <title>"),
            ShellCommand::Edit(title) => self.edit(title)?,
            ShellCommand::Show("") => return self.usage("show <title>"),
            ShellCommand::Show(title) => self.show(title)?,
            ShellCommand::Delete("") => return self.usage("delete <title>"),
            ShellCommand::Delete(title) => {
                let input = &mut self.input;
                handle_delete(
                    self.ws,
                    title,
                    |t| {
                        let answer = input.read_line(&format!("Delete '{}'? [y/N]: ", t))?;
                        Ok(answer.is_some_and(|a| a.trim().eq_ignore_ascii_case("y")))
                    },
                    &mut self.out,
                )?;
            }
            ShellCommand::Search("") => return self.usage("search <query>"),
            ShellCommand::Search(query) => {
                handle_search(self.ws, query, OutputFormat::Human, &mut self.out)?;
            }
            ShellCommand::LiveSearch => self.live_search()?,
            ShellCommand::Link("") => return self.usage("link <title>"),
            ShellCommand::Link(title) => handle_links(self.ws, title, &mut self.out)?,
            ShellCommand::Backlinks("") => return self.usage("backlinks <title>"),
            ShellCommand::Backlinks(title) => {
                handle_backlinks(self.ws, title, OutputFormat::Human, &mut self.out)?;
            }
            ShellCommand::Theme("") => {
                self.usage("theme <name>")?;
                let available = format!("Available themes: {}", THEME_NAMES.join(", "));
                let hint = self.ws.theme().paint(&available, Role::Muted);
                writeln!(self.out, "{}", hint)?;
            }
            ShellCommand::Theme(name) => handle_theme(self.ws, Some(name), &mut self.out)?,
            ShellCommand::Editor(name) => {
                handle_editor(self.ws, Some(name).filter(|n| !n.is_empty()), &mut self.out)?;
            }
            ShellCommand::User(name) => {
                handle_user(self.ws, Some(name).filter(|n| !n.is_empty()), &mut self.out)?;
            }
            ShellCommand::Unknown { name, line } => {
                if self.ws.store().exists(line) {
                    self.show(line)?;
                } else {
                    let theme = self.ws.theme();
                    let unknown = theme.paint(&format!("Unknown command: {}", name), Role::Error);
                    let hint = theme.paint("Type 'help' for available commands", Role::Muted);
                    writeln!(self.out, "{}\n{}", unknown, hint)?;
                }
            }
        }
        Ok(Flow::Continue)
    }

    fn show(&mut self, title: &str) -> Result<()> {
        handle_show(self.ws, title, true, &mut self.out)?;
        let footer = format!("edit {0} | link {0} | delete {0}", title);
        let footer = self.ws.theme().paint(&footer, Role::Muted);
        writeln!(self.out, "\n{}", footer)?;
        Ok(())
    }

    /// Sub-loop where each line replaces the query and reprints the top
    /// results. A blank line repeats the current results.
    fn live_search(&mut self) -> Result<()> {
        self.live_search_banner()?;
        let mut query = String::new();

        loop {
            let prompt = if query.is_empty() {
                LIVE_PROMPT.to_string()
            } else {
                format!("search ({})> ", query)
            };
            let Some(line) = self.input.read_line(&prompt)? else {
                break;
            };

            if line.trim().is_empty() {
                if !query.is_empty() {
                    self.live_results(&query)?;
                }
                continue;
            }
            if let Some(title) = line.strip_prefix("show ") {
                self.live_show(title.trim())?;
                continue;
            }
            match line.as_str() {
                "exit" | "quit" => break,
                "clear" => {
                    query.clear();
                    queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
                    self.live_search_banner()?;
                }
                _ => query = line.clone(),
            }
            if !query.is_empty() {
                self.live_results(&query)?;
            }
            self.out.flush()?;
        }

        let done = self.ws.theme().paint("Exited live search mode", Role::Muted);
        writeln!(self.out, "\n{}", done)?;
        Ok(())
    }

    fn live_search_banner(&mut self) -> Result<()> {
        let theme = self.ws.theme();
        writeln!(self.out, "{}", theme.paint("Live Search Mode", Role::Header))?;
        writeln!(
            self.out,
            "{}\n",
            theme.paint(
                "Type a query to search, 'show <title>' to view a note, 'exit' to leave",
                Role::Muted
            )
        )?;
        Ok(())
    }

    fn live_results(&mut self, query: &str) -> Result<()> {
        let hits = self
            .ws
            .store()
            .search(query)
            .with_context(|| format!("failed to search for '{}'", query))?;
        debug!(query, count = hits.len(), "live search");
        write!(self.out, "{}", live_search_table(&hits, query, self.ws.theme()))?;
        Ok(())
    }

    fn live_show(&mut self, title: &str) -> Result<()> {
        if title.is_empty() || !self.ws.store().exists(title) {
            let theme = self.ws.theme();
            let missing = theme.paint(&format!("Note not found: {}", title), Role::Error);
            let hint = theme.paint("Pick a title from the results above", Role::Muted);
            writeln!(self.out, "{}\n{}", missing, hint)?;
            return Ok(());
        }
        if let Err(err) = self.show(title) {
            self.report(&err)?;
        }
        Ok(())
    }

    fn edit(&mut self, title: &str) -> Result<()> {
        match &self.editor {
            Some(editor) => handle_edit(self.ws, title, editor.as_ref(), &mut self.out),
            None => {
                let editor = CommandEditor::new(self.ws.config().editor());
                handle_edit(self.ws, title, &editor, &mut self.out)
            }
        }
    }

    fn menu(&mut self) -> Result<Flow> {
        let labels: Vec<String> = MENU_ITEMS
            .iter()
            .map(|(name, desc)| format!("{:<12} {}", name, desc))
            .collect();
        let labels: Vec<&str> = labels.iter().map(String::as_str).collect();

        let Some(index) = self.input.choose("Select an action", &labels)? else {
            return Ok(Flow::Continue);
        };
        let (action, _) = MENU_ITEMS[index];

        match action {
            "new" => {
                if let Some(title) = self.input.read_line("Note title: ")? {
                    return self.dispatch(ShellCommand::New(title.trim()));
                }
            }
            "search" => {
                if let Some(query) = self.input.read_line("Search query: ")? {
                    return self.dispatch(ShellCommand::Search(query.trim()));
                }
            }
            "theme" => {
                let prompt = format!("Current theme: {}", self.ws.theme().name());
                if let Some(i) = self.input.choose(&prompt, THEME_NAMES)? {
                    return self.dispatch(ShellCommand::Theme(THEME_NAMES[i]));
                }
            }
            "editor" => {
                let prompt = format!("Current editor: {}", self.ws.config().editor());
                if let Some(i) = self.input.choose(&prompt, MENU_EDITORS)? {
                    return self.dispatch(ShellCommand::Editor(MENU_EDITORS[i]));
                }
            }
            other => {
                if let Some(command) = ShellCommand::parse(other) {
                    return self.dispatch(command);
                }
            }
        }
        Ok(Flow::Continue)
    }

    fn help(&mut self) -> Result<()> {
        let theme = self.ws.theme();
        let rows: &[(&str, &str)] = &[
            ("new <title>", "Create a new note"),
            ("edit <title>", "Open note in editor (creates it if missing)"),
            ("open <title>", "Alias for edit"),
            ("show <title>", "Display note content with backlinks"),
            ("delete <title>", "Delete a note"),
            ("list", "List all notes"),
            ("search <query>", "Search notes by content"),
            ("live-search", "Search interactively with preview"),
            ("link <title>", "Show links in a note"),
            ("backlinks <title>", "Show backlinks to a note"),
            ("theme <name>", "Change theme (default, dark, nord)"),
            ("editor [name]", "Show or set editor"),
            ("user [name]", "Show or set user name"),
            ("status", "Show note statistics and settings"),
            ("menu", "Pick a command from a menu"),
            ("clear", "Clear screen"),
            ("help", "Show this help"),
            ("quit", "Exit Anada"),
        ];

        writeln!(self.out, "\n{}\n", theme.paint("Commands:", Role::Header))?;
        for (usage, desc) in rows {
            writeln!(
                self.out,
                "  {} {}",
                theme.paint(&format!("{:<20}", usage), Role::Accent),
                desc
            )?;
        }
        writeln!(
            self.out,
            "\n{}",
            theme.paint("Tip: type a note title directly to view it", Role::Muted)
        )?;
        writeln!(
            self.out,
            "{}\n",
            theme.paint(
                &format!(
                    "Notes are saved to: {}",
                    self.ws.store().notes_dir().display()
                ),
                Role::Muted
            )
        )?;
        Ok(())
    }
}
