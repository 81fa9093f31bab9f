//! Where shell input comes from: a terminal or a plain stream.

use anyhow::{Context, Result};
use dialoguer::theme::{ColorfulTheme, Theme as DialogTheme};
use dialoguer::{BasicHistory, Input, Select};
use std::fmt;
use std::io::{self, BufRead};

const HISTORY_ENTRIES: usize = 200;

/// A source of shell input lines and menu choices.
pub trait LineSource {
    /// Reads one line after showing `prompt`. `None` means end of input.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;

    /// Picks one of `items`. `None` means the choice was abandoned.
    fn choose(&mut self, prompt: &str, items: &[&str]) -> Result<Option<usize>>;

    /// True when a person is typing, so it makes sense to ask questions.
    fn is_interactive(&self) -> bool;
}

/// Prints the prompt exactly as given, with no `: ` suffix.
struct BarePrompt;

impl DialogTheme for BarePrompt {
    fn format_input_prompt(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        _default: Option<&str>,
    ) -> fmt::Result {
        write!(f, "{}", prompt)
    }

    fn format_input_prompt_selection(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        sel: &str,
    ) -> fmt::Result {
        write!(f, "{}{}", prompt, sel)
    }
}

/// Line editing with in-session history, for an attached terminal.
pub struct TerminalInput {
    history: BasicHistory,
}

impl TerminalInput {
    pub fn new() -> Self {
        Self {
            history: BasicHistory::new()
                .max_entries(HISTORY_ENTRIES)
                .no_duplicates(true),
        }
    }
}

impl Default for TerminalInput {
    fn default() -> Self {
        Self::new()
    }
}

impl LineSource for TerminalInput {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        let result = Input::<String>::with_theme(&BarePrompt)
            .with_prompt(prompt)
            .allow_empty(true)
            .history_with(&mut self.history)
            .interact_text();

        match result {
            Ok(line) => Ok(Some(line)),
            Err(dialoguer::Error::IO(e))
                if matches!(
                    e.kind(),
                    io::ErrorKind::UnexpectedEof | io::ErrorKind::Interrupted
                ) =>
            {
                Ok(None)
            }
            Err(e) => Err(e).context("failed to read input"),
        }
    }

    fn choose(&mut self, prompt: &str, items: &[&str]) -> Result<Option<usize>> {
        Select::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact_opt()
            .context("failed to read selection")
    }

    fn is_interactive(&self) -> bool {
        true
    }
}

/// Reads lines from any buffered reader, such as piped stdin.
///
/// Prompts are not shown. A choice is read as a line holding either a
/// 1-based item number or the item text.
pub struct StreamInput<R> {
    reader: R,
}

impl<R: BufRead> StreamInput<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for StreamInput<R> {
    fn read_line(&mut self, _prompt: &str) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .reader
            .read_line(&mut line)
            .context("failed to read input")?;
        if read == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    fn choose(&mut self, prompt: &str, items: &[&str]) -> Result<Option<usize>> {
        let Some(answer) = self.read_line(prompt)? else {
            return Ok(None);
        };
        let answer = answer.trim();
        let by_number = answer
            .parse::<usize>()
            .ok()
            .filter(|n| (1..=items.len()).contains(n))
            .map(|n| n - 1);
        Ok(by_number.or_else(|| items.iter().position(|item| item.eq_ignore_ascii_case(answer))))
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn stream_reads_lines_then_eof() {
        let mut input = StreamInput::new(Cursor::new("one\r\ntwo\n"));
        assert_eq!(input.read_line("> ").unwrap().as_deref(), Some("one"));
        assert_eq!(input.read_line("> ").unwrap().as_deref(), Some("two"));
        assert_eq!(input.read_line("> ").unwrap(), None);
    }

    #[test]
    fn stream_keeps_blank_lines() {
        let mut input = StreamInput::new(Cursor::new("\nx\n"));
        assert_eq!(input.read_line("> ").unwrap().as_deref(), Some(""));
    }

    #[test]
    fn stream_choice_by_number_or_name() {
        let items = ["new", "list", "quit"];
        let mut input = StreamInput::new(Cursor::new("2\nQUIT\n9\n"));
        assert_eq!(input.choose("?", &items).unwrap(), Some(1));
        assert_eq!(input.choose("?", &items).unwrap(), Some(2));
        assert_eq!(input.choose("?", &items).unwrap(), None);
        assert_eq!(input.choose("?", &items).unwrap(), None);
    }

    #[test]
    fn stream_is_not_interactive() {
        let input = StreamInput::new(Cursor::new(""));
        assert!(!input.is_interactive());
    }
}
