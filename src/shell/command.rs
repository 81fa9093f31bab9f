//! Parsing of shell input lines.

/// One line of shell input, split into a command and its argument.
///
/// The argument is everything after the first run of whitespace, so titles
/// may contain spaces. An empty argument is kept as `""`; the shell answers
/// it with a usage message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand<'a> {
    Help,
    Quit,
    Clear,
    Status,
    Menu,
    List,
    New(&'a str),
    Edit(&'a str),
    Show(&'a str),
    Delete(&'a str),
    Search(&'a str),
    LiveSearch,
    Link(&'a str),
    Backlinks(&'a str),
    Theme(&'a str),
    Editor(&'a str),
    User(&'a str),
    /// Anything else. `line` is the whole trimmed input, which the shell
    /// tries as a note title.
    Unknown { name: String, line: &'a str },
}

impl<'a> ShellCommand<'a> {
    /// Parses a line. Returns `None` for blank input.
    pub fn parse(line: &'a str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let (name, arg) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (line, ""),
        };
        let name = name.to_lowercase();

        let command = match name.as_str() {
            "help" => Self::Help,
            "quit" | "exit" => Self::Quit,
            "clear" => Self::Clear,
            "status" => Self::Status,
            "menu" => Self::Menu,
            "list" | "ls" => Self::List,
            "new" => Self::New(arg),
            "edit" | "open" => Self::Edit(arg),
            "show" => Self::Show(arg),
            "delete" => Self::Delete(arg),
            "search" => Self::Search(arg),
            "live-search" => Self::LiveSearch,
            "link" | "links" => Self::Link(arg),
            "backlinks" => Self::Backlinks(arg),
            "theme" => Self::Theme(arg),
            "editor" => Self::Editor(arg),
            "user" => Self::User(arg),
            _ => Self::Unknown { name, line },
        };
        Some(command)
    }
}
