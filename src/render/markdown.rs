//! Markdown to styled terminal text.

use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Options, Parser, Tag};

use super::theme::{Role, Theme};
use crate::domain::link_spans;
use crate::infra::split;

const RULE_WIDTH: usize = 40;

/// Renders Markdown for the terminal using the theme's colors.
///
/// Handles headings, emphasis, inline and block code, block quotes, lists,
/// rules, links and simple tables. `[[Wiki Links]]` are painted in the link
/// color wherever they appear in ordinary text.
pub fn render_markdown(text: &str, theme: &Theme) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let mut writer = Writer::new(theme);
    for event in Parser::new_ext(text, options) {
        writer.event(event);
    }
    writer.finish()
}

/// Renders a whole note: a muted creation line taken from the
/// frontmatter, the Markdown body, and a backlinks section when
/// `backlinks` is non-empty.
pub fn render_note(content: &str, backlinks: &[String], theme: &Theme) -> String {
    let parsed = split(content);
    let mut out = String::new();

    if let Some(created) = &parsed.frontmatter.created {
        out.push_str(&theme.paint(&format!("created {}", created), Role::Muted));
        out.push_str("\n\n");
    }

    out.push_str(&render_markdown(parsed.body, theme));

    if !backlinks.is_empty() {
        out.push('\n');
        out.push_str(&theme.paint("Backlinks:", Role::Bold));
        out.push('\n');
        for title in backlinks {
            out.push_str("  - ");
            out.push_str(&theme.paint(&format!("[[{}]]", title), Role::Link));
            out.push('\n');
        }
    }

    out
}

/// Event-driven writer that tracks nesting state while emitting text.
struct Writer<'t> {
    theme: &'t Theme,
    out: String,
    /// Text collected from consecutive `Text` events. The parser splits
    /// `[[...]]` into several events, so styling waits until the run ends.
    pending: String,
    roles: Vec<Role>,
    lists: Vec<Option<u64>>,
    quote_depth: usize,
    in_code_block: bool,
    at_line_start: bool,
}

impl<'t> Writer<'t> {
    fn new(theme: &'t Theme) -> Self {
        Self {
            theme,
            out: String::new(),
            pending: String::new(),
            roles: Vec::new(),
            lists: Vec::new(),
            quote_depth: 0,
            in_code_block: false,
            at_line_start: true,
        }
    }

    fn event(&mut self, event: Event<'_>) {
        if let Event::Text(text) = &event
            && !self.in_code_block
        {
            self.pending.push_str(text);
            return;
        }
        self.flush_pending();

        match event {
            Event::Start(tag) => self.start(tag),
            Event::End(tag) => self.end(tag),
            Event::Text(text) => {
                // Only reached inside code blocks.
                for line in text.split_inclusive('\n') {
                    if self.at_line_start {
                        self.write_raw("    ");
                    }
                    self.write(line, Some(Role::Code));
                }
            }
            Event::Code(code) => self.write(&code, Some(Role::Code)),
            Event::Html(html) => self.write(&html, Some(Role::Muted)),
            Event::SoftBreak | Event::HardBreak => self.newline(),
            Event::Rule => {
                self.ensure_blank_line();
                self.write(&"─".repeat(RULE_WIDTH), Some(Role::Muted));
                self.newline();
                self.newline();
            }
            Event::TaskListMarker(checked) => {
                self.write_raw(if checked { "[x] " } else { "[ ] " });
            }
            Event::FootnoteReference(label) => {
                self.write(&format!("[^{}]", label), Some(Role::Muted));
            }
        }
    }

    fn start(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Heading(level, _, _) => {
                self.ensure_blank_line();
                self.roles.push(Role::Header);
                let marker = format!("{} ", "#".repeat(heading_depth(level)));
                self.write(&marker, Some(Role::Header));
            }
            Tag::Paragraph => {}
            Tag::BlockQuote => {
                self.ensure_line_start();
                self.quote_depth += 1;
                self.roles.push(Role::Blockquote);
            }
            Tag::CodeBlock(kind) => {
                self.ensure_blank_line();
                if let CodeBlockKind::Fenced(lang) = kind
                    && !lang.is_empty()
                {
                    self.write(&format!("    [{}]", lang), Some(Role::Muted));
                    self.newline();
                }
                self.in_code_block = true;
            }
            Tag::List(start) => {
                self.ensure_line_start();
                self.lists.push(start);
            }
            Tag::Item => {
                self.ensure_line_start();
                let indent = "  ".repeat(self.lists.len().saturating_sub(1));
                let bullet = match self.lists.last_mut() {
                    Some(Some(n)) => {
                        let bullet = format!("{}. ", n);
                        *n += 1;
                        bullet
                    }
                    _ => "• ".to_string(),
                };
                self.write_raw(&indent);
                self.write(&bullet, Some(Role::Muted));
            }
            Tag::Emphasis => self.roles.push(Role::Italic),
            Tag::Strong => self.roles.push(Role::Bold),
            Tag::Strikethrough => self.roles.push(Role::Muted),
            Tag::Link(..) => self.roles.push(Role::Link),
            Tag::Image(..) => {
                self.write("[image: ", Some(Role::Muted));
            }
            Tag::Table(_) | Tag::TableHead | Tag::TableRow => self.ensure_line_start(),
            Tag::TableCell => {
                if !self.at_line_start {
                    self.write(" | ", Some(Role::Muted));
                }
            }
            Tag::FootnoteDefinition(label) => {
                self.ensure_line_start();
                self.write(&format!("[^{}]: ", label), Some(Role::Muted));
            }
        }
    }

    fn end(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Heading(..) => {
                self.roles.pop();
                self.newline();
                self.newline();
            }
            Tag::Paragraph => {
                self.newline();
                if self.lists.is_empty() {
                    self.newline();
                }
            }
            Tag::BlockQuote => {
                self.roles.pop();
                self.quote_depth = self.quote_depth.saturating_sub(1);
            }
            Tag::CodeBlock(_) => {
                self.in_code_block = false;
                self.ensure_line_start();
                self.newline();
            }
            Tag::List(_) => {
                self.lists.pop();
                if self.lists.is_empty() {
                    self.ensure_blank_line();
                }
            }
            Tag::Item => self.ensure_line_start(),
            Tag::Emphasis | Tag::Strong | Tag::Strikethrough => {
                self.roles.pop();
            }
            Tag::Link(_, url, _) => {
                self.roles.pop();
                if !url.is_empty() {
                    self.write(&format!(" ({})", url), Some(Role::Muted));
                }
            }
            Tag::Image(_, url, _) => {
                self.write(&format!("{}]", url), Some(Role::Muted));
            }
            Tag::TableHead | Tag::TableRow => self.newline(),
            Tag::Table(_) => self.ensure_blank_line(),
            Tag::TableCell | Tag::FootnoteDefinition(_) => {}
        }
    }

    /// Writes the pending text run, painting wiki-links separately.
    fn flush_pending(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        let text = std::mem::take(&mut self.pending);
        let role = self.roles.last().copied();

        let mut last = 0;
        for span in link_spans(&text) {
            self.write(&text[last..span.start], role);
            self.write(&text[span.clone()], Some(Role::Link));
            last = span.end;
        }
        self.write(&text[last..], role);
    }

    /// Writes text in a role, adding block quote prefixes at line starts.
    fn write(&mut self, text: &str, role: Option<Role>) {
        for (i, line) in text.split('\n').enumerate() {
            if i > 0 {
                self.newline();
            }
            if line.is_empty() {
                continue;
            }
            self.quote_prefix();
            match role {
                Some(role) => {
                    let painted = self.theme.paint(line, role);
                    self.out.push_str(&painted);
                }
                None => self.out.push_str(line),
            }
            self.at_line_start = false;
        }
    }

    fn write_raw(&mut self, text: &str) {
        self.write(text, None);
    }

    fn quote_prefix(&mut self) {
        if self.at_line_start && self.quote_depth > 0 {
            let bar = "│ ".repeat(self.quote_depth);
            let painted = self.theme.paint(&bar, Role::Blockquote);
            self.out.push_str(&painted);
        }
    }

    fn newline(&mut self) {
        self.out.push('\n');
        self.at_line_start = true;
    }

    fn ensure_line_start(&mut self) {
        if !self.at_line_start {
            self.newline();
        }
    }

    fn ensure_blank_line(&mut self) {
        self.ensure_line_start();
        if !self.out.is_empty() && !self.out.ends_with("\n\n") {
            self.newline();
        }
    }

    fn finish(mut self) -> String {
        self.flush_pending();
        let trimmed = self.out.trim_end();
        if trimmed.is_empty() {
            String::new()
        } else {
            format!("{}\n", trimmed)
        }
    }
}

fn heading_depth(level: HeadingLevel) -> usize {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}
