//! Terminal color themes.

use anyhow::{Result, bail};
use crossterm::style::{Color, Stylize};

/// Names of the built-in themes, in display order.
pub const THEME_NAMES: &[&str] = &["default", "dark", "nord"];

/// Theme used when none is configured.
pub const DEFAULT_THEME: &str = "default";

/// A foreground color, optionally dimmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shade {
    pub color: Color,
    pub dim: bool,
}

impl Shade {
    const fn new(color: Color) -> Self {
        Self { color, dim: false }
    }

    const fn dimmed(color: Color) -> Self {
        Self { color, dim: true }
    }
}

/// Colors for each kind of Markdown element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub header: Shade,
    pub bold: Shade,
    pub link: Shade,
    pub code: Shade,
    pub italic: Shade,
    pub blockquote: Shade,
}

const PALETTE_DEFAULT: Palette = Palette {
    header: Shade::new(Color::DarkCyan),
    bold: Shade::new(Color::White),
    link: Shade::new(Color::DarkBlue),
    code: Shade::new(Color::DarkYellow),
    italic: Shade::new(Color::Grey),
    blockquote: Shade::dimmed(Color::Grey),
};

const PALETTE_DARK: Palette = Palette {
    header: Shade::new(Color::Cyan),
    bold: Shade::new(Color::Grey),
    link: Shade::new(Color::Blue),
    code: Shade::new(Color::Yellow),
    italic: Shade::dimmed(Color::Grey),
    blockquote: Shade::dimmed(Color::Grey),
};

const PALETTE_NORD: Palette = Palette {
    header: Shade::new(Color::Rgb { r: 0x88, g: 0xC0, b: 0xD0 }),
    bold: Shade::new(Color::Rgb { r: 0xEC, g: 0xEF, b: 0xF4 }),
    link: Shade::new(Color::Rgb { r: 0x5E, g: 0x81, b: 0xAC }),
    code: Shade::new(Color::Rgb { r: 0xEB, g: 0xCB, b: 0x8B }),
    italic: Shade::new(Color::Rgb { r: 0xD8, g: 0xDE, b: 0xE9 }),
    blockquote: Shade::new(Color::Rgb { r: 0x4C, g: 0x56, b: 0x6A }),
};

/// What a piece of text is, for choosing its style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Header,
    Bold,
    Link,
    Code,
    Italic,
    Blockquote,
    /// Secondary text such as hints and paths.
    Muted,
    Success,
    Warning,
    Error,
    /// Command names and other highlighted words in messages.
    Accent,
    /// Search terms inside previews.
    Highlight,
}

/// A named palette plus whether to emit ANSI styling at all.
///
/// Styling is switched off when output is not a terminal, so piped output
/// stays plain text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    name: String,
    palette: Palette,
    styled: bool,
}

impl Theme {
    /// Looks up a built-in theme by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the theme name is unknown.
    pub fn named(name: &str, styled: bool) -> Result<Self> {
        let palette = match name {
            "default" => PALETTE_DEFAULT,
            "dark" => PALETTE_DARK,
            "nord" => PALETTE_NORD,
            _ => bail!(
                "unknown theme: '{}' (available: {})",
                name,
                THEME_NAMES.join(", ")
            ),
        };
        Ok(Self {
            name: name.to_string(),
            palette,
            styled,
        })
    }

    /// The unstyled default theme.
    pub fn plain() -> Self {
        Self {
            name: DEFAULT_THEME.to_string(),
            palette: PALETTE_DEFAULT,
            styled: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn is_styled(&self) -> bool {
        self.styled
    }

    /// Returns true if `name` is a built-in theme.
    pub fn exists(name: &str) -> bool {
        THEME_NAMES.contains(&name)
    }

    /// Wraps `text` in the ANSI styling for `role`.
    pub fn paint(&self, text: &str, role: Role) -> String {
        if !self.styled {
            return text.to_string();
        }

        let styled = match role {
            Role::Header => shade(text, self.palette.header).bold(),
            Role::Bold => shade(text, self.palette.bold).bold(),
            Role::Link => shade(text, self.palette.link).underlined(),
            Role::Code => shade(text, self.palette.code),
            Role::Italic => shade(text, self.palette.italic).italic(),
            Role::Blockquote => shade(text, self.palette.blockquote),
            Role::Muted => text.to_string().dim(),
            Role::Success => text.to_string().with(Color::DarkGreen),
            Role::Warning => text.to_string().with(Color::DarkYellow),
            Role::Error => text.to_string().with(Color::DarkRed),
            Role::Accent => text.to_string().with(Color::DarkCyan).bold(),
            Role::Highlight => text.to_string().with(Color::Yellow).bold(),
        };
        styled.to_string()
    }
}

fn shade(text: &str, shade: Shade) -> crossterm::style::StyledContent<String> {
    let content = text.to_string().with(shade.color);
    if shade.dim { content.dim() } else { content }
}
