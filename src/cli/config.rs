//! Configuration file support.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::render::{DEFAULT_THEME, Theme};

/// Application configuration loaded from config file.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Default notes directory
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,

    /// Editor command for editing notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub editor: Option<String>,

    /// Name of the color theme
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,

    /// Name shown in the shell greeting
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,

    /// File this config was loaded from and saves back to.
    #[serde(skip)]
    path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the default config file location.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from `path`, remembering it for [`Config::save`].
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        let mut config = if path.exists() {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config file: {}", path.display()))?;
            toml::from_str::<Self>(&contents)
                .with_context(|| format!("failed to parse config file: {}", path.display()))?
        } else {
            Self::default()
        };
        config.path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Returns the path to the config file.
    ///
    /// Default: `~/.config/anada/config.toml`
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("anada")
            .join("config.toml")
    }

    /// The file this config saves to.
    pub fn file_path(&self) -> PathBuf {
        self.path.clone().unwrap_or_else(Self::config_path)
    }

    /// Writes the config back to its file, creating the directory.
    pub fn save(&self) -> Result<()> {
        let path = self.file_path();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(self).context("failed to serialize config")?;
        std::fs::write(&path, contents)
            .with_context(|| format!("failed to write config file: {}", path.display()))
    }

    /// Resolve the notes directory, with CLI argument taking precedence.
    ///
    /// Precedence order:
    /// 1. CLI `--dir` argument
    /// 2. Config file `dir` setting
    /// 3. `~/.notes/notes`
    /// 4. `./notes` when there is no home directory
    pub fn notes_dir(&self, cli_dir: Option<&PathBuf>) -> PathBuf {
        cli_dir
            .cloned()
            .or_else(|| self.dir.clone())
            .or_else(|| dirs::home_dir().map(|home| home.join(".notes").join("notes")))
            .unwrap_or_else(|| PathBuf::from("notes"))
    }

    /// Resolve the editor command.
    ///
    /// Precedence order:
    /// 1. Config file `editor` setting
    /// 2. $EDITOR environment variable
    /// 3. $VISUAL environment variable
    /// 4. "vim" as fallback
    pub fn editor(&self) -> String {
        self.editor
            .clone()
            .or_else(|| std::env::var("EDITOR").ok())
            .or_else(|| std::env::var("VISUAL").ok())
            .unwrap_or_else(|| "vim".to_string())
    }

    /// The configured theme if it is a known one, else the default.
    pub fn theme_name(&self) -> &str {
        match self.theme.as_deref() {
            Some(name) if Theme::exists(name) => name,
            _ => DEFAULT_THEME,
        }
    }

    pub fn set_theme(&mut self, name: &str) -> Result<()> {
        self.theme = Some(name.to_string());
        self.save()
    }

    pub fn set_editor(&mut self, editor: &str) -> Result<()> {
        self.editor = Some(editor.to_string());
        self.save()
    }

    pub fn set_user_name(&mut self, name: &str) -> Result<()> {
        self.user_name = Some(name.to_string());
        self.save()
    }
}
