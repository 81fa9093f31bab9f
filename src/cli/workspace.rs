//! Everything a command needs: the store, the config and the active theme.

use anyhow::{Result, bail};

use super::config::Config;
use crate::render::Theme;
use crate::store::NoteStore;

/// The note store plus user settings, shared by CLI handlers and the shell.
///
/// Settings changed through a workspace are saved to the config file and
/// take effect immediately.
#[derive(Debug)]
pub struct Workspace {
    store: NoteStore,
    config: Config,
    theme: Theme,
    styled: bool,
}

impl Workspace {
    /// Builds a workspace, resolving the configured theme.
    ///
    /// `styled` controls whether output carries ANSI colors.
    pub fn new(store: NoteStore, config: Config, styled: bool) -> Result<Self> {
        let theme = Theme::named(config.theme_name(), styled)?;
        Ok(Self {
            store,
            config,
            theme,
            styled,
        })
    }

    pub fn store(&self) -> &NoteStore {
        &self.store
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Switches theme and saves it.
    ///
    /// # Errors
    ///
    /// Fails for unknown theme names, leaving the current theme in place.
    pub fn set_theme(&mut self, name: &str) -> Result<()> {
        let theme = Theme::named(name, self.styled)?;
        self.config.set_theme(name)?;
        self.theme = theme;
        Ok(())
    }

    /// Switches editor and saves it.
    ///
    /// # Errors
    ///
    /// Fails if the editor's program cannot be found on `PATH`.
    pub fn set_editor(&mut self, editor: &str) -> Result<()> {
        let Some(program) = editor.split_whitespace().next() else {
            bail!("editor command is empty");
        };
        if which::which(program).is_err() {
            bail!("editor '{}' not found in PATH", program);
        }
        self.config.set_editor(editor)
    }

    pub fn set_user_name(&mut self, name: &str) -> Result<()> {
        let name = name.trim();
        if name.is_empty() {
            bail!("user name cannot be empty");
        }
        self.config.set_user_name(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn workspace(temp: &TempDir) -> Workspace {
        let store = NoteStore::open(temp.path().join("notes")).unwrap();
        let config = Config::load_from(&temp.path().join("config.toml")).unwrap();
        Workspace::new(store, config, false).unwrap()
    }

    #[test]
    fn starts_with_configured_theme() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("config.toml"), "theme = \"nord\"\n").unwrap();
        let ws = workspace(&temp);
        assert_eq!(ws.theme().name(), "nord");
    }

    #[test]
    fn set_theme_updates_and_saves() {
        let temp = TempDir::new().unwrap();
        let mut ws = workspace(&temp);
        ws.set_theme("dark").unwrap();
        assert_eq!(ws.theme().name(), "dark");

        let saved = Config::load_from(&temp.path().join("config.toml")).unwrap();
        assert_eq!(saved.theme.as_deref(), Some("dark"));
    }

    #[test]
    fn unknown_theme_keeps_current() {
        let temp = TempDir::new().unwrap();
        let mut ws = workspace(&temp);
        assert!(ws.set_theme("solarized").is_err());
        assert_eq!(ws.theme().name(), "default");
        assert!(!temp.path().join("config.toml").exists());
    }

    #[test]
    fn missing_editor_is_rejected() {
        let temp = TempDir::new().unwrap();
        let mut ws = workspace(&temp);
        let err = ws.set_editor("no-such-editor-xyz").unwrap_err();
        assert!(err.to_string().contains("not found in PATH"));
        assert!(ws.config().editor.is_none());
    }

    #[test]
    fn blank_user_name_is_rejected() {
        let temp = TempDir::new().unwrap();
        let mut ws = workspace(&temp);
        assert!(ws.set_user_name("   ").is_err());
        ws.set_user_name(" Ada ").unwrap();
        assert_eq!(ws.config().user_name.as_deref(), Some("Ada"));
    }
}
