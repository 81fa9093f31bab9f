//! Isolated test environment with temp directory.

use super::{AnadaCommand, TestNote};
use anada::domain::note_filename;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};
use tempfile::TempDir;

/// Isolated test environment with a temporary notes directory and config
/// file.
///
/// Creates a temp directory that is automatically cleaned up on drop.
/// Commands built from it never touch the real user config.
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    _temp_dir: TempDir,
    /// Path to the notes directory
    notes_dir: PathBuf,
    /// Path to the config file
    config_path: PathBuf,
}

impl TestEnv {
    /// Creates a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let notes_dir = temp_dir.path().join("notes");
        std::fs::create_dir_all(&notes_dir).expect("Failed to create notes directory");
        let config_path = temp_dir.path().join("config.toml");
        Self {
            _temp_dir: temp_dir,
            notes_dir,
            config_path,
        }
    }

    /// Returns the path to the notes directory.
    pub fn notes_dir(&self) -> &Path {
        &self.notes_dir
    }

    /// Returns the path to the config file.
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Returns the file path a note title maps to.
    pub fn note_path(&self, title: &str) -> PathBuf {
        self.notes_dir.join(note_filename(title))
    }

    /// Adds a test note to the environment and returns its path.
    pub fn add_note(&self, test_note: &TestNote) -> PathBuf {
        let path = self.note_path(test_note.title());
        std::fs::write(&path, test_note.content()).expect("Failed to write test note");

        if let Some(secs) = test_note.modified_secs() {
            let file = File::options()
                .write(true)
                .open(&path)
                .expect("Failed to open test note");
            file.set_modified(SystemTime::UNIX_EPOCH + Duration::from_secs(secs))
                .expect("Failed to set modified time");
        }
        path
    }

    /// Reads a note's file content, if it exists.
    pub fn read_note(&self, title: &str) -> Option<String> {
        std::fs::read_to_string(self.note_path(title)).ok()
    }

    /// Writes the config file.
    pub fn write_config(&self, content: &str) {
        std::fs::write(&self.config_path, content).expect("Failed to write config");
    }

    /// Reads the config file, or an empty string if it was never written.
    pub fn read_config(&self) -> String {
        std::fs::read_to_string(&self.config_path).unwrap_or_default()
    }

    /// Creates an AnadaCommand configured for this test environment.
    pub fn cmd(&self) -> AnadaCommand {
        AnadaCommand::new()
            .dir(&self.notes_dir)
            .config(&self.config_path)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===========================================
    // TestEnv Foundation
    // ===========================================

    #[test]
    fn test_env_creates_notes_directory() {
        let env = TestEnv::new();
        assert!(env.notes_dir().is_dir(), "notes directory should exist");
        assert!(!env.config_path().exists(), "config starts absent");
    }

    #[test]
    fn test_env_cleanup_on_drop() {
        let path = {
            let env = TestEnv::new();
            env.notes_dir().to_path_buf()
        };
        assert!(
            !path.exists(),
            "temp directory should be cleaned up on drop"
        );
    }

    #[test]
    fn test_env_provides_isolated_command() {
        let env = TestEnv::new();
        let cmd = env.cmd();
        let args = cmd.get_args();
        assert_eq!(args[0], "--dir");
        assert_eq!(args[1], env.notes_dir().to_string_lossy());
        assert_eq!(args[2], "--config");
        assert_eq!(args[3], env.config_path().to_string_lossy());
    }

    // ===========================================
    // TestEnv Note Addition
    // ===========================================

    #[test]
    fn test_env_add_note_uses_normalized_name() {
        let env = TestEnv::new();
        let path = env.add_note(&TestNote::new("Test Note"));

        assert!(path.is_file(), "note file should be created");
        assert!(path.ends_with("test_note.md"));
        assert!(env.read_note("Test Note").unwrap().contains("# Test Note"));
    }

    #[test]
    fn test_env_add_note_pins_modified_time() {
        let env = TestEnv::new();
        let path = env.add_note(&TestNote::new("Old").modified_at(1_000));

        let modified = std::fs::metadata(path).unwrap().modified().unwrap();
        assert_eq!(modified, SystemTime::UNIX_EPOCH + Duration::from_secs(1_000));
    }
}
