//! Isolated test environment with temp directory.

use super::DivlineCommand;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment with a temporary working directory.
///
/// Creates a temp directory that is automatically cleaned up on drop.
/// Every command built from the environment points `--config` at a file
/// inside it, so the user's real config never leaks into a test.
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    _temp_dir: TempDir,
    /// Path to the working directory
    root: PathBuf,
}

impl TestEnv {
    /// Creates a new isolated test environment with an empty config file.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root = temp_dir.path().to_path_buf();
        let env = Self {
            _temp_dir: temp_dir,
            root,
        };
        env.write_config("");
        env
    }

    /// Returns the path to the working directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the path of the config file used by `cmd()`.
    pub fn config_path(&self) -> PathBuf {
        self.root.join("config.toml")
    }

    /// Writes the config file used by `cmd()`.
    pub fn write_config(&self, toml: &str) {
        std::fs::write(self.config_path(), toml).expect("Failed to write config");
    }

    /// Writes a markdown document and returns its path.
    pub fn write_doc(&self, name: &str, content: &str) -> PathBuf {
        let path = self.root.join(name);
        std::fs::write(&path, content).expect("Failed to write document");
        path
    }

    /// Reads a document back from the environment.
    pub fn read_doc(&self, path: &Path) -> String {
        std::fs::read_to_string(path).expect("Failed to read document")
    }

    /// Creates a DivlineCommand configured for this test environment.
    pub fn cmd(&self) -> DivlineCommand {
        DivlineCommand::new().config(&self.config_path())
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
