//! Fluent wrapper around assert_cmd::Command.

// Allow dead code since this is a test utility with methods for future tests
#![allow(dead_code)]

use assert_cmd::Command;
use serde::de::DeserializeOwned;
use std::path::Path;

/// Fluent wrapper around `assert_cmd::Command` for the `divline` binary.
///
/// Provides a builder-style API for constructing and executing CLI commands.
pub struct DivlineCommand {
    args: Vec<String>,
    stdin: Option<String>,
}

impl DivlineCommand {
    /// Creates a new command for the `divline` binary.
    pub fn new() -> Self {
        Self {
            args: Vec::new(),
            stdin: None,
        }
    }

    /// Sets the `--config` option to point at a config file.
    pub fn config(mut self, path: &Path) -> Self {
        self.args.push("--config".to_string());
        self.args.push(path.to_string_lossy().to_string());
        self
    }

    /// Adds arguments to the command.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.args
            .extend(args.into_iter().map(|s| s.as_ref().to_string()));
        self
    }

    /// Feeds `input` on stdin.
    pub fn stdin(mut self, input: &str) -> Self {
        self.stdin = Some(input.to_string());
        self
    }

    /// Runs the command and returns an Assert for making assertions.
    #[allow(deprecated)]
    pub fn assert(self) -> assert_cmd::assert::Assert {
        let mut cmd = Command::cargo_bin("divline").expect("Failed to find divline binary");
        cmd.args(&self.args);
        if let Some(input) = self.stdin {
            cmd.write_stdin(input);
        }
        cmd.assert()
    }

    /// Runs the command, expects success, and returns stdout as a string.
    pub fn output_success(self) -> String {
        let output = self.assert().success().get_output().stdout.clone();
        String::from_utf8(output).expect("Output was not valid UTF-8")
    }

    /// Runs the command, expects success, and parses stdout as JSON.
    pub fn output_json<T: DeserializeOwned>(self) -> T {
        let output = self.output_success();
        serde_json::from_str(&output).expect("Failed to parse output as JSON")
    }

    // ===========================================
    // Command Shortcuts
    // ===========================================

    /// Configures for the `outline` command on a file.
    pub fn outline(self, file: &Path) -> Self {
        self.args(["outline".to_string(), file.to_string_lossy().to_string()])
    }

    /// Configures for the `insert` command on a file at a 1-based line.
    pub fn insert(self, file: &Path, line: usize) -> Self {
        self.args([
            "insert".to_string(),
            file.to_string_lossy().to_string(),
            "--line".to_string(),
            line.to_string(),
        ])
    }

    /// Configures for the `goto` command on a file at a 1-based line.
    pub fn goto(self, file: &Path, line: usize) -> Self {
        self.args([
            "goto".to_string(),
            file.to_string_lossy().to_string(),
            "--line".to_string(),
            line.to_string(),
        ])
    }

    // ===========================================
    // Options
    // ===========================================

    /// Adds `--format json` to the command.
    pub fn format_json(self) -> Self {
        self.args(["--format", "json"])
    }

    /// Adds `--max-content-length` to the command.
    pub fn max_content_length(self, n: usize) -> Self {
        self.args(["--max-content-length".to_string(), n.to_string()])
    }

    /// Adds `--write` to the command.
    pub fn write(self) -> Self {
        self.args(["--write"])
    }

    /// Adds `--ignore-headings` to the command.
    pub fn ignore_headings(self) -> Self {
        self.args(["--ignore-headings"])
    }
}

impl Default for DivlineCommand {
    fn default() -> Self {
        Self::new()
    }
}
