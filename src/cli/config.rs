//! Configuration file support.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::domain::MaxContentLength;

/// Application configuration loaded from config file.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Insert new sections below the nearest heading above the cursor
    pub respect_headings: Option<bool>,

    /// Characters of divider content shown in the outline
    pub max_content_length: Option<i64>,
}

impl Config {
    /// Load configuration from `path`, or from the default location.
    ///
    /// A missing file at the default location yields the default config; a
    /// missing file named by `path` is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => Self::load_or_default(&Self::config_path()),
        }
    }

    fn load_or_default(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load_from(config_path)
    }

    fn load_from(config_path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(config_path)
            .with_context(|| format!("failed to read config file: {}", config_path.display()))?;

        Self::from_toml(&contents)
            .with_context(|| format!("failed to parse config file: {}", config_path.display()))
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Returns the path to the config file.
    ///
    /// Default: `~/.config/divline/config.toml`
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("divline")
            .join("config.toml")
    }

    /// Resolve whether insertion respects headings.
    ///
    /// Precedence order:
    /// 1. CLI `--ignore-headings` flag
    /// 2. Config file `respect_headings` setting
    /// 3. `true`
    pub fn respect_headings(&self, ignore_headings: bool) -> bool {
        !ignore_headings && self.respect_headings.unwrap_or(true)
    }

    /// Resolve the divider content limit, with CLI argument taking precedence.
    ///
    /// Precedence order:
    /// 1. CLI `--max-content-length` argument
    /// 2. Config file `max_content_length` setting (non-positive values fall
    ///    back to the default)
    /// 3. 10
    pub fn max_content_length(&self, cli_value: Option<MaxContentLength>) -> MaxContentLength {
        if let Some(value) = cli_value {
            return value;
        }

        match self.max_content_length {
            Some(raw) if raw <= 0 => {
                warn!(
                    value = raw,
                    default = MaxContentLength::DEFAULT,
                    "max_content_length must be positive, using default"
                );
                MaxContentLength::default()
            }
            Some(raw) => MaxContentLength::from_setting(raw),
            None => MaxContentLength::default(),
        }
    }
}
