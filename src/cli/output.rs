//! Output format types for CLI commands.

use clap::ValueEnum;
use serde::Serialize;

use crate::domain::{OutlineEntry, Position};

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for programmatic consumption
    Json,
}

/// Wrapper for serializable command output.
#[derive(Debug, Serialize)]
pub struct Output<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> Output<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }

    /// Renders the wrapper as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Result of resolving (and possibly applying) an insertion.
#[derive(Debug, Serialize)]
pub struct InsertReport {
    pub insert_line: usize,
    pub at_document_top: bool,
    pub cursor: Position,
    pub written: bool,
}

/// Where the cursor lands for a selected outline entry.
#[derive(Debug, Serialize)]
pub struct GotoReport<'a> {
    pub entry: &'a OutlineEntry,
    pub position: Position,
}
