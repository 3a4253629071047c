//! Command handlers for the CLI.

mod completions;
mod goto;
mod insert;
mod outline;


use anyhow::{Context, Result, bail};
use std::path::Path;

use crate::infra::{SourceDocument, read_document};

// Re-export public items
pub use completions::handle_completions;
pub use goto::{GotoTarget, find_goto_target, handle_goto};
pub use insert::{InsertPlan, handle_insert, plan_insert};
pub use outline::{handle_outline, render_outline};

// ===========================================
// Shared Utilities
// ===========================================

/// Converts a 1-based line number from the command line to a line index.
pub(crate) fn line_index(line: usize) -> Result<usize> {
    match line.checked_sub(1) {
        Some(index) => Ok(index),
        None => bail!("line numbers start at 1"),
    }
}

/// Reads the document named on the command line.
pub(crate) fn load_document(path: &Path) -> Result<SourceDocument> {
    read_document(path).with_context(|| format!("failed to read document: {}", path.display()))
}

/// Truncates a string to a maximum display width, adding ellipsis if needed.
pub(crate) fn truncate_str(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_width.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}
