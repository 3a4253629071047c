//! Divider lines as outline pseudo-headings.
//!
//! A divider is a line that reads `---` once trimmed. Its outline title is
//! the first content line below it, and its level sits one below the nearest
//! heading above it. The two scans are independent and operate on the same
//! line slice.

use serde::Serialize;

use super::content_length::MaxContentLength;
use super::heading::{heading_level, starts_with_heading_marker};
use crate::infra::DELIMITER;

/// A divider found while scanning a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DividerEntry {
    /// Zero-based line index of the `---` line.
    pub line: usize,
    /// Nearest preceding heading level plus one, or 1.
    pub level: usize,
    /// Captured content from the line below, truncated.
    pub content: String,
    /// Whether any content was captured. Only valid dividers appear in the
    /// outline.
    pub content_valid: bool,
}

impl DividerEntry {
    /// Scans around the divider on line `index` and builds its entry.
    ///
    /// Walks backward for the level; use [`DividerEntry::scan_under`] when
    /// the nearest heading level is already known.
    pub fn scan(lines: &[&str], index: usize, max_len: MaxContentLength) -> Self {
        Self::scan_under(lines, index, nearest_heading_level(lines, index), max_len)
    }

    /// Builds the entry for the divider on line `index` when the level of
    /// the nearest heading above it is `parent_level`.
    pub fn scan_under(
        lines: &[&str],
        index: usize,
        parent_level: Option<usize>,
        max_len: MaxContentLength,
    ) -> Self {
        let content = extract_content(lines, index, max_len);
        Self {
            line: index,
            level: parent_level.map_or(1, |level| level + 1),
            content_valid: !content.trim().is_empty(),
            content,
        }
    }

    /// Returns true if the divider captured any content.
    pub fn is_valid(&self) -> bool {
        self.content_valid
    }
}

/// Returns true if `line` is a divider once trimmed.
pub fn is_divider(line: &str) -> bool {
    line.trim() == DELIMITER
}

/// Returns the index of the line a divider's content is taken from.
///
/// Scans forward from the line after `index`, skipping blank lines. Stops
/// with `None` at another divider, at a heading line, or at the end.
pub fn content_line(lines: &[&str], index: usize) -> Option<usize> {
    for (i, raw) in lines.iter().enumerate().skip(index + 1) {
        let line = raw.trim();

        if line.is_empty() {
            continue;
        }

        if line == DELIMITER || starts_with_heading_marker(line) {
            return None;
        }

        return Some(i);
    }

    None
}

/// Extracts the trimmed, truncated content that titles the divider on line
/// `index`. Empty when there is no content line.
pub fn extract_content(lines: &[&str], index: usize, max_len: MaxContentLength) -> String {
    content_line(lines, index)
        .map(|i| max_len.truncate(lines[i].trim()))
        .unwrap_or_default()
}

/// Computes the level of the divider on line `index`.
///
/// Walks backward to the nearest heading, skipping blank lines and other
/// dividers, and returns its level plus one. Returns 1 when no heading
/// precedes the divider.
pub fn divider_level(lines: &[&str], index: usize) -> usize {
    nearest_heading_level(lines, index).map_or(1, |level| level + 1)
}

fn nearest_heading_level(lines: &[&str], index: usize) -> Option<usize> {
    lines[..index.min(lines.len())]
        .iter()
        .rev()
        .map(|raw| raw.trim())
        .filter(|line| !line.is_empty() && *line != DELIMITER)
        .find_map(heading_level)
}
