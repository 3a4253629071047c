//! Cursor targets for outline navigation.

use serde::Serialize;
use std::fmt;
use tracing::{debug, warn};

use super::divider::content_line;
use super::heading::heading_text_column;
use super::outline::{OutlineEntry, OutlineKind};

/// A zero-based cursor location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Position {
    pub line: usize,
    #[serde(rename = "char")]
    pub ch: usize,
}

impl Position {
    pub fn new(line: usize, ch: usize) -> Self {
        Self { line, ch }
    }
}

impl fmt::Display for Position {
    /// Formats as 1-based `line:column`, the way editors report positions.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.ch + 1)
    }
}

/// Refines where the cursor should land when `entry` is selected.
///
/// Headings land just after the `# ` marker. Dividers land at the start of
/// the content line that titles them. If the document no longer matches the
/// entry, its own position is used.
pub fn navigation_target(lines: &[&str], entry: &OutlineEntry) -> Position {
    let fallback = Position::new(entry.line, entry.ch);

    let target = match entry.kind {
        OutlineKind::Heading => lines
            .get(entry.line)
            .and_then(|line| heading_text_column(line))
            .map(|ch| Position::new(entry.line, ch)),
        OutlineKind::Divider => {
            content_line(lines, entry.line).map(|line| Position::new(line, 0))
        }
    };

    target.unwrap_or(fallback)
}

/// Fits `position` into the document.
///
/// Returns `None` if the line doesn't exist. The column is clamped down to
/// the line length in characters.
pub fn clamp(lines: &[&str], position: Position) -> Option<Position> {
    let Some(line) = lines.get(position.line) else {
        warn!(
            line = position.line,
            line_count = lines.len(),
            "navigation target is outside the document"
        );
        return None;
    };

    let len = line.chars().count();
    if position.ch > len {
        debug!(requested = position.ch, clamped = len, "column clamped to line end");
        return Some(Position::new(position.line, len));
    }

    Some(position)
}
