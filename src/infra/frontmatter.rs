//! Frontmatter boundary detection.
//!
//! Only the delimiters are located; the metadata between them is never
//! interpreted.

/// The delimiter line that opens and closes a frontmatter block.
pub const DELIMITER: &str = "---";

/// Location of a frontmatter block at the top of a document.
///
/// # Format
/// ```text
/// ---
/// title: Note Title
/// ---
/// Body content here...
/// ```
///
/// Both delimiters must be exactly `---` with nothing else on the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frontmatter {
    end_line: usize,
}

impl Frontmatter {
    /// Detects a frontmatter block in already-split lines.
    ///
    /// Returns `None` when line 0 is not exactly `---` or when no closing
    /// `---` follows it. A lone opening delimiter is treated as a plain
    /// divider, not as unterminated frontmatter.
    pub fn detect(lines: &[&str]) -> Option<Self> {
        if lines.first() != Some(&DELIMITER) {
            return None;
        }

        lines
            .iter()
            .skip(1)
            .position(|line| *line == DELIMITER)
            .map(|offset| Self {
                end_line: offset + 1,
            })
    }

    /// Returns the index of the closing delimiter line.
    pub fn end_line(&self) -> usize {
        self.end_line
    }

    /// Returns the first line after the block.
    pub fn body_start_line(&self) -> usize {
        self.end_line + 1
    }
}
