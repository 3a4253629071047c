//! Where an "add section" command puts its divider.
//!
//! The divider goes right below the nearest heading above the cursor, or
//! right below the frontmatter, or at the very top of the document.

use serde::Serialize;
use std::borrow::Cow;
use tracing::debug;

use super::heading::starts_with_heading_marker;
use super::navigation::Position;
use crate::infra::{Frontmatter, line_start_offset, split_lines};

/// Block inserted when the divider lands on line 0.
pub const TOP_TEMPLATE: &str = "\n\n---\n\n";

/// Block inserted anywhere below line 0.
pub const BODY_TEMPLATE: &str = "\n\n\n---\n";

/// The resolved line for a new divider block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InsertionPoint {
    pub insert_line: usize,
    pub at_document_top: bool,
}

impl InsertionPoint {
    fn at(insert_line: usize) -> Self {
        Self {
            insert_line,
            at_document_top: insert_line == 0,
        }
    }

    /// Returns the splice that realises this insertion point.
    pub fn edit(&self) -> SectionEdit {
        if self.at_document_top {
            SectionEdit {
                text: TOP_TEMPLATE,
                at: Position::new(0, 0),
                cursor: Position::new(0, 0),
            }
        } else {
            SectionEdit {
                text: BODY_TEMPLATE,
                at: Position::new(self.insert_line, 0),
                cursor: Position::new(self.insert_line + 1, 0),
            }
        }
    }
}

/// A literal text insertion plus the cursor position that follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SectionEdit {
    pub text: &'static str,
    pub at: Position,
    pub cursor: Position,
}

impl SectionEdit {
    /// Splices the block into `document` at the start of the target line.
    ///
    /// A target line past the end of the document is clipped to the end of
    /// the text. A document with CRLF line endings gets the block with CRLF
    /// endings too.
    pub fn apply(&self, document: &str) -> String {
        let offset = line_start_offset(document, self.at.line);
        let block = self.block_for(document);
        let mut out = String::with_capacity(document.len() + block.len());
        out.push_str(&document[..offset]);
        out.push_str(&block);
        out.push_str(&document[offset..]);
        out
    }

    fn block_for(&self, document: &str) -> Cow<'static, str> {
        if document.contains("\r\n") {
            Cow::Owned(self.text.replace('\n', "\r\n"))
        } else {
            Cow::Borrowed(self.text)
        }
    }
}

/// Resolves the line where a divider block should be inserted.
///
/// Without frontmatter the default is line 0; with frontmatter it is the
/// line after the closing delimiter. When `respect_headings` is set, the
/// nearest heading strictly above `cursor_line` moves the point to the line
/// below that heading. The search never falls back past the frontmatter.
///
/// A cursor past the end of the document is treated as sitting on the last
/// line plus one.
pub fn resolve(text: &str, cursor_line: usize, respect_headings: bool) -> InsertionPoint {
    let lines = split_lines(text);
    let frontmatter = Frontmatter::detect(&lines);
    let mut insert_line = frontmatter.map_or(0, |fm| fm.body_start_line());

    if respect_headings {
        let scan_end = cursor_line.min(lines.len());
        if let Some(i) = lines[..scan_end]
            .iter()
            .rposition(|line| starts_with_heading_marker(line))
        {
            insert_line = i + 1;
        }
    }

    let point = InsertionPoint::at(insert_line);
    debug!(
        cursor_line,
        respect_headings,
        frontmatter_end = ?frontmatter.map(|fm| fm.end_line()),
        insert_line = point.insert_line,
        "resolved insertion point"
    );
    point
}
