//! ATX heading recognition.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// A full ATX heading: 1-6 `#`, whitespace, then at least one character.
static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#{1,6})\s+(.+)$").expect("heading pattern is valid"));

/// The start of an ATX heading: 1-6 `#` followed by whitespace.
static HEADING_MARKER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#{1,6}\s").expect("heading marker pattern is valid"));

/// A heading found while scanning a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeadingEntry {
    /// Number of leading `#` characters (1-6).
    pub level: usize,
    /// Heading text after the marker, trimmed.
    pub title: String,
    /// Zero-based line index.
    pub line: usize,
}

impl HeadingEntry {
    /// Parses `text` as a heading on line `line`.
    ///
    /// Returns `None` for lines that are not full ATX headings, including
    /// `#` without a following space and runs of seven or more `#`.
    pub fn parse(text: &str, line: usize) -> Option<Self> {
        let caps = HEADING_RE.captures(text)?;
        Some(Self {
            level: caps[1].len(),
            title: caps[2].trim().to_string(),
            line,
        })
    }
}

/// Returns the heading level if `text` is a full ATX heading.
pub fn heading_level(text: &str) -> Option<usize> {
    HEADING_RE.captures(text).map(|caps| caps[1].len())
}

/// Returns true if `text` starts with a heading marker (`#` to `######`
/// followed by whitespace).
///
/// Looser than [`HeadingEntry::parse`]: the heading text may be absent.
pub fn starts_with_heading_marker(text: &str) -> bool {
    HEADING_MARKER_RE.is_match(text)
}

/// Returns the column where heading text begins: marker length plus one
/// separating space.
pub fn heading_text_column(text: &str) -> Option<usize> {
    HEADING_RE.captures(text).map(|caps| caps[1].len() + 1)
}
