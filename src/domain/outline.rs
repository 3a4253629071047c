//! Document-to-outline parsing.
//!
//! One forward pass collects headings and dividers; assembly then drops
//! dividers without content, orders everything by line, and stamps ids.

use serde::Serialize;
use std::fmt;
use tracing::{debug, trace};
use ulid::Ulid;

use super::content_length::MaxContentLength;
use super::divider::{DividerEntry, is_divider};
use super::heading::{HeadingEntry, heading_level};
use crate::infra::split_lines;

/// The kind of an outline entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutlineKind {
    Heading,
    Divider,
}

impl OutlineKind {
    /// Returns the lowercase name used in ids and JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            OutlineKind::Heading => "heading",
            OutlineKind::Divider => "divider",
        }
    }
}

impl fmt::Display for OutlineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifier of an outline entry, unique within one parse.
///
/// Formatted as `{kind}-{line}-{generation}`. The generation is minted once
/// per parse, so ids from different parses never compare equal.
#[derive(Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    fn new(kind: OutlineKind, line: usize, generation: Ulid) -> Self {
        Self(format!("{}-{}-{}", kind, line, generation))
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EntryId(\"{}\")", self.0)
    }
}

/// A single navigable item in the outline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutlineEntry {
    pub id: EntryId,
    pub kind: OutlineKind,
    /// Heading level, or the computed divider level. Always at least 1.
    pub level: usize,
    /// Heading text, or the captured divider content.
    pub title: String,
    /// Zero-based line index.
    pub line: usize,
    /// Zero-based column; always 0 for parsed entries.
    #[serde(rename = "char")]
    pub ch: usize,
}

impl OutlineEntry {
    /// Returns true for heading entries.
    pub fn is_heading(&self) -> bool {
        self.kind == OutlineKind::Heading
    }

    /// Returns true for divider entries.
    pub fn is_divider(&self) -> bool {
        self.kind == OutlineKind::Divider
    }
}

/// Raw scan results before assembly into outline entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedContent {
    pub headings: Vec<HeadingEntry>,
    /// Every divider line, in line order, including those without content.
    pub dividers: Vec<DividerEntry>,
}

impl ParsedContent {
    /// Merges headings and valid dividers into line-ordered outline entries.
    ///
    /// Every entry gets an id stamped with `generation`.
    pub fn into_outline(self, generation: Ulid) -> Vec<OutlineEntry> {
        let headings = self.headings.into_iter().map(|h| OutlineEntry {
            id: EntryId::new(OutlineKind::Heading, h.line, generation),
            kind: OutlineKind::Heading,
            level: h.level,
            title: h.title,
            line: h.line,
            ch: 0,
        });

        let dividers = self
            .dividers
            .into_iter()
            .filter(DividerEntry::is_valid)
            .map(|d| OutlineEntry {
                id: EntryId::new(OutlineKind::Divider, d.line, generation),
                kind: OutlineKind::Divider,
                level: d.level,
                title: d.content,
                line: d.line,
                ch: 0,
            });

        let mut entries: Vec<OutlineEntry> = headings.chain(dividers).collect();
        entries.sort_by_key(|e| e.line);
        entries
    }
}

/// Scans document text for headings and dividers.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutlineParser {
    max_content_length: MaxContentLength,
}

impl OutlineParser {
    /// Creates a parser that truncates divider content to `max_content_length`.
    pub fn new(max_content_length: MaxContentLength) -> Self {
        Self { max_content_length }
    }

    /// Returns the configured content limit.
    pub fn max_content_length(&self) -> MaxContentLength {
        self.max_content_length
    }

    /// Scans `text` once, line by line.
    ///
    /// A line that is a heading is never also considered as a divider. The
    /// level of the nearest heading seen so far is carried forward, so
    /// divider levels never need a backward walk.
    pub fn parse_content(&self, text: &str) -> ParsedContent {
        let lines = split_lines(text);
        let mut parsed = ParsedContent::default();
        let mut parent_level = None;

        for (i, line) in lines.iter().enumerate() {
            if let Some(heading) = HeadingEntry::parse(line, i) {
                parsed.headings.push(heading);
            } else if is_divider(line) {
                parsed.dividers.push(DividerEntry::scan_under(
                    &lines,
                    i,
                    parent_level,
                    self.max_content_length,
                ));
            }

            // Indented headings are not outlined but still set divider levels.
            if let Some(level) = heading_level(line.trim()) {
                parent_level = Some(level);
            }
        }

        parsed
    }

    /// Parses `text` into a line-ordered outline.
    pub fn parse(&self, text: &str) -> Vec<OutlineEntry> {
        self.parse_content(text).into_outline(Ulid::new())
    }
}

/// Holds the outline configuration and builds outlines on request.
///
/// The content limit can be changed between calls; each call uses the
/// limit current at that moment.
#[derive(Debug, Clone, Default)]
pub struct OutlineService {
    parser: OutlineParser,
}

impl OutlineService {
    /// Creates a service with the given divider content limit.
    pub fn new(max_content_length: MaxContentLength) -> Self {
        Self {
            parser: OutlineParser::new(max_content_length),
        }
    }

    /// Returns the parser used for each outline.
    pub fn parser(&self) -> &OutlineParser {
        &self.parser
    }

    /// Replaces the divider content limit for subsequent outlines.
    pub fn set_max_content_length(&mut self, max_content_length: MaxContentLength) {
        debug!(max_content_length = %max_content_length, "updated outline config");
        self.parser = OutlineParser::new(max_content_length);
    }

    /// Builds the outline for `text`.
    ///
    /// Blank documents produce an empty outline.
    pub fn generate_outline(&self, text: &str) -> Vec<OutlineEntry> {
        if text.trim().is_empty() {
            debug!("document is blank, outline is empty");
            return Vec::new();
        }

        let outline = self.parser.parse(text);
        debug!(
            bytes = text.len(),
            entries = outline.len(),
            "generated outline"
        );
        for entry in &outline {
            trace!(
                kind = %entry.kind,
                level = entry.level,
                line = entry.line,
                title = %entry.title,
                "outline entry"
            );
        }

        outline
    }
}
