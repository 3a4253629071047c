//! Core logic: headings, dividers, outlines, insertion points, navigation

mod content_length;
mod divider;
mod heading;
mod insertion;
mod navigation;
mod outline;

pub use content_length::{InvalidContentLength, MaxContentLength};
pub use divider::{DividerEntry, content_line, divider_level, extract_content, is_divider};
pub use heading::{HeadingEntry, heading_level, heading_text_column, starts_with_heading_marker};
pub use insertion::{BODY_TEMPLATE, InsertionPoint, SectionEdit, TOP_TEMPLATE, resolve};
pub use navigation::{Position, clamp, navigation_target};
pub use outline::{EntryId, OutlineEntry, OutlineKind, OutlineParser, OutlineService, ParsedContent};
