//! Line splitting, frontmatter boundaries, document I/O

mod document;
mod frontmatter;
mod fs;

pub use document::{line_start_offset, split_lines};
pub use frontmatter::{DELIMITER, Frontmatter};
pub use fs::{
    FsError, SourceDocument, decode_document, is_stdin, read_document, write_document,
};
