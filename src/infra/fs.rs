//! Document I/O with encoding checks and atomic writes.

use std::io::{self, Read, Write as IoWrite};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;

/// Path argument that stands for standard input.
const STDIN_PATH: &str = "-";

const UTF8_BOM: char = '\u{FEFF}';

/// Decoded document text, remembering whether the source carried a UTF-8
/// byte order mark so a write can restore it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    /// Document text without the byte order mark.
    pub text: String,
    /// Whether the source started with a UTF-8 byte order mark.
    pub bom: bool,
}

impl SourceDocument {
    /// Returns a document with new text and the same byte order mark.
    pub fn with_text(&self, text: String) -> Self {
        Self {
            text,
            bom: self.bom,
        }
    }

    /// Returns the bytes to store on disk.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = String::with_capacity(self.text.len() + UTF8_BOM.len_utf8());
        if self.bom {
            out.push(UTF8_BOM);
        }
        out.push_str(&self.text);
        out.into_bytes()
    }
}

/// Errors during file system operations on documents.
#[derive(Debug, Error)]
pub enum FsError {
    #[error("document not found: {path}")]
    NotFound { path: PathBuf },

    #[error("permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    #[error("I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("atomic write failed for {path}: {source}")]
    AtomicWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("parent directory does not exist: {path}")]
    ParentNotFound { path: PathBuf },

    #[error("invalid encoding in {path}: {encoding}")]
    InvalidEncoding { path: PathBuf, encoding: String },
}

impl FsError {
    fn from_io(path: &Path, error: io::Error) -> Self {
        match error.kind() {
            io::ErrorKind::NotFound => FsError::NotFound { path: path.into() },
            io::ErrorKind::PermissionDenied => FsError::PermissionDenied { path: path.into() },
            _ => FsError::Io {
                path: path.into(),
                source: error,
            },
        }
    }
}

/// Returns true when `path` names standard input.
pub fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == STDIN_PATH
}

/// Reads a document from a file path, or from stdin when the path is `-`.
///
/// # Errors
///
/// Returns `FsError::NotFound` if the file doesn't exist.
/// Returns `FsError::PermissionDenied` if access is denied.
/// Returns `FsError::InvalidEncoding` if the content is not UTF-8.
pub fn read_document(path: &Path) -> Result<SourceDocument, FsError> {
    let bytes = if is_stdin(path) {
        let mut buf = Vec::new();
        io::stdin()
            .read_to_end(&mut buf)
            .map_err(|e| FsError::from_io(path, e))?;
        buf
    } else {
        std::fs::read(path).map_err(|e| FsError::from_io(path, e))?
    };
    decode_document(bytes, path)
}

/// Decodes raw document bytes as UTF-8, stripping and recording a UTF-8
/// byte order mark.
///
/// # Errors
///
/// Returns `FsError::InvalidEncoding` for UTF-16 byte order marks and
/// invalid UTF-8.
pub fn decode_document(bytes: Vec<u8>, path: &Path) -> Result<SourceDocument, FsError> {
    if bytes.starts_with(&[0xFF, 0xFE]) {
        return Err(FsError::InvalidEncoding {
            path: path.into(),
            encoding: "UTF-16 LE detected (byte order mark FF FE); convert to UTF-8".into(),
        });
    }
    if bytes.starts_with(&[0xFE, 0xFF]) {
        return Err(FsError::InvalidEncoding {
            path: path.into(),
            encoding: "UTF-16 BE detected (byte order mark FE FF); convert to UTF-8".into(),
        });
    }

    let content = String::from_utf8(bytes).map_err(|e| FsError::InvalidEncoding {
        path: path.into(),
        encoding: format!("invalid UTF-8 at byte {}", e.utf8_error().valid_up_to()),
    })?;

    match content.strip_prefix(UTF8_BOM) {
        Some(stripped) => Ok(SourceDocument {
            text: stripped.to_string(),
            bom: true,
        }),
        None => Ok(SourceDocument {
            text: content,
            bom: false,
        }),
    }
}

/// Writes a document to a file path atomically.
///
/// Uses a temporary file in the same directory and an atomic rename, so a
/// reader never observes a half-written document. A byte order mark read
/// from the source is written back.
///
/// # Errors
///
/// Returns `FsError::ParentNotFound` if the parent directory doesn't exist.
/// Returns `FsError::AtomicWrite` if the atomic rename fails.
pub fn write_document(path: &Path, document: &SourceDocument) -> Result<(), FsError> {
    let parent = match path.parent() {
        Some(p) if p.as_os_str().is_empty() => Path::new("."),
        Some(p) => p,
        None => return Err(FsError::ParentNotFound { path: path.into() }),
    };

    if !parent.exists() {
        return Err(FsError::ParentNotFound {
            path: parent.into(),
        });
    }

    let mut temp = NamedTempFile::new_in(parent).map_err(|e| FsError::Io {
        path: path.into(),
        source: e,
    })?;

    temp.write_all(&document.to_bytes())
        .map_err(|e| FsError::Io {
            path: path.into(),
            source: e,
        })?;

    temp.persist(path).map_err(|e| FsError::AtomicWrite {
        path: path.into(),
        source: e.error,
    })?;

    Ok(())
}
