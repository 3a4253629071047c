//! Validated limit on captured divider content.

use serde::Serialize;
use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;
use thiserror::Error;

/// Maximum number of characters captured from the line after a divider.
///
/// Always positive. Characters are counted as Unicode scalar values.
///
/// # Examples
///
/// ```
/// use divline::domain::MaxContentLength;
///
/// let limit: MaxContentLength = "24".parse().unwrap();
/// assert_eq!(limit.get(), 24);
/// assert_eq!(MaxContentLength::default().get(), 10);
/// assert_eq!(MaxContentLength::from_setting(0).get(), 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct MaxContentLength(NonZeroUsize);

/// Error returned when a content length is zero, negative, or not a number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid max content length '{0}': must be a positive integer")]
pub struct InvalidContentLength(String);

impl MaxContentLength {
    /// The limit used when nothing else is configured.
    pub const DEFAULT: usize = 10;

    /// Creates a limit.
    ///
    /// # Errors
    ///
    /// Returns `InvalidContentLength` if `value` is zero.
    pub fn new(value: usize) -> Result<Self, InvalidContentLength> {
        NonZeroUsize::new(value)
            .map(Self)
            .ok_or_else(|| InvalidContentLength(value.to_string()))
    }

    /// Resolves a user-supplied setting, falling back to the default for
    /// values that are not positive.
    pub fn from_setting(value: i64) -> Self {
        usize::try_from(value)
            .ok()
            .and_then(|v| Self::new(v).ok())
            .unwrap_or_default()
    }

    /// Returns the limit as a plain count.
    pub fn get(self) -> usize {
        self.0.get()
    }

    /// Truncates `text` to at most this many characters.
    pub fn truncate(self, text: &str) -> String {
        text.chars().take(self.get()).collect()
    }
}

impl Default for MaxContentLength {
    fn default() -> Self {
        Self(NonZeroUsize::new(Self::DEFAULT).unwrap_or(NonZeroUsize::MIN))
    }
}

impl fmt::Display for MaxContentLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MaxContentLength {
    type Err = InvalidContentLength;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: usize = s
            .trim()
            .parse()
            .map_err(|_| InvalidContentLength(s.to_string()))?;
        Self::new(value).map_err(|_| InvalidContentLength(s.to_string()))
    }
}
