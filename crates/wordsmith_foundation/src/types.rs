//! Vocabulary keys.

use std::borrow::Borrow;
use std::fmt;

/// A normalized vocabulary key (trimmed and lower-cased).
///
/// Every constructor normalizes, so two keys that differ only in case or
/// surrounding whitespace compare equal.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TermType(String);

impl TermType {
    /// Creates a vocabulary key from raw user input.
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_lowercase())
    }

    /// Returns the normalized key.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TermType {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for TermType {
    fn from(raw: String) -> Self {
        Self::new(&raw)
    }
}

impl Borrow<str> for TermType {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TermType {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TermType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
