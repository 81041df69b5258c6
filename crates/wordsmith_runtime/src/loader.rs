//! Vocabulary and command file loading.
//!
//! Vocabulary files hold one `term=definition` pair per line. Command files
//! hold one whitespace-separated command per line. A missing file of either
//! kind reads as empty.

use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;
use wordsmith_foundation::{Error, ErrorContext, ErrorKind, Result};

/// Separator between a term and its definition.
pub const DELIMITER: char = '=';

/// Lines starting with this are ignored.
pub const COMMENT: char = '#';

/// Reads vocabulary files.
pub struct VocabularyLoader;

impl VocabularyLoader {
    /// Reads `term=definition` pairs from `path`, in file order.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file exists but cannot be read, or a
    /// malformed line error naming the file and line.
    pub fn read(path: &Path) -> Result<Vec<(String, String)>> {
        match read_optional(path)? {
            Some(source) => Self::parse(&source, &path.display().to_string()),
            None => Ok(Vec::new()),
        }
    }

    /// Parses vocabulary source text.
    ///
    /// Both sides are trimmed and lower-cased; the definition is everything
    /// after the first `=`. Blank lines and `#` comments are skipped.
    ///
    /// # Errors
    ///
    /// Returns a malformed line error for a line without `=`.
    pub fn parse(source: &str, origin: &str) -> Result<Vec<(String, String)>> {
        source
            .lines()
            .enumerate()
            .filter(|(_, line)| {
                let line = line.trim();
                !line.is_empty() && !line.starts_with(COMMENT)
            })
            .map(|(index, line)| {
                let (term, definition) = line.split_once(DELIMITER).ok_or_else(|| {
                    Error::new(ErrorKind::MalformedLine {
                        line: line.trim().to_string(),
                    })
                    .with_context(
                        ErrorContext::new()
                            .with_source(origin)
                            .with_line(index + 1),
                    )
                })?;
                Ok((normalize(term), normalize(definition)))
            })
            .collect()
    }
}

/// Reads commands from `path` as `(line number, tokens)` pairs.
///
/// Blank lines and `#` comments are skipped; line numbers start at 1.
///
/// # Errors
///
/// Returns an I/O error if the file exists but cannot be read.
pub fn read_commands(path: &Path) -> Result<Vec<(usize, Vec<String>)>> {
    let Some(source) = read_optional(path)? else {
        return Ok(Vec::new());
    };
    Ok(source
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, tokenize(line)))
        .filter(|(_, tokens)| tokens.first().is_some_and(|t| !t.starts_with(COMMENT)))
        .collect())
}

/// Splits a command line on whitespace.
#[must_use]
pub fn tokenize(line: &str) -> Vec<String> {
    line.split_whitespace().map(str::to_string).collect()
}

fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

fn read_optional(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(source) => Ok(Some(source)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "file not found, treating as empty");
            Ok(None)
        }
        Err(e) => Err(Error::io(path.display().to_string(), &e)),
    }
}
