//! History of generated words.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::info;
use wordsmith_engine::GeneratedWord;
use wordsmith_foundation::{Error, Result};

use crate::writer::export_line;

/// Generated words in the order they were first produced.
///
/// Generating a word that already exists replaces its definition in place.
#[derive(Clone, Debug, Default)]
pub struct Lexicon {
    entries: Vec<GeneratedWord>,
    index: HashMap<String, usize>,
}

impl Lexicon {
    /// Creates an empty lexicon.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a word. Returns true if it replaced an earlier entry.
    pub fn insert(&mut self, entry: GeneratedWord) -> bool {
        if let Some(&position) = self.index.get(&entry.word) {
            self.entries[position] = entry;
            true
        } else {
            self.index.insert(entry.word.clone(), self.entries.len());
            self.entries.push(entry);
            false
        }
    }

    /// Looks up the definition of a generated word.
    #[must_use]
    pub fn get(&self, word: &str) -> Option<&str> {
        self.index
            .get(word)
            .map(|&position| self.entries[position].definition.as_str())
    }

    /// Number of generated words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been generated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in generation order.
    pub fn iter(&self) -> impl Iterator<Item = &GeneratedWord> {
        self.entries.iter()
    }

    /// One export line per entry, each ending in a newline.
    #[must_use]
    pub fn render(&self, column_width: usize) -> String {
        self.entries
            .iter()
            .map(|entry| export_line(&entry.word, &entry.definition, column_width) + "\n")
            .collect()
    }

    /// Overwrites `path` with one export line per entry.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be written.
    pub fn export(&self, path: &Path, column_width: usize) -> Result<()> {
        fs::write(path, self.render(column_width))
            .map_err(|e| Error::io(path.display().to_string(), &e))?;
        info!(path = %path.display(), words = self.len(), "lexicon exported");
        Ok(())
    }
}
