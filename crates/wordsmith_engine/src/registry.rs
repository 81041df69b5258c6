//! Vocabulary registry.
//!
//! Each vocabulary maps term keys (rule strings) to definition templates.
//! Vocabularies own their definitions, so replacing or removing one never
//! leaves stale terms behind and never disturbs another vocabulary that
//! happens to share a term key.

use std::collections::{BTreeMap, HashMap};

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::info;
use wordsmith_foundation::{Error, Result, TermType};

/// Terms of one vocabulary in load order.
#[derive(Clone, Debug, Default)]
struct Vocabulary {
    terms: Vec<String>,
    definitions: HashMap<String, String>,
}

impl Vocabulary {
    fn insert(&mut self, term: String, definition: String) {
        if !self.definitions.contains_key(&term) {
            self.terms.push(term.clone());
        }
        self.definitions.insert(term, definition);
    }

    fn entry(&self, index: usize) -> Option<(&str, &str)> {
        let term = self.terms.get(index)?;
        let definition = self.definitions.get(term)?;
        Some((term.as_str(), definition.as_str()))
    }
}

/// Owns every loaded vocabulary.
#[derive(Clone, Debug, Default)]
pub struct TermRegistry {
    vocabularies: BTreeMap<TermType, Vocabulary>,
}

impl TermRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a vocabulary, replacing any previous one under the same type.
    ///
    /// Terms keep their input order. A term repeated within the input keeps
    /// its first position and its last definition.
    pub fn add_vocabulary<I, K, V>(&mut self, term_type: TermType, terms: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut vocabulary = Vocabulary::default();
        for (term, definition) in terms {
            vocabulary.insert(term.into(), definition.into());
        }

        info!(
            vocabulary = %term_type,
            terms = vocabulary.terms.len(),
            "vocabulary added"
        );
        if self.vocabularies.insert(term_type, vocabulary).is_some() {
            info!("previous vocabulary replaced");
        }
    }

    /// Removes a vocabulary and all of its terms.
    ///
    /// # Errors
    ///
    /// Returns a not found error if the type is unregistered.
    pub fn remove_vocabulary(&mut self, term_type: &TermType) -> Result<()> {
        match self.vocabularies.remove(term_type) {
            Some(vocabulary) => {
                info!(
                    vocabulary = %term_type,
                    terms = vocabulary.terms.len(),
                    "vocabulary removed"
                );
                Ok(())
            }
            None => Err(Error::vocabulary_not_found(term_type)),
        }
    }

    /// Draws one `(term, definition)` uniformly at random.
    ///
    /// Previous draws are not excluded.
    ///
    /// # Errors
    ///
    /// Returns a not found error if the type is unregistered, or an exhausted
    /// error if the vocabulary is empty.
    pub fn draw_random<R>(&self, term_type: &TermType, rng: &mut R) -> Result<(&str, &str)>
    where
        R: Rng + ?Sized,
    {
        let vocabulary = self
            .vocabularies
            .get(term_type)
            .ok_or_else(|| Error::vocabulary_not_found(term_type))?;

        let term = vocabulary
            .terms
            .choose(rng)
            .ok_or_else(|| Error::vocabulary_exhausted(term_type, 1, 0))?;
        let definition = vocabulary
            .definitions
            .get(term)
            .ok_or_else(|| Error::term_not_found(term.as_str()))?;
        Ok((term.as_str(), definition.as_str()))
    }

    /// Returns true if a vocabulary is registered under `term_type`.
    #[must_use]
    pub fn has_type(&self, term_type: &TermType) -> bool {
        self.vocabularies.contains_key(term_type)
    }

    /// Returns true if any vocabulary holds `term`.
    #[must_use]
    pub fn has_term(&self, term: &str) -> bool {
        self.definition(term).is_some()
    }

    /// Looks up the definition of `term`.
    ///
    /// When several vocabularies hold the term, the first by type name wins.
    #[must_use]
    pub fn definition(&self, term: &str) -> Option<&str> {
        self.vocabularies
            .values()
            .find_map(|vocabulary| vocabulary.definitions.get(term))
            .map(String::as_str)
    }

    /// Number of terms in a vocabulary.
    #[must_use]
    pub fn len(&self, term_type: &TermType) -> Option<usize> {
        self.vocabularies.get(term_type).map(|v| v.terms.len())
    }

    /// Returns true if no vocabularies are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vocabularies.is_empty()
    }

    /// Registered types in sorted order.
    pub fn types(&self) -> impl Iterator<Item = &TermType> {
        self.vocabularies.keys()
    }

    /// Terms of a vocabulary with their definitions, in load order.
    pub fn terms(&self, term_type: &TermType) -> impl Iterator<Item = (&str, &str)> {
        self.vocabularies
            .get(term_type)
            .into_iter()
            .flat_map(|vocabulary| {
                (0..vocabulary.terms.len()).filter_map(move |index| vocabulary.entry(index))
            })
    }

    /// Total number of terms across all vocabularies.
    #[must_use]
    pub fn term_count(&self) -> usize {
        self.vocabularies.values().map(|v| v.terms.len()).sum()
    }
}
