//! The word blender.
//!
//! A blender starts empty. The first term pushed seeds it verbatim; every
//! later term is run as a placement rule against the word built so far, and
//! its definition template is folded around the definition built so far.
//! [`WordBlender::pull`] hands back the result and empties the blender again.

use std::collections::HashMap;

use tracing::{debug, trace};
use wordsmith_foundation::{Error, Result};

use crate::matcher::{CompiledCondition, WildcardClasses, Window};
use crate::rule::{Phoneme, Rule, fold_definition};

/// A word under construction and its definition.
#[derive(Clone, Debug, PartialEq, Eq)]
struct Blend {
    word: String,
    definition: String,
}

/// Folds terms into a single word and definition.
#[derive(Clone, Debug, Default)]
pub struct WordBlender {
    /// `None` while empty.
    blend: Option<Blend>,
    /// Compiled conditions keyed by raw condition string.
    conditions: HashMap<String, CompiledCondition>,
    /// Wildcard symbols recognized in conditions.
    classes: WildcardClasses,
}

impl WordBlender {
    /// Creates an empty blender with the default wildcard classes.
    #[must_use]
    pub fn new() -> Self {
        Self::with_classes(WildcardClasses::new())
    }

    /// Creates an empty blender with custom wildcard classes.
    #[must_use]
    pub fn with_classes(classes: WildcardClasses) -> Self {
        Self {
            blend: None,
            conditions: HashMap::new(),
            classes,
        }
    }

    /// Registers a wildcard class.
    ///
    /// Compiled conditions depend on the classes, so the cache is cleared.
    pub fn register_wildcard(&mut self, symbol: char, members: &str) {
        self.classes.register(symbol, members);
        self.conditions.clear();
    }

    /// Returns true if nothing has been pushed since the last pull.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.blend.is_none()
    }

    /// The word built so far.
    #[must_use]
    pub fn word(&self) -> Option<&str> {
        self.blend.as_ref().map(|b| b.word.as_str())
    }

    /// The definition built so far.
    #[must_use]
    pub fn definition(&self) -> Option<&str> {
        self.blend.as_ref().map(|b| b.definition.as_str())
    }

    /// Number of distinct conditions compiled so far.
    #[must_use]
    pub fn cached_conditions(&self) -> usize {
        self.conditions.len()
    }

    /// Folds a term and its definition template into the blend.
    ///
    /// On an empty blender the term and meaning are taken literally.
    /// Otherwise `term` is evaluated as a rule against the current word.
    /// A failed push leaves the blend untouched.
    ///
    /// # Errors
    ///
    /// Returns a malformed rule error if `term` cannot be parsed, or a rule
    /// error if none of its parts applies to the current word.
    pub fn push(&mut self, term: &str, meaning: &str) -> Result<()> {
        let Self {
            blend,
            conditions,
            classes,
        } = self;

        let Some(current) = blend.as_mut() else {
            trace!(term, "seeding blend");
            *blend = Some(Blend {
                word: term.to_string(),
                definition: meaning.to_string(),
            });
            return Ok(());
        };

        let (phoneme, window) = select(conditions, classes, Rule::new(term), &current.word)?;
        let word = phoneme.apply(&current.word, window);
        let definition = fold_definition(meaning, &current.definition);

        debug!(
            rule = term,
            phoneme = phoneme.as_str(),
            offset = window.offset(),
            from = %current.word,
            to = %word,
            "rule applied"
        );
        *current = Blend { word, definition };
        Ok(())
    }

    /// Returns the finished word and definition and empties the blender.
    pub fn pull(&mut self) -> Option<(String, String)> {
        self.blend.take().map(|b| (b.word, b.definition))
    }
}

/// Picks the first part, in declaration order, whose condition matches `word`.
///
/// Parts after the winning one are never parsed.
fn select<'r>(
    conditions: &mut HashMap<String, CompiledCondition>,
    classes: &WildcardClasses,
    rule: Rule<'r>,
    word: &str,
) -> Result<(Phoneme<'r>, Window)> {
    for part in rule.parts() {
        let part = part?;
        let window = match part.condition {
            None => Some(Window::Whole),
            Some(raw) => compiled(conditions, classes, raw).find(word, part.phoneme.direction()),
        };
        if let Some(window) = window {
            return Ok((part.phoneme, window));
        }
    }
    Err(Error::no_applicable_phoneme(rule.raw()))
}

fn compiled<'c>(
    conditions: &'c mut HashMap<String, CompiledCondition>,
    classes: &WildcardClasses,
    raw: &str,
) -> &'c CompiledCondition {
    if !conditions.contains_key(raw) {
        let compiled = CompiledCondition::compile(raw, classes);
        trace!(
            condition = raw,
            matches = compiled.match_set().len(),
            "condition compiled"
        );
        conditions.insert(raw.to_string(), compiled);
    }
    &conditions[raw]
}
