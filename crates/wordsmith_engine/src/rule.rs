//! The placement rule language embedded in term keys.
//!
//! A rule is a `|`-separated list of parts. Each part is either
//! `condition>phoneme` or a bare `phoneme`, the unconditional fallback.
//!
//! ```text
//! s,sh,ch,x>-es|-s       ;; "-es" after sibilants, "-s" otherwise
//! &>~n|-an               ;; replace a trailing vowel, else append
//! un-                    ;; always prefix
//! ```
//!
//! Inside a phoneme, `-` splices in the whole current word and `~` splices in
//! the word minus the span its condition matched.

use wordsmith_foundation::{Error, Result};

use crate::matcher::{Direction, Window};

/// Separator between rule parts.
pub const PART_DELIM: char = '|';

/// Separator between a condition and its phoneme.
pub const CONDITION_ASSIGN: char = '>';

/// Placeholder for the entire current word.
pub const PLACE_TOKEN: char = '-';

/// Placeholder for the current word minus the matched window.
pub const REPLACE_TOKEN: char = '~';

/// Placeholder in a definition template for the accumulated definition.
pub const DEFINITION_SLOT: &str = "...";

// =============================================================================
// Phoneme
// =============================================================================

/// The fragment a rule part contributes to the word.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Phoneme<'a>(&'a str);

impl<'a> Phoneme<'a> {
    /// Wraps raw phoneme text.
    #[must_use]
    pub const fn new(raw: &'a str) -> Self {
        Self(raw)
    }

    /// The raw phoneme text.
    #[must_use]
    pub const fn as_str(&self) -> &'a str {
        self.0
    }

    /// Conditions anchor to the end of the word when the phoneme starts with
    /// a placeholder, and to the start otherwise.
    #[must_use]
    pub fn direction(&self) -> Direction {
        if self.0.starts_with([PLACE_TOKEN, REPLACE_TOKEN]) {
            Direction::Backwards
        } else {
            Direction::Forwards
        }
    }

    /// Builds the new word from the current one and the matched window.
    #[must_use]
    pub fn apply(&self, word: &str, window: Window) -> String {
        if self.0.contains(PLACE_TOKEN) {
            self.0.replace(PLACE_TOKEN, word)
        } else if self.0.contains(REPLACE_TOKEN) {
            self.0.replace(REPLACE_TOKEN, window.kept_span(word))
        } else {
            self.0.to_string()
        }
    }
}

// =============================================================================
// Rule
// =============================================================================

/// One `condition>phoneme` alternative of a rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RulePart<'a> {
    /// Raw condition; `None` for the fallback part.
    pub condition: Option<&'a str>,
    /// Fragment applied when the condition matches.
    pub phoneme: Phoneme<'a>,
}

impl<'a> RulePart<'a> {
    fn parse(rule: &str, part: &'a str) -> Result<Self> {
        let mut pieces = part.split(CONDITION_ASSIGN);
        match (pieces.next(), pieces.next(), pieces.next()) {
            (Some(phoneme), None, _) => Ok(Self {
                condition: None,
                phoneme: Phoneme::new(phoneme),
            }),
            (Some(condition), Some(phoneme), None) => Ok(Self {
                condition: Some(condition),
                phoneme: Phoneme::new(phoneme),
            }),
            _ => Err(Error::malformed_rule(
                rule,
                format!("part {part:?} has more than one '{CONDITION_ASSIGN}'"),
            )),
        }
    }

    /// Returns true if this part applies unconditionally.
    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        self.condition.is_none()
    }
}

/// A rule string. Parts are parsed only as evaluation reaches them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rule<'a> {
    raw: &'a str,
}

impl<'a> Rule<'a> {
    /// Wraps a raw rule string.
    #[must_use]
    pub const fn new(raw: &'a str) -> Self {
        Self { raw }
    }

    /// The unparsed rule string.
    #[must_use]
    pub const fn raw(&self) -> &'a str {
        self.raw
    }

    /// The rule's parts in declaration order.
    ///
    /// A malformed part yields a malformed rule error when the iterator
    /// reaches it; parts before it are unaffected.
    pub fn parts(self) -> impl Iterator<Item = Result<RulePart<'a>>> {
        let raw = self.raw;
        raw.split(PART_DELIM).map(move |part| RulePart::parse(raw, part))
    }
}

/// Inlines `prior` wherever the template has `...`.
///
/// A template without the slot replaces the prior definition outright.
#[must_use]
pub fn fold_definition(template: &str, prior: &str) -> String {
    template.replace(DEFINITION_SLOT, prior)
}
