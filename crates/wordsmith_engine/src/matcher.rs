//! Condition matching for placement rules.
//!
//! A condition is a comma-separated list of alternative patterns. Each
//! pattern is a string of literal characters and wildcard symbols; a
//! wildcard stands for any member of its character class. Conditions are
//! compiled once into the full set of strings they accept and then tested
//! against prefix or suffix windows of the word under construction,
//! longest window first.

use std::collections::{HashMap, HashSet};

// =============================================================================
// Wildcard Classes
// =============================================================================

/// Wildcard symbol for any vowel.
pub const VOWEL_SYMBOL: char = '&';

/// Wildcard symbol for any consonant.
pub const CONSONANT_SYMBOL: char = '$';

/// Members of the built-in vowel class.
pub const VOWELS: &str = "aeiou";

/// Members of the built-in consonant class.
pub const CONSONANTS: &str = "bcdfghjklmnpqrstvwxyz";

/// Separator between alternatives in a condition.
pub const ALTERNATIVE_DELIM: char = ',';

/// Mapping from wildcard symbol to the characters it stands for.
///
/// Symbols with no registered class are literals. Lookups never register
/// anything.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WildcardClasses {
    classes: HashMap<char, Vec<char>>,
}

impl WildcardClasses {
    /// Creates the default classes: vowels and consonants.
    #[must_use]
    pub fn new() -> Self {
        let mut classes = Self::empty();
        classes.register(VOWEL_SYMBOL, VOWELS);
        classes.register(CONSONANT_SYMBOL, CONSONANTS);
        classes
    }

    /// Creates a registry with no classes; every character is literal.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            classes: HashMap::new(),
        }
    }

    /// Registers (or replaces) the class for `symbol`.
    ///
    /// Returns the previous members, if any.
    pub fn register(&mut self, symbol: char, members: &str) -> Option<Vec<char>> {
        self.classes.insert(symbol, members.chars().collect())
    }

    /// Returns the class registered for `symbol`.
    #[must_use]
    pub fn class(&self, symbol: char) -> Option<&[char]> {
        self.classes.get(&symbol).map(Vec::as_slice)
    }

    /// Returns the characters `c` can stand for: its class, or itself.
    fn expand(&self, c: char) -> Vec<char> {
        self.classes.get(&c).cloned().unwrap_or_else(|| vec![c])
    }
}

impl Default for WildcardClasses {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Windows
// =============================================================================

/// Which end of the word a condition is anchored to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Test prefixes of the word.
    Forwards,
    /// Test suffixes of the word.
    Backwards,
}

/// Where a condition matched the current word.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Window {
    /// Unconditional match (fallback part).
    Whole,
    /// The first `n` characters matched.
    Prefix(usize),
    /// The last `n` characters matched.
    Suffix(usize),
}

impl Window {
    /// Signed offset of the window: `0`, `+n` for a prefix, `-n` for a suffix.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub fn offset(self) -> isize {
        match self {
            Self::Whole => 0,
            Self::Prefix(n) => n as isize,
            Self::Suffix(n) => -(n as isize),
        }
    }

    /// Returns the part of `word` left over once the matched window is dropped.
    #[must_use]
    pub fn kept_span(self, word: &str) -> &str {
        match self {
            Self::Whole => word,
            Self::Prefix(n) => &word[byte_index(word, n)..],
            Self::Suffix(n) => {
                let len = word.chars().count();
                &word[..byte_index(word, len.saturating_sub(n))]
            }
        }
    }
}

/// Byte index of the `chars`-th character of `word` (or its end).
fn byte_index(word: &str, chars: usize) -> usize {
    word.char_indices().nth(chars).map_or(word.len(), |(i, _)| i)
}

// =============================================================================
// Compiled Condition
// =============================================================================

/// A condition expanded into every string it accepts.
#[derive(Clone, Debug)]
pub struct CompiledCondition {
    /// Union of all alternatives' expansions.
    matches: HashSet<String>,
    /// Longest raw alternative, in characters.
    max_len: usize,
}

impl CompiledCondition {
    /// Expands a raw condition against the given wildcard classes.
    #[must_use]
    pub fn compile(raw: &str, classes: &WildcardClasses) -> Self {
        let mut matches = HashSet::new();
        let mut max_len = 0;

        for alternative in raw.split(ALTERNATIVE_DELIM) {
            max_len = max_len.max(alternative.chars().count());

            let mut current = vec![String::new()];
            for c in alternative.chars() {
                let class = classes.expand(c);
                current = current
                    .iter()
                    .flat_map(|prefix| {
                        class.iter().map(move |&member| {
                            let mut next = prefix.clone();
                            next.push(member);
                            next
                        })
                    })
                    .collect();
            }
            matches.extend(current);
        }

        Self { matches, max_len }
    }

    /// Every string this condition accepts.
    #[must_use]
    pub fn match_set(&self) -> &HashSet<String> {
        &self.matches
    }

    /// Length of the longest raw alternative.
    #[must_use]
    pub const fn max_len(&self) -> usize {
        self.max_len
    }

    /// Returns true if `candidate` is accepted as a whole.
    #[must_use]
    pub fn accepts(&self, candidate: &str) -> bool {
        self.matches.contains(candidate)
    }

    /// Finds the longest window of `word` this condition accepts.
    ///
    /// Windows run from the longest raw alternative down to one character;
    /// windows longer than the word are skipped.
    #[must_use]
    pub fn find(&self, word: &str, direction: Direction) -> Option<Window> {
        let len = word.chars().count();

        (1..=self.max_len.min(len)).rev().find_map(|n| match direction {
            Direction::Backwards => {
                let window = &word[byte_index(word, len - n)..];
                self.accepts(window).then_some(Window::Suffix(n))
            }
            Direction::Forwards => {
                let window = &word[..byte_index(word, n)];
                self.accepts(window).then_some(Window::Prefix(n))
            }
        })
    }
}
