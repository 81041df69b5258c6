//! Integration tests for the vocabulary registry
//!
//! Tests replacement, removal, and random draws.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use wordsmith_engine::TermRegistry;
use wordsmith_foundation::{ErrorKind, TermType};

fn root() -> TermType {
    TermType::new("root")
}

#[test]
fn replace_is_atomic() {
    let mut registry = TermRegistry::new();
    registry.add_vocabulary(root(), vec![("cat", "a feline"), ("dog", "a canine")]);
    registry.add_vocabulary(root(), vec![("fox", "a vulpine")]);

    assert_eq!(registry.len(&root()), Some(1));
    assert!(!registry.has_term("cat"));
    assert!(!registry.has_term("dog"));
    assert_eq!(registry.definition("fox"), Some("a vulpine"));
}

#[test]
fn shared_term_survives_removal_of_other_vocabulary() {
    let mut registry = TermRegistry::new();
    registry.add_vocabulary(root(), vec![("bat", "a flying mammal")]);
    registry.add_vocabulary(TermType::new("verb"), vec![("bat", "to strike")]);

    registry.remove_vocabulary(&TermType::new("verb")).unwrap();

    assert!(registry.has_term("bat"));
    assert_eq!(registry.definition("bat"), Some("a flying mammal"));
}

#[test]
fn removal_drops_every_term() {
    let mut registry = TermRegistry::new();
    registry.add_vocabulary(root(), vec![("cat", "a feline"), ("dog", "a canine")]);
    registry.remove_vocabulary(&root()).unwrap();

    assert!(!registry.has_type(&TermType::new("root")));
    assert_eq!(registry.term_count(), 0);
    assert!(registry.remove_vocabulary(&root()).unwrap_err().is_not_found());
}

#[test]
fn duplicate_keys_keep_first_position_and_last_definition() {
    let mut registry = TermRegistry::new();
    registry.add_vocabulary(
        root(),
        vec![("cat", "first"), ("dog", "a canine"), ("cat", "second")],
    );

    let terms: Vec<_> = registry.terms(&root()).collect();
    assert_eq!(terms, vec![("cat", "second"), ("dog", "a canine")]);
}

#[test]
fn types_are_sorted() {
    let mut registry = TermRegistry::new();
    for name in ["suffix", "Prefix", "root"] {
        registry.add_vocabulary(TermType::new(name), vec![("x", "y")]);
    }
    let types: Vec<_> = registry.types().map(TermType::as_str).collect();
    assert_eq!(types, vec!["prefix", "root", "suffix"]);
}

#[test]
fn draws_cover_the_vocabulary() {
    let mut registry = TermRegistry::new();
    registry.add_vocabulary(root(), vec![("cat", "a feline"), ("dog", "a canine")]);
    let mut rng = ChaCha8Rng::seed_from_u64(11);

    let mut seen = std::collections::HashSet::new();
    for _ in 0..64 {
        let (term, definition) = registry.draw_random(&root(), &mut rng).unwrap();
        assert_eq!(registry.definition(term), Some(definition));
        seen.insert(term.to_string());
    }
    assert_eq!(seen.len(), 2);
}

#[test]
fn draw_failures() {
    let mut registry = TermRegistry::new();
    let mut rng = ChaCha8Rng::seed_from_u64(0);

    let err = registry.draw_random(&root(), &mut rng).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::VocabularyNotFound(_)));

    registry.add_vocabulary(root(), Vec::<(String, String)>::new());
    let err = registry.draw_random(&root(), &mut rng).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::VocabularyExhausted { .. }));
    assert!(err.is_not_found());
}
