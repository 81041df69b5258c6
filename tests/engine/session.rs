//! Integration tests for generation sessions
//!
//! Tests request ordering, distinct draws, and failure handling.

use wordsmith_engine::{GenerationRequest, GenerationSession, TermRegistry};
use wordsmith_foundation::{ErrorKind, TermType};

fn registry() -> TermRegistry {
    let mut registry = TermRegistry::new();
    registry.add_vocabulary(TermType::new("root"), vec![("x", "a mark")]);
    registry.add_vocabulary(
        TermType::new("suffix"),
        vec![("-a", "... of a"), ("-b", "... of b"), ("-c", "... of c")],
    );
    registry.add_vocabulary(TermType::new("strict"), vec![("q>-u", "queued ...")]);
    registry
}

#[test]
fn requests_run_in_order() {
    let registry = registry();
    let mut session = GenerationSession::with_seed(5);
    let word = session
        .generate(
            &registry,
            &[GenerationRequest::new(1, "root"), GenerationRequest::new(1, "suffix")],
        )
        .unwrap();

    assert_eq!(word.word.len(), 2);
    assert!(word.word.starts_with('x'));
    assert!(word.definition.starts_with("a mark of "));
}

#[test]
fn draws_within_a_request_are_distinct() {
    let registry = registry();
    for seed in 0..16 {
        let mut session = GenerationSession::with_seed(seed);
        let word = session
            .generate(
                &registry,
                &[GenerationRequest::new(1, "root"), GenerationRequest::new(3, "suffix")],
            )
            .unwrap();

        let mut tail: Vec<char> = word.word[1..].chars().collect();
        tail.sort_unstable();
        assert_eq!(tail, vec!['a', 'b', 'c']);
    }
}

#[test]
fn draws_across_requests_may_repeat() {
    let registry = registry();
    let mut session = GenerationSession::with_seed(8);
    let word = session
        .generate(
            &registry,
            &[
                GenerationRequest::new(1, "root"),
                GenerationRequest::new(3, "suffix"),
                GenerationRequest::new(3, "suffix"),
            ],
        )
        .unwrap();
    assert_eq!(word.word.len(), 7);
}

#[test]
fn reproducible_from_seed() {
    let registry = registry();
    let requests = [GenerationRequest::new(1, "root"), GenerationRequest::new(2, "suffix")];

    let words: Vec<_> = (0..2)
        .map(|_| {
            GenerationSession::with_seed(1234)
                .generate(&registry, &requests)
                .unwrap()
        })
        .collect();
    assert_eq!(words[0], words[1]);
}

#[test]
fn oversized_request_fails_up_front() {
    let registry = registry();
    let mut session = GenerationSession::with_seed(0);
    let err = session
        .generate(&registry, &[GenerationRequest::new(4, "suffix")])
        .unwrap_err();

    assert!(err.is_not_found());
    assert!(matches!(
        err.kind,
        ErrorKind::VocabularyExhausted {
            requested: 4,
            available: 3,
            ..
        }
    ));
}

#[test]
fn unknown_type_fails() {
    let registry = registry();
    let mut session = GenerationSession::with_seed(0);
    let err = session
        .generate(&registry, &[GenerationRequest::new(1, "prefix")])
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::VocabularyNotFound(_)));
}

#[test]
fn nothing_requested_fails() {
    let registry = registry();
    let mut session = GenerationSession::with_seed(0);

    for requests in [vec![], vec![GenerationRequest::new(0, "root")]] {
        let err = session.generate(&registry, &requests).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::EmptyGeneration));
    }
}

#[test]
fn rule_failure_aborts_and_resets() {
    let registry = registry();
    let mut session = GenerationSession::with_seed(0);
    let err = session
        .generate(
            &registry,
            &[GenerationRequest::new(1, "root"), GenerationRequest::new(1, "strict")],
        )
        .unwrap_err();

    assert!(err.is_rule_error());
    assert!(session.blender().is_empty());

    let word = session
        .generate(&registry, &[GenerationRequest::new(1, "root")])
        .unwrap();
    assert_eq!(word.word, "x");
    assert_eq!(word.definition, "a mark");
}
