//! Integration tests for the REPL command surface

use std::fs;

use wordsmith_foundation::{ErrorKind, TermType};
use wordsmith_runtime::writer::capitalize;
use wordsmith_runtime::{Repl, tokenize};

use crate::{ScriptedEditor, scratch_dir, scripted_repl, write_vocabularies};

fn run(repl: &mut Repl<ScriptedEditor>, line: &str) {
    repl.execute(&tokenize(line)).unwrap();
}

#[test]
fn build_and_generate_from_command_file() {
    let dir = scratch_dir("repl-file");
    let (roots, suffixes) = write_vocabularies(&dir);
    let script = dir.join("build.txt");
    fs::write(
        &script,
        format!(
            "add {} as Root\nadd {} as SUFFIX\nalias word as new 1 root 1 suffix\nword\nword\n",
            roots.display(),
            suffixes.display()
        ),
    )
    .unwrap();

    let (mut repl, out) = scripted_repl(&[]);
    repl.run_file(&script).unwrap();

    assert!(repl.registry().has_type(&TermType::new("root")));
    assert!(repl.registry().has_type(&TermType::new("suffix")));
    assert!(!repl.lexicon().is_empty());

    let shown = out.text();
    assert!(shown.lines().next().unwrap().chars().all(|c| c == '='));
    assert!(shown.contains("~ "));
}

#[test]
fn command_file_continues_after_errors_and_stops_at_exit() {
    let dir = scratch_dir("repl-errors");
    let (roots, _) = write_vocabularies(&dir);
    let script = dir.join("build.txt");
    fs::write(
        &script,
        format!(
            "frobnicate\nnew 1 root\nadd {} as root\nnew 1 root\nexit\nnew 1 root\n",
            roots.display()
        ),
    )
    .unwrap();

    let (mut repl, _) = scripted_repl(&[]);
    repl.run_file(&script).unwrap();

    assert!(!repl.is_active());
    assert_eq!(repl.lexicon().len(), 1);
}

#[test]
fn types_lists_sources() {
    let dir = scratch_dir("repl-types");
    let (roots, suffixes) = write_vocabularies(&dir);

    let (mut repl, out) = scripted_repl(&[]);
    run(&mut repl, &format!("add {} as suffix", suffixes.display()));
    run(&mut repl, &format!("add {} as root", roots.display()));
    run(&mut repl, "types");

    assert_eq!(
        out.text(),
        format!(
            "root -> {}\nsuffix -> {}\n",
            roots.display(),
            suffixes.display()
        )
    );
}

#[test]
fn remove_then_generate_is_not_found() {
    let dir = scratch_dir("repl-remove");
    let (roots, _) = write_vocabularies(&dir);

    let (mut repl, _) = scripted_repl(&[]);
    run(&mut repl, &format!("add {} as root", roots.display()));
    run(&mut repl, "new 1 root");
    run(&mut repl, "remove ROOT");

    assert!(!repl.registry().has_type(&TermType::new("root")));
    let err = repl.execute(&tokenize("new 1 root")).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::VocabularyNotFound(_)));
    assert_eq!(repl.registry().len(&TermType::new("root")), None);
}

#[test]
fn exhausted_vocabulary_reports_instead_of_hanging() {
    let dir = scratch_dir("repl-exhausted");
    let (roots, _) = write_vocabularies(&dir);

    let (mut repl, _) = scripted_repl(&[]);
    run(&mut repl, &format!("add {} as root", roots.display()));
    let err = repl.execute(&tokenize("new 4 root")).unwrap_err();
    assert!(err.is_not_found());
    assert!(repl.lexicon().is_empty());
}

#[test]
fn alias_appends_extra_arguments() {
    let dir = scratch_dir("repl-alias");
    let (roots, suffixes) = write_vocabularies(&dir);

    let (mut repl, _) = scripted_repl(&[]);
    run(&mut repl, &format!("add {} as root", roots.display()));
    run(&mut repl, &format!("add {} as suffix", suffixes.display()));
    run(&mut repl, "alias base as new 1 root");
    run(&mut repl, "alias longer as base");
    run(&mut repl, "longer 2 suffix");

    let entry = repl.lexicon().iter().next().unwrap();
    assert!(entry.definition.contains("a feline")
        || entry.definition.contains("a canine")
        || entry.definition.contains("a vulpine"));
    assert!(entry.word.len() > 3);
}

#[test]
fn alias_rules() {
    let (mut repl, _) = scripted_repl(&[]);
    for line in ["alias help as old", "alias x as nothing", "alias x as"] {
        assert!(repl.execute(&tokenize(line)).is_err(), "{line}");
    }
    let err = repl.execute(&tokenize("alias old as help")).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidAlias(_)));
}

#[test]
fn scripted_session() {
    let dir = scratch_dir("repl-session");
    let (roots, _) = write_vocabularies(&dir);
    let add = format!("add {} as root", roots.display());

    let (mut repl, out) = scripted_repl(&["old", add.as_str(), "", "new 1 root", "bogus", "old"]);
    repl.run().unwrap();

    let shown = out.text();
    assert!(shown.starts_with("No words generated\n"));
    assert_eq!(repl.lexicon().len(), 1);
    let entry = repl.lexicon().iter().next().unwrap();
    assert!(shown.ends_with(&format!(
        "{:<20} | {}.\n",
        capitalize(&entry.word),
        capitalize(&entry.definition)
    )));
}
