//! Integration tests for vocabulary and command files

use std::fs;

use wordsmith_foundation::ErrorKind;
use wordsmith_runtime::{VocabularyLoader, read_commands};

use crate::{scratch_dir, write_vocabularies};

#[test]
fn reads_vocabulary_file() {
    let dir = scratch_dir("loader-read");
    let (roots, suffixes) = write_vocabularies(&dir);

    let terms = VocabularyLoader::read(&roots).unwrap();
    assert_eq!(
        terms,
        vec![
            ("cat".to_string(), "a feline".to_string()),
            ("dog".to_string(), "a canine".to_string()),
            ("fox".to_string(), "a vulpine".to_string()),
        ]
    );

    let rules = VocabularyLoader::read(&suffixes).unwrap();
    assert_eq!(rules[0].0, "s,x>-es|-s");
    assert_eq!(rules[1].1, "somewhat like ...");
}

#[test]
fn keys_and_values_are_lower_cased() {
    let terms = VocabularyLoader::parse("  Kitten =  A Young CAT ", "inline").unwrap();
    assert_eq!(terms, vec![("kitten".to_string(), "a young cat".to_string())]);
}

#[test]
fn malformed_line_names_file_and_line() {
    let dir = scratch_dir("loader-malformed");
    let path = dir.join("broken.txt");
    fs::write(&path, "cat = a feline\n\njust words\n").unwrap();

    let err = VocabularyLoader::read(&path).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::MalformedLine { .. }));
    let context = err.context.unwrap();
    assert_eq!(context.line, Some(3));
    assert_eq!(context.source, Some(path.display().to_string()));
}

#[test]
fn missing_files_are_empty() {
    let dir = scratch_dir("loader-missing");
    assert!(VocabularyLoader::read(&dir.join("nope.txt")).unwrap().is_empty());
    assert!(read_commands(&dir.join("wordsmithrc")).unwrap().is_empty());
}

#[test]
fn command_file_lines_are_numbered() {
    let dir = scratch_dir("loader-commands");
    let path = dir.join("wordsmithrc");
    fs::write(&path, "# setup\nadd roots.txt as root\n\n  new 1 root\n").unwrap();

    let commands = read_commands(&path).unwrap();
    assert_eq!(commands.len(), 2);
    assert_eq!(commands[0].0, 2);
    assert_eq!(commands[1], (4, vec!["new".to_string(), "1".to_string(), "root".to_string()]));
}
