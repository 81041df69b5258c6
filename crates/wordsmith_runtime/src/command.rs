//! Command parsing.
//!
//! Commands are whitespace-separated token lists. The first token names the
//! command; command names and vocabulary types are case-insensitive, file
//! paths are taken as typed.

use std::path::PathBuf;

use wordsmith_engine::GenerationRequest;
use wordsmith_foundation::{Error, Result, TermType};

/// Name, argument usage, and description of a built-in command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CommandSpec {
    /// Command word.
    pub name: &'static str,
    /// Argument synopsis.
    pub usage: &'static str,
    /// One-line description.
    pub description: &'static str,
}

/// Built-in commands in help order.
pub const COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        name: "add",
        usage: "<file> as <type name>",
        description: "Adds a new term type.",
    },
    CommandSpec {
        name: "new",
        usage: "[<number> <type>]xN",
        description: "Generates a new word.",
    },
    CommandSpec {
        name: "old",
        usage: "",
        description: "Lists the words which have already been generated.",
    },
    CommandSpec {
        name: "exit",
        usage: "",
        description: "Exits Wordsmith.",
    },
    CommandSpec {
        name: "help",
        usage: "",
        description: "Lists every valid command.",
    },
    CommandSpec {
        name: "alias",
        usage: "<name> as <command> <args>",
        description: "Allows a single word to stand in for a full command.",
    },
    CommandSpec {
        name: "types",
        usage: "",
        description: "Lists the file each term type was loaded from.",
    },
    CommandSpec {
        name: "export",
        usage: "<file>",
        description: "Saves the words which have already been generated to a text file.",
    },
    CommandSpec {
        name: "remove",
        usage: "<type name>",
        description: "Removes an existing term type.",
    },
];

/// Returns true if `name` is a built-in command.
#[must_use]
pub fn is_command(name: &str) -> bool {
    COMMANDS.iter().any(|spec| spec.name == name)
}

/// A parsed command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Load a vocabulary file under a type name.
    Add {
        /// Vocabulary file.
        path: PathBuf,
        /// Type to register it under.
        term_type: TermType,
    },
    /// Drop a vocabulary.
    Remove {
        /// Type to drop.
        term_type: TermType,
    },
    /// Generate a word.
    New {
        /// Draws in order.
        requests: Vec<GenerationRequest>,
    },
    /// List generated words.
    Old,
    /// List vocabulary sources.
    Types,
    /// Write generated words to a file.
    Export {
        /// Destination file (overwritten).
        path: PathBuf,
    },
    /// Define an alias.
    Alias {
        /// Alias name.
        name: String,
        /// Command and arguments it expands to.
        target: Vec<String>,
    },
    /// List commands.
    Help,
    /// Leave the REPL.
    Exit,
}

impl Command {
    /// Parses a built-in command from its name and arguments.
    ///
    /// # Errors
    ///
    /// Returns an invalid command error for an unknown name or bad arguments.
    pub fn parse(name: &str, args: &[String]) -> Result<Self> {
        match name.to_lowercase().as_str() {
            "add" => match args {
                [path, keyword, term_type, ..] if keyword.eq_ignore_ascii_case("as") => {
                    Ok(Self::Add {
                        path: PathBuf::from(path),
                        term_type: TermType::new(term_type),
                    })
                }
                _ => Err(usage("add")),
            },
            "remove" => match args {
                [term_type, ..] => Ok(Self::Remove {
                    term_type: TermType::new(term_type),
                }),
                [] => Err(usage("remove")),
            },
            "new" => parse_requests(args).map(|requests| Self::New { requests }),
            "old" => Ok(Self::Old),
            "types" => Ok(Self::Types),
            "export" => match args {
                [path, ..] => Ok(Self::Export {
                    path: PathBuf::from(path),
                }),
                [] => Err(usage("export")),
            },
            "alias" => match args {
                [alias, keyword, target @ ..] if keyword.eq_ignore_ascii_case("as") && !target.is_empty() => {
                    let mut target = target.to_vec();
                    target[0] = target[0].to_lowercase();
                    Ok(Self::Alias {
                        name: alias.to_lowercase(),
                        target,
                    })
                }
                _ => Err(usage("alias")),
            },
            "help" => Ok(Self::Help),
            "exit" => Ok(Self::Exit),
            other => Err(Error::invalid_command(format!(
                "unknown command {other:?}; enter 'help' for a list of commands"
            ))),
        }
    }
}

fn parse_requests(args: &[String]) -> Result<Vec<GenerationRequest>> {
    if args.len() % 2 != 0 {
        return Err(usage("new"));
    }
    args.chunks_exact(2)
        .map(|pair| {
            let count = pair[0].parse::<usize>().map_err(|_| {
                Error::invalid_command(format!("expected a number of terms, got {:?}", pair[0]))
            })?;
            Ok(GenerationRequest::new(count, pair[1].as_str()))
        })
        .collect()
}

fn usage(name: &str) -> Error {
    let spec = COMMANDS.iter().find(|spec| spec.name == name);
    let synopsis = spec.map_or("", |spec| spec.usage);
    Error::invalid_command(format!("usage: {name} {synopsis}"))
}
