//! REPL, CLI, vocabulary loading, and export for Wordsmith.
//!
//! This crate provides:
//! - [`Repl`] - Interactive command loop
//! - [`VocabularyLoader`] - Reads `key=value` vocabulary files
//! - [`Writer`] - Colored console output and lexicograph formatting
//! - [`Lexicon`] - History of generated words and flat export
//! - [`WordsmithConfig`] - Runtime configuration

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod command;
pub mod config;
pub mod editor;
pub mod highlight;
pub mod lexicon;
pub mod loader;
pub mod repl;
pub mod writer;

pub use command::{COMMANDS, Command, CommandSpec};
pub use config::WordsmithConfig;
pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use lexicon::Lexicon;
pub use loader::{VocabularyLoader, read_commands, tokenize};
pub use repl::Repl;
pub use writer::{Color, Writer};
