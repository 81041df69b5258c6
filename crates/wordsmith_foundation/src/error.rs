//! Error types for the Wordsmith system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

use crate::types::TermType;

/// The main error type for Wordsmith operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a vocabulary not found error.
    #[must_use]
    pub fn vocabulary_not_found(term_type: &TermType) -> Self {
        Self::new(ErrorKind::VocabularyNotFound(term_type.clone()))
    }

    /// Creates a term not found error.
    #[must_use]
    pub fn term_not_found(term: impl Into<String>) -> Self {
        Self::new(ErrorKind::TermNotFound(term.into()))
    }

    /// Creates an error for a vocabulary too small to satisfy a distinct draw.
    #[must_use]
    pub fn vocabulary_exhausted(term_type: &TermType, requested: usize, available: usize) -> Self {
        Self::new(ErrorKind::VocabularyExhausted {
            vocabulary: term_type.clone(),
            requested,
            available,
        })
    }

    /// Creates an error for a rule with no part matching the current word.
    #[must_use]
    pub fn no_applicable_phoneme(rule: impl Into<String>) -> Self {
        Self::new(ErrorKind::NoApplicablePhoneme { rule: rule.into() })
    }

    /// Creates a malformed rule error.
    #[must_use]
    pub fn malformed_rule(rule: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::new(ErrorKind::MalformedRule {
            rule: rule.into(),
            reason: reason.into(),
        })
    }

    /// Creates an invalid command error.
    #[must_use]
    pub fn invalid_command(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidCommand(message.into()))
    }

    /// Creates an I/O error for the given path.
    #[must_use]
    pub fn io(path: impl Into<String>, err: &std::io::Error) -> Self {
        Self::new(ErrorKind::Io {
            path: path.into(),
            message: err.to_string(),
        })
    }

    /// Returns true for errors that reference something not registered.
    ///
    /// An exhausted vocabulary counts: the terms a draw asked for do not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::VocabularyNotFound(_)
                | ErrorKind::TermNotFound(_)
                | ErrorKind::VocabularyExhausted { .. }
        )
    }

    /// Returns true if no part of a rule applied to the current word.
    #[must_use]
    pub fn is_rule_error(&self) -> bool {
        matches!(self.kind, ErrorKind::NoApplicablePhoneme { .. })
    }

    /// Returns true for malformed rule or vocabulary syntax.
    #[must_use]
    pub fn is_config_error(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::MalformedRule { .. } | ErrorKind::MalformedLine { .. }
        )
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Vocabulary type is not registered.
    #[error("vocabulary not found: {0}")]
    VocabularyNotFound(TermType),

    /// Term is not registered in any vocabulary.
    #[error("term not found: {0:?}")]
    TermNotFound(String),

    /// Vocabulary holds fewer distinct terms than were requested.
    #[error("vocabulary {vocabulary} has {available} terms, {requested} requested")]
    VocabularyExhausted {
        /// The vocabulary that was drawn from.
        vocabulary: TermType,
        /// Number of distinct terms requested.
        requested: usize,
        /// Number of terms the vocabulary holds.
        available: usize,
    },

    /// No part of a rule matched and no fallback part exists.
    #[error("no applicable phoneme in rule {rule:?}")]
    NoApplicablePhoneme {
        /// The raw rule string.
        rule: String,
    },

    /// Rule string could not be split into condition and phoneme.
    #[error("malformed rule {rule:?}: {reason}")]
    MalformedRule {
        /// The raw rule string.
        rule: String,
        /// What was wrong with it.
        reason: String,
    },

    /// Vocabulary file line is not a `key=value` pair.
    #[error("malformed line: {line:?}")]
    MalformedLine {
        /// The offending line, trimmed.
        line: String,
    },

    /// A generation request drew no terms at all.
    #[error("nothing to generate: no terms requested")]
    EmptyGeneration,

    /// Command was not recognized or had bad arguments.
    #[error("invalid command: {0}")]
    InvalidCommand(String),

    /// Alias would shadow a command or points at nothing.
    #[error("invalid alias: {0}")]
    InvalidAlias(String),

    /// Reading or writing a file failed.
    #[error("{path}: {message}")]
    Io {
        /// The file involved.
        path: String,
        /// Underlying I/O error message.
        message: String,
    },

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Source file or command name.
    pub source: Option<String>,
    /// Line number in source.
    pub line: Option<usize>,
    /// Stack of commands or aliases being executed.
    pub stack: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source location.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the line number.
    #[must_use]
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// Adds a stack frame.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.stack.push(frame.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "at {source}")?;
            if let Some(line) = self.line {
                write!(f, ":{line}")?;
            }
        }
        if !self.stack.is_empty() {
            writeln!(f)?;
            for frame in &self.stack {
                writeln!(f, "  in {frame}")?;
            }
        }
        Ok(())
    }
}
