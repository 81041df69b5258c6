//! Core types and errors for Wordsmith.
//!
//! This crate provides:
//! - [`TermType`] - Normalized vocabulary keys
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod types;

pub use error::{Error, ErrorContext, ErrorKind};
pub use types::TermType;

/// Result type alias using the Wordsmith error type.
pub type Result<T> = std::result::Result<T, Error>;
