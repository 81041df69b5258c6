//! Wordsmith - Rule-driven generator of invented words and their definitions
//!
//! This crate re-exports all layers of the Wordsmith system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: wordsmith_runtime    — REPL, CLI, vocabulary files, export
//! Layer 1: wordsmith_engine     — Rule language, blending, vocabulary registry
//! Layer 0: wordsmith_foundation — Core types (TermType, Error)
//! ```

pub use wordsmith_engine as engine;
pub use wordsmith_foundation as foundation;
pub use wordsmith_runtime as runtime;
