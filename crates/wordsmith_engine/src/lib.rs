//! Rule language, word blending, and vocabulary registry for Wordsmith.
//!
//! This crate provides:
//! - [`TermRegistry`] - Named vocabularies of terms and definition templates
//! - [`Rule`] - The placement rule language embedded in term keys
//! - [`CompiledCondition`] - Wildcard expansion and longest-window matching
//! - [`WordBlender`] - Folds terms one at a time into a word and definition
//! - [`GenerationSession`] - Draws distinct terms and drives a blender

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod blender;
pub mod matcher;
pub mod registry;
pub mod rule;
pub mod session;

pub use blender::WordBlender;
pub use matcher::{CompiledCondition, Direction, WildcardClasses, Window};
pub use registry::TermRegistry;
pub use rule::{Phoneme, Rule, RulePart, fold_definition};
pub use session::{GeneratedWord, GenerationRequest, GenerationSession};
