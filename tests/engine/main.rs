//! Integration tests for Layer 1: Engine
//!
//! Tests for word blending, the vocabulary registry, and generation sessions.

mod registry;
mod session;
