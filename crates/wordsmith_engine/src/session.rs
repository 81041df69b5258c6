//! Generation sessions.
//!
//! A session turns an ordered list of `(count, vocabulary)` requests into
//! one synthesized word. Each request draws `count` distinct terms from its
//! vocabulary; all draws are pushed onto the session's blender in request
//! order and the finished word is pulled at the end.

use std::collections::HashSet;
use std::fmt;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, trace};
use wordsmith_foundation::{Error, ErrorKind, Result, TermType};

use crate::blender::WordBlender;
use crate::registry::TermRegistry;

/// Draw `count` distinct terms from one vocabulary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationRequest {
    /// Number of distinct terms to draw.
    pub count: usize,
    /// Vocabulary to draw from.
    pub term_type: TermType,
}

impl GenerationRequest {
    /// Creates a request.
    #[must_use]
    pub fn new(count: usize, term_type: impl Into<TermType>) -> Self {
        Self {
            count,
            term_type: term_type.into(),
        }
    }
}

/// A synthesized word and its definition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedWord {
    /// The blended word.
    pub word: String,
    /// The folded definition.
    pub definition: String,
}

impl fmt::Display for GeneratedWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.word, self.definition)
    }
}

/// Drives a [`WordBlender`] with random draws from a [`TermRegistry`].
pub struct GenerationSession {
    blender: WordBlender,
    rng: ChaCha8Rng,
}

impl GenerationSession {
    /// Creates a session seeded from the operating system.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(ChaCha8Rng::from_entropy())
    }

    /// Creates a session whose draws are reproducible from `seed`.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    fn with_rng(rng: ChaCha8Rng) -> Self {
        Self {
            blender: WordBlender::new(),
            rng,
        }
    }

    /// The session's blender.
    #[must_use]
    pub const fn blender(&self) -> &WordBlender {
        &self.blender
    }

    /// Mutable access to the blender, e.g. to register wildcard classes.
    pub fn blender_mut(&mut self) -> &mut WordBlender {
        &mut self.blender
    }

    /// The session's random number generator.
    pub fn rng_mut(&mut self) -> &mut ChaCha8Rng {
        &mut self.rng
    }

    /// Generates one word.
    ///
    /// Requests are validated before anything is drawn. Any failure aborts
    /// the generation and leaves the blender empty.
    ///
    /// # Errors
    ///
    /// Returns a not found error for an unregistered vocabulary, an exhausted
    /// error when a vocabulary has fewer terms than requested, an empty
    /// generation error when no terms are requested at all, or any error
    /// raised while blending.
    pub fn generate(
        &mut self,
        registry: &TermRegistry,
        requests: &[GenerationRequest],
    ) -> Result<GeneratedWord> {
        for request in requests {
            let available = registry
                .len(&request.term_type)
                .ok_or_else(|| Error::vocabulary_not_found(&request.term_type))?;
            if available < request.count {
                return Err(Error::vocabulary_exhausted(
                    &request.term_type,
                    request.count,
                    available,
                ));
            }
        }

        self.blender.pull();
        let result = self.blend_all(registry, requests);
        let pulled = self.blender.pull();

        result?;
        let (word, definition) = pulled.ok_or_else(|| Error::new(ErrorKind::EmptyGeneration))?;
        debug!(%word, "word generated");
        Ok(GeneratedWord { word, definition })
    }

    fn blend_all(&mut self, registry: &TermRegistry, requests: &[GenerationRequest]) -> Result<()> {
        for request in requests {
            let mut used = HashSet::with_capacity(request.count);
            while used.len() < request.count {
                let (term, meaning) = registry.draw_random(&request.term_type, &mut self.rng)?;
                if !used.insert(term) {
                    trace!(term, "repeat draw rejected");
                    continue;
                }
                trace!(vocabulary = %request.term_type, term, "term drawn");
                self.blender.push(term, meaning)?;
            }
        }
        Ok(())
    }
}

impl Default for GenerationSession {
    fn default() -> Self {
        Self::new()
    }
}
