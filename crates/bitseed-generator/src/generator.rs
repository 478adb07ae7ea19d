//! The `Generator` abstraction used by inscription hosts.
//!
//! A host mints by calling [`Generator::inscribe_generate`] and checks a
//! claimed output with [`Generator::inscribe_verify`]. Indexers that derive
//! attributes after the fact call [`Generator::indexer_generate`] when the
//! generator supports it.

use bitseed_generator_core::{ChainContext, SeedMaterial};

use crate::engine::Engine;
use crate::error::{GeneratorError, Result};

/// Where the seed material comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedSource {
    /// Chain-context mode: block hash and transaction hash.
    Chain(ChainContext),
    /// Explicit-seed mode: a caller-provided seed string.
    Explicit(String),
}

impl SeedSource {
    /// Build seed material for a user identifier.
    pub fn material(&self, user_identifier: &str) -> SeedMaterial {
        match self {
            SeedSource::Chain(context) => context.seed_material(user_identifier),
            SeedSource::Explicit(seed) => SeedMaterial::from_seed(seed, user_identifier),
        }
    }
}

impl From<ChainContext> for SeedSource {
    fn from(context: ChainContext) -> Self {
        SeedSource::Chain(context)
    }
}

/// A deterministic attribute generator.
pub trait Generator {
    /// Produce encoded output for a mint.
    fn inscribe_generate(&self, seed: &SeedSource, user_input: &str, schema: &[u8])
        -> Result<Vec<u8>>;

    /// Check that `expected` is exactly what this generator produces.
    fn inscribe_verify(
        &self,
        seed: &SeedSource,
        user_input: &str,
        schema: &[u8],
        expected: &[u8],
    ) -> Result<bool> {
        let output = self.inscribe_generate(seed, user_input, schema)?;
        Ok(output == expected)
    }

    /// Whether [`Generator::indexer_generate`] is available.
    fn has_indexer_generate(&self) -> bool {
        false
    }

    /// Produce encoded output keyed by an inscription id.
    fn indexer_generate(
        &self,
        _context: &ChainContext,
        _inscription_id: &str,
        _schema: &[u8],
    ) -> Result<Vec<u8>> {
        Err(GeneratorError::IndexerUnsupported)
    }
}

impl Generator for Engine {
    fn inscribe_generate(
        &self,
        seed: &SeedSource,
        user_input: &str,
        schema: &[u8],
    ) -> Result<Vec<u8>> {
        match seed {
            SeedSource::Chain(context) => self.generate_with_context(context, user_input, schema),
            SeedSource::Explicit(seed) => self.generate_with_seed(seed, user_input, schema),
        }
    }

    fn has_indexer_generate(&self) -> bool {
        true
    }

    fn indexer_generate(
        &self,
        context: &ChainContext,
        inscription_id: &str,
        schema: &[u8],
    ) -> Result<Vec<u8>> {
        self.indexer_generate_with_context(context, inscription_id, schema)
    }
}

/// A generator that returns fixed outputs regardless of input.
///
/// Useful for hosts that need a generator stand-in in tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticGenerator {
    pub inscribe_output: Vec<u8>,
    pub indexer_output: Option<Vec<u8>>,
}

impl StaticGenerator {
    /// Create a static generator.
    pub fn new(inscribe_output: Vec<u8>, indexer_output: Option<Vec<u8>>) -> Self {
        Self {
            inscribe_output,
            indexer_output,
        }
    }
}

impl Generator for StaticGenerator {
    fn inscribe_generate(
        &self,
        _seed: &SeedSource,
        _user_input: &str,
        _schema: &[u8],
    ) -> Result<Vec<u8>> {
        Ok(self.inscribe_output.clone())
    }

    fn inscribe_verify(
        &self,
        _seed: &SeedSource,
        _user_input: &str,
        _schema: &[u8],
        expected: &[u8],
    ) -> Result<bool> {
        Ok(self.inscribe_output == expected)
    }

    fn has_indexer_generate(&self) -> bool {
        self.indexer_output.is_some()
    }

    fn indexer_generate(
        &self,
        _context: &ChainContext,
        _inscription_id: &str,
        _schema: &[u8],
    ) -> Result<Vec<u8>> {
        self.indexer_output
            .clone()
            .ok_or(GeneratorError::IndexerUnsupported)
    }
}
