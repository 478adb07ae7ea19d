//! The Engine: unified API for deterministic attribute generation.
//!
//! The Engine runs the full pipeline (seed material, digest, schema parse,
//! resolution, encoding) and the verification pipeline built on top of it.

use bitseed_generator_core::{
    encode_resolved, parse_schema, resolve, ChainContext, Container, ResolvedAttributeSet,
    SeedMaterial,
};

use crate::context::require_chain_context;
use crate::error::{GeneratorError, Result};

/// Default upper bound on schema buffer size.
pub const DEFAULT_MAX_SCHEMA_BYTES: usize = 64 * 1024;

/// Configuration for the Engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Container used for schema input and output in chain-context mode.
    pub chain_container: Container,
    /// Container used for schema input and output in explicit-seed mode.
    pub seed_container: Container,
    /// Schema buffers larger than this are rejected before decoding.
    pub max_schema_bytes: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            chain_container: Container::Binary,
            seed_container: Container::Text,
            max_schema_bytes: DEFAULT_MAX_SCHEMA_BYTES,
        }
    }
}

/// The main Engine struct.
///
/// Stateless apart from its configuration; every call is independent and
/// retains nothing once it returns.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    /// Create a new engine.
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Get the configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Resolution
    // ─────────────────────────────────────────────────────────────────────────

    /// Resolve a schema against arbitrary seed material.
    pub fn resolve(
        &self,
        material: &SeedMaterial,
        user_identifier: &str,
        schema: &[u8],
        container: Container,
    ) -> Result<ResolvedAttributeSet> {
        if schema.len() > self.config.max_schema_bytes {
            return Err(GeneratorError::SchemaTooLarge {
                len: schema.len(),
                max: self.config.max_schema_bytes,
            });
        }

        let digest = material.digest();
        tracing::debug!(%digest, user_identifier, %container, "resolving attributes");

        let schema = parse_schema(schema, container)?;
        Ok(resolve(digest, &schema, user_identifier)?)
    }

    /// Resolve in chain-context mode with an explicit context.
    pub fn resolve_with_context(
        &self,
        context: &ChainContext,
        user_identifier: &str,
        schema: &[u8],
    ) -> Result<ResolvedAttributeSet> {
        let material = context.seed_material(user_identifier);
        self.resolve(&material, user_identifier, schema, self.config.chain_container)
    }

    /// Resolve in explicit-seed mode.
    pub fn resolve_with_seed(
        &self,
        seed: &str,
        user_identifier: &str,
        schema: &[u8],
    ) -> Result<ResolvedAttributeSet> {
        let material = SeedMaterial::from_seed(seed, user_identifier);
        self.resolve(&material, user_identifier, schema, self.config.seed_container)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Generation
    // ─────────────────────────────────────────────────────────────────────────

    /// Generate output in chain-context mode with an explicit context.
    pub fn generate_with_context(
        &self,
        context: &ChainContext,
        user_identifier: &str,
        schema: &[u8],
    ) -> Result<Vec<u8>> {
        let resolved = self.resolve_with_context(context, user_identifier, schema)?;
        self.encode(&resolved, self.config.chain_container)
    }

    /// Generate output in chain-context mode using the published context.
    pub fn generate(&self, user_identifier: &str, schema: &[u8]) -> Result<Vec<u8>> {
        let context = require_chain_context()?;
        self.generate_with_context(context, user_identifier, schema)
    }

    /// Generate output in explicit-seed mode.
    pub fn generate_with_seed(
        &self,
        seed: &str,
        user_identifier: &str,
        schema: &[u8],
    ) -> Result<Vec<u8>> {
        let resolved = self.resolve_with_seed(seed, user_identifier, schema)?;
        self.encode(&resolved, self.config.seed_container)
    }

    /// Indexer entry point: chain-context generation keyed by inscription id.
    pub fn indexer_generate_with_context(
        &self,
        context: &ChainContext,
        inscription_id: &str,
        schema: &[u8],
    ) -> Result<Vec<u8>> {
        self.generate_with_context(context, inscription_id, schema)
    }

    /// Indexer entry point using the published context.
    pub fn indexer_generate(&self, inscription_id: &str, schema: &[u8]) -> Result<Vec<u8>> {
        self.generate(inscription_id, schema)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Verification
    // ─────────────────────────────────────────────────────────────────────────

    /// Verify output produced in chain-context mode.
    ///
    /// Returns `true` only on an exact byte match.
    pub fn verify_with_context(
        &self,
        context: &ChainContext,
        user_identifier: &str,
        schema: &[u8],
        expected: &[u8],
    ) -> Result<bool> {
        let actual = self.generate_with_context(context, user_identifier, schema)?;
        Ok(report_match(user_identifier, &actual, expected))
    }

    /// Verify chain-context output using the published context.
    pub fn verify(&self, user_identifier: &str, schema: &[u8], expected: &[u8]) -> Result<bool> {
        let context = require_chain_context()?;
        self.verify_with_context(context, user_identifier, schema, expected)
    }

    /// Verify output produced in explicit-seed mode.
    pub fn verify_with_seed(
        &self,
        seed: &str,
        user_identifier: &str,
        schema: &[u8],
        expected: &[u8],
    ) -> Result<bool> {
        let actual = self.generate_with_seed(seed, user_identifier, schema)?;
        Ok(report_match(user_identifier, &actual, expected))
    }

    fn encode(&self, resolved: &ResolvedAttributeSet, container: Container) -> Result<Vec<u8>> {
        encode_resolved(resolved, container).map_err(|e| {
            tracing::error!(error = %e, "failed to encode resolved attributes");
            GeneratorError::from(e)
        })
    }
}

fn report_match(user_identifier: &str, actual: &[u8], expected: &[u8]) -> bool {
    let matches = actual == expected;
    if !matches {
        tracing::debug!(
            user_identifier,
            actual_len = actual.len(),
            expected_len = expected.len(),
            "verification mismatch"
        );
    }
    matches
}
