//! Seed material: the byte sequence fed to the hasher.
//!
//! Two compositions are defined, and no others:
//!
//! - chain-context mode: `block_hash || transaction_hash || user_identifier`
//! - explicit-seed mode: `seed || user_identifier`
//!
//! Components are concatenated byte for byte with no separators. Callers
//! must ensure component boundaries never need disambiguation: `("ab", "c")`
//! and `("a", "bc")` produce the same material and therefore the same digest.

use serde::{Deserialize, Serialize};

use crate::hash::Fnv1a32;
use crate::types::Digest;

/// Chain data captured when an inscription is created.
///
/// The block number is carried for the host's benefit; it does not
/// participate in seeding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChainContext {
    pub block_number: u32,
    pub block_hash: String,
    pub transaction_hash: String,
}

impl ChainContext {
    /// Create a new chain context.
    pub fn new(
        block_number: u32,
        block_hash: impl Into<String>,
        transaction_hash: impl Into<String>,
    ) -> Self {
        Self {
            block_number,
            block_hash: block_hash.into(),
            transaction_hash: transaction_hash.into(),
        }
    }

    /// Build seed material for a user identifier in chain-context mode.
    pub fn seed_material(&self, user_identifier: &str) -> SeedMaterial {
        SeedMaterial::from_chain(self, user_identifier)
    }
}

/// Ordered, immutable seed bytes for one resolution call.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SeedMaterial(Vec<u8>);

impl SeedMaterial {
    /// Chain-context mode.
    pub fn from_chain(context: &ChainContext, user_identifier: &str) -> Self {
        SeedBuilder::new()
            .part(context.block_hash.as_bytes())
            .part(context.transaction_hash.as_bytes())
            .finish(user_identifier)
    }

    /// Explicit-seed mode.
    pub fn from_seed(seed: &str, user_identifier: &str) -> Self {
        SeedBuilder::new().part(seed.as_bytes()).finish(user_identifier)
    }

    /// Get the raw bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Number of bytes of material.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if no bytes were supplied at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Hash the material.
    pub fn digest(&self) -> Digest {
        let mut hasher = Fnv1a32::new();
        hasher.update(&self.0);
        Digest(hasher.finish())
    }
}

impl AsRef<[u8]> for SeedMaterial {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Builder for seed material.
///
/// Context parts are appended in call order; the user identifier always
/// comes last.
#[derive(Debug, Default)]
pub struct SeedBuilder {
    buf: Vec<u8>,
}

impl SeedBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a context component.
    pub fn part(mut self, bytes: &[u8]) -> Self {
        self.buf.extend_from_slice(bytes);
        self
    }

    /// Append the user identifier and freeze the material.
    pub fn finish(mut self, user_identifier: &str) -> SeedMaterial {
        self.buf.extend_from_slice(user_identifier.as_bytes());
        SeedMaterial(self.buf)
    }
}
