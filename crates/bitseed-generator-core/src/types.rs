//! Strong type definitions for the Bitseed generator.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::hash::fnv1a_32;

/// A 32-bit digest of seed material, computed as FNV-1a(seed bytes).
///
/// The digest is the only source of variation during resolution: the same
/// digest and schema always produce the same attribute values.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Digest(pub u32);

impl Digest {
    /// Hash the given bytes.
    pub fn of(data: &[u8]) -> Self {
        Self(fnv1a_32(data))
    }

    /// Get the raw value.
    pub const fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({:08x})", self.0)
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08x}", self.0)
    }
}

impl From<u32> for Digest {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// The encoding family used for schema input and resolved output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Container {
    /// Compact self-describing binary (CBOR).
    Binary,
    /// Human-readable text (JSON).
    Text,
}

impl fmt::Display for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Container::Binary => f.write_str("cbor"),
            Container::Text => f.write_str("json"),
        }
    }
}
