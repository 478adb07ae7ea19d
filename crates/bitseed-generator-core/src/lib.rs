//! # Bitseed Generator Core
//!
//! Pure primitives for the Bitseed generator: hashing, seed material, schema
//! interpretation, attribute resolution, and canonical encoding.
//!
//! This crate contains no I/O and no global state. Every function is a pure
//! computation over byte buffers, so two conforming implementations derive
//! identical outputs from identical inputs.
//!
//! ## Pipeline
//!
//! ```text
//! SeedMaterial --fnv1a_32--> Digest ─┐
//!                                     ├─ resolve ─> ResolvedAttributeSet ─ encode_resolved ─> bytes
//! schema bytes --parse_schema--> AttributeSchema ─┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use bitseed_generator_core::{
//!     encode_resolved, parse_schema, resolve, ChainContext, Container,
//! };
//!
//! let ctx = ChainContext::new(1, "abc", "xyz");
//! let digest = ctx.seed_material("token-1").digest();
//! let schema = parse_schema(
//!     br#"[{"power":{"type":"range","data":{"min":1,"max":10}}}]"#,
//!     Container::Text,
//! )
//! .unwrap();
//! let resolved = resolve(digest, &schema, "token-1").unwrap();
//! let bytes = encode_resolved(&resolved, Container::Text).unwrap();
//! assert_eq!(bytes, br#"{"id":"token-1","power":10}"#);
//! ```

pub mod canonical;
pub mod error;
pub mod hash;
pub mod resolve;
pub mod schema;
pub mod seed;
pub mod types;

pub use canonical::{decode_container, decode_resolved, encode_resolved, schema_bytes};
pub use error::{CoreError, Result};
pub use hash::{fnv1a_32, Fnv1a32};
pub use resolve::{pick_in_range, resolve, ResolvedAttributeSet, ResolvedField, ID_KEY};
pub use schema::{
    parse_schema, AttributeDefinition, AttributeGroup, AttributeSchema, IgnoreReason, RangeSpec,
    SchemaEntry,
};
pub use seed::{ChainContext, SeedBuilder, SeedMaterial};
pub use types::{Container, Digest};
