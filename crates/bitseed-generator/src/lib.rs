//! # Bitseed Generator
//!
//! The unified API for deterministic attribute generation: given seed
//! material and a declarative attribute schema, produce a reproducible,
//! independently verifiable set of resolved trait values.
//!
//! ## Overview
//!
//! - **Seed material**: chain data (block hash, transaction hash) or an
//!   explicit seed, followed by a user identifier
//! - **Digest**: FNV-1a 32-bit hash of the seed material
//! - **Schema**: an array of attribute groups; only `range` definitions resolve
//! - **Output**: `{"id": <user identifier>, <attribute>: <value>, ...}` in
//!   CBOR (chain-context mode) or JSON (explicit-seed mode)
//!
//! ## Usage
//!
//! ```rust
//! use bitseed_generator::{Engine, EngineConfig};
//!
//! let engine = Engine::new(EngineConfig::default());
//! let schema = br#"[{"power":{"type":"range","data":{"min":1,"max":10}}}]"#;
//!
//! let output = engine.generate_with_seed("abcxyz", "token-1", schema).unwrap();
//! assert_eq!(output, br#"{"id":"token-1","power":10}"#);
//!
//! assert!(engine.verify_with_seed("abcxyz", "token-1", schema, &output).unwrap());
//! ```
//!
//! Chain-context mode reads the context published once per process with
//! [`initialize_context`], or takes one explicitly:
//!
//! ```rust
//! use bitseed_generator::{ChainContext, Engine};
//!
//! let ctx = ChainContext::new(840_000, "abc", "xyz");
//! // [{"power": {"type": "range", "data": {"min": 1, "max": 10}}}] as CBOR
//! let schema = [
//!     0x81, 0xa1, 0x65, b'p', b'o', b'w', b'e', b'r', 0xa2, 0x64, b't', b'y', b'p', b'e',
//!     0x65, b'r', b'a', b'n', b'g', b'e', 0x64, b'd', b'a', b't', b'a', 0xa2, 0x63, b'm',
//!     b'i', b'n', 0x01, 0x63, b'm', b'a', b'x', 0x0a,
//! ];
//! let output = Engine::default()
//!     .generate_with_context(&ctx, "token-1", &schema)
//!     .unwrap();
//! assert_eq!(output[0], 0xa2); // a two-entry CBOR map
//! ```
//!
//! ## Re-exports
//!
//! - `bitseed_generator::core` - Core primitives (hasher, schema, resolver, codecs)

pub mod context;
pub mod deploy;
pub mod engine;
pub mod error;
pub mod generator;

// Re-export component crates
pub use bitseed_generator_core as core;

// Re-export main types for convenience
pub use context::{chain_context, initialize_context, publish_context, require_chain_context};
pub use deploy::schema_from_deploy_args;
pub use engine::{Engine, EngineConfig, DEFAULT_MAX_SCHEMA_BYTES};
pub use error::{GeneratorError, Result};
pub use generator::{Generator, SeedSource, StaticGenerator};

// Re-export commonly used core types
pub use bitseed_generator_core::{
    ChainContext, Container, CoreError, Digest, ResolvedAttributeSet, SeedMaterial,
};
