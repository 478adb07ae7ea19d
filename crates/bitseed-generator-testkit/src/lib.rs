//! # Bitseed Generator Testkit
//!
//! Testing utilities for the Bitseed generator.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Known inputs with expected digests and outputs for cross-implementation verification
//! - **Generators**: Proptest strategies for schemas and seeds
//! - **Fixtures**: Helper structs for setting up test scenarios
//!
//! ## Golden Vectors
//!
//! ```rust
//! use bitseed_generator_testkit::vectors::{all_vectors, generate_output_from_vector};
//!
//! for vector in all_vectors() {
//!     let output = generate_output_from_vector(&vector).unwrap();
//!     println!("{}: {}", vector.name, hex::encode(output));
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use bitseed_generator_testkit::generators::{SchemaParams, resolve_params};
//!
//! proptest! {
//!     #[test]
//!     fn resolution_is_deterministic(params: SchemaParams) {
//!         prop_assert_eq!(resolve_params(&params), resolve_params(&params));
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use bitseed_generator_testkit::fixtures::TestFixture;
//!
//! let fixture = TestFixture::new();
//! let output = fixture
//!     .mint("token-1", &[r#"{"power":{"type":"range","data":{"min":1,"max":10}}}"#])
//!     .unwrap();
//! assert!(fixture.verify_mint("token-1", &[r#"{"power":{"type":"range","data":{"min":1,"max":10}}}"#], &output).unwrap());
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{multi_user_identifiers, TestFixture};
pub use generators::{resolve_params, SchemaParams};
pub use vectors::{
    all_vectors, generate_output_from_vector, verify_all_vectors, verify_vector, GoldenVector,
};
