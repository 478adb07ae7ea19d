//! Golden test vectors for deterministic verification.
//!
//! These vectors pin the digest and the exact output bytes so that any
//! other implementation can be checked against this one.

use bitseed_generator::{schema_from_deploy_args, Engine, Result, SeedMaterial};
use bitseed_generator_core::ChainContext;

/// How a vector's seed material is composed.
#[derive(Debug, Clone, Copy)]
pub enum VectorSeed {
    /// Block hash and transaction hash.
    Chain {
        block_hash: &'static str,
        transaction_hash: &'static str,
    },
    /// An explicit seed string.
    Explicit(&'static str),
}

/// A golden test vector.
#[derive(Debug, Clone)]
pub struct GoldenVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// Seed composition.
    pub seed: VectorSeed,
    /// User identifier appended to the seed.
    pub user_identifier: &'static str,
    /// Attribute groups as JSON deploy arguments.
    pub deploy_args: &'static [&'static str],
    /// Expected digest.
    pub expected_digest: u32,
    /// Expected output (hex).
    pub expected_output: &'static str,
}

impl GoldenVector {
    /// Seed material for this vector.
    pub fn material(&self) -> SeedMaterial {
        match self.seed {
            VectorSeed::Chain {
                block_hash,
                transaction_hash,
            } => SeedMaterial::from_chain(
                &ChainContext::new(0, block_hash, transaction_hash),
                self.user_identifier,
            ),
            VectorSeed::Explicit(seed) => SeedMaterial::from_seed(seed, self.user_identifier),
        }
    }
}

/// Get all golden test vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    vec![
        GoldenVector {
            name: "Single range over short chain context",
            seed: VectorSeed::Chain {
                block_hash: "abc",
                transaction_hash: "xyz",
            },
            user_identifier: "token-1",
            deploy_args: &[r#"{"power":{"type":"range","data":{"min":1,"max":10}}}"#],
            expected_digest: 0xb2872e19,
            // {"id": "token-1", "power": 10}
            expected_output: "a262696467746f6b656e2d3165706f7765720a",
        },
        GoldenVector {
            name: "Explicit seed with two groups",
            seed: VectorSeed::Explicit("random-seed"),
            user_identifier: "user-input",
            deploy_args: &[
                r#"{"level1":{"type":"range","data":{"min":1,"max":1000}}}"#,
                r#"{"level2":{"type":"range","data":{"min":1,"max":1000}}}"#,
            ],
            expected_digest: 0x46e6b622,
            // {"id":"user-input","level1":27,"level2":27}
            expected_output: "7b226964223a22757365722d696e707574222c226c6576656c31223a32372c226c6576656c32223a32377d",
        },
        GoldenVector {
            name: "Empty schema",
            seed: VectorSeed::Explicit(""),
            user_identifier: "",
            deploy_args: &[],
            expected_digest: 0x811c9dc5,
            // {"id":""}
            expected_output: "7b226964223a22227d",
        },
    ]
}

/// Run a vector through the engine.
///
/// Chain vectors produce CBOR, explicit-seed vectors produce JSON.
pub fn generate_output_from_vector(vector: &GoldenVector) -> Result<Vec<u8>> {
    let engine = Engine::default();
    match vector.seed {
        VectorSeed::Chain {
            block_hash,
            transaction_hash,
        } => {
            let context = ChainContext::new(0, block_hash, transaction_hash);
            let schema =
                schema_from_deploy_args(vector.deploy_args, engine.config().chain_container)?;
            engine.generate_with_context(&context, vector.user_identifier, &schema)
        }
        VectorSeed::Explicit(seed) => {
            let schema =
                schema_from_deploy_args(vector.deploy_args, engine.config().seed_container)?;
            engine.generate_with_seed(seed, vector.user_identifier, &schema)
        }
    }
}

/// Check one vector against its expected digest and output.
///
/// Returns `(matches, actual_output_hex)`; generation errors propagate.
pub fn verify_vector(vector: &GoldenVector) -> Result<(bool, String)> {
    let digest_ok = vector.material().digest().value() == vector.expected_digest;
    let hex = hex::encode(generate_output_from_vector(vector)?);
    let matches = digest_ok && hex == vector.expected_output;
    Ok((matches, hex))
}

/// Check every vector against its expected digest and output.
///
/// Returns `(name, outcome)` per vector, where the outcome is
/// `(matches, actual_output_hex)` or the error that stopped generation.
pub fn verify_all_vectors() -> Vec<(String, Result<(bool, String)>)> {
    all_vectors()
        .iter()
        .map(|v| (v.name.to_string(), verify_vector(v)))
        .collect()
}
