//! Golden test vectors for cross-implementation verification.
//!
//! Every implementation of the generator must produce identical:
//! - seed material
//! - digest
//! - output bytes (CBOR in chain-context mode, JSON in explicit-seed mode)

use bitseed_generator::{
    schema_from_deploy_args, ChainContext, Container, CoreError, Engine, GeneratorError,
    SeedMaterial,
};
use serde::{Deserialize, Serialize};

const GENESIS_BLOCK_HASH: &str =
    "000000000019d6689c085ae165831e934ff763ae46a2a6c172b3f1b60a8ce26f";
const GENESIS_TX_HASH: &str = "4a5e1e4baab89f3a32518a88c31bc87f618f76673e2cc77ab2127b7afdeda33b";

/// A single golden test vector.
#[derive(Debug, Serialize, Deserialize)]
pub struct GoldenVector {
    pub name: String,
    pub description: String,

    // Inputs
    pub block_hash: Option<String>,
    pub transaction_hash: Option<String>,
    pub seed: Option<String>,
    pub user_identifier: String,
    pub deploy_args: Vec<String>,

    // Derived outputs
    pub seed_material: String, // hex
    pub digest: String,        // 8 hex digits
    pub output: String,        // hex
}

fn chain_vector(
    name: &str,
    description: &str,
    context: &ChainContext,
    user_identifier: &str,
    deploy_args: &[&str],
) -> GoldenVector {
    let schema = schema_from_deploy_args(deploy_args, Container::Binary).unwrap();
    let material = context.seed_material(user_identifier);
    let output = Engine::default()
        .generate_with_context(context, user_identifier, &schema)
        .unwrap();

    GoldenVector {
        name: name.to_string(),
        description: description.to_string(),
        block_hash: Some(context.block_hash.clone()),
        transaction_hash: Some(context.transaction_hash.clone()),
        seed: None,
        user_identifier: user_identifier.to_string(),
        deploy_args: deploy_args.iter().map(|a| a.to_string()).collect(),
        seed_material: hex::encode(material.as_bytes()),
        digest: material.digest().to_string(),
        output: hex::encode(output),
    }
}

fn seed_vector(
    name: &str,
    description: &str,
    seed: &str,
    user_identifier: &str,
    deploy_args: &[&str],
) -> GoldenVector {
    let schema = schema_from_deploy_args(deploy_args, Container::Text).unwrap();
    let material = SeedMaterial::from_seed(seed, user_identifier);
    let output = Engine::default()
        .generate_with_seed(seed, user_identifier, &schema)
        .unwrap();

    GoldenVector {
        name: name.to_string(),
        description: description.to_string(),
        block_hash: None,
        transaction_hash: None,
        seed: Some(seed.to_string()),
        user_identifier: user_identifier.to_string(),
        deploy_args: deploy_args.iter().map(|a| a.to_string()).collect(),
        seed_material: hex::encode(material.as_bytes()),
        digest: material.digest().to_string(),
        output: hex::encode(output),
    }
}

fn generate_all_vectors() -> Vec<GoldenVector> {
    let short = ChainContext::new(1, "abc", "xyz");
    let genesis = ChainContext::new(0, GENESIS_BLOCK_HASH, GENESIS_TX_HASH);

    vec![
        // Vector 1: the worked example
        chain_vector(
            "reference_example",
            "Single range 1..=10 over abc || xyz || token-1",
            &short,
            "token-1",
            &[r#"{"power":{"type":"range","data":{"min":1,"max":10}}}"#],
        ),
        // Vector 2: genesis block data
        chain_vector(
            "genesis_height",
            "Range 1..=1000 seeded by the genesis block and coinbase transaction",
            &genesis,
            "test user input",
            &[r#"{"height":{"type":"range","data":{"min":1,"max":1000}}}"#],
        ),
        // Vector 3: indexer-style identifier
        chain_vector(
            "inscription_id",
            "Range 0..=99 keyed by an inscription id",
            &short,
            "inscription-0",
            &[r#"{"rarity":{"type":"range","data":{"min":0,"max":99}}}"#],
        ),
        // Vector 4: explicit seed with two groups
        seed_vector(
            "explicit_two_groups",
            "Two groups resolved from one digest",
            "random-seed",
            "user-input",
            &[
                r#"{"level1":{"type":"range","data":{"min":1,"max":1000}}}"#,
                r#"{"level2":{"type":"range","data":{"min":1,"max":1000}}}"#,
            ],
        ),
        // Vector 5: nothing resolvable
        seed_vector(
            "only_id",
            "Unsupported types and malformed entries resolve to id only",
            "seed",
            "x",
            &[r#"{"color":{"type":"enum","data":["red"]},"junk":1}"#],
        ),
    ]
}

#[test]
fn test_expected_outputs() {
    let vectors = generate_all_vectors();
    let expected: Vec<(&str, &str, String)> = vec![
        (
            "reference_example",
            "b2872e19",
            "a262696467746f6b656e2d3165706f7765720a".to_string(),
        ),
        (
            "genesis_height",
            "63728fdb",
            "a26668656967687419013c6269646f74657374207573657220696e707574".to_string(),
        ),
        (
            "inscription_id",
            "abe2cc75",
            "a26269646d696e736372697074696f6e2d30667261726974790d".to_string(),
        ),
        (
            "explicit_two_groups",
            "46e6b622",
            hex::encode(br#"{"id":"user-input","level1":27,"level2":27}"#),
        ),
        ("only_id", "31c841bc", hex::encode(br#"{"id":"x"}"#)),
    ];

    assert_eq!(vectors.len(), expected.len());
    for (v, (name, digest, output)) in vectors.iter().zip(expected.iter()) {
        assert_eq!(v.name, *name);
        assert_eq!(v.digest, *digest, "digest mismatch for {}", v.name);
        assert_eq!(&v.output, output, "output mismatch for {}", v.name);
    }
}

#[test]
fn test_vectors_deterministic() {
    let v1 = generate_all_vectors();
    let v2 = generate_all_vectors();

    for (a, b) in v1.iter().zip(v2.iter()) {
        assert_eq!(a.seed_material, b.seed_material, "seed mismatch for {}", a.name);
        assert_eq!(a.digest, b.digest, "digest mismatch for {}", a.name);
        assert_eq!(a.output, b.output, "output mismatch for {}", a.name);
    }
}

#[test]
fn test_vectors_verify() {
    let engine = Engine::default();

    for v in generate_all_vectors() {
        let output = hex::decode(&v.output).unwrap();
        let args: Vec<&str> = v.deploy_args.iter().map(String::as_str).collect();

        let verified = match (&v.block_hash, &v.transaction_hash, &v.seed) {
            (Some(block_hash), Some(tx_hash), None) => {
                let ctx = ChainContext::new(0, block_hash.as_str(), tx_hash.as_str());
                let schema = schema_from_deploy_args(&args, Container::Binary).unwrap();
                engine
                    .verify_with_context(&ctx, &v.user_identifier, &schema, &output)
                    .unwrap()
            }
            (None, None, Some(seed)) => {
                let schema = schema_from_deploy_args(&args, Container::Text).unwrap();
                engine
                    .verify_with_seed(seed, &v.user_identifier, &schema, &output)
                    .unwrap()
            }
            _ => panic!("vector {} has an inconsistent seed source", v.name),
        };
        assert!(verified, "verify failed for {}", v.name);
    }
}

#[test]
fn print_golden_vectors_json() {
    #[derive(Serialize)]
    struct VectorFile {
        version: String,
        description: String,
        vectors: Vec<GoldenVector>,
    }

    let file = VectorFile {
        version: "0.1.0".to_string(),
        description: "Golden test vectors for the Bitseed generator. Every implementation must produce identical outputs.".to_string(),
        vectors: generate_all_vectors(),
    };

    let json = serde_json::to_string_pretty(&file).unwrap();
    println!("{}", json);
}

// =============================================================================
// REJECTION TEST VECTORS
// These test that invalid inputs are properly rejected.
// =============================================================================

#[test]
fn test_reject_inverted_range() {
    let schema = br#"[{"bad":{"type":"range","data":{"min":10,"max":1}}}]"#;
    let result = Engine::default().generate_with_seed("seed", "u", schema);
    assert!(
        matches!(
            result,
            Err(GeneratorError::Core(CoreError::InvalidRange { ref key, min: 10, max: 1 })) if key == "bad"
        ),
        "must reject max < min"
    );
}

#[test]
fn test_reject_bound_above_u32() {
    let schema = br#"[{"big":{"type":"range","data":{"min":0,"max":4294967296}}}]"#;
    let result = Engine::default().generate_with_seed("seed", "u", schema);
    assert!(
        matches!(result, Err(GeneratorError::Core(CoreError::InvalidRange { .. }))),
        "must reject bounds outside u32"
    );
}

#[test]
fn test_reject_bound_above_u64() {
    // Wider than any 64-bit integer; must still reach the bounds check.
    let schema = br#"[{"big":{"type":"range","data":{"min":0,"max":18446744073709551616}}}]"#;
    let result = Engine::default().generate_with_seed("seed", "u", schema);
    assert_eq!(
        result,
        Err(GeneratorError::Core(CoreError::InvalidRange {
            key: "big".to_string(),
            min: 0,
            max: 1 << 64,
        }))
    );

    let ctx = ChainContext::new(0, "a", "b");
    let binary = schema_from_deploy_args(
        &[r#"{"low":{"type":"range","data":{"min":-18446744073709551617,"max":1}}}"#],
        Container::Binary,
    )
    .unwrap();
    let result = Engine::default().generate_with_context(&ctx, "u", &binary);
    assert!(
        matches!(
            result,
            Err(GeneratorError::Core(CoreError::InvalidRange { ref key, .. })) if key == "low"
        ),
        "must reject bounds below i64 in binary schemas"
    );
}

#[test]
fn test_duplicate_key_same_in_both_containers() {
    // One group repeating a key; the later definition applies in either container.
    let text = br#"[{"a":{"type":"range","data":{"min":1,"max":1}},"a":{"type":"range","data":{"min":2,"max":2}}}]"#;
    let binary = hex::decode(
        "81a26161a264747970656572616e67656464617461a2636d696e01636d61780161\
         61a264747970656572616e67656464617461a2636d696e02636d617802",
    )
    .unwrap();

    let engine = Engine::default();
    let from_text = engine.resolve_with_seed("seed", "u", text).unwrap();
    let ctx = ChainContext::new(0, "se", "ed");
    let from_binary = engine.resolve_with_context(&ctx, "u", &binary).unwrap();

    assert_eq!(from_text.get("a"), Some(2));
    assert_eq!(from_text, from_binary);
}

#[test]
fn test_reject_malformed_binary() {
    let ctx = ChainContext::new(0, "a", "b");
    // Map header announcing one entry with no entries following.
    let result = Engine::default().generate_with_context(&ctx, "u", &[0xa1]);
    assert!(
        matches!(result, Err(GeneratorError::Core(CoreError::MalformedInput(_)))),
        "must reject truncated cbor"
    );
}

#[test]
fn test_reject_malformed_text() {
    let result = Engine::default().generate_with_seed("seed", "u", b"[{\"a\": }]");
    assert!(
        matches!(result, Err(GeneratorError::Core(CoreError::MalformedInput(_)))),
        "must reject invalid json"
    );
}

#[test]
fn test_zero_width_range_ignores_digest() {
    let schema = br#"[{"fixed":{"type":"range","data":{"min":42,"max":42}}}]"#;
    let engine = Engine::default();
    for user in ["a", "b", "c", "token-1", ""] {
        let output = engine.generate_with_seed("seed", user, schema).unwrap();
        let expected = format!(r#"{{"fixed":42,"id":"{}"}}"#, user);
        assert_eq!(output, expected.as_bytes());
    }
}

#[test]
fn test_full_width_range() {
    // digest("seedtoken-2") = 0x801b051a
    let schema = br#"[{"raw":{"type":"range","data":{"min":0,"max":4294967295}},"mid":{"type":"range","data":{"min":5,"max":20}}}]"#;
    let output = Engine::default()
        .generate_with_seed("seed", "token-2", schema)
        .unwrap();
    assert_eq!(output, br#"{"id":"token-2","mid":15,"raw":2149254426}"#);
}
