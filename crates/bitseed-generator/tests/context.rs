//! Process-wide chain context lifecycle.
//!
//! The context is a set-once global, so the whole lifecycle runs inside a
//! single test in its own test binary.

use bitseed_generator::{
    chain_context, initialize_context, schema_from_deploy_args, ChainContext, Container, Engine,
    GeneratorError,
};

#[test]
fn test_context_lifecycle() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();

    let engine = Engine::default();
    let schema = schema_from_deploy_args(
        &[r#"{"power":{"type":"range","data":{"min":1,"max":10}}}"#],
        Container::Binary,
    )
    .unwrap();

    // Before publication, chain-context entry points have nothing to read.
    assert!(chain_context().is_none());
    assert_eq!(
        engine.generate("token-1", &schema).unwrap_err(),
        GeneratorError::ContextUnavailable
    );
    assert_eq!(
        engine.verify("token-1", &schema, b"").unwrap_err(),
        GeneratorError::ContextUnavailable
    );

    initialize_context(840_000, "abc", "xyz").unwrap();
    assert_eq!(
        chain_context(),
        Some(&ChainContext::new(840_000, "abc", "xyz"))
    );

    let output = engine.generate("token-1", &schema).unwrap();
    assert_eq!(
        hex::encode(&output),
        "a262696467746f6b656e2d3165706f7765720a"
    );
    assert!(engine.verify("token-1", &schema, &output).unwrap());
    assert!(!engine.verify("token-2", &schema, &output).unwrap());
    assert_eq!(
        engine.indexer_generate("token-1", &schema).unwrap(),
        output
    );

    // Re-initialization is refused and leaves the published value untouched.
    assert_eq!(
        initialize_context(1, "other", "values").unwrap_err(),
        GeneratorError::ContextAlreadyInitialized
    );
    assert_eq!(chain_context().map(|c| c.block_number), Some(840_000));
    assert_eq!(engine.generate("token-1", &schema).unwrap(), output);
}
