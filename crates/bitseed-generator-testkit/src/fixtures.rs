//! Test fixtures and helpers.
//!
//! Common setup code for integration tests.

use bitseed_generator::{
    schema_from_deploy_args, ChainContext, Engine, EngineConfig, Generator, Result, SeedSource,
};

/// Bitcoin genesis block hash.
pub const GENESIS_BLOCK_HASH: &str =
    "000000000019d6689c085ae165831e934ff763ae46a2a6c172b3f1b60a8ce26f";

/// Bitcoin genesis coinbase transaction hash.
pub const GENESIS_TX_HASH: &str =
    "4a5e1e4baab89f3a32518a88c31bc87f618f76673e2cc77ab2127b7afdeda33b";

/// A test fixture with an engine and an explicit chain context.
pub struct TestFixture {
    pub engine: Engine,
    pub context: ChainContext,
}

impl TestFixture {
    /// Create a fixture anchored at the genesis block.
    pub fn new() -> Self {
        Self::with_context(ChainContext::new(0, GENESIS_BLOCK_HASH, GENESIS_TX_HASH))
    }

    /// Create a fixture with a specific chain context.
    pub fn with_context(context: ChainContext) -> Self {
        Self {
            engine: Engine::default(),
            context,
        }
    }

    /// Replace the engine configuration.
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.engine = Engine::new(config);
        self
    }

    /// The fixture's seed source.
    pub fn seed_source(&self) -> SeedSource {
        SeedSource::Chain(self.context.clone())
    }

    /// Pack deploy arguments in the chain-mode container.
    pub fn schema(&self, deploy_args: &[&str]) -> Result<Vec<u8>> {
        schema_from_deploy_args(deploy_args, self.engine.config().chain_container)
    }

    /// Generate chain-mode output for a user.
    pub fn mint(&self, user_identifier: &str, deploy_args: &[&str]) -> Result<Vec<u8>> {
        let schema = self.schema(deploy_args)?;
        self.engine
            .inscribe_generate(&self.seed_source(), user_identifier, &schema)
    }

    /// Verify chain-mode output for a user.
    pub fn verify_mint(
        &self,
        user_identifier: &str,
        deploy_args: &[&str],
        expected: &[u8],
    ) -> Result<bool> {
        let schema = self.schema(deploy_args)?;
        self.engine
            .inscribe_verify(&self.seed_source(), user_identifier, &schema, expected)
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Distinct user identifiers for multi-user tests.
pub fn multi_user_identifiers(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("user-{i}")).collect()
}
