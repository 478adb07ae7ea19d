//! Process-wide chain context.
//!
//! The host publishes block and transaction data once, before any
//! chain-context generation happens. After publication the value is
//! read-only for the remainder of the process. `OnceLock` provides the
//! publication barrier, so readers on other threads always observe a fully
//! built context.
//!
//! Engine entry points that take an explicit [`ChainContext`] never touch
//! this global; it only backs the convenience entry points
//! ([`Engine::generate`](crate::Engine::generate) and friends).

use std::sync::OnceLock;

use bitseed_generator_core::ChainContext;

use crate::error::{GeneratorError, Result};

static CHAIN_CONTEXT: OnceLock<ChainContext> = OnceLock::new();

/// Publish the chain context. Succeeds at most once per process.
pub fn initialize_context(
    block_number: u32,
    block_hash: impl Into<String>,
    transaction_hash: impl Into<String>,
) -> Result<()> {
    publish_context(ChainContext::new(block_number, block_hash, transaction_hash))
}

/// Publish an already-built chain context. Succeeds at most once per process.
pub fn publish_context(context: ChainContext) -> Result<()> {
    let block_number = context.block_number;
    CHAIN_CONTEXT.set(context).map_err(|_| {
        tracing::warn!(block_number, "chain context already published, ignoring");
        GeneratorError::ContextAlreadyInitialized
    })?;
    tracing::debug!(block_number, "chain context published");
    Ok(())
}

/// The published chain context, if any.
pub fn chain_context() -> Option<&'static ChainContext> {
    CHAIN_CONTEXT.get()
}

/// The published chain context, or [`GeneratorError::ContextUnavailable`].
pub fn require_chain_context() -> Result<&'static ChainContext> {
    chain_context().ok_or(GeneratorError::ContextUnavailable)
}
