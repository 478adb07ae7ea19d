//! Error types for the generator engine.

use bitseed_generator_core::CoreError;
use thiserror::Error;

/// Errors that can occur during engine operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeneratorError {
    /// Parsing, resolution, or encoding error.
    #[error("core error: {0}")]
    Core(#[from] CoreError),

    /// Chain-context mode was used before a context was published.
    #[error("chain context has not been initialized")]
    ContextUnavailable,

    /// The process-wide chain context was already published.
    #[error("chain context already initialized")]
    ContextAlreadyInitialized,

    /// Schema buffer exceeds the configured limit.
    #[error("schema is {len} bytes, limit is {max}")]
    SchemaTooLarge { len: usize, max: usize },

    /// The generator has no indexer entry point.
    #[error("indexer generation is not supported by this generator")]
    IndexerUnsupported,
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, GeneratorError>;
