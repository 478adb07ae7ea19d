//! Schema buffers from deploy arguments.
//!
//! A deployment lists its attribute groups as JSON texts, one per argument.
//! Before generation they are packed into a single top-level array and
//! encoded in the container the generator expects.

use bitseed_generator_core::{schema_bytes, Container, CoreError};

use crate::error::Result;

/// Pack JSON deploy arguments into a schema buffer.
pub fn schema_from_deploy_args<S: AsRef<str>>(args: &[S], container: Container) -> Result<Vec<u8>> {
    let groups = args
        .iter()
        .enumerate()
        .map(|(index, arg)| {
            serde_json::from_str::<serde_json::Value>(arg.as_ref()).map_err(|e| {
                CoreError::MalformedInput(format!("deploy argument {index}: {e}"))
            })
        })
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(schema_bytes(&serde_json::Value::Array(groups), container)?)
}
