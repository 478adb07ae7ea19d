//! Attribute resolution: digest + schema -> resolved attribute set.

use std::collections::BTreeMap;

use crate::error::{CoreError, Result};
use crate::schema::{AttributeDefinition, AttributeSchema, RangeSpec};
use crate::types::Digest;

/// Reserved output key holding the caller-supplied user identifier.
pub const ID_KEY: &str = "id";

/// The resolved output record.
///
/// Always carries the user identifier under [`ID_KEY`]. Attribute keys are
/// unique and never equal to [`ID_KEY`]; they iterate in byte order, which is
/// also the order both encodings write them in.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolvedAttributeSet {
    id: String,
    attributes: BTreeMap<String, u32>,
}

/// A single output field, borrowed from a [`ResolvedAttributeSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedField<'a> {
    Id(&'a str),
    Value(u32),
}

impl ResolvedAttributeSet {
    /// An output record with no attributes yet.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            attributes: BTreeMap::new(),
        }
    }

    /// The user identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Look up a resolved attribute.
    pub fn get(&self, key: &str) -> Option<u32> {
        self.attributes.get(key).copied()
    }

    /// All resolved attributes (excluding `id`).
    pub fn attributes(&self) -> &BTreeMap<String, u32> {
        &self.attributes
    }

    /// Insert an attribute if the key is free.
    ///
    /// Returns `false` when the key is [`ID_KEY`] or already resolved; the
    /// existing value is kept.
    pub fn insert(&mut self, key: impl Into<String>, value: u32) -> bool {
        let key = key.into();
        if key == ID_KEY || self.attributes.contains_key(&key) {
            return false;
        }
        self.attributes.insert(key, value);
        true
    }

    /// Number of output fields, `id` included.
    pub fn field_count(&self) -> usize {
        self.attributes.len() + 1
    }

    /// All output fields sorted by key bytes.
    pub fn fields(&self) -> Vec<(&str, ResolvedField<'_>)> {
        let mut fields: Vec<(&str, ResolvedField<'_>)> = self
            .attributes
            .iter()
            .map(|(k, v)| (k.as_str(), ResolvedField::Value(*v)))
            .collect();
        fields.push((ID_KEY, ResolvedField::Id(&self.id)));
        fields.sort_by(|a, b| a.0.as_bytes().cmp(b.0.as_bytes()));
        fields
    }
}

/// Resolve every recognized definition in `schema` against `digest`.
///
/// Fails with [`CoreError::InvalidRange`] as soon as a range cannot be
/// honored; no partial output is returned. When two definitions share a key
/// the first one in traversal order wins.
pub fn resolve(
    digest: Digest,
    schema: &AttributeSchema,
    user_identifier: &str,
) -> Result<ResolvedAttributeSet> {
    let mut resolved = ResolvedAttributeSet::new(user_identifier);

    for (key, definition) in schema.definitions() {
        let value = match definition {
            AttributeDefinition::Range(range) => resolve_range(key, range, digest)?,
        };
        if !resolved.insert(key, value) {
            tracing::debug!(key, "attribute key already taken, keeping first value");
        }
    }

    Ok(resolved)
}

/// Map a digest into an inclusive range.
///
/// `value = min + (digest mod (max - min + 1))`. The span is computed in
/// `u64` so `0..=u32::MAX` has a span of 2^32 rather than wrapping to zero.
pub fn pick_in_range(digest: Digest, min: u32, max: u32) -> u32 {
    debug_assert!(min <= max);
    let span = u64::from(max) - u64::from(min) + 1;
    let offset = u64::from(digest.value()) % span;
    // offset < span, so the sum stays within min..=max.
    (u64::from(min) + offset) as u32
}

fn resolve_range(key: &str, range: &RangeSpec, digest: Digest) -> Result<u32> {
    let (min, max) = range.bounds().ok_or_else(|| {
        tracing::warn!(key, min = %range.min, max = %range.max, "rejecting range definition");
        CoreError::InvalidRange {
            key: key.to_string(),
            min: range.min,
            max: range.max,
        }
    })?;
    Ok(pick_in_range(digest, min, max))
}
