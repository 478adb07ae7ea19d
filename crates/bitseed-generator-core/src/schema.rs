//! Attribute schema parsing.
//!
//! Container decoding is strict: a buffer that is not a well-formed CBOR or
//! JSON value is rejected with [`CoreError::MalformedInput`]. Interpretation of
//! the decoded value is permissive: anything that does not look like an
//! attribute definition is skipped, never rejected. Skips are recorded as
//! [`SchemaEntry::Ignored`] so they stay visible to callers and tests.
//!
//! Expected shape:
//!
//! ```text
//! [
//!   { "power": { "type": "range", "data": { "min": 1, "max": 10 } } },
//!   { "speed": { "type": "range", "data": { "min": 0, "max": 99 } } }
//! ]
//! ```
//!
//! [`CoreError::MalformedInput`]: crate::error::CoreError::MalformedInput

use ciborium::value::Value;

use crate::canonical::{decode_container, value_to_integer};
use crate::error::Result;
use crate::types::Container;

/// The only attribute type that resolves to a value.
pub const RANGE_TYPE: &str = "range";

/// Field keys inside a definition.
mod keys {
    pub const TYPE: &str = "type";
    pub const DATA: &str = "data";
    pub const MIN: &str = "min";
    pub const MAX: &str = "max";
}

/// An ordered sequence of attribute groups.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributeSchema {
    groups: Vec<AttributeGroup>,
}

impl AttributeSchema {
    /// Create a schema from already-interpreted groups.
    pub fn new(groups: Vec<AttributeGroup>) -> Self {
        Self { groups }
    }

    /// The groups, in schema order.
    pub fn groups(&self) -> &[AttributeGroup] {
        &self.groups
    }

    /// True if the schema has no groups at all.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Recognized definitions, in traversal order.
    pub fn definitions(&self) -> impl Iterator<Item = (&str, &AttributeDefinition)> {
        self.groups.iter().flat_map(|group| {
            group.entries.iter().filter_map(|(key, entry)| match entry {
                SchemaEntry::Recognized(def) => Some((key.as_str(), def)),
                SchemaEntry::Ignored(_) => None,
            })
        })
    }

    /// Skipped entries, in traversal order.
    pub fn ignored(&self) -> impl Iterator<Item = (&str, &IgnoreReason)> {
        self.groups.iter().flat_map(|group| {
            group.entries.iter().filter_map(|(key, entry)| match entry {
                SchemaEntry::Ignored(reason) => Some((key.as_str(), reason)),
                SchemaEntry::Recognized(_) => None,
            })
        })
    }
}

/// A mapping from attribute key to its parsed entry.
///
/// Each key appears once; a key repeated in the container keeps its last
/// value. Entry order follows the decoded map, which is key order for JSON
/// input and wire order for CBOR input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributeGroup {
    entries: Vec<(String, SchemaEntry)>,
}

impl AttributeGroup {
    /// Create a group from parsed entries.
    pub fn new(entries: Vec<(String, SchemaEntry)>) -> Self {
        Self { entries }
    }

    /// The entries, in container order.
    pub fn entries(&self) -> &[(String, SchemaEntry)] {
        &self.entries
    }

    /// Look up an entry by key.
    pub fn get(&self, key: &str) -> Option<&SchemaEntry> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, e)| e)
    }
}

/// Parse result for a single keyed value inside a group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaEntry {
    Recognized(AttributeDefinition),
    Ignored(IgnoreReason),
}

/// Why an entry was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Not a map with both `type` and `data`, or `type` is not text.
    NotADefinition,
    /// A well-formed definition of a type this engine does not resolve.
    UnsupportedType(String),
    /// A `range` definition without integer `min` and `max`.
    MalformedRange,
}

/// A recognized attribute definition, tagged by its `type` field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeDefinition {
    Range(RangeSpec),
}

/// Inclusive integer bounds exactly as they appeared in the schema.
///
/// Bounds are kept wide here; whether they can be honored (both within
/// `0..=u32::MAX` and `min <= max`) is decided at resolution time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeSpec {
    pub min: i128,
    pub max: i128,
}

impl RangeSpec {
    /// Create a range from raw bounds.
    pub const fn new(min: i128, max: i128) -> Self {
        Self { min, max }
    }

    /// Validated `u32` bounds, or `None` if the range cannot be resolved.
    pub fn bounds(&self) -> Option<(u32, u32)> {
        let min = u32::try_from(self.min).ok()?;
        let max = u32::try_from(self.max).ok()?;
        (min <= max).then_some((min, max))
    }
}

/// Decode and interpret a schema buffer.
pub fn parse_schema(bytes: &[u8], container: Container) -> Result<AttributeSchema> {
    let value = decode_container(bytes, container)?;
    Ok(interpret_schema(&value))
}

/// Interpret an already-decoded value as a schema.
pub fn interpret_schema(value: &Value) -> AttributeSchema {
    let items = match value {
        Value::Array(items) if !items.is_empty() => items,
        _ => {
            tracing::debug!("schema is not a non-empty array, nothing to resolve");
            return AttributeSchema::default();
        }
    };

    let groups = items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| match item {
            Value::Map(entries) => Some(interpret_group(entries)),
            _ => {
                tracing::debug!(index, "skipping schema element that is not a map");
                None
            }
        })
        .collect();

    AttributeSchema { groups }
}

fn interpret_group(entries: &[(Value, Value)]) -> AttributeGroup {
    let mut group: Vec<(String, SchemaEntry)> = Vec::with_capacity(entries.len());

    for (key, value) in entries {
        // Non-text keys cannot name an output attribute.
        let Some(key) = key.as_text() else {
            continue;
        };
        let entry = interpret_entry(value);
        if let SchemaEntry::Ignored(reason) = &entry {
            tracing::debug!(key, ?reason, "ignoring schema entry");
        }

        // A repeated key replaces the earlier value, as a JSON object would.
        match group.iter_mut().find(|(k, _)| k == key) {
            Some(slot) => {
                tracing::debug!(key, "duplicate key in group, keeping last value");
                slot.1 = entry;
            }
            None => group.push((key.to_string(), entry)),
        }
    }

    AttributeGroup { entries: group }
}

fn interpret_entry(value: &Value) -> SchemaEntry {
    let Some(fields) = value.as_map() else {
        return SchemaEntry::Ignored(IgnoreReason::NotADefinition);
    };
    let (Some(kind), Some(data)) = (field(fields, keys::TYPE), field(fields, keys::DATA)) else {
        return SchemaEntry::Ignored(IgnoreReason::NotADefinition);
    };
    let Some(kind) = kind.as_text() else {
        return SchemaEntry::Ignored(IgnoreReason::NotADefinition);
    };

    match kind {
        RANGE_TYPE => match interpret_range(data) {
            Some(range) => SchemaEntry::Recognized(AttributeDefinition::Range(range)),
            None => SchemaEntry::Ignored(IgnoreReason::MalformedRange),
        },
        other => SchemaEntry::Ignored(IgnoreReason::UnsupportedType(other.to_string())),
    }
}

fn interpret_range(data: &Value) -> Option<RangeSpec> {
    let fields = data.as_map()?;
    let min = value_to_integer(field(fields, keys::MIN)?)?;
    let max = value_to_integer(field(fields, keys::MAX)?)?;
    Some(RangeSpec { min, max })
}

/// Last value stored under a text key.
fn field<'a>(fields: &'a [(Value, Value)], name: &str) -> Option<&'a Value> {
    fields
        .iter()
        .rev()
        .find(|(k, _)| k.as_text() == Some(name))
        .map(|(_, v)| v)
}
