//! Proptest generators for property-based testing.

use proptest::prelude::*;
use serde_json::{json, Value};

use bitseed_generator::Result;
use bitseed_generator_core::{
    parse_schema, resolve, schema_bytes, Container, Digest, ResolvedAttributeSet, SeedMaterial,
};

/// Generate a random digest.
pub fn digest() -> impl Strategy<Value = Digest> {
    any::<u32>().prop_map(Digest)
}

/// Generate ordered inclusive bounds.
pub fn range_bounds() -> impl Strategy<Value = (u32, u32)> {
    (any::<u32>(), any::<u32>()).prop_map(|(a, b)| if a <= b { (a, b) } else { (b, a) })
}

/// Generate an attribute key (never the reserved `id`).
pub fn attribute_key() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,15}".prop_filter("reserved key", |k| k != "id")
}

/// Generate a seed string.
pub fn seed() -> impl Strategy<Value = String> {
    "[0-9a-f]{0,64}".prop_map(String::from)
}

/// Generate a user identifier.
pub fn user_identifier() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9:-]{1,32}".prop_map(String::from)
}

/// Generate a resolvable range definition.
pub fn range_definition() -> impl Strategy<Value = Value> {
    range_bounds().prop_map(|(min, max)| json!({"type": "range", "data": {"min": min, "max": max}}))
}

/// Generate a value that must be ignored when it appears under a group key.
pub fn ignored_definition() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<i64>().prop_map(Value::from),
        "[a-z]{0,8}".prop_map(Value::from),
        Just(json!({"type": "range"})),
        Just(json!({"data": {"min": 0, "max": 1}})),
        Just(json!({"type": 7, "data": {}})),
        "[a-qs-z][a-z]{0,7}".prop_map(|t| json!({"type": t, "data": {"min": 0, "max": 1}})),
        Just(json!({"type": "range", "data": {"min": "0", "max": 1}})),
        Just(json!({"type": "range", "data": [0, 1]})),
    ]
}

/// Generate a schema array element that is not a group at all.
pub fn non_group_element() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<u32>().prop_map(Value::from),
        "[a-z]{0,8}".prop_map(Value::from),
        Just(json!([1, 2, 3])),
    ]
}

/// Generate a group mixing resolvable and ignorable entries.
pub fn group() -> impl Strategy<Value = Value> {
    prop::collection::vec(
        (
            attribute_key(),
            prop_oneof![range_definition(), ignored_definition()],
        ),
        0..6,
    )
    .prop_map(|entries| Value::Object(entries.into_iter().collect()))
}

/// Generate a group whose entries are all ignorable.
pub fn junk_group() -> impl Strategy<Value = Value> {
    prop::collection::vec((attribute_key(), ignored_definition()), 0..6)
        .prop_map(|entries| Value::Object(entries.into_iter().collect()))
}

/// Generate a schema document.
pub fn schema() -> impl Strategy<Value = Value> {
    prop::collection::vec(prop_oneof![3 => group(), 1 => non_group_element()], 0..6)
        .prop_map(Value::Array)
}

/// Generate a schema document that resolves to nothing but `id`.
pub fn junk_schema() -> impl Strategy<Value = Value> {
    prop::collection::vec(prop_oneof![junk_group(), non_group_element()], 0..6)
        .prop_map(Value::Array)
}

/// Parameters for one resolution call.
#[derive(Debug, Clone)]
pub struct SchemaParams {
    pub seed: String,
    pub user_identifier: String,
    pub schema: Value,
}

impl SchemaParams {
    /// Encode the schema in the given container.
    pub fn schema_bytes(&self, container: Container) -> Result<Vec<u8>> {
        Ok(schema_bytes(&self.schema, container)?)
    }
}

impl Arbitrary for SchemaParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (seed(), user_identifier(), schema())
            .prop_map(|(seed, user_identifier, schema)| SchemaParams {
                seed,
                user_identifier,
                schema,
            })
            .boxed()
    }
}

/// Resolve parameters in explicit-seed mode through the core pipeline.
pub fn resolve_params(params: &SchemaParams) -> Result<ResolvedAttributeSet> {
    let digest = SeedMaterial::from_seed(&params.seed, &params.user_identifier).digest();
    let schema = parse_schema(&params.schema_bytes(Container::Text)?, Container::Text)?;
    Ok(resolve(digest, &schema, &params.user_identifier)?)
}
