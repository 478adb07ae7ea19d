//! Container codecs.
//!
//! Decoding turns a CBOR or JSON buffer into a generic [`Value`]; JSON input is
//! normalised into the same value model so the schema interpreter only has
//! to understand one shape.
//!
//! Encoding of resolved output is deterministic in both containers, because
//! verification compares outputs byte for byte:
//! - Map entries ordered by key bytes (the `id` key included)
//! - Integers use the smallest valid CBOR encoding
//! - Definite lengths only
//! - JSON is written compact, with no whitespace

use ciborium::value::Value;
use std::collections::BTreeMap;
use std::io::Cursor;

use crate::error::{CoreError, Result};
use crate::resolve::{ResolvedAttributeSet, ResolvedField, ID_KEY};
use crate::types::Container;

/// CBOR major types used by the encoder.
mod major {
    pub const UNSIGNED: u8 = 0;
    pub const TEXT: u8 = 3;
    pub const MAP: u8 = 5;
}

/// CBOR tags understood by the decoder.
mod tag {
    pub const POSITIVE_BIGNUM: u64 = 2;
    pub const NEGATIVE_BIGNUM: u64 = 3;
}

/// Decode a buffer as a single well-formed value of `container`.
///
/// Trailing bytes after the top-level item are rejected.
pub fn decode_container(bytes: &[u8], container: Container) -> Result<Value> {
    match container {
        Container::Binary => decode_cbor(bytes),
        Container::Text => decode_json(bytes),
    }
}

fn decode_cbor(bytes: &[u8]) -> Result<Value> {
    let mut cursor = Cursor::new(bytes);
    let value: Value = ciborium::from_reader(&mut cursor)
        .map_err(|e| CoreError::MalformedInput(e.to_string()))?;

    let consumed = cursor.position() as usize;
    if consumed != bytes.len() {
        return Err(CoreError::MalformedInput(format!(
            "{} trailing bytes after cbor item",
            bytes.len() - consumed
        )));
    }
    Ok(value)
}

fn decode_json(bytes: &[u8]) -> Result<Value> {
    let json: serde_json::Value =
        serde_json::from_slice(bytes).map_err(|e| CoreError::MalformedInput(e.to_string()))?;
    Ok(json_to_value(json))
}

/// Normalise a JSON value into the CBOR value model.
pub fn json_to_value(json: serde_json::Value) -> Value {
    match json {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(b),
        serde_json::Value::Number(n) => number_to_value(&n),
        serde_json::Value::String(s) => Value::Text(s),
        serde_json::Value::Array(items) => {
            Value::Array(items.into_iter().map(json_to_value).collect())
        }
        serde_json::Value::Object(map) => Value::Map(
            map.into_iter()
                .map(|(k, v)| (Value::Text(k), json_to_value(v)))
                .collect(),
        ),
    }
}

fn number_to_value(n: &serde_json::Number) -> Value {
    if let Some(u) = n.as_u64() {
        return Value::Integer(u.into());
    }
    if let Some(i) = n.as_i64() {
        return Value::Integer(i.into());
    }
    match integer_literal(n) {
        // Wider than 64 bits: ciborium stores it as a bignum tag.
        Some(i) => Value::from(i),
        None => n.as_f64().map(Value::Float).unwrap_or(Value::Null),
    }
}

/// An integer literal outside the 64-bit range, saturated to `i128`.
///
/// Relies on the literal text kept by serde_json's `arbitrary_precision`.
fn integer_literal(n: &serde_json::Number) -> Option<i128> {
    let text = n.to_string();
    let (negative, digits) = match text.strip_prefix('-') {
        Some(digits) => (true, digits),
        None => (false, text.as_str()),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(text.parse::<i128>().unwrap_or(if negative { i128::MIN } else { i128::MAX }))
}

/// Read a CBOR integer, including bignums, saturating at the `i128` limits.
pub(crate) fn value_to_integer(value: &Value) -> Option<i128> {
    match value {
        Value::Integer(i) => Some(i128::from(*i)),
        Value::Tag(tag, inner) if *tag == tag::POSITIVE_BIGNUM || *tag == tag::NEGATIVE_BIGNUM => {
            let Value::Bytes(bytes) = inner.as_ref() else {
                return None;
            };
            let magnitude = bytes
                .iter()
                .try_fold(0u128, |acc, &b| acc.checked_mul(256)?.checked_add(u128::from(b)))
                .and_then(|m| i128::try_from(m).ok())
                .unwrap_or(i128::MAX);
            Some(if *tag == tag::POSITIVE_BIGNUM {
                magnitude
            } else {
                -1 - magnitude
            })
        }
        _ => None,
    }
}

/// Encode a generic JSON value into `container`.
///
/// Binary output goes through the CBOR value model, so integers keep their
/// smallest encoding and oversized literals become bignums.
pub fn schema_bytes(value: &serde_json::Value, container: Container) -> Result<Vec<u8>> {
    match container {
        Container::Binary => {
            let mut buf = Vec::new();
            ciborium::into_writer(&json_to_value(value.clone()), &mut buf)
                .map_err(|e| CoreError::InternalEncoding(e.to_string()))?;
            Ok(buf)
        }
        Container::Text => {
            serde_json::to_vec(value).map_err(|e| CoreError::InternalEncoding(e.to_string()))
        }
    }
}

/// Encode a resolved attribute set into `container`.
pub fn encode_resolved(set: &ResolvedAttributeSet, container: Container) -> Result<Vec<u8>> {
    match container {
        Container::Binary => Ok(encode_resolved_cbor(set)),
        Container::Text => encode_resolved_json(set),
    }
}

fn encode_resolved_cbor(set: &ResolvedAttributeSet) -> Vec<u8> {
    let fields = set.fields();
    let mut buf = Vec::new();

    encode_uint(&mut buf, major::MAP, fields.len() as u64);
    for (key, field) in fields {
        encode_text(&mut buf, key);
        match field {
            ResolvedField::Id(id) => encode_text(&mut buf, id),
            ResolvedField::Value(n) => encode_uint(&mut buf, major::UNSIGNED, u64::from(n)),
        }
    }
    buf
}

fn encode_resolved_json(set: &ResolvedAttributeSet) -> Result<Vec<u8>> {
    // serde_json::Map is ordered by key, matching the CBOR entry order.
    let mut map = serde_json::Map::new();
    for (key, field) in set.fields() {
        let value = match field {
            ResolvedField::Id(id) => serde_json::Value::String(id.to_string()),
            ResolvedField::Value(n) => serde_json::Value::Number(n.into()),
        };
        map.insert(key.to_string(), value);
    }
    serde_json::to_vec(&serde_json::Value::Object(map))
        .map_err(|e| CoreError::InternalEncoding(e.to_string()))
}

/// Encode an unsigned integer with the given major type.
fn encode_uint(buf: &mut Vec<u8>, major: u8, n: u64) {
    let mt = major << 5;
    if n < 24 {
        buf.push(mt | (n as u8));
    } else if n <= 0xff {
        buf.push(mt | 24);
        buf.push(n as u8);
    } else if n <= 0xffff {
        buf.push(mt | 25);
        buf.extend_from_slice(&(n as u16).to_be_bytes());
    } else if n <= 0xffffffff {
        buf.push(mt | 26);
        buf.extend_from_slice(&(n as u32).to_be_bytes());
    } else {
        buf.push(mt | 27);
        buf.extend_from_slice(&n.to_be_bytes());
    }
}

/// Encode a text string (major type 3).
fn encode_text(buf: &mut Vec<u8>, s: &str) {
    encode_uint(buf, major::TEXT, s.len() as u64);
    buf.extend_from_slice(s.as_bytes());
}

/// Decode a resolved attribute set previously produced by [`encode_resolved`].
///
/// Requires a map with a text `id` and `u32` values under every other key.
pub fn decode_resolved(bytes: &[u8], container: Container) -> Result<ResolvedAttributeSet> {
    let entries = match decode_container(bytes, container)? {
        Value::Map(entries) => entries,
        _ => return Err(CoreError::MalformedInput("expected map".into())),
    };

    let mut id = None;
    let mut attributes = BTreeMap::new();

    for (key, value) in entries {
        let key = match key {
            Value::Text(key) => key,
            _ => return Err(CoreError::MalformedInput("non-text key".into())),
        };

        if key == ID_KEY {
            let Value::Text(text) = value else {
                return Err(CoreError::MalformedInput("id is not text".into()));
            };
            if id.replace(text).is_some() {
                return Err(CoreError::MalformedInput("duplicate id".into()));
            }
            continue;
        }

        let n = match value {
            Value::Integer(i) => u32::try_from(i128::from(i))
                .map_err(|_| CoreError::MalformedInput(format!("value of {key:?} out of range")))?,
            _ => {
                return Err(CoreError::MalformedInput(format!(
                    "value of {key:?} is not an integer"
                )))
            }
        };
        if attributes.insert(key.clone(), n).is_some() {
            return Err(CoreError::MalformedInput(format!("duplicate key {key:?}")));
        }
    }

    let id = id.ok_or_else(|| CoreError::MalformedInput("missing id".into()))?;
    let mut set = ResolvedAttributeSet::new(id);
    for (key, n) in attributes {
        set.insert(key, n);
    }
    Ok(set)
}
