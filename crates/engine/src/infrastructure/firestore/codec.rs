//! Translation between plain JSON payloads and Firestore's typed value encoding.
//!
//! Firestore's REST API wraps every field in a single-key object naming its
//! type, e.g. `{"quantity": {"integerValue": "12"}}`. 64-bit integers travel
//! as strings.
//!
//! Kinds with no JSON counterpart (timestamps, bytes, references, geo points)
//! decode to a single-key object tagged `$<kind>`, e.g.
//! `{"$timestampValue": "2026-01-05T09:30:00Z"}`, and encode back to the same
//! Firestore kind, so a payload read and written again keeps its types.

use serde_json::{Map, Number, Value};

use crate::infrastructure::ports::{DocumentData, StoreError};

/// Encode a document payload as a Firestore `fields` map.
pub fn encode_fields(data: &DocumentData) -> Map<String, Value> {
    data.iter()
        .map(|(key, value)| (key.clone(), encode_value(value)))
        .collect()
}

/// Decode a Firestore `fields` map into a plain payload.
pub fn decode_fields(fields: &Map<String, Value>) -> Result<DocumentData, StoreError> {
    fields
        .iter()
        .map(|(key, value)| Ok((key.clone(), decode_value(value)?)))
        .collect()
}

/// Firestore kinds carried through as `$`-tagged objects.
const PRESERVED_KINDS: [&str; 4] = [
    "timestampValue",
    "bytesValue",
    "referenceValue",
    "geoPointValue",
];

const TAG_PREFIX: char = '$';

/// The Firestore kind and raw value of a `$`-tagged object, if it is one.
fn preserved_kind(fields: &Map<String, Value>) -> Option<(&str, &Value)> {
    if fields.len() != 1 {
        return None;
    }
    let (key, inner) = fields.iter().next()?;
    let kind = key.strip_prefix(TAG_PREFIX)?;
    PRESERVED_KINDS
        .iter()
        .find(|k| **k == kind)
        .map(|k| (*k, inner))
}

fn encode_value(value: &Value) -> Value {
    let mut typed = Map::new();
    match value {
        Value::Null => {
            typed.insert("nullValue".into(), Value::Null);
        }
        Value::Bool(b) => {
            typed.insert("booleanValue".into(), Value::Bool(*b));
        }
        Value::Number(n) => match n.as_i64() {
            Some(i) => {
                typed.insert("integerValue".into(), Value::String(i.to_string()));
            }
            None => {
                typed.insert("doubleValue".into(), Value::Number(n.clone()));
            }
        },
        Value::String(s) => {
            typed.insert("stringValue".into(), Value::String(s.clone()));
        }
        Value::Array(items) => {
            let values: Vec<Value> = items.iter().map(encode_value).collect();
            let mut array = Map::new();
            array.insert("values".into(), Value::Array(values));
            typed.insert("arrayValue".into(), Value::Object(array));
        }
        Value::Object(fields) => {
            if let Some((kind, inner)) = preserved_kind(fields) {
                typed.insert(kind.into(), inner.clone());
                return Value::Object(typed);
            }
            let mut map = Map::new();
            map.insert("fields".into(), Value::Object(encode_fields(fields)));
            typed.insert("mapValue".into(), Value::Object(map));
        }
    }
    Value::Object(typed)
}

fn decode_value(value: &Value) -> Result<Value, StoreError> {
    let typed = value
        .as_object()
        .ok_or_else(|| StoreError::serialization(format!("expected typed value, got {}", value)))?;
    let (kind, inner) = typed
        .iter()
        .next()
        .ok_or_else(|| StoreError::serialization("empty typed value"))?;

    match kind.as_str() {
        "nullValue" => Ok(Value::Null),
        "booleanValue" => inner
            .as_bool()
            .map(Value::Bool)
            .ok_or_else(|| StoreError::serialization(format!("bad booleanValue: {}", inner))),
        "integerValue" => decode_integer(inner),
        "doubleValue" => decode_double(inner),
        "stringValue" => inner
            .as_str()
            .map(|s| Value::String(s.to_string()))
            .ok_or_else(|| StoreError::serialization(format!("bad stringValue: {}", inner))),
        kind if PRESERVED_KINDS.contains(&kind) => {
            let mut tagged = Map::new();
            tagged.insert(format!("{}{}", TAG_PREFIX, kind), inner.clone());
            Ok(Value::Object(tagged))
        }
        "arrayValue" => {
            let values = match inner.get("values") {
                Some(Value::Array(values)) => values
                    .iter()
                    .map(decode_value)
                    .collect::<Result<Vec<_>, _>>()?,
                Some(other) => {
                    return Err(StoreError::serialization(format!(
                        "bad arrayValue: {}",
                        other
                    )))
                }
                None => Vec::new(),
            };
            Ok(Value::Array(values))
        }
        "mapValue" => match inner.get("fields") {
            Some(Value::Object(fields)) => Ok(Value::Object(decode_fields(fields)?)),
            Some(other) => Err(StoreError::serialization(format!("bad mapValue: {}", other))),
            None => Ok(Value::Object(Map::new())),
        },
        other => Err(StoreError::serialization(format!(
            "unsupported Firestore value type: {}",
            other
        ))),
    }
}

fn decode_integer(inner: &Value) -> Result<Value, StoreError> {
    let parsed = match inner {
        Value::String(s) => s.parse::<i64>().ok(),
        Value::Number(n) => n.as_i64(),
        _ => None,
    };
    parsed
        .map(|i| Value::Number(i.into()))
        .ok_or_else(|| StoreError::serialization(format!("bad integerValue: {}", inner)))
}

fn decode_double(inner: &Value) -> Result<Value, StoreError> {
    let parsed = match inner {
        Value::Number(n) => n.as_f64(),
        // NaN and the infinities arrive as strings and have no JSON form
        Value::String(s) => s.parse::<f64>().ok(),
        _ => None,
    };
    parsed
        .and_then(Number::from_f64)
        .map(Value::Number)
        .ok_or_else(|| StoreError::serialization(format!("bad doubleValue: {}", inner)))
}
