//! Opaque attribute values.

use serde::{Deserialize, Serialize};

/// The value of a style attribute.
///
/// Values are opaque to composition: they are stored, compared and copied but
/// never inspected. The variants only exist so that values can be loaded from
/// configuration and handed to a host renderer in a form it can match on.
///
/// Serialized untagged, so `true`, `14`, `1.5`, `[255, 0, 0]` and `"bold"`
/// map to `Bool`, `Integer`, `Float`, `Rgb` and `Text` respectively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Bool(bool),
    Integer(i64),
    Float(f64),
    Rgb([u8; 3]),
    Text(String),
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        AttributeValue::Bool(value)
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        AttributeValue::Integer(value)
    }
}

impl From<i32> for AttributeValue {
    fn from(value: i32) -> Self {
        AttributeValue::Integer(i64::from(value))
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        AttributeValue::Float(value)
    }
}

impl From<[u8; 3]> for AttributeValue {
    fn from(rgb: [u8; 3]) -> Self {
        AttributeValue::Rgb(rgb)
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::Text(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        AttributeValue::Text(value)
    }
}
