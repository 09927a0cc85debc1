// ============================================================================
// FIELD VALUES - Runtime representation of record fields
// ============================================================================

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::record::Record;

/// Runtime value held by a record field.
///
/// This is a closed set of tags produced once while decoding JSON input;
/// everything downstream (the comparator builder, the path extractor)
/// matches on the tag instead of probing runtime type identity.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FieldValue {
    Integer(i64),
    Number(f64),
    Boolean(bool),
    Text(String),
    #[default]
    Null,
    Record(Box<Record>), // Nested structured data
}

impl FieldValue {
    /// Check if this is the null value
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// Check if this is a nested record
    pub fn is_record(&self) -> bool {
        matches!(self, FieldValue::Record(_))
    }

    /// Get as text if possible
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get as integer if possible
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Get as boolean if possible
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            FieldValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Get as nested record if possible
    pub fn as_record(&self) -> Option<&Record> {
        match self {
            FieldValue::Record(r) => Some(r),
            _ => None,
        }
    }

    /// Tag name for diagnostics and error messages
    pub fn kind_name(&self) -> &'static str {
        match self {
            FieldValue::Integer(_) => "integer",
            FieldValue::Number(_) => "number",
            FieldValue::Boolean(_) => "boolean",
            FieldValue::Text(_) => "text",
            FieldValue::Null => "null",
            FieldValue::Record(_) => "record",
        }
    }

    /// Convert a decoded JSON value into the tagged representation.
    ///
    /// Whole numbers become `Integer`, other numbers `Number`. Arrays become
    /// nested records keyed by decimal index strings ("0", "1", ...) so path
    /// segments can address elements by position.
    pub fn from_json(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => FieldValue::Null,
            serde_json::Value::Bool(b) => FieldValue::Boolean(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    FieldValue::Integer(i)
                } else {
                    // Out-of-range integers fold into the decimal tag
                    FieldValue::Number(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => FieldValue::Text(s),
            serde_json::Value::Array(items) => {
                let record = items
                    .into_iter()
                    .enumerate()
                    .map(|(idx, item)| (idx.to_string(), FieldValue::from_json(item)))
                    .collect();
                FieldValue::Record(Box::new(record))
            }
            serde_json::Value::Object(map) => {
                FieldValue::Record(Box::new(Record::from_json_object(map)))
            }
        }
    }

    /// Convert back to a JSON value
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            FieldValue::Integer(i) => serde_json::Value::from(*i),
            FieldValue::Number(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            FieldValue::Boolean(b) => serde_json::Value::Bool(*b),
            FieldValue::Text(s) => serde_json::Value::String(s.clone()),
            FieldValue::Null => serde_json::Value::Null,
            FieldValue::Record(r) => r.to_json(),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Integer(i) => write!(f, "{}", i),
            FieldValue::Number(n) => write!(f, "{}", n),
            FieldValue::Boolean(b) => write!(f, "{}", b),
            FieldValue::Text(s) => write!(f, "{}", s),
            FieldValue::Null => write!(f, "null"),
            FieldValue::Record(r) => write!(f, "record({} fields)", r.len()),
        }
    }
}

impl From<i64> for FieldValue {
    fn from(i: i64) -> Self {
        FieldValue::Integer(i)
    }
}

impl From<f64> for FieldValue {
    fn from(f: f64) -> Self {
        FieldValue::Number(f)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Boolean(b)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<Record> for FieldValue {
    fn from(r: Record) -> Self {
        FieldValue::Record(Box::new(r))
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for FieldValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(FieldValue::from_json(value))
    }
}

// ============================================================================
// TESTS
// ============================================================================
