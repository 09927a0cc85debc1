//! JSON codec for the record model
//!
//! Stateless decode/encode functions bridging JSON text and the tagged
//! model types. There is no shared mapper state; every call parses or
//! serializes independently.

use recq_model::record::json_kind;
use recq_model::{CodecError, FieldValue, Record};

/// Decode arbitrary JSON text into a tagged value
pub fn decode_value(input: &str) -> Result<FieldValue, CodecError> {
    let value: serde_json::Value = serde_json::from_str(input)?;
    Ok(FieldValue::from_json(value))
}

/// Decode JSON text that must be an object at the top level
pub fn decode_record(input: &str) -> Result<Record, CodecError> {
    let value: serde_json::Value = serde_json::from_str(input)?;
    Record::try_from(value)
}

/// Decode JSON text that must be an array of objects at the top level
pub fn decode_records(input: &str) -> Result<Vec<Record>, CodecError> {
    let value: serde_json::Value = serde_json::from_str(input)?;
    match value {
        serde_json::Value::Array(items) => items.into_iter().map(Record::try_from).collect(),
        other => Err(CodecError::NotAnArray {
            found: json_kind(&other),
        }),
    }
}

/// Decode a text-encoded nested structure for path descent.
///
/// Arrays are accepted because they decode to index-keyed records; every
/// other top-level shape cannot be descended into.
pub fn decode_nested(input: &str) -> Result<Record, CodecError> {
    match decode_value(input)? {
        FieldValue::Record(record) => Ok(*record),
        other => Err(CodecError::NotARecord {
            found: other.kind_name(),
        }),
    }
}

/// Serialize a value to JSON text
pub fn encode_value(value: &FieldValue) -> Result<String, CodecError> {
    Ok(serde_json::to_string(&value.to_json())?)
}

/// Serialize a record to JSON text
pub fn encode_record(record: &Record) -> Result<String, CodecError> {
    Ok(serde_json::to_string(&record.to_json())?)
}

/// Deep-copy a record through an encode/decode round trip
pub fn deep_copy(record: &Record) -> Result<Record, CodecError> {
    decode_record(&encode_record(record)?)
}
