//! Path-based field extraction
//!
//! Walks a nested value segment by segment, decoding text-encoded
//! sub-structures on demand. Traversal is read-only; the result is an
//! owned clone of the terminal value.
//!
//! An absent field is not an error: the walk ends there and yields
//! [`FieldValue::Null`]. Errors are reserved for structures the path
//! cannot continue through, either a scalar in the middle of the chain or
//! text that fails to decode as a nested record.

use recq_model::{ExtractError, FieldPath, FieldValue, Record};

use crate::codec;

/// Extract the value a path points at inside a nested value
pub fn extract(root: &FieldValue, path: &FieldPath) -> Result<FieldValue, ExtractError> {
    descend(root, &path.components, 0)
}

/// Extract the value a path points at inside a record
pub fn extract_from_record(record: &Record, path: &FieldPath) -> Result<FieldValue, ExtractError> {
    // Borrow the record as the root value without cloning it up front
    let Some((first, rest)) = path.components.split_first() else {
        return Ok(FieldValue::Record(Box::new(record.clone())));
    };
    let next = record.get(first).cloned().unwrap_or(FieldValue::Null);
    descend(&next, rest, 0)
}

fn descend(
    current: &FieldValue,
    segments: &[String],
    cursor: usize,
) -> Result<FieldValue, ExtractError> {
    // Terminal: all segments consumed, or the chain hit an absent value
    if cursor >= segments.len() || current.is_null() {
        return Ok(current.clone());
    }

    let segment = &segments[cursor];
    let decoded;
    let record = match current {
        FieldValue::Record(record) => record.as_ref(),
        FieldValue::Text(text) => {
            decoded = codec::decode_nested(text).map_err(|source| {
                ExtractError::MalformedStructure {
                    segment: segment.clone(),
                    source,
                }
            })?;
            &decoded
        }
        scalar => {
            return Err(ExtractError::NotDescendable {
                segment: segment.clone(),
                kind: scalar.kind_name(),
            })
        }
    };

    let next = record.get(segment).cloned().unwrap_or(FieldValue::Null);
    descend(&next, segments, cursor + 1)
}

// ============================================================================
// TESTS
// ============================================================================
