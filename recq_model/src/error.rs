// ============================================================================
// ERRORS
// ============================================================================

/// Errors raised while decoding text into model values
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Expected a record, found {found}")]
    NotARecord { found: &'static str },

    #[error("Expected an array of records, found {found}")]
    NotAnArray { found: &'static str },
}

/// Errors raised while building or applying a record ordering
#[derive(Debug, thiserror::Error)]
pub enum SortError {
    /// The comparison strategy derived from the first non-null sample cannot
    /// be applied to a later record's value. Raised before any reordering, so
    /// the input sequence is never left partially sorted.
    #[error("Type mismatch for field '{field}': expected {expected}, found {found}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        found: &'static str,
    },

    /// Single-field sort where every record lacks the field or holds null
    #[error("No non-null value for field '{field}' in any record")]
    NoSampleValue { field: String },

    /// Numeric-text sort where a value does not parse as an integer
    #[error("Value '{value}' for field '{field}' is not numeric text")]
    UnparsableNumber { field: String, value: String },

    #[error("Field list for sorting is empty")]
    EmptyFieldList,
}

/// Errors raised while extracting a value through a field path
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    /// A text value could not be decoded into a nested record where the path
    /// required further descent
    #[error("Malformed nested value at segment '{segment}'")]
    MalformedStructure {
        segment: String,
        #[source]
        source: CodecError,
    },

    /// The path tries to descend through a scalar before all segments are
    /// consumed
    #[error("Cannot descend into {kind} value at segment '{segment}'")]
    NotDescendable {
        segment: String,
        kind: &'static str,
    },
}
