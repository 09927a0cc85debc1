//! # recq Engine - Dynamic Record Query Engine
//!
//! Sorts collections of semi-structured records by fields whose concrete
//! type is discovered at runtime, and extracts values nested arbitrarily
//! deep by following a chain of field-name segments.

pub mod codec;
pub mod extract;
pub mod sort;
pub mod text;
pub mod validation;

// Convenience re-exports
pub use extract::{extract, extract_from_record};
pub use sort::{sort_by_field, sort_lexical, sort_numeric_text, sort_records, SortDirection};

pub mod prelude {
    pub use crate::codec::{decode_record, decode_records, decode_value, deep_copy, encode_record, encode_value};
    pub use crate::extract::{extract, extract_from_record};
    pub use crate::sort::{sort_by_field, sort_lexical, sort_numeric_text, sort_records, SortDirection};
    pub use recq_model::{CodecError, ExtractError, FieldPath, FieldValue, Record, SortError};
}
