//! # recq Model - Dynamic Record Data Model
//!
//! Authoritative types shared by the recq engine: the tagged [`FieldValue`]
//! variant, the insertion-ordered [`Record`] map, [`FieldPath`] navigation,
//! and the error taxonomy for sorting, extraction, and decoding.

pub mod error;
pub mod path;
pub mod record;
pub mod value;

// Re-export key types for library consumers
pub use error::{CodecError, ExtractError, SortError};
pub use path::FieldPath;
pub use record::Record;
pub use value::FieldValue;
