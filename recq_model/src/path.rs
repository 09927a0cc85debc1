// ============================================================================
// FIELD PATH - Navigation into nested records
// ============================================================================

use std::fmt;

/// Ordered sequence of field-name segments identifying a (possibly nested)
/// value inside a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath {
    /// Path components (dot-separated identifiers)
    pub components: Vec<String>,
}

impl FieldPath {
    /// Create a new field path
    pub fn new(components: Vec<String>) -> Self {
        Self { components }
    }

    /// Create a single-component field path
    pub fn single(field: impl Into<String>) -> Self {
        Self {
            components: vec![field.into()],
        }
    }

    /// Parse field path from dot-separated string
    pub fn parse(path: &str) -> Self {
        Self {
            components: path.split('.').map(|s| s.to_string()).collect(),
        }
    }

    /// Check if this is a simple (single component) field path
    pub fn is_simple(&self) -> bool {
        self.components.len() == 1
    }

    /// Number of segments
    pub fn depth(&self) -> usize {
        self.components.len()
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.components.join("."))
    }
}
