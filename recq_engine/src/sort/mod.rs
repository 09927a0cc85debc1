//! Dynamic multi-field record ordering
//!
//! The comparator builder inspects the runtime tag of the first non-null
//! value per field, derives a comparison strategy from it, and applies the
//! chained strategies to sort the collection in place. Nulls and absent
//! fields always order after non-null values, for either direction.
//!
//! Sorting mutates the input sequence; the caller must hold exclusive
//! access to it for the duration of the call. No other shared state exists.

use recq_model::{FieldValue, Record, SortError};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

// ============================================================================
// ORDERING SPECIFICATION
// ============================================================================

/// Sort direction shared by all fields of one sort invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// Comparison strategy for one field, fixed by the tag of the first
/// non-null value encountered for that field across the collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SortStrategy {
    Integer,
    Number,
    Boolean,
    Text,
}

impl SortStrategy {
    fn expected_kind(self) -> &'static str {
        match self {
            SortStrategy::Integer => "integer",
            SortStrategy::Number => "number",
            SortStrategy::Boolean => "boolean",
            SortStrategy::Text => "text",
        }
    }
}

/// Precomputed sort key for one record under one field's strategy
#[derive(Debug, Clone)]
enum SortKey {
    Integer(i64),
    Number(f64),
    Boolean(bool),
    Text(String), // Lowercase-folded at extraction
    Null,
}

impl SortKey {
    fn is_null(&self) -> bool {
        matches!(self, SortKey::Null)
    }

    /// Compare two non-null keys. Columns are strategy-uniform by
    /// construction; cross-tag pairs fall back to a fixed tag rank so the
    /// ordering stays total.
    fn compare_non_null(&self, other: &SortKey) -> Ordering {
        match (self, other) {
            (SortKey::Integer(a), SortKey::Integer(b)) => a.cmp(b),
            (SortKey::Number(a), SortKey::Number(b)) => a.total_cmp(b),
            (SortKey::Boolean(a), SortKey::Boolean(b)) => a.cmp(b),
            (SortKey::Text(a), SortKey::Text(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            SortKey::Integer(_) => 0,
            SortKey::Number(_) => 1,
            SortKey::Boolean(_) => 2,
            SortKey::Text(_) => 3,
            SortKey::Null => 4,
        }
    }
}

/// Null-last comparison: reversing direction reverses the relative order of
/// non-null keys but never promotes null above non-null
fn compare_keys(a: &SortKey, b: &SortKey, direction: SortDirection) -> Ordering {
    match (a.is_null(), b.is_null()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => {
            let ordering = a.compare_non_null(b);
            match direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        }
    }
}

// ============================================================================
// COMPARATOR BUILDER
// ============================================================================

/// Classify a field by its first non-null value in collection order.
/// Returns `None` when no record holds a non-null value for the field.
fn classify_field(records: &[Record], field: &str) -> Option<SortStrategy> {
    let sample = records
        .iter()
        .find_map(|record| record.get(field).filter(|value| !value.is_null()))?;

    Some(match sample {
        FieldValue::Integer(_) => SortStrategy::Integer,
        FieldValue::Number(_) => SortStrategy::Number,
        FieldValue::Boolean(_) => SortStrategy::Boolean,
        // Text, records, and anything else compare by lowercase display form
        _ => SortStrategy::Text,
    })
}

/// Extract one typed key per record under the field's strategy.
/// Fails eagerly on the first value whose tag contradicts the strategy, so a
/// mismatch never leaves the sequence partially reordered.
fn extract_column(
    records: &[Record],
    field: &str,
    strategy: SortStrategy,
) -> Result<Vec<SortKey>, SortError> {
    records
        .iter()
        .map(|record| {
            let value = match record.get(field) {
                None | Some(FieldValue::Null) => return Ok(SortKey::Null),
                Some(value) => value,
            };
            match (strategy, value) {
                (SortStrategy::Integer, FieldValue::Integer(i)) => Ok(SortKey::Integer(*i)),
                (SortStrategy::Number, FieldValue::Number(n)) => Ok(SortKey::Number(*n)),
                (SortStrategy::Boolean, FieldValue::Boolean(b)) => Ok(SortKey::Boolean(*b)),
                (SortStrategy::Text, value) => {
                    Ok(SortKey::Text(value.to_string().to_lowercase()))
                }
                (strategy, value) => Err(SortError::TypeMismatch {
                    field: field.to_string(),
                    expected: strategy.expected_kind(),
                    found: value.kind_name(),
                }),
            }
        })
        .collect()
}

/// Reorder records by the precomputed key columns, chaining field
/// comparators in column order: ties on column `i` break on column `i + 1`
fn apply_order(records: &mut [Record], columns: Vec<Vec<SortKey>>, direction: SortDirection) {
    let mut order: Vec<usize> = (0..records.len()).collect();
    // Stable sort keeps the existing order for full ties
    order.sort_by(|&a, &b| {
        for column in &columns {
            match compare_keys(&column[a], &column[b], direction) {
                Ordering::Equal => continue,
                decided => return decided,
            }
        }
        Ordering::Equal
    });
    permute(records, &order);
}

/// Rearrange records so position `i` holds the record previously at
/// `order[i]`
fn permute(records: &mut [Record], order: &[usize]) {
    let mut sorted: Vec<Record> = order
        .iter()
        .map(|&index| std::mem::take(&mut records[index]))
        .collect();
    for (slot, record) in records.iter_mut().zip(sorted.drain(..)) {
        *slot = record;
    }
}

// ============================================================================
// PUBLIC OPERATIONS
// ============================================================================

/// Sort records in place by one or more fields, earlier fields taking
/// priority and later fields breaking ties.
///
/// Field names are trimmed of surrounding whitespace. A field with no
/// non-null value in any record contributes no ordering and is skipped;
/// on sparse data this can make the whole call a no-op.
pub fn sort_records<S: AsRef<str>>(
    records: &mut [Record],
    order_by: &[S],
    direction: SortDirection,
) -> Result<(), SortError> {
    if order_by.is_empty() {
        return Err(SortError::EmptyFieldList);
    }

    let mut columns = Vec::with_capacity(order_by.len());
    for field in order_by {
        let field = field.as_ref().trim();
        let Some(strategy) = classify_field(records, field) else {
            #[cfg(feature = "logging")]
            log::debug!("field '{field}' has no non-null sample, skipped for ordering");
            continue;
        };
        columns.push(extract_column(records, field, strategy)?);
    }

    if !columns.is_empty() {
        apply_order(records, columns, direction);
    }
    Ok(())
}

/// Sort records in place by exactly one field.
///
/// Unlike the multi-field variant this does not skip silently: when every
/// record lacks the field or holds null, the call fails with
/// [`SortError::NoSampleValue`].
pub fn sort_by_field(
    records: &mut [Record],
    order_field: &str,
    direction: SortDirection,
) -> Result<(), SortError> {
    let field = order_field.trim();
    let strategy = classify_field(records, field).ok_or_else(|| SortError::NoSampleValue {
        field: field.to_string(),
    })?;
    let column = extract_column(records, field, strategy)?;
    apply_order(records, vec![column], direction);
    Ok(())
}

/// Sort records in place by a field holding integers encoded as text.
///
/// Values are parsed as decimal integers and ordered numerically, so "10"
/// sorts after "2". Integer-tagged values are accepted as-is. Missing and
/// null fields sort last in either direction. A text value that does not
/// parse fails with [`SortError::UnparsableNumber`] before any reordering.
pub fn sort_numeric_text(
    records: &mut [Record],
    order_field: &str,
    direction: SortDirection,
) -> Result<(), SortError> {
    let field = order_field.trim();
    let column = records
        .iter()
        .map(|record| match record.get(field) {
            None | Some(FieldValue::Null) => Ok(SortKey::Null),
            Some(FieldValue::Text(text)) => text
                .trim()
                .parse::<i64>()
                .map(SortKey::Integer)
                .map_err(|_| SortError::UnparsableNumber {
                    field: field.to_string(),
                    value: text.clone(),
                }),
            Some(FieldValue::Integer(i)) => Ok(SortKey::Integer(*i)),
            Some(other) => Err(SortError::TypeMismatch {
                field: field.to_string(),
                expected: "text",
                found: other.kind_name(),
            }),
        })
        .collect::<Result<Vec<_>, _>>()?;
    apply_order(records, vec![column], direction);
    Ok(())
}

/// Sort records in place by the lowercase display form of one field,
/// regardless of value tags.
///
/// Pairs where either side is missing or null compare equal, so such
/// records keep their relative positions. Never fails.
pub fn sort_lexical(records: &mut [Record], sort_field: &str, direction: SortDirection) {
    let keys: Vec<Option<String>> = records
        .iter()
        .map(|record| {
            record
                .get(sort_field)
                .filter(|value| !value.is_null())
                .map(|value| value.to_string().to_lowercase())
        })
        .collect();

    let mut order: Vec<usize> = (0..records.len()).collect();
    order.sort_by(|&a, &b| match (&keys[a], &keys[b]) {
        (Some(x), Some(y)) => match direction {
            SortDirection::Ascending => x.cmp(y),
            SortDirection::Descending => y.cmp(x),
        },
        _ => Ordering::Equal,
    });
    permute(records, &order);
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn records(input: serde_json::Value) -> Vec<Record> {
        input
            .as_array()
            .expect("test input must be an array")
            .iter()
            .map(|item| Record::try_from(item.clone()).expect("test input must hold objects"))
            .collect()
    }

    fn field_values(records: &[Record], field: &str) -> Vec<Option<FieldValue>> {
        records.iter().map(|r| r.get(field).cloned()).collect()
    }

    #[test]
    fn test_integer_fields_sort_numerically() {
        let mut data = records(serde_json::json!([
            {"a": 10}, {"a": 2}, {"a": 33}
        ]));
        sort_records(&mut data, &["a"], SortDirection::Ascending).unwrap();
        assert_eq!(
            field_values(&data, "a"),
            vec![
                Some(FieldValue::Integer(2)),
                Some(FieldValue::Integer(10)),
                Some(FieldValue::Integer(33)),
            ]
        );
    }

    #[test]
    fn test_chained_tie_break() {
        let mut data = records(serde_json::json!([
            {"a": 1, "b": "z"}, {"a": 1, "b": "a"}, {"a": 2, "b": "m"}
        ]));
        sort_records(&mut data, &["a", "b"], SortDirection::Ascending).unwrap();
        assert_eq!(
            field_values(&data, "b"),
            vec![
                Some(FieldValue::from("a")),
                Some(FieldValue::from("z")),
                Some(FieldValue::from("m")),
            ]
        );
    }

    #[test]
    fn test_missing_field_everywhere_is_skipped() {
        let mut data = records(serde_json::json!([
            {"a": 3}, {"a": 1}, {"a": 2}
        ]));
        // "ghost" exists nowhere: it contributes no ordering
        sort_records(&mut data, &["ghost"], SortDirection::Ascending).unwrap();
        assert_eq!(
            field_values(&data, "a"),
            vec![
                Some(FieldValue::Integer(3)),
                Some(FieldValue::Integer(1)),
                Some(FieldValue::Integer(2)),
            ]
        );

        // A skipped field does not disturb active fields either
        sort_records(&mut data, &["ghost", "a"], SortDirection::Ascending).unwrap();
        assert_eq!(
            field_values(&data, "a"),
            vec![
                Some(FieldValue::Integer(1)),
                Some(FieldValue::Integer(2)),
                Some(FieldValue::Integer(3)),
            ]
        );
    }

    #[test]
    fn test_nulls_sort_last_both_directions() {
        let mut data = records(serde_json::json!([
            {"a": null}, {"a": 2}, {}, {"a": 1}
        ]));
        sort_records(&mut data, &["a"], SortDirection::Ascending).unwrap();
        assert_eq!(
            field_values(&data, "a"),
            vec![
                Some(FieldValue::Integer(1)),
                Some(FieldValue::Integer(2)),
                Some(FieldValue::Null),
                None,
            ]
        );

        sort_records(&mut data, &["a"], SortDirection::Descending).unwrap();
        assert_eq!(
            field_values(&data, "a"),
            vec![
                Some(FieldValue::Integer(2)),
                Some(FieldValue::Integer(1)),
                Some(FieldValue::Null),
                None,
            ]
        );
    }

    #[test]
    fn test_text_ordering_is_case_insensitive() {
        let mut data = records(serde_json::json!([
            {"name": "Bob"}, {"name": "alice"}, {"name": "bob"}
        ]));
        sort_records(&mut data, &["name"], SortDirection::Ascending).unwrap();
        assert_eq!(
            field_values(&data, "name"),
            vec![
                Some(FieldValue::from("alice")),
                Some(FieldValue::from("Bob")),
                Some(FieldValue::from("bob")),
            ]
        );
    }

    #[test]
    fn test_numeric_strings_sort_lexically_under_text_strategy() {
        // "10" < "2" lexically; the strategy comes from the text tag, not
        // from the digits inside
        let mut data = records(serde_json::json!([{"a": "2"}, {"a": "10"}]));
        sort_records(&mut data, &["a"], SortDirection::Ascending).unwrap();
        assert_eq!(
            field_values(&data, "a"),
            vec![Some(FieldValue::from("10")), Some(FieldValue::from("2"))]
        );
    }

    #[test]
    fn test_integer_classified_field_sorts_numerically_not_lexically() {
        let mut data = records(serde_json::json!([{"a": 10}, {"a": 2}]));
        sort_records(&mut data, &["a"], SortDirection::Ascending).unwrap();
        assert_eq!(
            field_values(&data, "a"),
            vec![Some(FieldValue::Integer(2)), Some(FieldValue::Integer(10))]
        );
    }

    #[test]
    fn test_type_mismatch_fails_before_mutation() {
        let mut data = records(serde_json::json!([
            {"a": 3}, {"a": "x"}, {"a": 1}
        ]));
        let result = sort_records(&mut data, &["a"], SortDirection::Ascending);
        assert_matches!(
            result,
            Err(SortError::TypeMismatch { expected: "integer", found: "text", .. })
        );

        // No partial reordering happened
        assert_eq!(
            field_values(&data, "a"),
            vec![
                Some(FieldValue::Integer(3)),
                Some(FieldValue::from("x")),
                Some(FieldValue::Integer(1)),
            ]
        );
    }

    #[test]
    fn test_field_names_are_trimmed() {
        let mut data = records(serde_json::json!([{"a": 2}, {"a": 1}]));
        sort_records(&mut data, &["  a  "], SortDirection::Ascending).unwrap();
        assert_eq!(
            field_values(&data, "a"),
            vec![Some(FieldValue::Integer(1)), Some(FieldValue::Integer(2))]
        );
    }

    #[test]
    fn test_empty_field_list_is_an_error() {
        let mut data = records(serde_json::json!([{"a": 1}]));
        let fields: [&str; 0] = [];
        assert_matches!(
            sort_records(&mut data, &fields, SortDirection::Ascending),
            Err(SortError::EmptyFieldList)
        );
    }

    #[test]
    fn test_boolean_fields_sort_false_first() {
        let mut data = records(serde_json::json!([
            {"ok": true}, {"ok": false}, {"ok": true}
        ]));
        sort_records(&mut data, &["ok"], SortDirection::Ascending).unwrap();
        assert_eq!(
            field_values(&data, "ok"),
            vec![
                Some(FieldValue::Boolean(false)),
                Some(FieldValue::Boolean(true)),
                Some(FieldValue::Boolean(true)),
            ]
        );
    }

    #[test]
    fn test_decimal_fields_sort_by_value() {
        let mut data = records(serde_json::json!([
            {"score": 2.5}, {"score": 0.5}, {"score": 1.75}
        ]));
        sort_records(&mut data, &["score"], SortDirection::Descending).unwrap();
        assert_eq!(
            field_values(&data, "score"),
            vec![
                Some(FieldValue::Number(2.5)),
                Some(FieldValue::Number(1.75)),
                Some(FieldValue::Number(0.5)),
            ]
        );
    }

    #[test]
    fn test_sort_by_field_single_variant() {
        let mut data = records(serde_json::json!([{"a": 2}, {"a": 1}]));
        sort_by_field(&mut data, "a", SortDirection::Ascending).unwrap();
        assert_eq!(
            field_values(&data, "a"),
            vec![Some(FieldValue::Integer(1)), Some(FieldValue::Integer(2))]
        );
    }

    #[test]
    fn test_sort_by_field_without_sample_is_an_error() {
        let mut data = records(serde_json::json!([{"a": null}, {}]));
        assert_matches!(
            sort_by_field(&mut data, "a", SortDirection::Ascending),
            Err(SortError::NoSampleValue { .. })
        );
    }

    #[test]
    fn test_lexical_sort_ignores_tags() {
        let mut data = records(serde_json::json!([
            {"a": 10}, {"a": "2"}, {"a": true}
        ]));
        sort_lexical(&mut data, "a", SortDirection::Ascending);
        // Display forms: "10" < "2" < "true"
        assert_eq!(
            field_values(&data, "a"),
            vec![
                Some(FieldValue::Integer(10)),
                Some(FieldValue::from("2")),
                Some(FieldValue::Boolean(true)),
            ]
        );
    }

    #[test]
    fn test_lexical_sort_treats_missing_pair_as_equal() {
        let mut data = records(serde_json::json!([
            {"b": 1}, {"a": "x", "b": 2}, {"b": 3}
        ]));
        sort_lexical(&mut data, "a", SortDirection::Ascending);
        // Records without "a" never swap with their neighbors
        assert_eq!(
            field_values(&data, "b"),
            vec![
                Some(FieldValue::Integer(1)),
                Some(FieldValue::Integer(2)),
                Some(FieldValue::Integer(3)),
            ]
        );
    }

    #[test]
    fn test_numeric_text_sorts_by_parsed_value() {
        let mut data = records(serde_json::json!([
            {"seq": "10"}, {"seq": "2"}, {"seq": "33"}
        ]));
        sort_numeric_text(&mut data, "seq", SortDirection::Ascending).unwrap();
        assert_eq!(
            field_values(&data, "seq"),
            vec![
                Some(FieldValue::from("2")),
                Some(FieldValue::from("10")),
                Some(FieldValue::from("33")),
            ]
        );

        sort_numeric_text(&mut data, "seq", SortDirection::Descending).unwrap();
        assert_eq!(
            field_values(&data, "seq"),
            vec![
                Some(FieldValue::from("33")),
                Some(FieldValue::from("10")),
                Some(FieldValue::from("2")),
            ]
        );
    }

    #[test]
    fn test_numeric_text_missing_field_sorts_last() {
        let mut data = records(serde_json::json!([
            {}, {"seq": "5"}, {"seq": "-1"}
        ]));
        sort_numeric_text(&mut data, "seq", SortDirection::Ascending).unwrap();
        assert_eq!(
            field_values(&data, "seq"),
            vec![
                Some(FieldValue::from("-1")),
                Some(FieldValue::from("5")),
                None,
            ]
        );
    }

    #[test]
    fn test_numeric_text_parse_failure_before_mutation() {
        let mut data = records(serde_json::json!([
            {"seq": "9"}, {"seq": "abc"}, {"seq": "1"}
        ]));
        assert_matches!(
            sort_numeric_text(&mut data, "seq", SortDirection::Ascending),
            Err(SortError::UnparsableNumber { .. })
        );
        // No partial reordering happened
        assert_eq!(
            field_values(&data, "seq"),
            vec![
                Some(FieldValue::from("9")),
                Some(FieldValue::from("abc")),
                Some(FieldValue::from("1")),
            ]
        );
    }

    #[test]
    fn test_numeric_text_rejects_non_text_tags() {
        let mut data = records(serde_json::json!([{"seq": "1"}, {"seq": true}]));
        assert_matches!(
            sort_numeric_text(&mut data, "seq", SortDirection::Ascending),
            Err(SortError::TypeMismatch { expected: "text", found: "boolean", .. })
        );
    }

    #[test]
    fn test_strategy_from_first_non_null_sample() {
        // First record has null, second holds the integer sample
        let mut data = records(serde_json::json!([
            {"a": null}, {"a": 20}, {"a": 3}
        ]));
        sort_records(&mut data, &["a"], SortDirection::Ascending).unwrap();
        assert_eq!(
            field_values(&data, "a"),
            vec![
                Some(FieldValue::Integer(3)),
                Some(FieldValue::Integer(20)),
                Some(FieldValue::Null),
            ]
        );
    }
}
