//! Small text helpers shared by embedding programs

use regex::Regex;
use std::sync::OnceLock;

static SPECIAL_CHAR_PATTERN: OnceLock<Regex> = OnceLock::new();
static PARENTHESES_PATTERN: OnceLock<Regex> = OnceLock::new();

fn special_char_pattern() -> &'static Regex {
    SPECIAL_CHAR_PATTERN.get_or_init(|| Regex::new(r"(?i)[^a-z0-9 ]").expect("valid pattern"))
}

fn parentheses_pattern() -> &'static Regex {
    PARENTHESES_PATTERN.get_or_init(|| Regex::new(r"\(([^)]+)\)").expect("valid pattern"))
}

/// UTF-8 byte size of the input in kilobytes (1 KB = 1000 bytes)
pub fn size_in_kb(input: &str) -> f64 {
    input.len() as f64 / 1000.0
}

/// Check whether the input contains anything outside letters, digits, and
/// spaces
pub fn has_special_char(input: &str) -> bool {
    special_char_pattern().is_match(input)
}

/// Content of the first parenthesized group, if any
pub fn first_parenthesized(input: &str) -> Option<&str> {
    parentheses_pattern()
        .captures(input)
        .and_then(|captures| captures.get(1))
        .map(|group| group.as_str())
}

/// Contents of every parenthesized group, in order
pub fn parenthesized_contents(input: &str) -> Vec<&str> {
    parentheses_pattern()
        .captures_iter(input)
        .filter_map(|captures| captures.get(1))
        .map(|group| group.as_str())
        .collect()
}

/// Strip everything except ASCII digits
pub fn digits_only(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}
