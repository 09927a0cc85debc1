//! Regex-backed input validators
//!
//! Patterns are compiled once on first use and shared process-wide.

use regex::Regex;
use std::sync::OnceLock;

static NUMERIC_PATTERN: OnceLock<Regex> = OnceLock::new();
static DATE_PATTERN: OnceLock<Regex> = OnceLock::new();
static DATETIME_PATTERN: OnceLock<Regex> = OnceLock::new();
static CURRENCY_PATTERN: OnceLock<Regex> = OnceLock::new();
static EMAIL_PATTERN: OnceLock<Regex> = OnceLock::new();

fn numeric_pattern() -> &'static Regex {
    NUMERIC_PATTERN.get_or_init(|| Regex::new(r"^-?\d+(\.\d+)?$").expect("valid pattern"))
}

fn date_pattern() -> &'static Regex {
    DATE_PATTERN.get_or_init(|| {
        Regex::new(r"^((?:19|20)\d\d)-(0?[1-9]|1[012])-(0?[1-9]|[12]\d|3[01])$")
            .expect("valid pattern")
    })
}

fn datetime_pattern() -> &'static Regex {
    DATETIME_PATTERN.get_or_init(|| {
        Regex::new(
            r"^\d{4}-(?:0[1-9]|1[0-2])-(?:0[1-9]|[1-2]\d|3[0-1])T(?:[0-1]\d|2[0-3]):[0-5]\d:[0-5]\d(?:\.\d+)?(?:Z|[+-]\d{2}:?\d{2})$",
        )
        .expect("valid pattern")
    })
}

fn currency_pattern() -> &'static Regex {
    CURRENCY_PATTERN.get_or_init(|| {
        Regex::new(r"^[+-]?(\d*|\d{1,3}(,\d{3})*)(\.\d+)?\b$").expect("valid pattern")
    })
}

fn email_pattern() -> &'static Regex {
    EMAIL_PATTERN.get_or_init(|| {
        Regex::new(
            r"^[A-Za-z0-9_-]+(\.[A-Za-z0-9_-]+)*@[^-][A-Za-z0-9-]+(\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,}$",
        )
        .expect("valid pattern")
    })
}

/// Check for an optionally signed decimal number (no exponent, no
/// grouping separators)
pub fn is_numeric(input: &str) -> bool {
    numeric_pattern().is_match(input)
}

/// Check for a calendar date in `YYYY-MM-DD` form (years 1900-2099).
///
/// The shape check is followed by a real calendar check, so 2023-02-30
/// is rejected even though it matches the pattern.
pub fn is_valid_date(input: &str) -> bool {
    let Some(captures) = date_pattern().captures(input) else {
        return false;
    };
    let year: i32 = captures[1].parse().unwrap_or(0);
    let month: u32 = captures[2].parse().unwrap_or(0);
    let day: u32 = captures[3].parse().unwrap_or(0);
    chrono::NaiveDate::from_ymd_opt(year, month, day).is_some()
}

/// Check for an RFC 3339-style timestamp with `Z` or numeric offset
pub fn is_valid_datetime(input: &str) -> bool {
    datetime_pattern().is_match(input)
}

/// Check for a currency amount: optional sign, optional comma grouping,
/// optional decimal part. A bare fraction like ".5" is accepted; the
/// trailing word boundary rejects empty and sign-only input.
pub fn is_valid_currency(input: &str) -> bool {
    currency_pattern().is_match(input)
}

/// Check for a plausible email address. The local part (before `@`) is
/// limited to 64 characters.
pub fn is_valid_email(input: &str) -> bool {
    match input.find('@') {
        Some(at) if (1..=64).contains(&at) => email_pattern().is_match(input),
        _ => false,
    }
}

/// Check that the input is strictly shorter than `max` characters
pub fn is_within_length(input: &str, max: usize) -> bool {
    input.chars().count() < max
}

/// Match input against an ad hoc pattern. An invalid pattern is an error,
/// never a silent `false`.
pub fn matches_pattern(input: &str, pattern: &str) -> Result<bool, regex::Error> {
    Ok(Regex::new(pattern)?.is_match(input))
}

// ============================================================================
// TESTS
// ============================================================================
