//! Boolean predicates
//!
//! One function per rule, each a thin `validate(..).is_ok()` over the
//! matching validator in [`crate::validators`]. Use the validators directly
//! when the reason for a rejection matters.

use chrono::NaiveDateTime;

use crate::error::RuleError;
use crate::foundation::Validate;
use crate::validators::{self, ByteLength, DateBound, IpVersion, Length, OneOf, RegexOptions};

// ============================================================================
// CHARSET / FORMAT
// ============================================================================

/// ASCII letters only, non-empty.
#[must_use]
pub fn is_alpha(s: &str) -> bool {
    validators::alpha().check(s)
}

/// ASCII letters and digits only, non-empty.
#[must_use]
pub fn is_alphanumeric(s: &str) -> bool {
    validators::alphanumeric().check(s)
}

/// Hex digits only, non-empty.
#[must_use]
pub fn is_hexadecimal(s: &str) -> bool {
    validators::hexadecimal().check(s)
}

/// Every char is ASCII. The empty string passes.
#[must_use]
pub fn is_ascii(s: &str) -> bool {
    validators::ascii().check(s)
}

/// At least one non-ASCII char.
#[must_use]
pub fn is_multibyte(s: &str) -> bool {
    validators::multibyte().check(s)
}

/// Contains at least one half-width char.
#[must_use]
pub fn is_half_width(s: &str) -> bool {
    validators::half_width().check(s)
}

/// Contains at least one full-width char.
#[must_use]
pub fn is_full_width(s: &str) -> bool {
    validators::full_width().check(s)
}

/// Contains both half-width and full-width chars.
#[must_use]
pub fn is_variable_width(s: &str) -> bool {
    validators::variable_width().check(s)
}

/// UTF-16 encoding contains a surrogate pair.
#[must_use]
pub fn is_surrogate_pair(s: &str) -> bool {
    validators::surrogate_pair().check(s)
}

/// `#fff`, `#ffffff`, `fff` or `ffffff` in any case.
#[must_use]
pub fn is_hex_color(s: &str) -> bool {
    validators::hex_color().check(s)
}

/// 24 hex digits.
#[must_use]
pub fn is_mongo_id(s: &str) -> bool {
    validators::mongo_id().check(s)
}

// ============================================================================
// CASE / EQUALITY
// ============================================================================

/// Unchanged by lowercasing.
#[must_use]
pub fn is_lowercase(s: &str) -> bool {
    validators::lowercase().check(s)
}

/// Unchanged by uppercasing.
#[must_use]
pub fn is_uppercase(s: &str) -> bool {
    validators::uppercase().check(s)
}

/// Ordinal equality.
#[must_use]
pub fn equals(s: &str, other: &str) -> bool {
    s == other
}

/// `true` only for an absent string. `Some("")` is not null.
#[must_use]
pub const fn is_null(s: Option<&str>) -> bool {
    s.is_none()
}

/// Ordinal substring test.
#[must_use]
pub fn contains(s: &str, sub: &str) -> bool {
    s.contains(sub)
}

// ============================================================================
// NUMERIC / LENGTH
// ============================================================================

/// Optionally signed run of ASCII digits, any magnitude.
#[must_use]
pub fn is_int(s: &str) -> bool {
    validators::int().check(s)
}

/// Parses as an `f32` after trimming.
#[must_use]
pub fn is_float(s: &str) -> bool {
    validators::float().check(s)
}

/// Parses as an `i32` after trimming, and `by` divides it.
///
/// # Panics
///
/// Panics when `by` is zero and `s` parses.
#[must_use]
pub fn is_divisible_by(s: &str, by: i32) -> bool {
    validators::divisible_by(by).check(s)
}

/// `min <= len <= max` in UTF-16 code units.
#[must_use]
pub fn is_length(s: &str, min: usize, max: usize) -> bool {
    Length::new(min, max).check(s)
}

/// Same as [`is_length`]; `max: None` leaves the upper end open.
#[must_use]
pub fn is_byte_length(s: &str, min: usize, max: Option<usize>) -> bool {
    ByteLength::new(min, max).check(s)
}

// ============================================================================
// SET / PATTERN
// ============================================================================

/// Ordinal equality with at least one of `values`.
#[must_use]
pub fn is_in<S: AsRef<str>>(s: &str, values: &[S]) -> bool {
    OneOf::new(values.iter().map(AsRef::as_ref)).check(s)
}

/// `pattern`, compiled with `options`, matches somewhere in `s`.
///
/// # Errors
///
/// Returns [`RuleError::InvalidPattern`] when `pattern` does not compile.
///
/// # Examples
///
/// ```
/// use validator_rules::{RegexOptions, matches};
///
/// assert!(matches("Hello World", "world", RegexOptions::IGNORE_CASE)?);
/// assert!(!matches("Hello World", "^world", RegexOptions::IGNORE_CASE)?);
/// assert!(matches("x", "(", RegexOptions::NONE).is_err());
/// # Ok::<(), validator_rules::RuleError>(())
/// ```
pub fn matches(s: &str, pattern: &str, options: RegexOptions) -> Result<bool, RuleError> {
    Ok(validators::matches(pattern, options)?.check(s))
}

// ============================================================================
// NETWORK
// ============================================================================

/// IP address of the given version.
#[must_use]
pub fn is_ip(s: &str, version: IpVersion) -> bool {
    validators::ip(version).check(s)
}

// ============================================================================
// EMAIL / DATE / JSON
// ============================================================================

/// Exactly one bare email address.
#[must_use]
pub fn is_email(s: &str) -> bool {
    validators::email().check(s)
}

/// Recognizable date or date-time.
#[must_use]
pub fn is_date(s: &str) -> bool {
    validators::date().check(s)
}

/// Parses as a date strictly after `reference`.
#[must_use]
pub fn is_after(s: &str, reference: NaiveDateTime) -> bool {
    DateBound::after(reference).check(s)
}

/// Parses as a date strictly before `reference`.
#[must_use]
pub fn is_before(s: &str, reference: NaiveDateTime) -> bool {
    DateBound::before(reference).check(s)
}

/// One well-formed JSON value.
#[must_use]
pub fn is_json(s: &str) -> bool {
    validators::json().check(s)
}

// ============================================================================
// PHONE
// ============================================================================

/// Mobile number for `locale`. Unknown locales are always `false`.
#[must_use]
pub fn is_mobile_phone(number: &str, locale: &str) -> bool {
    validators::mobile_phone(locale).check(number)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_is_not_empty() {
        assert!(is_null(None));
        assert!(!is_null(Some("")));
        assert!(!is_null(Some("x")));
    }

    #[test]
    fn test_equals_and_contains_are_ordinal() {
        assert!(equals("abc", "abc"));
        assert!(!equals("abc", "ABC"));
        assert!(contains("hello", ""));
        assert!(contains("hello", "ell"));
        assert!(!contains("hello", "ELL"));
    }

    #[test]
    fn test_is_in() {
        assert!(is_in("b", &["a", "b"]));
        assert!(!is_in("B", &["a", "b"]));
        assert!(!is_in::<&str>("a", &[]));
        assert!(is_in("x", &[String::from("x")]));
    }

    #[test]
    fn test_matches_propagates_bad_pattern() {
        assert!(matches("abc", "b", RegexOptions::NONE).unwrap());
        assert!(matches("abc", "[", RegexOptions::NONE).is_err());
    }
}
