//! Character-class validators
//!
//! Rules that look only at which characters a string is made of.

use std::sync::LazyLock;

use regex::Regex;

use crate::combinators::And;
use crate::foundation::{ValidateExt, ValidationError};

static ALPHA_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z]+$").expect("alpha pattern compiles"));

static ALPHANUMERIC_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9]+$").expect("alphanumeric pattern compiles"));

static HEXADECIMAL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9a-fA-F]+$").expect("hexadecimal pattern compiles"));

// Half-width ranges: printable ASCII, half-width katakana, half-width hangul,
// half-width symbol forms. Both width patterns are searches, not full matches.
static HALF_WIDTH_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\x{0020}-\x{007E}\x{FF61}-\x{FF9F}\x{FFA0}-\x{FFDC}\x{FFE8}-\x{FFEE}0-9a-zA-Z]")
        .expect("half-width pattern compiles")
});

static FULL_WIDTH_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^\x{0020}-\x{007E}\x{FF61}-\x{FF9F}\x{FFA0}-\x{FFDC}\x{FFE8}-\x{FFEE}0-9a-zA-Z]")
        .expect("full-width pattern compiles")
});

// ============================================================================
// LETTERS AND DIGITS
// ============================================================================

crate::validator! {
    /// Non-empty string of ASCII letters.
    pub Alpha for str;
    rule(input) { ALPHA_REGEX.is_match(input) }
    error(input) {
        ValidationError::invalid_format("alpha", "String must contain only ASCII letters")
    }
    fn alpha();
}

crate::validator! {
    /// Non-empty string of ASCII letters and digits.
    pub Alphanumeric for str;
    rule(input) { ALPHANUMERIC_REGEX.is_match(input) }
    error(input) {
        ValidationError::invalid_format(
            "alphanumeric",
            "String must contain only ASCII letters and digits",
        )
    }
    fn alphanumeric();
}

crate::validator! {
    /// Non-empty string of hexadecimal digits, either case.
    pub Hexadecimal for str;
    rule(input) { HEXADECIMAL_REGEX.is_match(input) }
    error(input) {
        ValidationError::invalid_format("hexadecimal", "String must contain only hex digits")
    }
    fn hexadecimal();
}

// ============================================================================
// ENCODING
// ============================================================================

crate::validator! {
    /// Every code point is at most U+007F. The empty string passes.
    pub Ascii for str;
    rule(input) { input.is_ascii() }
    error(input) { ValidationError::new("ascii", "String must contain only ASCII characters") }
    fn ascii();
}

crate::validator! {
    /// At least one code point outside the ASCII range.
    pub MultiByte for str;
    rule(input) { !input.is_ascii() }
    error(input) {
        ValidationError::new("multibyte", "String must contain a multibyte character")
    }
    fn multibyte();
}

crate::validator! {
    /// Contains at least one half-width character.
    ///
    /// This is a search: `"ｱ漢"` passes because of the `ｱ`.
    pub HalfWidth for str;
    rule(input) { HALF_WIDTH_REGEX.is_match(input) }
    error(input) {
        ValidationError::new("half_width", "String must contain a half-width character")
    }
    fn half_width();
}

crate::validator! {
    /// Contains at least one character outside the half-width ranges.
    pub FullWidth for str;
    rule(input) { FULL_WIDTH_REGEX.is_match(input) }
    error(input) {
        ValidationError::new("full_width", "String must contain a full-width character")
    }
    fn full_width();
}

/// Contains both a half-width and a full-width character somewhere.
pub type VariableWidth = And<HalfWidth, FullWidth>;

/// Creates a [`VariableWidth`] validator.
#[must_use]
pub fn variable_width() -> VariableWidth {
    half_width().and(full_width())
}

crate::validator! {
    /// The UTF-16 encoding holds a high surrogate directly followed by a
    /// low surrogate, i.e. the string contains a character above U+FFFF.
    pub SurrogatePair for str;
    rule(input) { has_surrogate_pair(input) }
    error(input) {
        ValidationError::new("surrogate_pair", "String must contain a surrogate pair")
    }
    fn surrogate_pair();
}

fn has_surrogate_pair(input: &str) -> bool {
    let mut units = input.encode_utf16().peekable();
    while let Some(unit) = units.next() {
        if (0xD800..=0xDBFF).contains(&unit)
            && units
                .peek()
                .is_some_and(|next| (0xDC00..=0xDFFF).contains(next))
        {
            return true;
        }
    }
    false
}

// ============================================================================
// TESTS
// ============================================================================
