//! Numeric string validators
//!
//! These rules parse the input; a string that does not parse is rejected,
//! never an error.

use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::{Validate, ValidationError};

static INT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-+]?[0-9]+$").expect("int pattern compiles"));

crate::validator! {
    /// Whole number with an optional sign, any magnitude.
    pub Int for str;
    rule(input) { INT_REGEX.is_match(input) }
    error(input) { ValidationError::invalid_format("int", "String must be a whole number") }
    fn int();
}

crate::validator! {
    /// Parses as a 32-bit float after trimming surrounding whitespace.
    ///
    /// Accepts decimals, exponents, a sign, and the `inf` / `infinity` /
    /// `nan` spellings.
    pub Float for str;
    rule(input) { input.trim().parse::<f32>().is_ok() }
    error(input) { ValidationError::invalid_format("float", "String must be a number") }
    fn float();
}

// ============================================================================
// DIVISIBLE BY
// ============================================================================

/// The string parses as an `i32` that is divisible by `divisor`.
///
/// A zero divisor is a caller bug and panics with the usual
/// division-by-zero arithmetic failure, exactly like `i32 % 0`.
///
/// # Examples
///
/// ```
/// use validator_rules::validators::divisible_by;
/// use validator_rules::foundation::Validate;
///
/// let validator = divisible_by(3);
/// assert!(validator.validate("9").is_ok());
/// assert!(validator.validate("7").is_err());
/// assert!(validator.validate("nine").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DivisibleBy {
    /// The divisor.
    pub divisor: i32,
}

impl DivisibleBy {
    /// Creates a new divisibility validator.
    #[must_use]
    pub const fn new(divisor: i32) -> Self {
        Self { divisor }
    }
}

impl Validate for DivisibleBy {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        let Ok(value) = input.trim().parse::<i32>() else {
            return Err(ValidationError::invalid_format(
                "int",
                "String must be a 32-bit whole number",
            ));
        };

        // `wrapping_rem` still panics on zero; it only absorbs `i32::MIN % -1`.
        if value.wrapping_rem(self.divisor) == 0 {
            Ok(())
        } else {
            Err(ValidationError::new(
                "divisible_by",
                format!("Value must be divisible by {}", self.divisor),
            )
            .with_param("divisor", self.divisor.to_string())
            .with_param("actual", value.to_string()))
        }
    }
}

/// Creates a validator that checks the parsed number against `divisor`.
#[must_use]
pub const fn divisible_by(divisor: i32) -> DivisibleBy {
    DivisibleBy::new(divisor)
}

// ============================================================================
// TESTS
// ============================================================================
