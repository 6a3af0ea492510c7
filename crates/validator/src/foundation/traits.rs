//! Core traits for the validation system
//!
//! This module defines the trait every rule implements and the extension
//! trait that composes rules.

use crate::foundation::ValidationError;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The trait every validation rule implements.
///
/// Generic over the input type so that a rule only ever sees the kind of
/// value it understands. Rules return `Result<(), ValidationError>`; the
/// boolean predicates in [`crate::rules`] are thin `is_ok()` wrappers.
///
/// # Examples
///
/// ```
/// use validator_rules::foundation::{Validate, ValidationError};
///
/// struct NotBlank;
///
/// impl Validate for NotBlank {
///     type Input = str;
///
///     fn validate(&self, input: &str) -> Result<(), ValidationError> {
///         if input.trim().is_empty() {
///             Err(ValidationError::new("not_blank", "must not be blank"))
///         } else {
///             Ok(())
///         }
///     }
/// }
///
/// assert!(NotBlank.validate("x").is_ok());
/// assert!(NotBlank.validate("  ").is_err());
/// ```
pub trait Validate {
    /// The type of input being validated.
    ///
    /// Use `?Sized` to allow validation of unsized types like `str`.
    type Input: ?Sized;

    /// Validates the input value.
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;

    /// Returns `true` when the input passes this rule.
    fn check(&self, input: &Self::Input) -> bool {
        self.validate(input).is_ok()
    }
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Extension trait providing combinator methods for validators.
///
/// Implemented automatically for every [`Validate`] type.
///
/// # Examples
///
/// ```
/// use validator_rules::prelude::*;
///
/// let short_hex = hexadecimal().and(length(1, 4));
/// assert!(short_hex.check("beef"));
/// assert!(!short_hex.check("deadbeef"));
/// ```
pub trait ValidateExt: Validate + Sized {
    /// Combines two validators with logical AND.
    ///
    /// Both validators must pass. Short-circuits on the first failure.
    fn and<V>(self, other: V) -> And<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        And::new(self, other)
    }

    /// Combines two validators with logical OR.
    ///
    /// At least one validator must pass. Short-circuits on the first success.
    fn or<V>(self, other: V) -> Or<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        Or::new(self, other)
    }

    /// Inverts the validator with logical NOT.
    fn not(self) -> Not<Self> {
        Not::new(self)
    }
}

impl<T: Validate> ValidateExt for T {}

pub use crate::combinators::and::And;
pub use crate::combinators::not::Not;
pub use crate::combinators::or::Or;

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    struct AlwaysValid;

    impl Validate for AlwaysValid {
        type Input = str;

        fn validate(&self, _input: &Self::Input) -> Result<(), ValidationError> {
            Ok(())
        }
    }

    #[test]
    fn test_validator_trait() {
        assert!(AlwaysValid.validate("test").is_ok());
        assert!(AlwaysValid.check("test"));
    }

    #[test]
    fn test_not_via_ext() {
        assert!(!AlwaysValid.not().check("test"));
    }
}
