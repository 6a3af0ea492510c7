//! AND combinator - logical conjunction of validators
//!
//! Both validators must pass for the combined validator to succeed.
//! `VariableWidth` is built from this combinator.

use crate::foundation::{Validate, ValidationError};

/// Combines two validators with logical AND.
///
/// Errors are returned from the first failing validator.
///
/// # Examples
///
/// ```
/// use validator_rules::combinators::And;
/// use validator_rules::foundation::Validate;
/// use validator_rules::validators::{half_width, full_width};
///
/// let validator = And::new(half_width(), full_width());
/// assert!(validator.validate("abcｱｲｳ漢字").is_ok());
/// assert!(validator.validate("abc").is_err()); // no full-width char
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct And<L, R> {
    pub(crate) left: L,
    pub(crate) right: R,
}

impl<L, R> And<L, R> {
    /// Creates a new `And` combinator.
    pub const fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// Returns a reference to the left validator.
    pub fn left(&self) -> &L {
        &self.left
    }

    /// Returns a reference to the right validator.
    pub fn right(&self) -> &R {
        &self.right
    }
}

impl<L, R> Validate for And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.left.validate(input)?;
        self.right.validate(input)?;
        Ok(())
    }
}

/// Creates an `And` combinator from two validators.
pub fn and<L, R>(left: L, right: R) -> And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    And::new(left, right)
}
