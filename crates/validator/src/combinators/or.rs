//! OR combinator - logical disjunction of validators

use crate::foundation::{Validate, ValidationError};

/// Combines two validators with logical OR.
///
/// If the first validator passes, the second is not evaluated. If both
/// fail, the combined error nests both causes.
///
/// # Examples
///
/// ```
/// use validator_rules::combinators::Or;
/// use validator_rules::foundation::Validate;
/// use validator_rules::validators::{IpVersion, ip};
///
/// let any_ip = Or::new(ip(IpVersion::Four), ip(IpVersion::Six));
/// assert!(any_ip.validate("10.0.0.1").is_ok());
/// assert!(any_ip.validate("fe80::1").is_ok());
/// assert!(any_ip.validate("localhost").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Or<L, R> {
    pub(crate) left: L,
    pub(crate) right: R,
}

impl<L, R> Or<L, R> {
    /// Creates a new `Or` combinator.
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

impl<L, R> Validate for Or<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        match self.left.validate(input) {
            Ok(()) => Ok(()),
            Err(left_error) => match self.right.validate(input) {
                Ok(()) => Ok(()),
                Err(right_error) => {
                    Err(ValidationError::new("or_failed", "All alternatives failed")
                        .with_nested(vec![left_error, right_error]))
                }
            },
        }
    }
}

/// Creates an `Or` combinator from two validators.
pub fn or<L, R>(left: L, right: R) -> Or<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    Or::new(left, right)
}
