//! NOT combinator - logical negation of validators

use crate::foundation::{Validate, ValidationError};

/// Inverts a validator: passes when the inner validator fails and vice versa.
///
/// # Examples
///
/// ```
/// use validator_rules::combinators::Not;
/// use validator_rules::foundation::Validate;
/// use validator_rules::validators::multibyte;
///
/// let ascii_only = Not::new(multibyte());
/// assert!(ascii_only.validate("plain").is_ok());
/// assert!(ascii_only.validate("naïve").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Not<V> {
    pub(crate) inner: V,
}

impl<V> Not<V> {
    /// Creates a new `Not` combinator.
    pub const fn new(inner: V) -> Self {
        Self { inner }
    }

    /// Returns a reference to the inner validator.
    pub fn inner(&self) -> &V {
        &self.inner
    }

    /// Extracts the inner validator.
    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V> Validate for Not<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        match self.inner.validate(input) {
            Ok(()) => Err(ValidationError::new(
                "not_failed",
                "Validation should have failed but passed",
            )),
            Err(_) => Ok(()),
        }
    }
}

/// Creates a `Not` combinator from a validator.
pub fn not<V>(validator: V) -> Not<V> {
    Not::new(validator)
}
