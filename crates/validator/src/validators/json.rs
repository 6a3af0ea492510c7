//! JSON well-formedness.

use serde::de::IgnoredAny;

use crate::foundation::{Validate, ValidationError};

/// Input is exactly one RFC 8259 JSON text.
///
/// Any value is accepted at the top level, including bare scalars.
/// Whitespace around the value is allowed; trailing content is not.
///
/// # Examples
///
/// ```
/// use validator_rules::validators::json;
/// use validator_rules::foundation::Validate;
///
/// assert!(json().validate(r#"{"a": [1, 2, null]}"#).is_ok());
/// assert!(json().validate("42").is_ok());
/// assert!(json().validate("{a: 1}").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Json;

impl Validate for Json {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        match serde_json::from_str::<IgnoredAny>(input) {
            Ok(_) => Ok(()),
            Err(err) => {
                tracing::trace!(%err, category = ?err.classify(), "input rejected as json");
                Err(
                    ValidationError::invalid_format("json", "String must be valid JSON")
                        .with_param("line", err.line().to_string())
                        .with_param("column", err.column().to_string()),
                )
            }
        }
    }
}

/// Creates a [`Json`] validator.
#[must_use]
pub const fn json() -> Json {
    Json
}
