//! Error types for rejected inputs
//!
//! A [`ValidationError`] says *why* a rule rejected an input: a stable code
//! for programmatic handling, an English message, and ordered parameters.
//!
//! All string fields use `Cow<'static, str>` so the common case of static
//! codes and messages never allocates.

use std::borrow::Cow;
use std::fmt;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A structured validation error.
///
/// # Examples
///
/// ```
/// use validator_rules::foundation::ValidationError;
///
/// let error = ValidationError::new("length", "Length out of range")
///     .with_param("min", "2")
///     .with_param("actual", "1");
///
/// assert_eq!(error.code, "length");
/// assert_eq!(error.param("min"), Some("2"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error code for programmatic handling and i18n.
    ///
    /// Examples: "hex_color", "ipv4_octet_range", "unknown_locale"
    pub code: Cow<'static, str>,

    /// Human-readable error message in English.
    pub message: Cow<'static, str>,

    /// Optional field path when the error is attached to a named value.
    pub field: Option<Cow<'static, str>>,

    /// Parameters for the error message template.
    ///
    /// Stored as ordered key-value pairs (typically 0-3 params).
    pub params: Vec<(Cow<'static, str>, Cow<'static, str>)>,

    /// Nested errors, populated by combinators such as `or`.
    pub nested: Vec<ValidationError>,
}

impl ValidationError {
    /// Creates a new validation error with a code and message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            field: None,
            params: Vec::new(),
            nested: Vec::new(),
        }
    }

    /// Sets the field path for this error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Replaces the nested errors.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_nested(mut self, errors: Vec<ValidationError>) -> Self {
        self.nested = errors;
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

    /// Returns true if this error has nested errors.
    #[must_use]
    pub fn has_nested(&self) -> bool {
        !self.nested.is_empty()
    }

    /// Renders the error as a JSON object.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        use serde_json::json;

        let params: serde_json::Map<String, serde_json::Value> = self
            .params
            .iter()
            .map(|(k, v)| (k.to_string(), serde_json::Value::String(v.to_string())))
            .collect();

        json!({
            "code": self.code,
            "message": self.message,
            "field": self.field,
            "params": params,
            "nested": self.nested.iter().map(ValidationError::to_json_value).collect::<Vec<_>>(),
        })
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(field) = &self.field {
            write!(f, "[{}] {}: {}", field, self.code, self.message)?;
        } else {
            write!(f, "{}: {}", self.code, self.message)?;
        }

        if !self.params.is_empty() {
            write!(f, " (params: [")?;
            for (i, (k, v)) in self.params.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{k}={v}")?;
            }
            write!(f, "])")?;
        }

        if !self.nested.is_empty() {
            write!(f, "\n  Nested errors:")?;
            for (i, error) in self.nested.iter().enumerate() {
                write!(f, "\n    {}. {}", i + 1, error)?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl ValidationError {
    /// Creates an "invalid_format"-style error under the given code.
    ///
    /// The code doubles as the `expected` parameter so callers can tell
    /// which format the input failed.
    pub fn invalid_format(
        code: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        let code = code.into();
        Self::new(code.clone(), message).with_param("expected", code)
    }

    /// Creates an error for a value outside an inclusive range.
    pub fn out_of_range<T: fmt::Display>(
        code: impl Into<Cow<'static, str>>,
        min: T,
        max: T,
        actual: T,
    ) -> Self {
        Self::new(code, format!("Value must be between {min} and {max}"))
            .with_param("min", min.to_string())
            .with_param("max", max.to_string())
            .with_param("actual", actual.to_string())
    }
}

// ============================================================================
// TESTS
// ============================================================================
