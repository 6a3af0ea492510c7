//! Case, equality and membership validators
//!
//! All comparisons are ordinal: no case folding, no normalization.

use crate::foundation::ValidationError;

// ============================================================================
// CASE
// ============================================================================

crate::validator! {
    /// Lowercasing the string leaves it unchanged.
    ///
    /// Strings without cased letters (`"123"`, `"-"`, `""`) pass.
    pub Lowercase for str;
    rule(input) { input == input.to_lowercase() }
    error(input) { ValidationError::new("lowercase", "String must be lowercase") }
    fn lowercase();
}

crate::validator! {
    /// Uppercasing the string leaves it unchanged.
    pub Uppercase for str;
    rule(input) { input == input.to_uppercase() }
    error(input) { ValidationError::new("uppercase", "String must be uppercase") }
    fn uppercase();
}

// ============================================================================
// EQUALITY AND MEMBERSHIP
// ============================================================================

crate::validator! {
    /// Exactly equal to the expected string.
    #[derive(PartialEq, Eq, Hash)]
    pub Equals { expected: String } for str;
    rule(self, input) { input == self.expected }
    error(self, input) {
        ValidationError::new("equals", format!("String must equal '{}'", self.expected))
            .with_param("expected", self.expected.clone())
    }
    new(expected: impl Into<String>) { Self { expected: expected.into() } }
    fn equals(expected: impl Into<String>);
}

crate::validator! {
    /// Contains the substring. The empty substring is contained everywhere.
    #[derive(PartialEq, Eq, Hash)]
    pub Contains { substring: String } for str;
    rule(self, input) { input.contains(self.substring.as_str()) }
    error(self, input) {
        ValidationError::new(
            "contains",
            format!("String must contain '{}'", self.substring),
        )
        .with_param("substring", self.substring.clone())
    }
    new(substring: impl Into<String>) { Self { substring: substring.into() } }
    fn contains(substring: impl Into<String>);
}

crate::validator! {
    /// Equal to at least one of the allowed values.
    #[derive(PartialEq, Eq)]
    pub OneOf { values: Vec<String> } for str;
    rule(self, input) { self.values.iter().any(|value| value == input) }
    error(self, input) {
        ValidationError::new("one_of", "String must be one of the allowed values")
            .with_param("allowed", self.values.join(", "))
    }
    new(values: impl IntoIterator<Item = impl Into<String>>) {
        Self { values: values.into_iter().map(Into::into).collect() }
    }
    fn one_of(values: impl IntoIterator<Item = impl Into<String>>);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;

    #[test]
    fn test_lowercase() {
        assert!(lowercase().validate("hello world").is_ok());
        assert!(lowercase().validate("straße").is_ok());
        assert!(lowercase().validate("Hello").is_err());
    }

    #[test]
    fn test_uppercase() {
        assert!(uppercase().validate("HELLO WORLD").is_ok());
        assert!(uppercase().validate("ÀÉÎ").is_ok());
        assert!(uppercase().validate("HELLo").is_err());
    }

    #[test]
    fn test_caseless_strings_are_both() {
        for input in ["", "123", "-_-", "漢字"] {
            assert!(lowercase().validate(input).is_ok());
            assert!(uppercase().validate(input).is_ok());
        }
    }

    #[test]
    fn test_equals_is_ordinal() {
        assert!(equals("abc").validate("abc").is_ok());
        let err = equals("abc").validate("ABC").unwrap_err();
        assert_eq!(err.param("expected"), Some("abc"));
    }

    #[test]
    fn test_contains() {
        assert!(contains("foo").validate("xfoox").is_ok());
        assert!(contains("").validate("anything").is_ok());
        assert!(contains("Foo").validate("foo").is_err());
    }

    #[test]
    fn test_one_of() {
        let validator = one_of(["a", "b", "c"]);
        assert!(validator.validate("b").is_ok());
        assert!(validator.validate("B").is_err());
        assert!(validator.validate("").is_err());
        assert!(one_of(Vec::<String>::new()).validate("a").is_err());
    }

    #[test]
    fn test_one_of_error_lists_values() {
        let err = one_of(vec!["red".to_string(), "green".to_string()])
            .validate("blue")
            .unwrap_err();
        assert_eq!(err.param("allowed"), Some("red, green"));
    }
}
