//! Errors that are not "the input was rejected".
//!
//! Rejections are [`ValidationError`](crate::foundation::ValidationError)s
//! or plain `false`. A [`RuleError`] means the caller handed a rule an
//! argument it cannot work with.

/// Misuse of a rule by the caller.
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    /// A caller-supplied regular expression failed to compile.
    #[error("invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_pattern_wraps_regex_error() {
        let err: RuleError = regex::Regex::new("(unclosed").unwrap_err().into();
        assert!(matches!(err, RuleError::InvalidPattern(_)));
        assert!(err.to_string().starts_with("invalid pattern: "));
    }
}
