//! Email address grammar.
//!
//! A pragmatic subset of the RFC 5322 `addr-spec` production. The whole
//! input must be exactly one address: display names, angle brackets,
//! comments and surrounding whitespace are rejected because a
//! canonicalizing mail parser would rewrite them.
//!
//! ```text
//! addr-spec      = local-part "@" domain
//! local-part     = dot-atom / quoted-string
//! domain         = dot-atom / domain-literal
//! dot-atom       = 1*atext *("." 1*atext)
//! quoted-string  = DQUOTE 1*(qtext / quoted-pair) DQUOTE
//! domain-literal = "[" *dtext "]"
//! ```

use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::{Validate, ValidationError};

const ATEXT: &str = r"[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]";

static DOT_ATOM_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^{ATEXT}+(?:\.{ATEXT}+)*$")).expect("dot-atom pattern compiles")
});

static QUOTED_STRING_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^"(?:[^"\\\r\n]|\\[^\r\n])+"$"#).expect("quoted-string pattern compiles")
});

static DOMAIN_LITERAL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\[[^\[\]\\\r\n]*\]$").expect("domain-literal pattern compiles")
});

/// Validates a single bare email address.
///
/// # Examples
///
/// ```
/// use validator_rules::validators::email;
/// use validator_rules::foundation::Validate;
///
/// assert!(email().validate("user@example.com").is_ok());
/// assert!(email().validate("\"john doe\"@example.com").is_ok());
/// assert!(email().validate("John <user@example.com>").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Email;

impl Email {
    fn local_part_ok(local: &str) -> bool {
        DOT_ATOM_REGEX.is_match(local) || QUOTED_STRING_REGEX.is_match(local)
    }

    fn domain_ok(domain: &str) -> bool {
        DOT_ATOM_REGEX.is_match(domain) || DOMAIN_LITERAL_REGEX.is_match(domain)
    }
}

impl Validate for Email {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        // A quoted local part may itself contain '@'; the domain never does.
        let Some((local, domain)) = input.rsplit_once('@') else {
            return Err(ValidationError::invalid_format(
                "email",
                "Email address must contain '@'",
            ));
        };

        if !Self::local_part_ok(local) {
            return Err(
                ValidationError::invalid_format("email", "Invalid email local part")
                    .with_param("part", "local"),
            );
        }

        if !Self::domain_ok(domain) {
            return Err(
                ValidationError::invalid_format("email", "Invalid email domain")
                    .with_param("part", "domain"),
            );
        }

        Ok(())
    }
}

/// Creates an [`Email`] validator.
#[must_use]
pub const fn email() -> Email {
    Email
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_addresses() {
        for ok in [
            "user@example.com",
            "first.last@sub.example.co.uk",
            "user+tag@example.com",
            "USER@EXAMPLE.COM",
            "o'brien@example.ie",
            "user@localhost",
            "\"john doe\"@example.com",
            "\"a@b\"@example.com",
            "user@[192.168.0.1]",
        ] {
            assert!(email().validate(ok).is_ok(), "{ok} should pass");
        }
    }

    #[test]
    fn test_rewritten_forms_are_rejected() {
        for bad in [
            "John Doe <john@example.com>",
            "<john@example.com>",
            " user@example.com",
            "user@example.com ",
            "user@example.com (comment)",
        ] {
            assert!(email().validate(bad).is_err(), "{bad} should fail");
        }
    }

    #[test]
    fn test_malformed_addresses() {
        for bad in [
            "",
            "plainaddress",
            "@example.com",
            "user@",
            ".user@example.com",
            "user.@example.com",
            "us..er@example.com",
            "user@example..com",
            "user@.example.com",
            "user name@example.com",
            "\"\"@example.com",
        ] {
            assert!(email().validate(bad).is_err(), "{bad} should fail");
        }
    }

    #[test]
    fn test_error_names_failing_part() {
        let err = email().validate("a b@example.com").unwrap_err();
        assert_eq!(err.param("part"), Some("local"));
        let err = email().validate("user@exa mple.com").unwrap_err();
        assert_eq!(err.param("part"), Some("domain"));
    }
}
