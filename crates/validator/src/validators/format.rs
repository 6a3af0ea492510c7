//! Fixed-grammar identifier formats: hex colors and MongoDB object ids.

use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::{Validate, ValidationError};
use crate::validators::charset::Hexadecimal;

static HEX_COLOR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#?(?:[0-9a-fA-F]{3}){1,2}$").expect("hex color pattern compiles")
});

/// Length of a MongoDB object id in hex digits.
pub const MONGO_ID_LEN: usize = 24;

crate::validator! {
    /// Optional `#` followed by exactly 3 or 6 hex digits.
    pub HexColor for str;
    rule(input) { HEX_COLOR_REGEX.is_match(input) }
    error(input) { ValidationError::invalid_format("hex_color", "Invalid hex color") }
    fn hex_color();
}

crate::validator! {
    /// Exactly 24 hexadecimal characters.
    pub MongoId for str;
    rule(input) { input.len() == MONGO_ID_LEN && Validate::check(&Hexadecimal, input) }
    error(input) {
        ValidationError::invalid_format("mongo_id", "Invalid MongoDB object id")
            .with_param("length", input.chars().count().to_string())
    }
    fn mongo_id();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_color() {
        for ok in ["#fff", "#ffffff", "abc123", "FFF", "#A1b2C3"] {
            assert!(hex_color().validate(ok).is_ok(), "{ok} should pass");
        }
        for bad in ["#ff", "#gggggg", "#ffff", "#fffffff", "", "#"] {
            assert!(hex_color().validate(bad).is_err(), "{bad} should fail");
        }
    }

    #[test]
    fn test_mongo_id() {
        assert!(mongo_id().validate("507f1f77bcf86cd799439011").is_ok());
        assert!(mongo_id().validate("507F1F77BCF86CD799439011").is_ok());
        assert!(mongo_id().validate("507f1f77bcf86cd79943901").is_err());
        assert!(mongo_id().validate("507f1f77bcf86cd7994390111").is_err());
        assert!(mongo_id().validate("507f1f77bcf86cd79943901z").is_err());
    }

    #[test]
    fn test_mongo_id_error_reports_length() {
        let err = mongo_id().validate("abc").unwrap_err();
        assert_eq!(err.code, "mongo_id");
        assert_eq!(err.param("length"), Some("3"));
    }
}
