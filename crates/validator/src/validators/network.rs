//! IP address shape validators.
//!
//! IPv4 is a regex shape check followed by an octet range check. IPv6 is a
//! permissive shape check only; it does not canonicalize or reject every
//! semantically invalid grouping.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::foundation::{Validate, ValidationError};

// Leading zeros are accepted by the shape; the octet check enforces 0..=255.
static IPV4_SHAPE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{1,3})\.([0-9]{1,3})\.([0-9]{1,3})\.([0-9]{1,3})$")
        .expect("ipv4 pattern compiles")
});

static IPV6_SHAPE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:::|::1|(?:[a-fA-F0-9]{1,4}::?){1,7}[a-fA-F0-9]{1,4})$")
        .expect("ipv6 pattern compiles")
});

const MAX_OCTET: u16 = 255;

/// Which address grammar to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IpVersion {
    /// Dotted-quad IPv4.
    Four,
    /// Colon-separated IPv6.
    Six,
}

impl fmt::Display for IpVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Four => f.write_str("IPv4"),
            Self::Six => f.write_str("IPv6"),
        }
    }
}

/// Validates an IP address of one version.
///
/// # Examples
///
/// ```
/// use validator_rules::validators::{IpVersion, ip};
/// use validator_rules::foundation::Validate;
///
/// assert!(ip(IpVersion::Four).validate("192.168.001.1").is_ok());
/// assert!(ip(IpVersion::Four).validate("256.1.1.1").is_err());
/// assert!(ip(IpVersion::Six).validate("2001:db8::ff00:42:8329").is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ip {
    version: IpVersion,
}

impl Ip {
    /// Creates an IP validator for `version`.
    #[must_use]
    pub const fn new(version: IpVersion) -> Self {
        Self { version }
    }

    /// The version this validator accepts.
    #[must_use]
    pub const fn version(&self) -> IpVersion {
        self.version
    }

    fn validate_v4(input: &str) -> Result<(), ValidationError> {
        let Some(captures) = IPV4_SHAPE_REGEX.captures(input) else {
            return Err(ValidationError::invalid_format(
                "ipv4_format",
                "IPv4 address must be four dot-separated groups of 1-3 digits",
            ));
        };

        for octet in captures.iter().skip(1).flatten() {
            // 1-3 ASCII digits always fit in u16.
            let value: u16 = octet.as_str().parse().unwrap_or(u16::MAX);
            if value > MAX_OCTET {
                return Err(
                    ValidationError::out_of_range("ipv4_octet_range", 0, MAX_OCTET, value)
                        .with_param("octet", octet.as_str().to_string()),
                );
            }
        }

        Ok(())
    }

    fn validate_v6(input: &str) -> Result<(), ValidationError> {
        if IPV6_SHAPE_REGEX.is_match(input) {
            Ok(())
        } else {
            Err(ValidationError::invalid_format(
                "ipv6_format",
                "IPv6 address must be colon-separated groups of 1-4 hex digits",
            ))
        }
    }
}

impl Validate for Ip {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        match self.version {
            IpVersion::Four => Self::validate_v4(input),
            IpVersion::Six => Self::validate_v6(input),
        }
    }
}

/// Creates an IP validator for `version`.
#[must_use]
pub const fn ip(version: IpVersion) -> Ip {
    Ip::new(version)
}
