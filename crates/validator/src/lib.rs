//! # validator-rules
//!
//! Pure, stateless string validation rules: character classes, formats,
//! numbers, lengths, network addresses, email, dates, JSON and
//! locale-aware mobile phone numbers.
//!
//! ## Quick Start
//!
//! Boolean predicates live at the crate root:
//!
//! ```
//! use validator_rules::{IpVersion, is_hex_color, is_ip, is_mobile_phone};
//!
//! assert!(is_hex_color("#fff"));
//! assert!(!is_ip("256.1.1.1", IpVersion::Four));
//! assert!(is_mobile_phone("+61412345678", "en-AU"));
//! ```
//!
//! The same rules are available as composable validators that explain
//! their rejections:
//!
//! ```
//! use validator_rules::prelude::*;
//!
//! let id = hexadecimal().and(length(24, 24));
//! let error = id.validate("not-an-id").unwrap_err();
//! assert_eq!(error.code, "hexadecimal");
//! ```
//!
//! ## Creating Validators
//!
//! Use the [`validator!`] macro for zero-boilerplate validators,
//! or implement [`Validate`](foundation::Validate) manually for complex cases.

// ValidationError is the fundamental error type for all validators;
// boxing it would add indirection to every validation call.
#![allow(clippy::result_large_err)]

pub mod combinators;
pub mod error;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod rules;
pub mod validators;

pub use error::RuleError;
pub use rules::*;
pub use validators::{IpVersion, RegexOptions};
