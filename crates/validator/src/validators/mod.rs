//! Built-in validators
//!
//! Every rule is a small value implementing
//! [`Validate`](crate::foundation::Validate) over `str`.
//!
//! # Categories
//!
//! - **Charset**: alpha, alphanumeric, hexadecimal, ASCII, multibyte,
//!   half/full/variable width, surrogate pairs
//! - **Format**: hex color, Mongo object id, email, JSON, dates
//! - **Content**: case, equality, containment, membership
//! - **Numeric**: integers, floats, divisibility
//! - **Length**: UTF-16 length bounds
//! - **Pattern**: caller-supplied regular expressions
//! - **Network**: IPv4 / IPv6
//! - **Phone**: locale-aware mobile numbers
//!
//! # Examples
//!
//! ```
//! use validator_rules::prelude::*;
//!
//! let object_id = hexadecimal().and(length(24, 24));
//! assert!(object_id.validate("507f1f77bcf86cd799439011").is_ok());
//!
//! let address = ip(IpVersion::Four).or(ip(IpVersion::Six));
//! assert!(address.validate("fe80::1").is_ok());
//! ```

pub mod charset;
pub mod content;
pub mod date;
pub mod email;
pub mod format;
pub mod json;
pub mod length;
pub mod network;
pub mod numeric;
pub mod pattern;
pub mod phone;

pub use charset::{
    Alpha, Alphanumeric, Ascii, FullWidth, HalfWidth, Hexadecimal, MultiByte, SurrogatePair,
    VariableWidth, alpha, alphanumeric, ascii, full_width, half_width, hexadecimal, multibyte,
    surrogate_pair, variable_width,
};
pub use content::{
    Contains, Equals, Lowercase, OneOf, Uppercase, contains, equals, lowercase, one_of, uppercase,
};
pub use date::{Date, DateBound, date, parse_date};
pub use email::{Email, email};
pub use format::{HexColor, MONGO_ID_LEN, MongoId, hex_color, mongo_id};
pub use json::{Json, json};
pub use length::{ByteLength, Length, byte_length, length, utf16_len};
pub use network::{Ip, IpVersion, ip};
pub use numeric::{DivisibleBy, Float, Int, divisible_by, float, int};
pub use pattern::{Matches, RegexOptions, matches};
pub use phone::{LOCALE_PATTERNS, LocalePattern, MobilePhone, mobile_phone, supported_locales};
