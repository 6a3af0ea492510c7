//! Core validation types and traits
//!
//! - **Traits**: [`Validate`], [`ValidateExt`]
//! - **Errors**: [`ValidationError`]
//!
//! Every rule in [`crate::validators`] is a small value implementing
//! [`Validate`]. Rules compose with [`ValidateExt::and`], [`ValidateExt::or`]
//! and [`ValidateExt::not`], and report rejections as structured errors:
//!
//! ```
//! use validator_rules::prelude::*;
//!
//! let error = hex_color().validate("#gggggg").unwrap_err();
//! assert_eq!(error.code, "hex_color");
//! ```

pub mod error;
pub mod traits;

pub use error::ValidationError;
pub use traits::{Validate, ValidateExt};
