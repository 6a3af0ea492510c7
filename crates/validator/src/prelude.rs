//! Prelude module for convenient imports.
//!
//! Provides a single `use validator_rules::prelude::*;` import that brings
//! in the traits, the error type, every validator and the combinators.
//! The boolean predicates are not included; import them from the crate
//! root.
//!
//! # Examples
//!
//! ```
//! use validator_rules::prelude::*;
//!
//! let code = alpha().or(int());
//! assert!(code.validate("abc").is_ok());
//! assert!(code.validate("-12").is_ok());
//! assert!(code.validate("a1").is_err());
//! ```

// ============================================================================
// FOUNDATION: Core traits and errors
// ============================================================================

pub use crate::error::RuleError;
pub use crate::foundation::{Validate, ValidateExt, ValidationError};

// ============================================================================
// VALIDATORS: All built-in validators
// ============================================================================

#[allow(clippy::wildcard_imports)]
pub use crate::validators::*;

// ============================================================================
// COMBINATORS: Composition functions and types
// ============================================================================

pub use crate::combinators::{And, Not, Or, and, not, or};
