//! Combinators for composing validators
//!
//! - [`And`]: both must pass
//! - [`Or`]: either may pass; nests both causes on failure
//! - [`Not`]: inverts
//!
//! Most callers reach these through [`ValidateExt`](crate::foundation::ValidateExt).

pub mod and;
pub mod not;
pub mod or;

pub use and::{And, and};
pub use not::{Not, not};
pub use or::{Or, or};
