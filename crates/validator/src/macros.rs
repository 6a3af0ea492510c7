//! Macros for declaring validators with minimal boilerplate.
//!
//! - [`validator!`]: struct + `Validate` impl + optional factory fn
//! - [`compose!`]: AND-chain multiple validators
//! - [`any_of!`]: OR-chain multiple validators
//!
//! Most rules in [`crate::validators`] are one `validator!` invocation each:
//!
//! ```rust,ignore
//! validator! {
//!     /// ASCII letters only.
//!     pub Alpha for str;
//!     rule(input) { ALPHA.is_match(input) }
//!     error(input) { ValidationError::invalid_format("alpha", "must contain only ASCII letters") }
//!     fn alpha();
//! }
//! ```

// ============================================================================
// VALIDATOR MACRO
// ============================================================================

/// Creates a complete validator: struct definition, `Validate`
/// implementation, constructor, and (optionally) a factory function.
///
/// **Unit validator** (zero-sized):
/// ```rust,ignore
/// validator! {
///     pub Ascii for str;
///     rule(input) { input.is_ascii() }
///     error(input) { ValidationError::new("ascii", "must be ASCII") }
///     fn ascii();
/// }
/// ```
///
/// **Struct with fields** (auto `new` from all fields):
/// ```rust,ignore
/// validator! {
///     #[derive(PartialEq, Eq, Hash)]
///     pub Equals { expected: String } for str;
///     rule(self, input) { input == self.expected }
///     error(self, input) { ValidationError::new("equals", "values differ") }
///     fn equals(expected: String);
/// }
/// ```
///
/// **Custom constructor** (overrides auto `new`):
/// ```rust,ignore
/// validator! {
///     pub Length { min: usize, max: usize } for str;
///     rule(self, input) { (self.min..=self.max).contains(&utf16_len(input)) }
///     error(self, input) { ValidationError::new("length", "out of range") }
///     new(min: usize, max: usize) { Self { min, max } }
///     fn length(min: usize, max: usize);
/// }
/// ```
///
/// **Fallible constructor**: write `new(..) -> ErrorType { .. }` and
/// `fn factory(..) -> ErrorType;`; the macro wraps both in `Result`.
#[macro_export]
macro_rules! validator {
    // ── Unit validator (no fields) + factory fn ─────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
        fn $factory:ident();
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name for $input;
            rule($inp) $rule
            error($einp) $err
        }

        #[must_use]
        $vis const fn $factory() -> $name { $name }
    };

    // ── Unit validator (no fields), no factory ──────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name;

        impl $crate::foundation::Validate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&self, $inp: &Self::Input) -> Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }
    };

    // ── Struct with fields + custom new + factory fn ────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name { $($field: $fty),+ } for $input;
            rule($self_, $inp) $rule
            error($self2, $einp) $err
            new($($narg: $naty),*) $new_body
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Struct with fields + custom new, no factory ─────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        #[allow(clippy::new_without_default)]
        impl $name {
            #[must_use]
            pub fn new($($narg: $naty),*) -> Self $new_body
        }

        impl $crate::foundation::Validate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&$self_, $inp: &Self::Input) -> Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }
    };

    // ── Struct with fields + fallible new + fallible factory ────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        new($($narg:ident: $naty:ty),* $(,)?) -> $ety:ty $new_body:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?) -> $efty:ty;
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            pub fn new($($narg: $naty),*) -> ::std::result::Result<Self, $ety> $new_body
        }

        impl $crate::foundation::Validate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&$self_, $inp: &Self::Input) -> ::std::result::Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }

        $vis fn $factory($($farg: $faty),*) -> ::std::result::Result<$name, $efty> {
            $name::new($($farg),*)
        }
    };

    // ── Struct with fields + auto new + factory fn ──────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name { $($field: $fty),+ } for $input;
            rule($self_, $inp) $rule
            error($self2, $einp) $err
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Struct with fields + auto new, no factory ───────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        impl $crate::foundation::Validate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&$self_, $inp: &Self::Input) -> Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }
    };
}

// ============================================================================
// COMPOSE MACRO
// ============================================================================

/// Composes multiple validators using AND logic.
///
/// ```
/// use validator_rules::compose;
/// use validator_rules::prelude::*;
///
/// let validator = compose![hexadecimal(), length(24, 24)];
/// assert!(validator.check("507f1f77bcf86cd799439011"));
/// ```
#[macro_export]
macro_rules! compose {
    ($first:expr) => {
        $first
    };
    ($first:expr, $($rest:expr),+ $(,)?) => {
        $first$(.and($rest))+
    };
}

// ============================================================================
// ANY_OF MACRO
// ============================================================================

/// Composes multiple validators using OR logic.
///
/// ```
/// use validator_rules::any_of;
/// use validator_rules::prelude::*;
///
/// let validator = any_of![ip(IpVersion::Four), ip(IpVersion::Six)];
/// assert!(validator.check("::1"));
/// ```
#[macro_export]
macro_rules! any_of {
    ($first:expr) => {
        $first
    };
    ($first:expr, $($rest:expr),+ $(,)?) => {
        $first$(.or($rest))+
    };
}

// ============================================================================
// TESTS
// ============================================================================
