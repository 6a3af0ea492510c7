//! Caller-supplied regular expressions.
//!
//! [`RegexOptions`] mirrors the option set callers of a general-purpose
//! regex engine expect; only the flags that change what a pattern matches
//! are forwarded to [`regex::RegexBuilder`].

use bitflags::bitflags;
use regex::{Regex, RegexBuilder};

use crate::error::RuleError;
use crate::foundation::ValidationError;

bitflags! {
    /// Flags applied when compiling a pattern for [`Matches`].
    ///
    /// Serializes as text, e.g. `"IGNORE_CASE | MULTILINE"`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
    #[serde(transparent)]
    pub struct RegexOptions: u16 {
        /// Case-insensitive matching.
        const IGNORE_CASE = 1;
        /// `^` and `$` match at the start and end of every line.
        const MULTILINE = 1 << 1;
        /// Only named groups capture. No effect on match / no match.
        const EXPLICIT_CAPTURE = 1 << 2;
        /// Accepted for compatibility; every pattern is compiled.
        const COMPILED = 1 << 3;
        /// `.` also matches `\n`.
        const SINGLELINE = 1 << 4;
        /// Unescaped whitespace and `#` comments in the pattern are ignored.
        const IGNORE_PATTERN_WHITESPACE = 1 << 5;
        /// Accepted for compatibility; case folding is always Unicode simple folding.
        const CULTURE_INVARIANT = 1 << 9;
    }
}

impl RegexOptions {
    /// Default sensitivity, no flags.
    pub const NONE: Self = Self::empty();

    /// Compiles `pattern` with these options.
    pub fn compile(self, pattern: &str) -> Result<Regex, regex::Error> {
        RegexBuilder::new(pattern)
            .case_insensitive(self.contains(Self::IGNORE_CASE))
            .multi_line(self.contains(Self::MULTILINE))
            .dot_matches_new_line(self.contains(Self::SINGLELINE))
            .ignore_whitespace(self.contains(Self::IGNORE_PATTERN_WHITESPACE))
            .build()
    }
}

crate::validator! {
    /// The pattern matches somewhere in the input.
    ///
    /// Anchor the pattern with `^` / `$` to require a full match.
    pub Matches { pattern: Regex } for str;
    rule(self, input) { self.pattern.is_match(input) }
    error(self, input) {
        ValidationError::invalid_format("pattern", "String does not match the pattern")
            .with_param("pattern", self.pattern.as_str().to_string())
    }
    new(pattern: &str, options: RegexOptions) -> RuleError {
        let pattern = options.compile(pattern).map_err(|err| {
            tracing::debug!(%err, pattern, "rejected caller pattern");
            err
        })?;
        Ok(Self { pattern })
    }
    fn matches(pattern: &str, options: RegexOptions) -> RuleError;
}
