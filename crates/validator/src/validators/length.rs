//! Length validators
//!
//! Length is counted in UTF-16 code units, so a character above U+FFFF
//! counts as two. Both rules are inclusive on both ends.

use crate::foundation::ValidationError;

/// Number of UTF-16 code units needed to encode `input`.
#[must_use]
pub fn utf16_len(input: &str) -> usize {
    input.chars().map(char::len_utf16).sum()
}

crate::validator! {
    /// `min <= len <= max`, counted in UTF-16 code units.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub Length { min: usize, max: usize } for str;
    rule(self, input) { (self.min..=self.max).contains(&utf16_len(input)) }
    error(self, input) { ValidationError::out_of_range("length", self.min, self.max, utf16_len(input)) }
    fn length(min: usize, max: usize);
}

crate::validator! {
    /// Same bounds and unit as [`Length`], with an open upper bound by default.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub ByteLength { min: usize, max: usize } for str;
    rule(self, input) { (self.min..=self.max).contains(&utf16_len(input)) }
    error(self, input) {
        ValidationError::out_of_range("byte_length", self.min, self.max, utf16_len(input))
    }
    new(min: usize, max: Option<usize>) { Self { min, max: max.unwrap_or(usize::MAX) } }
    fn byte_length(min: usize, max: Option<usize>);
}

impl ByteLength {
    /// At least `min` units, no upper bound.
    #[must_use]
    pub fn at_least(min: usize) -> Self {
        Self::new(min, None)
    }
}
