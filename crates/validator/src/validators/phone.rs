//! Locale-aware mobile phone numbers.
//!
//! Each supported locale maps to one pattern, declared in
//! [`LOCALE_PATTERNS`] and compiled once on first lookup. Lookups for a
//! locale outside the table always fail; they are not an error.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::ValidationError;

/// One row of the locale table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LocalePattern {
    /// Locale tag, e.g. `"fr-FR"`.
    pub locale: &'static str,
    /// Pattern body, without anchors.
    pub pattern: &'static str,
    /// Whether the number must end where the pattern ends.
    ///
    /// `false` turns the rule into a prefix match.
    pub anchored: bool,
}

impl LocalePattern {
    /// The full regex source: always anchored at the start, and at the end
    /// when [`anchored`](Self::anchored) is set.
    #[must_use]
    pub fn source(&self) -> String {
        let tail = if self.anchored { "$" } else { "" };
        format!("^(?:{}){tail}", self.pattern)
    }
}

/// Supported locales, in lookup-listing order.
pub const LOCALE_PATTERNS: &[LocalePattern] = &[
    LocalePattern {
        locale: "zh-CN",
        pattern: r"(\+?0?86-?)?1[345789][0-9]{9}",
        anchored: true,
    },
    LocalePattern {
        locale: "en-ZA",
        pattern: r"(\+?27|0)(\d{9})",
        anchored: true,
    },
    // Trailing characters are accepted for this locale.
    LocalePattern {
        locale: "en-AU",
        pattern: r"(\+?61|0)4(\d{8})",
        anchored: false,
    },
    LocalePattern {
        locale: "fr-FR",
        pattern: r"(\+?33|0)(6|7)\d{8}",
        anchored: true,
    },
];

static MOBILE_PHONE_PATTERNS: LazyLock<HashMap<&'static str, Regex>> = LazyLock::new(|| {
    let table: HashMap<_, _> = LOCALE_PATTERNS
        .iter()
        .map(|entry| {
            let regex = Regex::new(&entry.source()).expect("locale phone pattern compiles");
            (entry.locale, regex)
        })
        .collect();
    tracing::debug!(locales = table.len(), "compiled mobile phone patterns");
    table
});

/// Locale tags with a mobile phone pattern, in declaration order.
#[must_use]
pub fn supported_locales() -> Vec<&'static str> {
    LOCALE_PATTERNS.iter().map(|entry| entry.locale).collect()
}

crate::validator! {
    /// Matches the mobile phone pattern registered for `locale`.
    ///
    /// # Examples
    ///
    /// ```
    /// use validator_rules::validators::mobile_phone;
    /// use validator_rules::foundation::Validate;
    ///
    /// assert!(mobile_phone("fr-FR").validate("0612345678").is_ok());
    /// assert!(mobile_phone("fr-FR").validate("0512345678").is_err());
    /// assert!(mobile_phone("xx-XX").validate("0612345678").is_err());
    /// ```
    #[derive(PartialEq, Eq, Hash)]
    pub MobilePhone { locale: String } for str;
    rule(self, input) {
        MOBILE_PHONE_PATTERNS
            .get(self.locale.as_str())
            .is_some_and(|pattern| pattern.is_match(input))
    }
    error(self, input) {
        if MOBILE_PHONE_PATTERNS.contains_key(self.locale.as_str()) {
            ValidationError::invalid_format("mobile_phone", "Invalid mobile phone number for locale")
                .with_param("locale", self.locale.clone())
        } else {
            tracing::trace!(locale = %self.locale, "no mobile phone pattern for locale");
            ValidationError::new("unknown_locale", format!("Unsupported locale '{}'", self.locale))
                .with_param("locale", self.locale.clone())
                .with_param("supported", supported_locales().join(", "))
        }
    }
    new(locale: impl Into<String>) { Self { locale: locale.into() } }
    fn mobile_phone(locale: impl Into<String>);
}
