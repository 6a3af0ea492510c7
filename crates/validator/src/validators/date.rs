//! Date validators.
//!
//! No format is required from the caller: the input is tried against a
//! fixed list of common layouts. Inputs carrying a UTC offset are
//! normalized to UTC before comparison; everything else is taken as-is.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

use crate::foundation::{Validate, ValidationError};

const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%Y %I:%M %p",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%Y/%m/%d %H:%M:%S",
];

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%m/%d/%Y",
    "%Y/%m/%d",
    "%B %d, %Y",
    "%d %B %Y",
    "%A, %B %d, %Y",
];

/// Parses `input` under the accepted layouts.
///
/// Returns `None` when no layout fits.
///
/// # Examples
///
/// ```
/// use validator_rules::validators::parse_date;
///
/// assert!(parse_date("2024-01-15").is_some());
/// assert!(parse_date("January 15, 2024").is_some());
/// assert!(parse_date("2024-02-30").is_none());
/// ```
#[must_use]
pub fn parse_date(input: &str) -> Option<NaiveDateTime> {
    let input = input.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(input) {
        return Some(parsed.naive_utc());
    }
    if let Ok(parsed) = DateTime::parse_from_rfc2822(input) {
        return Some(parsed.naive_utc());
    }

    DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(input, format).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|format| NaiveDate::parse_from_str(input, format).ok())
                .map(|date| date.and_time(NaiveTime::MIN))
        })
}

fn unparseable() -> ValidationError {
    ValidationError::invalid_format("date", "String must be a recognizable date")
}

crate::validator! {
    /// Parses as a date or date-time.
    pub Date for str;
    rule(input) { parse_date(input).is_some() }
    error(input) { unparseable() }
    fn date();
}

/// Which side of the reference instant the input must fall on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Side {
    After,
    Before,
}

/// Parses as a date strictly after or before a reference instant.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use validator_rules::validators::DateBound;
/// use validator_rules::foundation::Validate;
///
/// let reference = NaiveDate::from_ymd_opt(2024, 1, 1)
///     .and_then(|d| d.and_hms_opt(0, 0, 0))
///     .unwrap();
/// assert!(DateBound::after(reference).validate("2024-06-01").is_ok());
/// assert!(DateBound::before(reference).validate("2024-06-01").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateBound {
    reference: NaiveDateTime,
    side: Side,
}

impl DateBound {
    /// Input must be strictly later than `reference`.
    #[must_use]
    pub const fn after(reference: NaiveDateTime) -> Self {
        Self {
            reference,
            side: Side::After,
        }
    }

    /// Input must be strictly earlier than `reference`.
    #[must_use]
    pub const fn before(reference: NaiveDateTime) -> Self {
        Self {
            reference,
            side: Side::Before,
        }
    }

    /// The instant inputs are compared against.
    #[must_use]
    pub const fn reference(&self) -> NaiveDateTime {
        self.reference
    }
}

impl Validate for DateBound {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        let parsed = parse_date(input).ok_or_else(unparseable)?;

        let (ok, code, relation) = match self.side {
            Side::After => (parsed > self.reference, "date_after", "after"),
            Side::Before => (parsed < self.reference, "date_before", "before"),
        };

        if ok {
            Ok(())
        } else {
            Err(ValidationError::new(
                code,
                format!("Date must be {relation} {}", self.reference),
            )
            .with_param("reference", self.reference.to_string())
            .with_param("actual", parsed.to_string()))
        }
    }
}
