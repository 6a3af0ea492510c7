//! Case tables for the boolean predicates.

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use rstest::rstest;
use validator_rules::*;

// ============================================================================
// CHARSET / FORMAT
// ============================================================================

#[rstest]
#[case("abcXYZ", true)]
#[case("abc1", false)]
#[case("", false)]
#[case("é", false)]
fn alpha(#[case] input: &str, #[case] expected: bool) {
    assert_eq!(is_alpha(input), expected);
}

#[rstest]
#[case("abc123", true)]
#[case("abc-123", false)]
#[case("", false)]
fn alphanumeric(#[case] input: &str, #[case] expected: bool) {
    assert_eq!(is_alphanumeric(input), expected);
}

#[rstest]
#[case("deadBEEF09", true)]
#[case("0x1f", false)]
#[case("", false)]
fn hexadecimal(#[case] input: &str, #[case] expected: bool) {
    assert_eq!(is_hexadecimal(input), expected);
}

#[rstest]
#[case("", true)]
#[case("plain ascii ~", true)]
#[case("café", false)]
fn ascii(#[case] input: &str, #[case] expected: bool) {
    assert_eq!(is_ascii(input), expected);
    assert_eq!(is_multibyte(input), !expected);
}

#[rstest]
#[case::ascii("abc", true, false)]
#[case::katakana_half("ｱｲｳ", true, false)]
#[case::kanji("漢字", false, true)]
#[case::fullwidth_latin("ｔｅｓｔ", false, true)]
#[case::mixed("ｱ漢", true, true)]
#[case::empty("", false, false)]
fn width(#[case] input: &str, #[case] half: bool, #[case] full: bool) {
    assert_eq!(is_half_width(input), half);
    assert_eq!(is_full_width(input), full);
    assert_eq!(is_variable_width(input), half && full);
}

#[rstest]
#[case("😀", true)]
#[case("干𩸽", true)]
#[case("abc", false)]
#[case("漢字", false)]
fn surrogate_pair(#[case] input: &str, #[case] expected: bool) {
    assert_eq!(is_surrogate_pair(input), expected);
}

#[rstest]
#[case("#fff", true)]
#[case("#ffffff", true)]
#[case("abc123", true)]
#[case("#ABC", true)]
#[case("#ff", false)]
#[case("#ffff", false)]
#[case("#gggggg", false)]
#[case("##fff", false)]
fn hex_color(#[case] input: &str, #[case] expected: bool) {
    assert_eq!(is_hex_color(input), expected);
}

#[rstest]
#[case("507f1f77bcf86cd799439011", true)]
#[case("507F1F77BCF86CD799439011", true)]
#[case("507f1f77bcf86cd79943901", false)]
#[case("507f1f77bcf86cd7994390111", false)]
#[case("507f1f77bcf86cd79943901z", false)]
fn mongo_id(#[case] input: &str, #[case] expected: bool) {
    assert_eq!(is_mongo_id(input), expected);
}

// ============================================================================
// CASE / EQUALITY
// ============================================================================

#[rstest]
#[case("abc", true, false)]
#[case("ABC", false, true)]
#[case("Abc", false, false)]
#[case("123", true, true)]
#[case("", true, true)]
#[case("straße", true, false)]
fn letter_case(#[case] input: &str, #[case] lower: bool, #[case] upper: bool) {
    assert_eq!(is_lowercase(input), lower);
    assert_eq!(is_uppercase(input), upper);
}

#[test]
fn null_and_equality() {
    assert!(is_null(None));
    assert!(!is_null(Some("")));
    assert!(equals("same", "same"));
    assert!(!equals("same", "Same"));
    assert!(contains("anything", ""));
}

// ============================================================================
// NUMERIC / LENGTH
// ============================================================================

#[rstest]
#[case("0", true)]
#[case("-42", true)]
#[case("+7", true)]
#[case("123456789012345678901234567890", true)]
#[case(" 1", false)]
#[case("1.0", false)]
#[case("", false)]
#[case("-", false)]
#[case("١٢", false)]
fn int(#[case] input: &str, #[case] expected: bool) {
    assert_eq!(is_int(input), expected);
}

#[rstest]
#[case("1.5", true)]
#[case(" 2.5 ", true)]
#[case("-3", true)]
#[case("1e10", true)]
#[case(".5", true)]
#[case("inf", true)]
#[case("NaN", true)]
#[case("1,000", false)]
#[case("abc", false)]
#[case("", false)]
fn float(#[case] input: &str, #[case] expected: bool) {
    assert_eq!(is_float(input), expected);
}

#[rstest]
#[case("10", 2, true)]
#[case(" 10 ", 5, true)]
#[case("-9", 3, true)]
#[case("7", 2, false)]
#[case("abc", 2, false)]
#[case("1.5", 1, false)]
#[case("99999999999", 1, false)]
#[case("-2147483648", -1, true)]
fn divisible_by(#[case] input: &str, #[case] by: i32, #[case] expected: bool) {
    assert_eq!(is_divisible_by(input, by), expected);
}

#[test]
#[should_panic(expected = "divisor of zero")]
fn divisible_by_zero_panics() {
    let _ = is_divisible_by("10", 0);
}

#[rstest]
#[case("ab", 2, 3, true)]
#[case("abc", 2, 3, true)]
#[case("a", 2, 3, false)]
#[case("abcd", 2, 3, false)]
#[case("😀", 2, 2, true)]
#[case("", 0, 0, true)]
fn length(#[case] input: &str, #[case] min: usize, #[case] max: usize, #[case] expected: bool) {
    assert_eq!(is_length(input, min, max), expected);
    assert_eq!(is_byte_length(input, min, Some(max)), expected);
}

#[test]
fn byte_length_open_upper_bound() {
    assert!(is_byte_length(&"z".repeat(4096), 1, None));
    assert!(!is_byte_length("", 1, None));
}

// ============================================================================
// SET / PATTERN
// ============================================================================

#[test]
fn is_in_is_ordinal() {
    let colors = ["red", "green", "blue"];
    assert!(is_in("green", &colors));
    assert!(!is_in("Green", &colors));
    assert!(!is_in("", &colors));
}

#[rstest]
#[case("order-123", r"\d+", RegexOptions::NONE, true)]
#[case("order", r"\d+", RegexOptions::NONE, false)]
#[case("HELLO", "^hello$", RegexOptions::IGNORE_CASE, true)]
#[case("a\nb", "^b$", RegexOptions::MULTILINE, true)]
#[case("a\nb", "a.b", RegexOptions::SINGLELINE, true)]
fn matches_cases(
    #[case] input: &str,
    #[case] pattern: &str,
    #[case] options: RegexOptions,
    #[case] expected: bool,
) {
    assert_eq!(matches(input, pattern, options).unwrap(), expected);
}

#[test]
fn matches_invalid_pattern() {
    let err = matches("abc", "a{2,1}", RegexOptions::NONE).unwrap_err();
    assert!(err.to_string().starts_with("invalid pattern"));
}

// ============================================================================
// NETWORK
// ============================================================================

#[rstest]
#[case("255.255.255.255", IpVersion::Four, true)]
#[case("0.0.0.0", IpVersion::Four, true)]
#[case("256.1.1.1", IpVersion::Four, false)]
#[case("1.2.3", IpVersion::Four, false)]
#[case("::1", IpVersion::Six, true)]
#[case("::", IpVersion::Six, true)]
#[case("2001:db8::1", IpVersion::Six, true)]
#[case("::1", IpVersion::Four, false)]
#[case("127.0.0.1", IpVersion::Six, false)]
fn ip(#[case] input: &str, #[case] version: IpVersion, #[case] expected: bool) {
    assert_eq!(is_ip(input, version), expected);
}

// ============================================================================
// EMAIL / DATE / JSON
// ============================================================================

#[rstest]
#[case("user@example.com", true)]
#[case("first.last+tag@sub.example.org", true)]
#[case("\"quoted name\"@example.com", true)]
#[case("user@[10.0.0.1]", true)]
#[case("Name <user@example.com>", false)]
#[case("user@@example.com", false)]
#[case("user", false)]
#[case("", false)]
fn email(#[case] input: &str, #[case] expected: bool) {
    assert_eq!(is_email(input), expected);
}

#[rstest]
#[case("2024-01-15", true)]
#[case("2024-01-15T10:30:00Z", true)]
#[case("01/15/2024", true)]
#[case("15 Jan 2024", true)]
#[case("1/15/2024 10:30:00 AM", true)]
#[case("1/15/2024 3:05 PM", true)]
#[case("1/15/2024 13:05 PM", false)]
#[case("2024-02-30", false)]
#[case("yesterday", false)]
fn date(#[case] input: &str, #[case] expected: bool) {
    assert_eq!(is_date(input), expected);
}

#[test]
fn after_and_before() {
    let reference = NaiveDate::from_ymd_opt(2024, 1, 15)
        .and_then(|date| date.and_hms_opt(12, 0, 0))
        .unwrap();

    assert!(is_after("2024-01-15T12:00:01", reference));
    assert!(!is_after("2024-01-15T12:00:00", reference));
    assert!(is_before("2024-01-15", reference));
    assert!(!is_before("2025-01-01", reference));
    assert!(is_after("1/15/2024 12:00:01 PM", reference));
    assert!(is_before("1/15/2024 11:59 AM", reference));
    assert!(!is_after("not a date", reference));
    assert!(!is_before("not a date", reference));
}

#[rstest]
#[case(r#"{"key": "value"}"#, true)]
#[case("[1, 2, 3]", true)]
#[case("\"just a string\"", true)]
#[case("{key: value}", false)]
#[case("[1, 2", false)]
#[case("", false)]
fn json(#[case] input: &str, #[case] expected: bool) {
    assert_eq!(is_json(input), expected);
}

// ============================================================================
// PHONE
// ============================================================================

#[rstest]
#[case("13812345678", "zh-CN", true)]
#[case("+86-13812345678", "zh-CN", true)]
#[case("0821234567", "en-ZA", true)]
#[case("+61412345678", "en-AU", true)]
#[case("+61412345678extra", "en-AU", true)]
#[case("0612345678", "fr-FR", true)]
#[case("+33712345678", "fr-FR", true)]
#[case("0612345678extra", "fr-FR", false)]
#[case("0612345678", "de-DE", false)]
#[case("0612345678", "", false)]
fn mobile_phone(#[case] number: &str, #[case] locale: &str, #[case] expected: bool) {
    assert_eq!(is_mobile_phone(number, locale), expected);
}

#[test]
fn supported_locale_listing() {
    assert_eq!(
        validators::supported_locales(),
        vec!["zh-CN", "en-ZA", "en-AU", "fr-FR"]
    );
}
