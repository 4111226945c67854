//! Property-based tests using proptest.
//!
//! These tests verify invariants that should hold for all inputs,
//! helping discover edge cases that manual tests might miss.

use chrono::NaiveDate;
use proptest::prelude::*;
use valid_cards::{
    detect::PatternMatcher, expiry::ExpirationChecker, luhn, mask, CardInput, DatePart,
    ExpiryError, FixedClock, Validator,
};

// =============================================================================
// STRATEGIES
// =============================================================================

/// Generates a random digit string of a given length.
fn digit_string(len: usize) -> impl Strategy<Value = String> {
    proptest::collection::vec(prop::char::range('0', '9'), len)
        .prop_map(|chars| chars.into_iter().collect())
}

/// Generates a random digit string of a length within range.
fn digit_string_range(range: std::ops::RangeInclusive<usize>) -> impl Strategy<Value = String> {
    range.prop_flat_map(digit_string)
}

/// Appends the Luhn check digit to a digit string.
fn with_check_digit(prefix: &str) -> String {
    let digits: Vec<u8> = prefix.bytes().map(|b| b - b'0').collect();
    let check = luhn::generate_check_digit(&digits);
    format!("{}{}", prefix, check)
}

/// Generates a Luhn-valid number of the given total length range.
fn luhn_valid_range(range: std::ops::RangeInclusive<usize>) -> impl Strategy<Value = String> {
    let start = *range.start() - 1;
    let end = *range.end() - 1;
    digit_string_range(start..=end).prop_map(|prefix| with_check_digit(&prefix))
}

/// Generates a Luhn-valid 16-digit Visa number.
fn visa_16() -> impl Strategy<Value = String> {
    digit_string(14).prop_map(|middle| with_check_digit(&format!("4{}", middle)))
}

/// Inserts single spaces at arbitrary positions.
fn with_spaces(card: String) -> impl Strategy<Value = String> {
    let len = card.len();
    proptest::collection::vec(any::<bool>(), len + 1).prop_map(move |gaps| {
        let mut result = String::new();
        for (i, c) in card.chars().enumerate() {
            if gaps[i] {
                result.push(' ');
            }
            result.push(c);
        }
        if gaps[len] {
            result.push(' ');
        }
        result
    })
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
}

// =============================================================================
// LUHN ALGORITHM PROPERTIES
// =============================================================================

proptest! {
    /// Property: Adding a check digit makes any digit sequence valid.
    #[test]
    fn check_digit_makes_valid(card in luhn_valid_range(2..=19)) {
        prop_assert!(luhn::is_valid_checksum(&card), "{} should pass Luhn", card);
    }

    /// Property: Changing any single digit invalidates Luhn.
    ///
    /// Doubling permutes 0-9 modulo 10, so every single-digit change moves
    /// the sum off a multiple of 10.
    #[test]
    fn single_digit_change_invalidates_luhn(
        card in luhn_valid_range(12..=19),
        position in any::<prop::sample::Index>(),
        delta in 1u8..=9u8,
    ) {
        let mut digits: Vec<u8> = card.bytes().map(|b| b - b'0').collect();
        let i = position.index(digits.len());
        digits[i] = (digits[i] + delta) % 10;
        let modified: String = digits.iter().map(|d| char::from(b'0' + d)).collect();

        prop_assert!(!luhn::is_valid_checksum(&modified),
            "Changing digit at position {} should invalidate {}", i, modified);
    }

    /// Property: Spaces never change the checksum outcome.
    #[test]
    fn spaces_dont_affect_luhn(card in digit_string_range(1..=19).prop_flat_map(with_spaces)) {
        let bare: String = card.chars().filter(|&c| c != ' ').collect();
        prop_assert_eq!(luhn::is_valid_checksum(&card), luhn::is_valid_checksum(&bare));
    }

    /// Property: A letter anywhere fails the checksum.
    #[test]
    fn non_digit_always_fails(
        card in luhn_valid_range(12..=19),
        position in any::<prop::sample::Index>(),
        letter in prop::char::range('a', 'z'),
    ) {
        let mut chars: Vec<char> = card.chars().collect();
        let i = position.index(chars.len());
        chars.insert(i, letter);
        let tainted: String = chars.into_iter().collect();
        prop_assert!(!luhn::is_valid_checksum(&tainted));
    }

    /// Property: The digit-slice sum agrees with the string check.
    #[test]
    fn compute_checksum_agrees(card in digit_string_range(1..=19)) {
        let digits: Vec<u8> = card.bytes().map(|b| b - b'0').collect();
        prop_assert_eq!(
            luhn::compute_checksum(&digits) % 10 == 0,
            luhn::is_valid_checksum(&card)
        );
    }

    /// Property: The checksum never panics on any input.
    #[test]
    fn checksum_never_panics(input in ".*") {
        let _ = luhn::is_valid_checksum(&input);
    }
}

// =============================================================================
// PATTERN PROPERTIES
// =============================================================================

proptest! {
    /// Property: Visa-shaped numbers match, one extra digit never does.
    #[test]
    fn visa_pattern_is_anchored(card in visa_16(), extra in 0u8..=9u8) {
        let visa = PatternMatcher::new([("Visa", r"^4[0-9]{12}(?:[0-9]{3})?$")]).unwrap();
        prop_assert!(visa.matches(&card));
        let longer = format!("{}{}", card, extra);
        prop_assert!(!visa.matches(&longer));
    }

    /// Property: Spaces never change the format outcome.
    #[test]
    fn spaces_dont_affect_format(card in visa_16().prop_flat_map(with_spaces)) {
        prop_assert!(PatternMatcher::issuers().matches(&card));
    }
}

// =============================================================================
// EXPIRY PROPERTIES
// =============================================================================

proptest! {
    /// Property: Every month of a future year is accepted.
    #[test]
    fn future_years_are_valid(month in 1i64..=12, year in 2026i64..=2099) {
        let checker = ExpirationChecker::new(FixedClock::new(today()));
        let expiry = checker.check(&DatePart::from(month), &DatePart::from(year)).unwrap();
        prop_assert_eq!(expiry.month() as i64, month);
        prop_assert_eq!(expiry.year() as i64, year);
    }

    /// Property: Every month of a past year is expired.
    #[test]
    fn past_years_are_expired(month in 1i64..=12, year in 1900i64..=2024) {
        let checker = ExpirationChecker::new(FixedClock::new(today()));
        prop_assert_eq!(
            checker.check(&DatePart::from(month), &DatePart::from(year)),
            Err(ExpiryError::Expired)
        );
    }

    /// Property: Out-of-range months are rejected whatever the year.
    #[test]
    fn bad_months_are_rejected(
        month in prop_oneof![i64::MIN..=0i64, 13i64..=i64::MAX],
        year in any::<i64>(),
    ) {
        let checker = ExpirationChecker::new(FixedClock::new(today()));
        prop_assert_eq!(
            checker.check(&DatePart::from(month), &DatePart::from(year)),
            Err(ExpiryError::InvalidMonth)
        );
    }

    /// Property: Two-digit and four-digit spellings agree.
    #[test]
    fn short_years_match_long_years(month in 1i64..=12, short in 0i64..=99) {
        let checker = ExpirationChecker::new(FixedClock::new(today()));
        prop_assert_eq!(
            checker.check(&DatePart::from(month), &DatePart::from(short)),
            checker.check(&DatePart::from(month), &DatePart::from(2000 + short))
        );
    }

    /// Property: Expiry parsing never panics on arbitrary strings.
    #[test]
    fn expiry_never_panics(month in ".*", year in ".*") {
        let checker = ExpirationChecker::new(FixedClock::new(today()));
        let _ = checker.check(&DatePart::from(month), &DatePart::from(year));
    }
}

// =============================================================================
// PIPELINE PROPERTIES
// =============================================================================

proptest! {
    /// Property: Results always honor the success/failure invariants.
    #[test]
    fn result_invariants(card in ".{0,24}", month in ".{0,3}", year in ".{0,5}") {
        let validator = Validator::with_clock(FixedClock::new(today()));
        let result = validator.evaluate(&CardInput::new(card, month, year));
        if result.is_valid() {
            prop_assert!(result.error().is_none());
            prop_assert_eq!(result.http_status(), 200);
        } else {
            prop_assert!(result.error_code().is_some());
            prop_assert!(result.error_message().is_some());
            prop_assert_eq!(result.http_status(), 400);
        }
    }

    /// Property: Generated Visa numbers with a future expiry validate.
    #[test]
    fn valid_visa_validates(card in visa_16(), month in 1u32..=12) {
        let validator = Validator::with_clock(FixedClock::new(today()));
        let result = validator.evaluate(&CardInput::new(card, month, 2030u32));
        prop_assert!(result.is_valid(), "{:?}", result);
    }

    /// Property: Masked output never contains more than the last four digits.
    #[test]
    fn masking_hides_prefix(card in luhn_valid_range(12..=19)) {
        let masked = mask::mask_card_number(&card);
        let digits = masked.chars().filter(|c| c.is_ascii_digit()).count();
        prop_assert_eq!(digits, 4);
        prop_assert!(masked.ends_with(&card[card.len() - 4..]));
    }
}
