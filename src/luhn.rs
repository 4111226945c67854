//! Luhn algorithm implementation for credit card validation.
//!
//! The Luhn algorithm (also known as the "modulus 10" algorithm) is a checksum
//! formula used to validate credit card numbers and other identification numbers.
//! It catches every single-digit typo and most adjacent transpositions.

/// Lookup table for doubled digits: double the value, subtract 9 if >= 10.
/// This avoids the branch and division in the inner loop.
/// Index is the digit (0-9), value is the transformed result.
const DOUBLE_TABLE: [u8; 10] = [0, 2, 4, 6, 8, 1, 3, 5, 7, 9];

/// Checks the Luhn checksum of a card number string.
///
/// Space characters are ignored so numbers typed in groups check the same as
/// the bare digits. Any other non-digit character fails the check instead of
/// contributing a garbage value to the sum.
///
/// An input with no digits sums to zero and therefore passes; callers must
/// reject empty card numbers before reaching this check.
///
/// # Algorithm
///
/// 1. Starting from the rightmost digit (check digit), moving left
/// 2. Double every second digit
/// 3. If doubling results in a number > 9, subtract 9
/// 4. Sum all digits
/// 5. If the sum is divisible by 10, the number is valid
///
/// # Example
///
/// ```
/// use valid_cards::luhn::is_valid_checksum;
///
/// assert!(is_valid_checksum("4111111111111111"));
/// assert!(is_valid_checksum("4111 1111 1111 1111"));
/// assert!(!is_valid_checksum("4111111111111112"));
/// assert!(!is_valid_checksum("4111-1111-1111-1111"));
/// ```
pub fn is_valid_checksum(card_number: &str) -> bool {
    let mut sum: u32 = 0;
    let mut double = false;

    for c in card_number.chars().rev().filter(|&c| c != ' ') {
        let Some(digit) = c.to_digit(10) else {
            return false;
        };

        sum += if double {
            DOUBLE_TABLE[digit as usize] as u32
        } else {
            digit
        };
        double = !double;
    }

    sum % 10 == 0
}

/// Computes the Luhn checksum for a sequence of digits.
///
/// # Arguments
///
/// * `digits` - A slice of digits (0-9).
///
/// # Returns
///
/// The Luhn sum (not modulo 10).
#[inline]
pub fn compute_checksum(digits: &[u8]) -> u32 {
    digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &digit)| {
            if i % 2 == 1 {
                DOUBLE_TABLE[digit as usize] as u32
            } else {
                digit as u32
            }
        })
        .sum()
}

/// Generates the check digit for a partial card number.
///
/// Given digits without the check digit, computes what the check digit
/// should be for the number to pass Luhn validation.
///
/// # Example
///
/// ```
/// use valid_cards::luhn::generate_check_digit;
///
/// // Visa test card without check digit
/// let partial = [4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1];
/// assert_eq!(generate_check_digit(&partial), 1);
/// ```
#[inline]
pub fn generate_check_digit(digits: &[u8]) -> u8 {
    // Appending a zero shifts every digit one position left, which is
    // exactly where they sit once the real check digit is in place.
    let mut padded = Vec::with_capacity(digits.len() + 1);
    padded.extend_from_slice(digits);
    padded.push(0);

    let sum = compute_checksum(&padded);
    ((10 - (sum % 10)) % 10) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_cards() {
        assert!(is_valid_checksum("5512789002271854"));
        assert!(is_valid_checksum("5446137756964913"));
        assert!(is_valid_checksum("4916618047059690"));
        assert!(is_valid_checksum("6011438022129973"));

        // Amex, 15 digits
        assert!(is_valid_checksum("341073406242763"));
        assert!(is_valid_checksum("378282246310005"));

        // Diners Club, 14 digits
        assert!(is_valid_checksum("30569309025904"));
    }

    #[test]
    fn test_invalid_cards() {
        assert!(!is_valid_checksum("4556233516534075"));
        assert!(!is_valid_checksum("1234567890123456"));
        assert!(!is_valid_checksum("4485086012345670"));

        // Changed last digit
        assert!(!is_valid_checksum("4111111111111112"));
    }

    #[test]
    fn test_spaces_are_ignored() {
        assert_eq!(
            is_valid_checksum("4111 1111 1111 1111"),
            is_valid_checksum("4111111111111111")
        );
        assert!(is_valid_checksum(" 5512 7890 0227 1854 "));
        assert!(!is_valid_checksum("4111 1111 1111 1112"));
    }

    #[test]
    fn test_non_digits_are_rejected() {
        assert!(!is_valid_checksum("invalid_card_number"));
        assert!(!is_valid_checksum("4111-1111-1111-1111"));
        assert!(!is_valid_checksum("4111\t1111111111111"));

        // Letters must not be folded into the sum: '0' + 10 would be ':'
        assert!(!is_valid_checksum("411111111111111:"));
        assert!(!is_valid_checksum("a"));
    }

    #[test]
    fn test_empty_input_sums_to_zero() {
        assert!(is_valid_checksum(""));
        assert!(is_valid_checksum("   "));
        assert_eq!(compute_checksum(&[]), 0);
    }

    #[test]
    fn test_single_digit() {
        // Single 0 should be valid (0 % 10 == 0)
        assert!(is_valid_checksum("0"));
        assert!(!is_valid_checksum("1"));
        assert!(!is_valid_checksum("5"));
    }

    #[test]
    fn test_compute_checksum_matches_string_check() {
        let digits = [4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1];
        assert_eq!(compute_checksum(&digits) % 10, 0);

        let digits = [4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 2];
        assert_ne!(compute_checksum(&digits) % 10, 0);
    }

    #[test]
    fn test_generate_check_digit() {
        // Visa
        let partial = [4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1];
        assert_eq!(generate_check_digit(&partial), 1);

        // Mastercard
        let partial = [5, 5, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0];
        assert_eq!(generate_check_digit(&partial), 4);

        // Amex
        let partial = [3, 7, 8, 2, 8, 2, 2, 4, 6, 3, 1, 0, 0, 0];
        assert_eq!(generate_check_digit(&partial), 5);
    }

    #[test]
    fn test_double_table_values() {
        for i in 0..10 {
            let doubled = i * 2;
            let expected = if doubled > 9 { doubled - 9 } else { doubled };
            assert_eq!(DOUBLE_TABLE[i], expected as u8);
        }
    }
}
