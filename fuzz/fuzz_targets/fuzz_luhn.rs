//! Fuzz target for Luhn algorithm.
//!
//! Tests that luhn functions never panic and maintain invariants.

#![no_main]

use libfuzzer_sys::fuzz_target;
use valid_cards::luhn;

fuzz_target!(|data: &[u8]| {
    // Arbitrary text must never panic
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = luhn::is_valid_checksum(text);
    }

    // Clamp values to valid digit range
    let digits: Vec<u8> = data.iter().map(|&b| b % 10).collect();
    if digits.is_empty() || digits.len() > 18 {
        return;
    }

    let number: String = digits.iter().map(|d| char::from(b'0' + d)).collect();
    assert_eq!(
        luhn::is_valid_checksum(&number),
        luhn::compute_checksum(&digits) % 10 == 0,
        "string and digit checks disagree"
    );

    // Adding check digit should make it valid
    let check = luhn::generate_check_digit(&digits);
    assert!(check <= 9, "Check digit should be 0-9");
    let with_check = format!("{}{}", number, check);
    assert!(luhn::is_valid_checksum(&with_check), "Adding check digit should make valid");
});
