//! PCI-DSS compliant masking for log output.
//!
//! PCI-DSS allows displaying only the last 4 digits of a card number to
//! anyone without a business need for the full number. Every place this
//! crate prints a card number goes through [`mask_card_number`].

/// Masks a raw card number string, keeping only the last 4 digits.
///
/// Non-digit characters are dropped before masking, so the output never
/// echoes arbitrary client input. Numbers with 4 digits or fewer are masked
/// completely.
///
/// # Example
///
/// ```
/// use valid_cards::mask::mask_card_number;
///
/// assert_eq!(mask_card_number("4111 1111 1111 1111"), "****-****-****-1111");
/// assert_eq!(mask_card_number("378282246310005"), "****-****-***-0005");
/// assert_eq!(mask_card_number("1234"), "****");
/// ```
pub fn mask_card_number(input: &str) -> String {
    let digits: Vec<char> = input.chars().filter(|c| c.is_ascii_digit()).collect();
    let len = digits.len();

    if len <= 4 {
        return "*".repeat(len);
    }

    let masked_count = len - 4;
    let mut result = String::with_capacity(len + (len / 4) + 1);

    // Masked portion in groups of 4
    for i in 0..masked_count {
        if i > 0 && i % 4 == 0 {
            result.push('-');
        }
        result.push('*');
    }

    result.push('-');
    result.extend(&digits[masked_count..]);
    result
}
