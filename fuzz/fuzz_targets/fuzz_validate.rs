//! Fuzz target for card validation.
//!
//! Tests that the pipeline never panics and always yields a coherent result.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use valid_cards::{is_valid, CardInput, DatePart, Validator};

#[derive(Arbitrary, Debug)]
enum FuzzDate {
    Number(i64),
    Text(String),
}

impl From<FuzzDate> for DatePart {
    fn from(date: FuzzDate) -> Self {
        match date {
            FuzzDate::Number(n) => DatePart::Number(n),
            FuzzDate::Text(s) => DatePart::Text(s),
        }
    }
}

#[derive(Arbitrary, Debug)]
struct FuzzInput {
    card_number: String,
    month: FuzzDate,
    year: FuzzDate,
}

fuzz_target!(|data: FuzzInput| {
    let input = CardInput::new(data.card_number, data.month, data.year);

    let result = Validator::default().evaluate(&input);
    assert_eq!(result.is_valid(), result.error().is_none());
    assert_eq!(result.is_valid(), result.http_status() == 200);
    assert_eq!(result.is_valid(), is_valid(&input));
});
