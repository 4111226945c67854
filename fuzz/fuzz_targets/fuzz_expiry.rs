//! Fuzz target for expiry date parsing.
//!
//! Tests that expiry parsing never panics on arbitrary input.

#![no_main]

use chrono::NaiveDate;
use libfuzzer_sys::fuzz_target;
use valid_cards::expiry::{ExpirationChecker, FixedClock};
use valid_cards::DatePart;

fuzz_target!(|data: (String, String, i64, i64)| {
    let (month_text, year_text, month_num, year_num) = data;
    let Some(today) = NaiveDate::from_ymd_opt(2025, 6, 15) else {
        return;
    };
    let checker = ExpirationChecker::new(FixedClock::new(today));

    let attempts = [
        (DatePart::from(month_text.clone()), DatePart::from(year_text.clone())),
        (DatePart::from(month_num), DatePart::from(year_num)),
        (DatePart::from(month_text), DatePart::from(year_num)),
        (DatePart::from(month_num), DatePart::from(year_text)),
    ];

    for (month, year) in &attempts {
        // If parsing succeeds, test other methods
        if let Ok(exp) = checker.check(month, year) {
            assert!((1..=12).contains(&exp.month()));
            assert!(!exp.is_expired_on(today));
            let _ = exp.months_until_expiry_on(today);
            let _ = exp.format_short();
            let _ = exp.format_long();
            let _ = exp.to_string();
        }
    }
});
