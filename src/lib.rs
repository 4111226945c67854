//! # valid_cards
//!
//! Validation of credit card payloads: issuer format, Luhn checksum and
//! expiration date, plus an optional HTTP endpoint around them.
//!
//! ## Features
//!
//! - Issuer format matching against an anchored regex table
//! - Luhn checksum with strict digit handling
//! - Expiration checks with an injectable clock
//! - Stable error codes and HTTP statuses for every failure
//! - REST endpoint with Swagger UI (`server` feature)
//!
//! ## Quick Start
//!
//! ```rust
//! use valid_cards::{is_valid, validate, CardInput, ValidationError};
//!
//! // Month and year may be numbers or numeric strings
//! let card = CardInput::new("4111 1111 1111 1111", "12", 2099i64);
//! assert!(is_valid(&card));
//!
//! let typo = CardInput::new("4111111111111112", "12", "2099");
//! assert_eq!(validate(&typo).unwrap_err(), ValidationError::InvalidChecksum);
//! ```
//!
//! ## Deterministic Dates
//!
//! ```rust
//! use chrono::NaiveDate;
//! use valid_cards::expiry::FixedClock;
//! use valid_cards::{CardInput, Validator};
//!
//! let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
//! let validator = Validator::with_clock(FixedClock::new(today));
//!
//! let result = validator.evaluate(&CardInput::new("341073406242763", "10", "2022"));
//! assert_eq!(result.error_code(), Some("005"));
//! assert_eq!(result.error_message(), Some("credit card has expired"));
//! ```
//!
//! ## Error Codes
//!
//! | Code | Message | Stage |
//! |------|---------|-------|
//! | 001 | Invalid request body | request decoding (transport) |
//! | 002 | Card number is required | required field |
//! | 003 | unknown card format | issuer format |
//! | 004 | the card number is incorrect | Luhn checksum |
//! | 005 | invalid month / invalid year / credit card has expired | expiration |
//!
//! Every failure is reported with HTTP status 400; success with 200.
//!
//! ## Supported Issuers
//!
//! | Issuer | Prefix | Length |
//! |--------|--------|--------|
//! | Amex | 34, 37 | 15 |
//! | Diners Club | 300-305, 36, 38 | 14 |
//! | Discover | 6011, 644-649, 65 | 15-19 |
//! | JCB | 3528-3589 | 15-18 |
//! | Mastercard | 51-55, 2221-2720 | 16 |
//! | Visa | 4 | 13, 16 |
//! | Maestro | 5x, 6013, 62, 63, 67 | 12-19 |
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | `Deserialize` for inputs, `Serialize` for results |
//! | `server` | REST API with Swagger UI |
//!
//! ## Security
//!
//! - Card numbers are zeroized when a [`CardInput`] is dropped
//! - `Debug` output and server logs show masked numbers only
//! - No unsafe code (`#![deny(unsafe_code)]`)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod card;
pub mod detect;
pub mod error;
pub mod expiry;
pub mod luhn;
pub mod mask;
#[cfg(feature = "server")]
pub mod server;
pub mod validate;

// Re-export main types at crate root
pub use card::{CardInput, DatePart};
pub use detect::PatternMatcher;
pub use error::ValidationError;
pub use expiry::{Clock, ExpiryDate, ExpiryError, FixedClock, SystemClock};
pub use validate::{is_valid, validate, ErrorDetail, ValidationResult, Validator};
