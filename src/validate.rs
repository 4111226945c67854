//! The validation pipeline.
//!
//! A card payload goes through four stages in a fixed order and stops at
//! the first failure:
//!
//! ```text
//! required card number -> issuer format -> Luhn checksum -> expiration
//! ```
//!
//! Format is checked before the checksum, so a number that happens to pass
//! Luhn but matches no issuer is reported as an unknown format.

use crate::card::CardInput;
use crate::detect::PatternMatcher;
use crate::error::{ValidationError, STATUS_BAD_REQUEST, STATUS_OK};
use crate::expiry::{Clock, ExpirationChecker, ExpiryDate, SystemClock};
use crate::luhn;
use std::sync::LazyLock;

static DEFAULT_VALIDATOR: LazyLock<Validator> = LazyLock::new(Validator::default);

/// Code and message reported for a failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ErrorDetail {
    /// Stable error code, e.g. `"004"`.
    pub code: String,
    /// Human-readable description.
    pub message: String,
}

/// Outcome of a validation, ready to be rendered by a transport.
///
/// A valid result never carries an error and always reports status 200;
/// an invalid one always carries a code and message and reports status 400.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ValidationResult {
    /// Whether the card passed every check.
    valid: bool,
    /// Present only when `valid` is false.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    error: Option<ErrorDetail>,
    #[cfg_attr(feature = "serde", serde(skip))]
    http_status: u16,
}

impl ValidationResult {
    /// A passing result.
    pub fn success() -> Self {
        Self {
            valid: true,
            error: None,
            http_status: STATUS_OK,
        }
    }

    /// A failing result describing `err`.
    pub fn from_error(err: &ValidationError) -> Self {
        Self {
            valid: false,
            error: Some(ErrorDetail {
                code: err.code().to_string(),
                message: err.to_string(),
            }),
            http_status: err.http_status(),
        }
    }

    /// Returns true if every check passed.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Returns the failure details, if any.
    #[inline]
    pub fn error(&self) -> Option<&ErrorDetail> {
        self.error.as_ref()
    }

    /// Returns the failure code, if any.
    #[inline]
    pub fn error_code(&self) -> Option<&str> {
        self.error.as_ref().map(|e| e.code.as_str())
    }

    /// Returns the failure message, if any.
    #[inline]
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_ref().map(|e| e.message.as_str())
    }

    /// Returns the HTTP status that goes with this result.
    #[inline]
    pub fn http_status(&self) -> u16 {
        self.http_status
    }

    /// Returns true for a client-error status.
    #[inline]
    pub fn is_client_error(&self) -> bool {
        self.http_status == STATUS_BAD_REQUEST
    }
}

impl<T> From<Result<T, ValidationError>> for ValidationResult {
    fn from(result: Result<T, ValidationError>) -> Self {
        match result {
            Ok(_) => Self::success(),
            Err(e) => Self::from_error(&e),
        }
    }
}

/// Validates card payloads against an issuer table and a clock.
///
/// A validator holds no mutable state and can be shared across threads.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use valid_cards::expiry::FixedClock;
/// use valid_cards::{CardInput, Validator};
///
/// let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
/// let validator = Validator::with_clock(FixedClock::new(today));
///
/// let result = validator.evaluate(&CardInput::new("4111111111111112", "12", "2025"));
/// assert!(!result.is_valid());
/// assert_eq!(result.error_code(), Some("004"));
/// assert_eq!(result.http_status(), 400);
/// ```
#[derive(Debug, Clone)]
pub struct Validator<C = SystemClock> {
    matcher: &'static PatternMatcher,
    expiration: ExpirationChecker<C>,
}

impl Default for Validator<SystemClock> {
    fn default() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl<C: Clock> Validator<C> {
    /// Creates a validator using the default issuer table and `clock`.
    pub fn with_clock(clock: C) -> Self {
        Self::with_matcher(PatternMatcher::issuers(), clock)
    }

    /// Creates a validator using a custom issuer table.
    ///
    /// The table must outlive the program; leak or store it in a static.
    pub fn with_matcher(matcher: &'static PatternMatcher, clock: C) -> Self {
        Self {
            matcher,
            expiration: ExpirationChecker::new(clock),
        }
    }

    /// Returns the issuer table in use.
    pub fn matcher(&self) -> &PatternMatcher {
        self.matcher
    }

    /// Runs every stage and returns the parsed expiry on success.
    pub fn validate(&self, input: &CardInput) -> Result<ExpiryDate, ValidationError> {
        let card_number = input.card_number();

        if card_number.trim().is_empty() {
            return Err(ValidationError::MissingCardNumber);
        }

        if !self.matcher.matches(card_number) {
            return Err(ValidationError::UnknownCardFormat);
        }

        if !luhn::is_valid_checksum(card_number) {
            return Err(ValidationError::InvalidChecksum);
        }

        let expiry = self
            .expiration
            .check(input.expiration_month(), input.expiration_year())?;
        Ok(expiry)
    }

    /// Runs every stage and folds the outcome into a [`ValidationResult`].
    pub fn evaluate(&self, input: &CardInput) -> ValidationResult {
        self.validate(input).into()
    }
}

/// Validates a card payload with the default issuer table and the system clock.
///
/// # Example
///
/// ```
/// use valid_cards::{validate, CardInput, ValidationError};
///
/// let err = validate(&CardInput::new("", "12", "2099")).unwrap_err();
/// assert_eq!(err, ValidationError::MissingCardNumber);
/// ```
pub fn validate(input: &CardInput) -> Result<ExpiryDate, ValidationError> {
    DEFAULT_VALIDATOR.validate(input)
}

/// Quick boolean check with the default validator.
#[inline]
pub fn is_valid(input: &CardInput) -> bool {
    validate(input).is_ok()
}
