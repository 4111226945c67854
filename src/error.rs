//! Error taxonomy for card payload validation.
//!
//! Every failure is a client-input problem. Each variant carries a stable
//! wire code and an HTTP status so callers can render it without matching
//! on the variant themselves.

use crate::expiry::ExpiryError;
use std::fmt;

/// HTTP status reported for a payload that passed every check.
pub const STATUS_OK: u16 = 200;

/// HTTP status reported for every validation failure.
pub const STATUS_BAD_REQUEST: u16 = 400;

/// Errors that can occur while validating a card payload.
///
/// Variants are listed in the order the pipeline can produce them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The request body could not be decoded into a card payload.
    ///
    /// Never produced by the pipeline itself; the transport layer reports it.
    MalformedRequest,

    /// The card number was empty or contained only whitespace.
    MissingCardNumber,

    /// The card number did not match any known issuer format.
    UnknownCardFormat,

    /// The Luhn checksum validation failed.
    ///
    /// This usually indicates a typo in the card number.
    InvalidChecksum,

    /// The expiration month/year was unparsable, out of range or in the past.
    InvalidExpiration(ExpiryError),
}

impl ValidationError {
    /// Returns the stable error code sent to clients.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::MalformedRequest => "001",
            Self::MissingCardNumber => "002",
            Self::UnknownCardFormat => "003",
            Self::InvalidChecksum => "004",
            Self::InvalidExpiration(_) => "005",
        }
    }

    /// Returns the HTTP status that accompanies this error.
    pub const fn http_status(&self) -> u16 {
        STATUS_BAD_REQUEST
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedRequest => write!(f, "Invalid request body"),
            Self::MissingCardNumber => write!(f, "Card number is required"),
            Self::UnknownCardFormat => write!(f, "unknown card format"),
            Self::InvalidChecksum => write!(f, "the card number is incorrect"),
            Self::InvalidExpiration(reason) => write!(f, "{}", reason),
        }
    }
}

impl std::error::Error for ValidationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidExpiration(reason) => Some(reason),
            _ => None,
        }
    }
}

impl From<ExpiryError> for ValidationError {
    fn from(reason: ExpiryError) -> Self {
        Self::InvalidExpiration(reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            ValidationError::MalformedRequest.to_string(),
            "Invalid request body"
        );
        assert_eq!(
            ValidationError::MissingCardNumber.to_string(),
            "Card number is required"
        );
        assert_eq!(
            ValidationError::UnknownCardFormat.to_string(),
            "unknown card format"
        );
        assert_eq!(
            ValidationError::InvalidChecksum.to_string(),
            "the card number is incorrect"
        );
        assert_eq!(
            ValidationError::InvalidExpiration(ExpiryError::Expired).to_string(),
            "credit card has expired"
        );
        assert_eq!(
            ValidationError::InvalidExpiration(ExpiryError::InvalidMonth).to_string(),
            "invalid month"
        );
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(ValidationError::MalformedRequest.code(), "001");
        assert_eq!(ValidationError::MissingCardNumber.code(), "002");
        assert_eq!(ValidationError::UnknownCardFormat.code(), "003");
        assert_eq!(ValidationError::InvalidChecksum.code(), "004");

        // Every expiration reason shares one code
        for reason in [
            ExpiryError::InvalidMonth,
            ExpiryError::InvalidYear,
            ExpiryError::Expired,
        ] {
            assert_eq!(ValidationError::from(reason).code(), "005");
        }
    }

    #[test]
    fn test_every_error_is_a_client_error() {
        for err in [
            ValidationError::MalformedRequest,
            ValidationError::MissingCardNumber,
            ValidationError::UnknownCardFormat,
            ValidationError::InvalidChecksum,
            ValidationError::InvalidExpiration(ExpiryError::Expired),
        ] {
            assert_eq!(err.http_status(), STATUS_BAD_REQUEST);
        }
    }

    #[test]
    fn test_expiration_source() {
        use std::error::Error;

        let err = ValidationError::InvalidExpiration(ExpiryError::InvalidYear);
        assert_eq!(err.source().map(|s| s.to_string()).as_deref(), Some("invalid year"));
        assert!(ValidationError::InvalidChecksum.source().is_none());
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ValidationError>();
    }
}
