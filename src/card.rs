//! Raw card payload as received from a client.
//!
//! Nothing here is validated; [`CardInput`] is only the typed shape of the
//! request. The card number buffer is wiped when the input is dropped.

use std::fmt;
use zeroize::Zeroize;

/// An expiration month or year as sent by the client.
///
/// Clients send either JSON numbers or numeric strings; both are accepted
/// and parsed by the expiration checker.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum DatePart {
    /// An integer value.
    Number(i64),
    /// A string that should contain an integer.
    Text(String),
}

impl DatePart {
    /// Parses the value as an integer.
    ///
    /// Text is trimmed first. Returns `None` for anything that is not a
    /// base-10 integer; an explicit `+` sign is not accepted.
    pub fn to_number(&self) -> Option<i64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => {
                let s = s.trim();
                if s.starts_with('+') {
                    return None;
                }
                s.parse().ok()
            }
        }
    }
}

impl Default for DatePart {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl fmt::Debug for DatePart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => write!(f, "{:?}", s),
        }
    }
}

impl From<i64> for DatePart {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<u32> for DatePart {
    fn from(value: u32) -> Self {
        Self::Number(value as i64)
    }
}

impl From<&str> for DatePart {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for DatePart {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Decodes `null` the same as a missing field.
#[cfg(feature = "serde")]
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: serde::Deserialize<'de> + Default,
{
    let value: Option<T> = serde::Deserialize::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

/// The card fields of a validation request.
///
/// Missing or `null` fields deserialize as empty values so they fail
/// validation with the matching error instead of being rejected as a
/// malformed body.
///
/// # Security
///
/// - Debug output never shows the full card number
/// - The card number is zeroized on drop
#[derive(Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CardInput {
    /// Card number, digits optionally grouped with spaces.
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "null_as_default")
    )]
    #[cfg_attr(feature = "server", schema(example = "5512789002271854"))]
    card_number: String,
    /// Expiration month (1-12), as a number or a numeric string.
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "null_as_default")
    )]
    #[cfg_attr(feature = "server", schema(value_type = String, example = "12"))]
    expiration_month: DatePart,
    /// Expiration year, four digits or two digits for the current century.
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "null_as_default")
    )]
    #[cfg_attr(feature = "server", schema(value_type = String, example = "2030"))]
    expiration_year: DatePart,
}

impl CardInput {
    /// Creates a new payload.
    pub fn new(
        card_number: impl Into<String>,
        expiration_month: impl Into<DatePart>,
        expiration_year: impl Into<DatePart>,
    ) -> Self {
        Self {
            card_number: card_number.into(),
            expiration_month: expiration_month.into(),
            expiration_year: expiration_year.into(),
        }
    }

    /// Returns the card number exactly as received.
    ///
    /// Never log this value; use [`crate::mask::mask_card_number`].
    #[inline]
    pub fn card_number(&self) -> &str {
        &self.card_number
    }

    /// Returns the expiration month as received.
    #[inline]
    pub fn expiration_month(&self) -> &DatePart {
        &self.expiration_month
    }

    /// Returns the expiration year as received.
    #[inline]
    pub fn expiration_year(&self) -> &DatePart {
        &self.expiration_year
    }
}

impl fmt::Debug for CardInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardInput")
            .field("card_number", &crate::mask::mask_card_number(&self.card_number))
            .field("expiration_month", &self.expiration_month)
            .field("expiration_year", &self.expiration_year)
            .finish()
    }
}

impl Drop for CardInput {
    fn drop(&mut self) {
        self.card_number.zeroize();
    }
}
