//! Credit card expiration checks.
//!
//! The month and year arrive as separate fields, either as integers or as
//! numeric strings. Two-digit years are expanded with the current century.
//! "Today" comes from a [`Clock`], so tests can pin the date.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use valid_cards::expiry::{ExpirationChecker, ExpiryError, FixedClock};
//! use valid_cards::DatePart;
//!
//! let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
//! let checker = ExpirationChecker::new(FixedClock::new(today));
//!
//! let expiry = checker.check(&DatePart::from("06"), &DatePart::from("25")).unwrap();
//! assert_eq!(expiry.year(), 2025);
//!
//! let result = checker.check(&DatePart::from(5u32), &DatePart::from(2025u32));
//! assert_eq!(result, Err(ExpiryError::Expired));
//! ```

use crate::card::DatePart;
use chrono::{Datelike, Local, NaiveDate};
use std::fmt;
use std::sync::Arc;

/// Largest year value that is expanded with the current century.
pub const SHORT_YEAR_MAX: i64 = 99;

/// Largest accepted four-digit year.
pub const MAX_YEAR: i64 = 9999;

/// Source of the current calendar date.
pub trait Clock: Send + Sync {
    /// Returns today's date.
    fn today(&self) -> NaiveDate;
}

/// Reads the local wall-clock date on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always reports the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(NaiveDate);

impl FixedClock {
    /// Creates a clock pinned to `today`.
    pub const fn new(today: NaiveDate) -> Self {
        Self(today)
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}

/// A parsed expiration date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpiryDate {
    /// Month (1-12)
    month: u8,
    /// Four-digit year (e.g., 2025)
    year: u16,
}

impl ExpiryDate {
    /// Creates a new expiry date.
    ///
    /// Returns `None` if the month is invalid (not 1-12).
    pub fn new(month: u8, year: u16) -> Option<Self> {
        if !(1..=12).contains(&month) {
            return None;
        }
        Some(Self { month, year })
    }

    /// Returns the month (1-12).
    #[inline]
    pub const fn month(&self) -> u8 {
        self.month
    }

    /// Returns the four-digit year.
    #[inline]
    pub const fn year(&self) -> u16 {
        self.year
    }

    /// Returns true if the card had expired on `today`.
    ///
    /// A card stays valid through the whole of its expiry month.
    pub fn is_expired_on(&self, today: NaiveDate) -> bool {
        let (current_year, current_month) = year_month(today);
        self.year < current_year || (self.year == current_year && self.month < current_month)
    }

    /// Returns the number of months from `today` until expiration.
    ///
    /// Returns 0 if already expired or expiring this month.
    pub fn months_until_expiry_on(&self, today: NaiveDate) -> u32 {
        let (current_year, current_month) = year_month(today);

        let expiry_months = (self.year as u32) * 12 + (self.month as u32);
        let current_months = (current_year as u32) * 12 + (current_month as u32);

        expiry_months.saturating_sub(current_months)
    }

    /// Formats as MM/YY.
    pub fn format_short(&self) -> String {
        format!("{:02}/{:02}", self.month, self.year % 100)
    }

    /// Formats as MM/YYYY.
    pub fn format_long(&self) -> String {
        format!("{:02}/{:04}", self.month, self.year)
    }
}

impl fmt::Display for ExpiryDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}", self.month, self.year % 100)
    }
}

/// Reasons an expiration date is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpiryError {
    /// Month is not a number or is outside 1-12.
    InvalidMonth,
    /// Year is not a number or is outside 0-9999.
    InvalidYear,
    /// The expiration month is before the current month.
    Expired,
}

impl fmt::Display for ExpiryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidMonth => write!(f, "invalid month"),
            Self::InvalidYear => write!(f, "invalid year"),
            Self::Expired => write!(f, "credit card has expired"),
        }
    }
}

impl std::error::Error for ExpiryError {}

/// Expands a two-digit year with the century of `today`.
///
/// Values above [`SHORT_YEAR_MAX`] are returned unchanged.
///
/// ```
/// use chrono::NaiveDate;
/// use valid_cards::expiry::expand_year;
///
/// let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
/// assert_eq!(expand_year(25, today), 2025);
/// assert_eq!(expand_year(7, today), 2007);
/// assert_eq!(expand_year(2031, today), 2031);
/// ```
pub fn expand_year(year: i64, today: NaiveDate) -> i64 {
    if (0..=SHORT_YEAR_MAX).contains(&year) {
        let century = i64::from(today.year()).div_euclid(100) * 100;
        century + year
    } else {
        year
    }
}

fn year_month(today: NaiveDate) -> (u16, u8) {
    (today.year().clamp(0, MAX_YEAR as i32) as u16, today.month() as u8)
}

fn parse_month(month: &DatePart) -> Result<u8, ExpiryError> {
    let value = month.to_number().ok_or(ExpiryError::InvalidMonth)?;
    if !(1..=12).contains(&value) {
        return Err(ExpiryError::InvalidMonth);
    }
    Ok(value as u8)
}

fn parse_year(year: &DatePart, today: NaiveDate) -> Result<u16, ExpiryError> {
    let value = year.to_number().ok_or(ExpiryError::InvalidYear)?;
    if !(0..=MAX_YEAR).contains(&value) {
        return Err(ExpiryError::InvalidYear);
    }
    u16::try_from(expand_year(value, today)).map_err(|_| ExpiryError::InvalidYear)
}

/// Checks expiration month/year pairs against a clock.
#[derive(Debug, Clone, Default)]
pub struct ExpirationChecker<C = SystemClock> {
    clock: C,
}

impl<C: Clock> ExpirationChecker<C> {
    /// Creates a checker that reads "today" from `clock`.
    pub const fn new(clock: C) -> Self {
        Self { clock }
    }

    /// Returns the clock used by this checker.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Parses and checks an expiration month and year.
    ///
    /// Checks run in a fixed order: month, then year, then the comparison
    /// with today's date. The first failure is returned.
    pub fn check(&self, month: &DatePart, year: &DatePart) -> Result<ExpiryDate, ExpiryError> {
        let today = self.clock.today();

        let month = parse_month(month)?;
        let year = parse_year(year, today)?;
        let expiry = ExpiryDate { month, year };

        if expiry.is_expired_on(today) {
            return Err(ExpiryError::Expired);
        }
        Ok(expiry)
    }
}
