//! Issuer format matching.
//!
//! A card number is accepted when it matches one of the issuer patterns in
//! a table of anchored regular expressions keyed by issuer name. The default
//! table is compiled once, on first use, and shared read-only by every
//! caller afterwards.
//!
//! # Example
//!
//! ```
//! use valid_cards::detect::PatternMatcher;
//!
//! let matcher = PatternMatcher::issuers();
//! assert!(matcher.matches("4111 1111 1111 1111"));
//! assert!(!matcher.matches("41111111111111111"));
//! assert_eq!(matcher.issuer("378282246310005"), Some("Amex"));
//! ```

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Default issuer patterns, checked in this order.
///
/// Every pattern is anchored at both ends so extra leading or trailing
/// digits never match. Maestro overlaps most 5x and 6x ranges and sits last
/// so the narrower issuers name a number first.
pub const ISSUER_PATTERNS: &[(&str, &str)] = &[
    ("Amex", r"^3[47][0-9]{13}$"),
    ("Diners Club", r"^3(?:0[0-5]|[68][0-9])[0-9]{11}$"),
    (
        "Discover",
        r"^(6011[0-9]{12}|64[4-9][0-9]{12,15}|65[0-9]{14,17})$",
    ),
    ("JCB", r"^35(2[8-9]|[3-8][0-9])[0-9]{11,14}$"),
    (
        "Mastercard",
        r"^(5[1-5][0-9]{14}|2(22[1-9][0-9]{12}|2[3-9][0-9]{13}|[3-6][0-9]{14}|7[0-1][0-9]{13}|720[0-9]{12,15}))$",
    ),
    ("Visa", r"^4[0-9]{12}(?:[0-9]{3})?$"),
    ("Visa Master", r"^(4[0-9]{12}(?:[0-9]{3})?|5[1-5][0-9]{14})$"),
    ("Maestro", r"^(5[0-9]{2}|6013|62|63|67)[0-9]{10,15}$"),
];

static DEFAULT_MATCHER: LazyLock<PatternMatcher> = LazyLock::new(|| {
    PatternMatcher::new(ISSUER_PATTERNS.iter().copied())
        .expect("fail to compile the issuer pattern table")
});

/// Removes the space separators users type between digit groups.
#[inline]
pub(crate) fn strip_spaces(card_number: &str) -> String {
    card_number.chars().filter(|&c| c != ' ').collect()
}

/// A compiled issuer pattern table.
#[derive(Clone)]
pub struct PatternMatcher {
    patterns: Vec<(String, Regex)>,
}

impl PatternMatcher {
    /// Compiles a custom issuer table.
    ///
    /// Entries keep their iteration order. An empty table is allowed and
    /// never matches anything.
    pub fn new<I, N, P>(table: I) -> Result<Self, regex::Error>
    where
        I: IntoIterator<Item = (N, P)>,
        N: Into<String>,
        P: AsRef<str>,
    {
        let patterns = table
            .into_iter()
            .map(|(name, pattern)| Ok((name.into(), Regex::new(pattern.as_ref())?)))
            .collect::<Result<Vec<_>, regex::Error>>()?;
        Ok(Self { patterns })
    }

    /// Returns the shared matcher built from [`ISSUER_PATTERNS`].
    pub fn issuers() -> &'static PatternMatcher {
        &DEFAULT_MATCHER
    }

    /// Returns true if the card number matches any issuer pattern.
    ///
    /// Spaces are removed before matching.
    pub fn matches(&self, card_number: &str) -> bool {
        self.issuer(card_number).is_some()
    }

    /// Returns the name of the first issuer whose pattern matches.
    pub fn issuer(&self, card_number: &str) -> Option<&str> {
        let normalized = strip_spaces(card_number);
        self.patterns
            .iter()
            .find(|(_, pattern)| pattern.is_match(&normalized))
            .map(|(name, _)| name.as_str())
    }

    /// Number of issuers in the table.
    #[inline]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Returns true if the table holds no issuers.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl fmt::Debug for PatternMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.patterns.iter().map(|(name, _)| name))
            .finish()
    }
}
