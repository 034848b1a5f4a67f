//! Validation for numeric user identifiers (UINs).
//!
//! A UIN is written as 5 to 11 decimal digits and never starts with zero.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::DataError;

#[expect(
    clippy::expect_used,
    reason = "the pattern is a literal and is exercised by the unit tests"
)]
static UIN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[1-9][0-9]{4,10}$").expect("UIN pattern compiles"));

/// Returns `true` when the decimal form of `uin` is a valid identifier.
///
/// # Examples
///
/// ```rust
/// use datakit::check_uin;
///
/// assert!(check_uin(10_001));
/// assert!(!check_uin(1234));
/// assert!(!check_uin(-123_456));
/// ```
#[must_use]
pub fn check_uin(uin: i64) -> bool {
    check_uin_str(&uin.to_string())
}

/// Returns `true` when `input` is already the string form of a valid
/// identifier. Surrounding whitespace is not accepted.
#[must_use]
pub fn check_uin_str(input: &str) -> bool {
    UIN_PATTERN.is_match(input)
}

/// A validated numeric user identifier.
///
/// Serialises as a plain integer and validates on deserialisation.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct Uin(u64);

impl Uin {
    /// Wrap `value` if it is a valid identifier.
    #[must_use]
    pub fn new(value: i64) -> Option<Self> {
        if check_uin(value) {
            u64::try_from(value).ok().map(Self)
        } else {
            None
        }
    }

    /// The identifier as an integer.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl TryFrom<u64> for Uin {
    type Error = DataError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        let text = value.to_string();
        if check_uin_str(&text) {
            Ok(Self(value))
        } else {
            Err(DataError::InvalidUin { input: text })
        }
    }
}

impl TryFrom<i64> for Uin {
    type Error = DataError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| DataError::InvalidUin {
            input: value.to_string(),
        })
    }
}

impl FromStr for Uin {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DataError::InvalidUin { input: s.to_owned() };
        if !check_uin_str(s) {
            return Err(invalid());
        }
        s.parse::<u64>().map(Self).map_err(|_| invalid())
    }
}

impl From<Uin> for u64 {
    fn from(uin: Uin) -> Self {
        uin.0
    }
}

impl fmt::Display for Uin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
