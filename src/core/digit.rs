//! Validated keypad digits.

use super::error::CalcError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single decimal digit, 0 through 9.
///
/// # Example
///
/// ```rust
/// use abacus::core::Digit;
///
/// let seven = Digit::try_from(7u8).unwrap();
/// assert_eq!(seven.as_char(), '7');
/// assert!(Digit::try_from(10u8).is_err());
/// assert_eq!(Digit::try_from('3').unwrap().value(), 3);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Digit(u8);

impl Digit {
    pub const ZERO: Digit = Digit(0);

    /// Numeric value of the digit.
    pub fn value(self) -> u8 {
        self.0
    }

    /// Character appended to the entry buffer.
    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }

    /// All ten digits in keypad order.
    pub fn all() -> impl Iterator<Item = Digit> {
        (0..=9).map(Digit)
    }
}

impl TryFrom<u8> for Digit {
    type Error = CalcError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value <= 9 {
            Ok(Digit(value))
        } else {
            Err(CalcError::InvalidDigit(value))
        }
    }
}

impl TryFrom<char> for Digit {
    type Error = CalcError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        c.to_digit(10)
            .map(|d| Digit(d as u8))
            .ok_or(CalcError::InvalidDigitChar(c))
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.0
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
