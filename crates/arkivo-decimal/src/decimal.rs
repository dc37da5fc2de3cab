use std::fmt;
use std::ops::Neg;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::validation::ValidationError;

/// Signed decimal number of unbounded magnitude and precision, held in
/// canonical form.
///
/// Digits are stored most significant first as values `0..=9`. Every
/// constructor canonicalizes, so two `Decimal`s are equal exactly when they
/// denote the same value, and [`Display`](fmt::Display) always yields the
/// canonical string:
///
/// - at most one leading `-`, and only for values strictly below zero;
/// - no leading zero in the integer part unless it is exactly `0`;
/// - no trailing zero in the fractional part, and no point when it is empty.
///
/// Serializes as its canonical string; deserialization runs the normalizer
/// and rejects malformed strings.
///
/// ```rust
/// use arkivo_decimal::Decimal;
///
/// let value: Decimal = "--000123.4500".parse()?;
/// assert_eq!(value.to_string(), "123.45");
/// assert_eq!((-value).to_string(), "-123.45");
/// # Ok::<(), arkivo_decimal::ValidationError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Decimal {
    negative: bool,
    integer: Vec<u8>,
    fraction: Vec<u8>,
}

impl Decimal {
    /// The value zero, canonically `"0"`.
    pub fn zero() -> Self {
        Self {
            negative: false,
            integer: vec![0],
            fraction: Vec::new(),
        }
    }

    /// Builds a canonical value from raw digit sequences.
    ///
    /// Leading integer zeros and trailing fractional zeros are dropped, an
    /// empty integer part becomes `0`, and the sign is cleared on zero.
    pub(crate) fn from_digits(negative: bool, mut integer: Vec<u8>, mut fraction: Vec<u8>) -> Self {
        let leading_zeros = integer.iter().take_while(|&&d| d == 0).count();
        integer.drain(..leading_zeros.min(integer.len().saturating_sub(1)));
        if integer.is_empty() {
            integer.push(0);
        }

        while fraction.last() == Some(&0) {
            fraction.pop();
        }

        let is_zero = integer == [0u8] && fraction.is_empty();
        Self {
            negative: negative && !is_zero,
            integer,
            fraction,
        }
    }

    /// Returns `true` when the value is strictly below zero.
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Returns `true` for the value zero.
    pub fn is_zero(&self) -> bool {
        self.integer == [0u8] && self.fraction.is_empty()
    }

    /// Integer digits, most significant first. Never empty.
    pub fn integer_digits(&self) -> &[u8] {
        &self.integer
    }

    /// Fractional digits, most significant first. Empty for whole numbers.
    pub fn fractional_digits(&self) -> &[u8] {
        &self.fraction
    }

    /// Same digits with the sign removed.
    pub fn abs(&self) -> Self {
        Self {
            negative: false,
            ..self.clone()
        }
    }
}

impl Default for Decimal {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::with_capacity(self.integer.len() + self.fraction.len() + 2);
        if self.negative {
            out.push('-');
        }
        out.extend(self.integer.iter().map(|&d| char::from(b'0' + d)));
        if !self.fraction.is_empty() {
            out.push('.');
            out.extend(self.fraction.iter().map(|&d| char::from(b'0' + d)));
        }
        f.pad(&out)
    }
}

impl FromStr for Decimal {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::normalize::parse(s)
    }
}

impl TryFrom<String> for Decimal {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Decimal> for String {
    fn from(value: Decimal) -> Self {
        value.to_string()
    }
}

impl Neg for Decimal {
    type Output = Decimal;

    fn neg(mut self) -> Self::Output {
        self.negative = !self.negative && !self.is_zero();
        self
    }
}

impl Neg for &Decimal {
    type Output = Decimal;

    fn neg(self) -> Self::Output {
        -self.clone()
    }
}
