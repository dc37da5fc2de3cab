//! Total order over decimal strings.

use std::cmp::Ordering;
use std::iter;

use crate::decimal::Decimal;
use crate::normalize::parse;
use crate::validation::ValidationError;

impl Ord for Decimal {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.is_negative(), other.is_negative()) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            // -a vs -b orders like b vs a
            (true, true) => compare_magnitudes(other, self),
            (false, false) => compare_magnitudes(self, other),
        }
    }
}

impl PartialOrd for Decimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Orders two canonical values by absolute value.
fn compare_magnitudes(a: &Decimal, b: &Decimal) -> Ordering {
    let (a_int, b_int) = (a.integer_digits(), b.integer_digits());

    // Canonical integer parts carry no padding, so more digits means larger.
    a_int
        .len()
        .cmp(&b_int.len())
        .then_with(|| a_int.cmp(b_int))
        .then_with(|| compare_fractions(a.fractional_digits(), b.fractional_digits()))
}

/// Compares fractional digit runs after right-padding both to equal width.
fn compare_fractions(a: &[u8], b: &[u8]) -> Ordering {
    let width = a.len().max(b.len());
    let padded = |digits: &[u8]| {
        digits
            .iter()
            .copied()
            .chain(iter::repeat(0))
            .take(width)
            .collect::<Vec<u8>>()
    };
    padded(a).cmp(&padded(b))
}

/// Three-way comparison of two decimal strings by the values they denote.
///
/// `ordering as i8` yields the conventional `-1`, `0`, `1`.
///
/// ```rust
/// use std::cmp::Ordering;
///
/// assert_eq!(arkivo_decimal::compare("12.34", "12.345")?, Ordering::Less);
/// assert_eq!(arkivo_decimal::compare("-630397283", "630397283")?, Ordering::Less);
/// assert_eq!(arkivo_decimal::compare("1.50", "001.5")?, Ordering::Equal);
/// # Ok::<(), arkivo_decimal::ValidationError>(())
/// ```
///
/// # Errors
///
/// Returns [`ValidationError::MalformedInput`] if either operand is malformed.
pub fn compare(a: &str, b: &str) -> Result<Ordering, ValidationError> {
    Ok(parse(a)?.cmp(&parse(b)?))
}

/// Returns `true` when a submitted answer denotes the same value as the
/// expected one, whatever its padding or sign spelling.
pub fn answers_match(expected: &str, given: &str) -> Result<bool, ValidationError> {
    compare(expected, given).map(Ordering::is_eq)
}
