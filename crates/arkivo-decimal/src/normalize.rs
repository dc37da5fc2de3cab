//! Canonicalization of decimal strings.
//!
//! Leading minus signs cancel pairwise: an even run yields a non-negative
//! value, an odd run a negative one. Integer padding zeros and fractional
//! trailing zeros are dropped, and zero is always rendered as `"0"`.

use crate::decimal::Decimal;
use crate::validation::{split_decimal, ValidationError};

/// Parses and canonicalizes `input` into a [`Decimal`].
pub(crate) fn parse(input: &str) -> Result<Decimal, ValidationError> {
    let raw = split_decimal(input).inspect_err(|err| {
        tracing::debug!(%err, "rejected decimal string");
    })?;

    let negative = raw.minus_signs % 2 == 1;
    let decimal = Decimal::from_digits(negative, digits(raw.integer), digits(raw.fraction));

    tracing::trace!(input, canonical = %decimal, "normalized decimal string");
    Ok(decimal)
}

fn digits(validated: &str) -> Vec<u8> {
    validated.bytes().map(|b| b - b'0').collect()
}

/// Returns the canonical form of a decimal string.
///
/// ```rust
/// assert_eq!(arkivo_decimal::normalize("000123.4500")?, "123.45");
/// assert_eq!(arkivo_decimal::normalize("-----864.3135")?, "-864.3135");
/// assert_eq!(arkivo_decimal::normalize("-0")?, "0");
/// # Ok::<(), arkivo_decimal::ValidationError>(())
/// ```
///
/// # Errors
///
/// Returns [`ValidationError::MalformedInput`] when `input` contains anything
/// besides leading minus signs, digits and a single decimal point, or has no
/// digit at all.
pub fn normalize(input: &str) -> Result<String, ValidationError> {
    parse(input).map(|decimal| decimal.to_string())
}

/// Returns the canonical negation of a decimal string.
///
/// Zero stays `"0"`. The result is meant for comparisons and display:
/// [`add`](crate::add) refuses operands of opposite sign, so a negated value
/// cannot be fed back into it to subtract.
///
/// # Errors
///
/// Returns [`ValidationError::MalformedInput`] naming `input` itself.
pub fn negate(input: &str) -> Result<String, ValidationError> {
    parse(input).map(|decimal| (-decimal).to_string())
}

/// Returns `true` when the decimal string denotes a value strictly below zero.
pub fn is_negative(input: &str) -> Result<bool, ValidationError> {
    parse(input).map(|decimal| decimal.is_negative())
}
