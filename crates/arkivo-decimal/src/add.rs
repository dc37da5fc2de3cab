//! Schoolbook addition over canonical digit sequences.
//!
//! Only same-signed operands are added: two non-negative values give their
//! sum, two negative values give the negated sum of their magnitudes. Zero is
//! compatible with either sign. Opposite signs are refused so that callers
//! compose subtraction explicitly.

use crate::decimal::Decimal;
use crate::normalize::parse;
use crate::validation::ValidationError;

impl Decimal {
    /// Adds two values of the same sign.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MixedSigns`] when one operand is strictly
    /// negative and the other strictly positive.
    pub fn checked_add(&self, other: &Decimal) -> Result<Decimal, ValidationError> {
        if self.is_negative() != other.is_negative() && !self.is_zero() && !other.is_zero() {
            tracing::debug!(left = %self, right = %other, "refused mixed-sign addition");
            return Err(ValidationError::MixedSigns {
                left: self.to_string(),
                right: other.to_string(),
            });
        }

        let negative = self.is_negative() || other.is_negative();
        let (integer, fraction) = add_magnitudes(self, other);
        Ok(Decimal::from_digits(negative, integer, fraction))
    }
}

/// Returns integer and fractional digits of `|a| + |b|`, not yet canonical.
fn add_magnitudes(a: &Decimal, b: &Decimal) -> (Vec<u8>, Vec<u8>) {
    let (a_frac, b_frac) = (a.fractional_digits(), b.fractional_digits());
    let width = a_frac.len().max(b_frac.len());

    let mut carry = 0;
    let mut fraction = vec![0; width];
    for i in (0..width).rev() {
        let d = a_frac.get(i).copied().unwrap_or(0) + b_frac.get(i).copied().unwrap_or(0) + carry;
        fraction[i] = d % 10;
        carry = d / 10;
    }

    // Integer digits are walked least significant first, then flipped back.
    let mut a_int = a.integer_digits().iter().rev();
    let mut b_int = b.integer_digits().iter().rev();
    let len = a.integer_digits().len().max(b.integer_digits().len());
    let mut integer = Vec::with_capacity(len + 1);
    for _ in 0..len {
        let d = a_int.next().copied().unwrap_or(0) + b_int.next().copied().unwrap_or(0) + carry;
        integer.push(d % 10);
        carry = d / 10;
    }
    if carry > 0 {
        integer.push(carry);
    }
    integer.reverse();

    (integer, fraction)
}

/// Adds two decimal strings and returns the canonical sum.
///
/// ```rust
/// assert_eq!(arkivo_decimal::add("999.999", "0.001")?, "1000");
/// assert_eq!(arkivo_decimal::add("1.500", "2.50")?, "4");
/// assert_eq!(arkivo_decimal::add("-1.5", "-2")?, "-3.5");
/// # Ok::<(), arkivo_decimal::ValidationError>(())
/// ```
///
/// # Errors
///
/// Returns [`ValidationError::MalformedInput`] for malformed operands and
/// [`ValidationError::MixedSigns`] when the operands have opposite signs.
pub fn add(a: &str, b: &str) -> Result<String, ValidationError> {
    let sum = parse(a)?.checked_add(&parse(b)?)?;
    Ok(sum.to_string())
}

/// Adds any number of decimal strings, starting from zero.
///
/// An empty sequence sums to `"0"`. The sign rule of [`add`] applies to the
/// running total, so every non-zero operand must share one sign.
pub fn sum<I, S>(values: I) -> Result<String, ValidationError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut total = Decimal::zero();
    for value in values {
        total = total.checked_add(&parse(value.as_ref())?)?;
    }
    Ok(total.to_string())
}
