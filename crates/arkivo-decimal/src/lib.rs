//! Arbitrary-precision decimal arithmetic on digit strings.
//!
//! Arkivo generates and grades arithmetic practice problems. Quantities are
//! exchanged as decimal strings of any length, and every comparison or sum is
//! computed on their digits so no binary floating-point rounding ever enters
//! a grade.
//!
//! Three pure operations make up the core:
//!
//! - [`normalize`] maps a decimal string to its unique canonical form;
//! - [`compare`] orders two decimal strings by value;
//! - [`add`] returns the canonical sum of two same-signed decimal strings.
//!
//! Each operation validates its input once through the normalizer and
//! reports malformed strings as [`ValidationError::MalformedInput`].
//!
//! ```rust
//! use std::cmp::Ordering;
//!
//! assert_eq!(arkivo_decimal::normalize("----864.3135")?, "864.3135");
//! assert_eq!(arkivo_decimal::compare("0.1", "0.10")?, Ordering::Equal);
//! assert_eq!(arkivo_decimal::add("0.1", "0.2")?, "0.3");
//! # Ok::<(), arkivo_decimal::ValidationError>(())
//! ```
//!
//! The [`Decimal`] type exposes the same semantics on an already-parsed
//! value for callers that hold onto numbers.
#![deny(missing_docs)]

/// Schoolbook addition with carry.
pub mod add;
/// Ordering by sign, then magnitude.
pub mod compare;
/// Canonical digit-sequence value type.
pub mod decimal;
/// Canonicalization of decimal strings.
pub mod normalize;
/// Grammar checks and error types.
pub mod validation;

pub use add::{add, sum};
pub use compare::{answers_match, compare};
pub use decimal::Decimal;
pub use normalize::{is_negative, negate, normalize};
pub use validation::ValidationError;
