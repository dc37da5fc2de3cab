use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// Accepted shape: any number of leading minus signs, integer digits, and an
/// optional point followed by fractional digits.
static DECIMAL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(-*)([0-9]*)(?:\.([0-9]*))?$").expect("invalid regex"));

/// Errors reported by the decimal operations.
///
/// Every operation parses its operands first, so `MalformedInput` can come
/// from any of them. `MixedSigns` is only raised by addition, after both
/// operands have parsed; it shares this enum so that every public function
/// returns one error type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// When the input does not match the decimal string grammar.
    #[error("malformed decimal {input:?}: {reason} {offending:?} at byte {position}")]
    MalformedInput {
        /// Full input as received.
        input: String,
        /// Substring that broke the grammar.
        offending: String,
        /// Byte offset of `offending` within `input`.
        position: usize,
        /// Short description of the violation.
        reason: &'static str,
    },
    /// When addition is asked to combine a strictly negative and a strictly
    /// positive operand. Raised on canonical values, never on raw text.
    #[error("cannot add {left} and {right}: operands have opposite signs")]
    MixedSigns {
        /// Canonical left operand.
        left: String,
        /// Canonical right operand.
        right: String,
    },
}

/// Lexical pieces of a validated decimal string, borrowed from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RawDecimal<'a> {
    /// Number of leading `-` characters.
    pub minus_signs: usize,
    pub integer: &'a str,
    pub fraction: &'a str,
}

/// Checks `input` against the grammar and splits it into sign prefix,
/// integer digits and fractional digits.
pub(crate) fn split_decimal(input: &str) -> Result<RawDecimal<'_>, ValidationError> {
    let Some(captures) = DECIMAL_PATTERN.captures(input) else {
        return Err(malformed(input));
    };

    let minus_signs = captures.get(1).map_or(0, |m| m.len());
    let integer = captures.get(2).map_or("", |m| m.as_str());
    let fraction = captures.get(3).map_or("", |m| m.as_str());

    if integer.is_empty() && fraction.is_empty() {
        return Err(ValidationError::MalformedInput {
            input: input.to_string(),
            offending: input[minus_signs..].to_string(),
            position: minus_signs,
            reason: "no digits in",
        });
    }

    Ok(RawDecimal {
        minus_signs,
        integer,
        fraction,
    })
}

/// Locates the first character that breaks the grammar and builds the error.
fn malformed(input: &str) -> ValidationError {
    let mut in_sign_prefix = true;
    let mut seen_point = false;

    for (position, c) in input.char_indices() {
        let reason = match c {
            '-' if in_sign_prefix => continue,
            '0'..='9' => {
                in_sign_prefix = false;
                continue;
            }
            '.' if !seen_point => {
                in_sign_prefix = false;
                seen_point = true;
                continue;
            }
            '.' => "second decimal point",
            '-' => "minus sign after digits",
            _ => "unexpected character",
        };

        let offending: String = input[position..]
            .chars()
            .take_while(|c| !c.is_ascii_digit())
            .collect();
        return ValidationError::MalformedInput {
            input: input.to_string(),
            offending,
            position,
            reason,
        };
    }

    // Unreachable while the scan mirrors DECIMAL_PATTERN.
    ValidationError::MalformedInput {
        input: input.to_string(),
        offending: input.to_string(),
        position: 0,
        reason: "unrecognized form",
    }
}
