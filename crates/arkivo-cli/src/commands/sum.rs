//! Sum command implementation.

use crate::{input, output};
use arkivo_decimal::{Decimal, ValidationError};
use serde_json::json;
use thiserror::Error;

/// A line of input that could not be added to the running total.
#[derive(Debug, Error)]
#[error("line {line}: {source}")]
pub struct LineError {
    line: usize,
    #[source]
    source: ValidationError,
}

/// Totals newline-separated decimal strings, skipping blank lines.
pub fn total(text: &str) -> Result<(Decimal, usize), LineError> {
    let mut total = Decimal::zero();
    let mut count = 0;

    for (index, raw) in text.lines().enumerate() {
        let value = raw.trim();
        if value.is_empty() {
            continue;
        }
        let line = index + 1;
        total = value
            .parse::<Decimal>()
            .and_then(|v| total.checked_add(&v))
            .map_err(|source| LineError { line, source })?;
        count += 1;
    }

    tracing::info!(count, total = %total, "summed input");
    Ok((total, count))
}

pub fn run(input: Option<String>, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let text = input::read_to_string(input.as_deref())?;
    let (total, count) = total(&text)?;
    let total = total.to_string();

    output::emit(json, &total, &json!({ "count": count, "sum": total }))
}
