//! Normalize command implementation.

use crate::output;
use serde_json::json;

pub fn run(value: String, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let canonical = arkivo_decimal::normalize(&value)?;

    output::emit(
        json,
        &canonical,
        &json!({ "input": value, "canonical": canonical }),
    )
}
