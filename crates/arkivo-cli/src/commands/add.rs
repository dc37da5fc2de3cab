//! Add command implementation.

use crate::output;
use serde_json::json;

pub fn run(left: String, right: String, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let sum = arkivo_decimal::add(&left, &right)?;

    output::emit(
        json,
        &sum,
        &json!({ "left": left, "right": right, "sum": sum }),
    )
}
