//! Compare command implementation.

use crate::output;
use serde_json::json;

pub fn run(left: String, right: String, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let ordering = arkivo_decimal::compare(&left, &right)? as i8;

    output::emit(
        json,
        &ordering.to_string(),
        &json!({ "left": left, "right": right, "ordering": ordering }),
    )
}
