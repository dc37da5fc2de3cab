//! Check command implementation.

use crate::output;
use serde_json::json;

pub fn run(
    expected: String,
    given: String,
    strict: bool,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let expected = arkivo_decimal::normalize(&expected)
        .map_err(|e| format!("Invalid expected answer: {}", e))?;
    let given = arkivo_decimal::normalize(&given)
        .map_err(|e| format!("Invalid submitted answer: {}", e))?;
    let correct = arkivo_decimal::answers_match(&expected, &given)?;

    tracing::info!(%expected, %given, correct, "checked answer");
    output::emit(
        json,
        if correct { "correct" } else { "incorrect" },
        &json!({ "expected": expected, "given": given, "correct": correct }),
    )?;

    if strict && !correct {
        std::process::exit(2);
    }

    Ok(())
}
