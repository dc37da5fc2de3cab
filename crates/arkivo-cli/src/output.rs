//! Output formatting utilities.

use serde_json::Value;

/// Prints either the plain-text result or the JSON record on one line.
pub fn emit(json: bool, text: &str, record: &Value) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string(record)?);
    } else {
        println!("{}", text);
    }
    Ok(())
}
