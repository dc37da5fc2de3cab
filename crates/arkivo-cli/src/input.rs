//! Input helpers shared by commands.

use std::io::{self, Read};

/// Reads the whole input from a file, or from stdin when no path is given.
pub fn read_to_string(path: Option<&str>) -> Result<String, Box<dyn std::error::Error>> {
    if let Some(path) = path {
        let text = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read file {}: {}", path, e))?;
        tracing::debug!(path, bytes = text.len(), "read input file");
        Ok(text)
    } else {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    }
}
