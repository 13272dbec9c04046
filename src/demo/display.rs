//! Formatting and console helpers for the demo output.
//!
//! Pure presentation: JSON pretty-printing with a fall-back to the original
//! text when parsing fails, plus the fixed decorative section and test
//! headers.

use serde_json::Value;

const SECTION_RULE: &str = "==========================================";

/// Pretty-prints `text` as JSON, returning it unchanged if it is not JSON.
pub fn format_json(text: &str) -> String {
    match serde_json::from_str::<Value>(text) {
        Ok(value) => serde_json::to_string_pretty(&value).unwrap_or_else(|_| text.to_string()),
        Err(_) => text.to_string(),
    }
}

/// Formats a response that may be a bare primitive rather than an object.
///
/// Composite values are pretty-printed, parsed primitives are stringified
/// without quotes, and unparseable input is returned unchanged.
pub fn format_simple(text: &str) -> String {
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(_)) | Ok(Value::Array(_)) => format_json(text),
        Ok(Value::String(s)) => s,
        Ok(value) => value.to_string(),
        Err(_) => text.to_string(),
    }
}

/// Prints a section header with decorative separators.
pub fn print_section(title: &str) {
    println!();
    println!("{SECTION_RULE}");
    println!("{title}");
    println!("{SECTION_RULE}");
}

/// Prints a test case header.
pub fn print_test(name: &str) {
    println!();
    println!("--- {name} ---");
}

pub fn print_line(message: &str) {
    println!("{message}");
}

pub fn print_blank() {
    println!();
}
