//! Formatting utilities used for CLI outputs.

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

pub fn pad_left(s: &str, width: usize) -> String {
    format!("{:>width$}", s, width = width)
}

/// Human-readable description and ANSI color for a day-state code.
/// Used by the forecast grid and in tests.
pub fn describe_state(code: &str) -> (String, &'static str) {
    match code.to_uppercase().as_str() {
        "O" => ("Office".into(), "\x1b[34m"),
        "H" => ("Home".into(), "\x1b[36m"),
        "L" => ("Leave".into(), "\x1b[33m"),
        "BH" => ("Weekend".into(), "\x1b[90m"),
        other => (other.to_string(), "\x1b[0m"),
    }
}
