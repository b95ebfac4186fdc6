//! JSON text helper: validation and pretty-printing for user-entered text.
//! Formatting is fail-soft: it is invoked straight from an interactive
//! "Format" action, so it returns the input untouched instead of erroring.

use serde_json::Value;

// ========================================
// TYPES
// ========================================

/// Outcome of a validation attempt. `error` carries the parser's own
/// diagnostic and is only populated when `valid` is false.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationResult {
    pub valid: bool,
    pub error: Option<String>,
}

// ========================================
// OPERATIONS
// ========================================

/// Parse `text` as JSON. Any syntactically valid value passes, primitives
/// included. Always attempts the parse: blank input reports as invalid,
/// callers wanting a neutral "untouched" state check for it themselves.
pub fn validate(text: &str) -> ValidationResult {
    match serde_json::from_str::<Value>(text) {
        Ok(_) => ValidationResult { valid: true, error: None },
        Err(e) => ValidationResult {
            valid: false,
            error: Some(e.to_string()),
        },
    }
}

/// Re-serialize `text` with 2-space indentation; on any failure the input
/// comes back unchanged. Never fails.
pub fn format(text: &str) -> String {
    match serde_json::from_str::<Value>(text) {
        Ok(value) => serde_json::to_string_pretty(&value).unwrap_or_else(|_| text.to_string()),
        Err(_) => text.to_string(),
    }
}

/// Validity flag only.
pub fn is_valid(text: &str) -> bool {
    validate(text).valid
}
