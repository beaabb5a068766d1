//! Numeric Coercion Helpers
//!
//! Shared by the integer and decimal converters:
//! - `is_numeric` / `value_is_numeric`: the strict check used on the
//!   validated paths. Accepts optional whitespace padding, a sign, digits
//!   with an optional fractional part, and an optional exponent. Rejects
//!   `inf`, `nan` and hex.
//! - `cast_int` / `cast_float`: the permissive casts used on the trusted
//!   paths. Strings convert via their longest leading numeric prefix
//!   (`"12abc"` -> 12), falling back to zero when no prefix exists.

use super::types::Value;

/// Strict numeric-string check.
pub fn is_numeric(s: &str) -> bool {
    let s = s.trim_matches(|c: char| c.is_ascii_whitespace());
    if s.is_empty() {
        return false;
    }
    let bytes = s.as_bytes();
    let mut i = 0;

    if matches!(bytes[i], b'+' | b'-') {
        i += 1;
    }

    let mut int_digits = 0;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
        int_digits += 1;
    }

    let mut frac_digits = 0;
    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
            frac_digits += 1;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return false;
    }

    if i < bytes.len() && matches!(bytes[i], b'e' | b'E') {
        i += 1;
        if i < bytes.len() && matches!(bytes[i], b'+' | b'-') {
            i += 1;
        }
        let mut exp_digits = 0;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
            exp_digits += 1;
        }
        if exp_digits == 0 {
            return false;
        }
    }

    i == bytes.len()
}

/// Whether a value counts as numeric for the validated conversion paths.
/// Booleans do not.
pub fn value_is_numeric(value: &Value) -> bool {
    match value {
        Value::Int(_) | Value::Float(_) => true,
        Value::String(s) => is_numeric(s),
        _ => false,
    }
}

/// Longest leading numeric prefix of a string, as a float. Zero when the
/// string has no numeric prefix at all.
fn numeric_prefix(s: &str) -> f64 {
    let s = s.trim_start_matches(|c: char| c.is_ascii_whitespace());
    let bytes = s.as_bytes();
    let mut end = 0;
    let mut i = 0;

    if i < bytes.len() && matches!(bytes[i], b'+' | b'-') {
        i += 1;
    }
    let mut saw_digit = false;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
        saw_digit = true;
        end = i;
    }
    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
            saw_digit = true;
            end = i;
        }
    }
    if saw_digit && i < bytes.len() && matches!(bytes[i], b'e' | b'E') {
        let mut j = i + 1;
        if j < bytes.len() && matches!(bytes[j], b'+' | b'-') {
            j += 1;
        }
        let mut exp_digits = false;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
            exp_digits = true;
        }
        if exp_digits {
            end = j;
        }
    }

    if !saw_digit {
        return 0.0;
    }
    s[..end].parse::<f64>().unwrap_or(0.0)
}

/// Permissive cast to integer. Floats truncate toward zero; strings convert
/// via their leading numeric prefix; booleans become 1/0; everything else
/// becomes zero.
pub fn cast_int(value: &Value) -> i64 {
    match value {
        Value::Int(n) => *n,
        Value::Float(f) => *f as i64,
        Value::Bool(b) => *b as i64,
        Value::String(s) => {
            // Exact integer strings keep full i64 precision.
            let trimmed = s.trim_matches(|c: char| c.is_ascii_whitespace());
            if let Ok(n) = trimmed.parse::<i64>() {
                n
            } else {
                numeric_prefix(s) as i64
            }
        }
        _ => 0,
    }
}

/// Permissive cast to float.
pub fn cast_float(value: &Value) -> f64 {
    match value {
        Value::Int(n) => *n as f64,
        Value::Float(f) => *f,
        Value::Bool(b) => (*b as i64) as f64,
        Value::String(s) => numeric_prefix(s),
        _ => 0.0,
    }
}
