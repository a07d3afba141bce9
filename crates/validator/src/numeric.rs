//! Loose numeric interpretation of values.
//!
//! The fuzzy classifier accepts strings that *look* like numbers. The
//! grammar here is the classic numeric-string one:
//!
//! ```text
//! [whitespace] [+|-] (digits [. digits*] | . digits) [(e|E) [+|-] digits] [whitespace]
//! ```
//!
//! Hex, binary, `inf` and `nan` spellings are never numeric.

use crate::value::Value;

fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\u{0b}' | '\u{0c}')
}

fn trim_space(s: &str) -> &str {
    s.trim_matches(is_space)
}

/// Consumes a run of ASCII digits, returning how many were read.
fn digits(bytes: &[u8], pos: &mut usize) -> usize {
    let start = *pos;
    while *pos < bytes.len() && bytes[*pos].is_ascii_digit() {
        *pos += 1;
    }
    *pos - start
}

/// Matches the numeric core (no surrounding whitespace).
fn is_number_literal(s: &str) -> bool {
    let bytes = s.as_bytes();
    let mut pos = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        pos += 1;
    }

    let mut mantissa = digits(bytes, &mut pos);
    if bytes.get(pos) == Some(&b'.') {
        pos += 1;
        mantissa += digits(bytes, &mut pos);
    }
    if mantissa == 0 {
        return false;
    }

    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        pos += 1;
        if matches!(bytes.get(pos), Some(b'+' | b'-')) {
            pos += 1;
        }
        if digits(bytes, &mut pos) == 0 {
            return false;
        }
    }

    pos == bytes.len()
}

/// Returns true if the string is a numeric string.
#[must_use]
pub fn is_numeric_str(s: &str) -> bool {
    is_number_literal(trim_space(s))
}

/// Returns true for ints, floats and numeric strings.
#[must_use]
pub fn is_numeric(value: &Value) -> bool {
    match value {
        Value::Int(_) | Value::Float(_) => true,
        Value::String(s) => is_numeric_str(s),
        _ => false,
    }
}

/// Numeric value of a numeric value, if it has one.
#[must_use]
pub fn numeric_value(value: &Value) -> Option<f64> {
    match value {
        Value::Int(i) => Some(*i as f64),
        Value::Float(f) => Some(*f),
        Value::String(s) if is_numeric_str(s) => trim_space(s).parse().ok(),
        _ => None,
    }
}

/// Integer filter: an optional sign followed by `0` or a digit string
/// without a leading zero, inside the `i64` range.
#[must_use]
pub fn parses_as_int(s: &str) -> bool {
    let trimmed = trim_space(s);
    let unsigned = trimmed
        .strip_prefix(['+', '-'])
        .unwrap_or(trimmed);

    if unsigned.is_empty() || !unsigned.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    if unsigned.len() > 1 && unsigned.starts_with('0') {
        return false;
    }

    trimmed.parse::<i64>().is_ok()
}

/// Float filter: a finite numeric string.
#[must_use]
pub fn parses_as_float(s: &str) -> bool {
    let trimmed = trim_space(s);
    is_number_literal(trimmed) && trimmed.parse::<f64>().is_ok_and(f64::is_finite)
}

/// Returns true if truncating `f` to an integer and back reproduces it.
#[must_use]
pub fn survives_int_round_trip(f: f64) -> bool {
    // `i64::MAX as f64` rounds up to 2^63, which does not fit.
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;

    f.is_finite() && f >= -LIMIT && f < LIMIT && (f as i64) as f64 == f
}
