//! Fuzzy classification: accepts values that coerce cleanly.

use super::{TypeClassifier, ValidationType, strict};
use crate::numeric;
use crate::value::Value;

/// Coercion-tolerant classifier.
///
/// - `bool`: bools, null, arrays, `0`/`1`/`"0"`/`"1"`/`"true"`/`"false"`,
///   and any numeric value `>= 0`. Objects and resources never qualify.
/// - `int`: numeric values with no fractional part.
/// - `float`: floats, ints, and strings that parse as a float.
/// - `string`: strings only.
/// - `array`: arrays and objects with index access.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FuzzyTypes;

/// Identity membership in the lenient boolean spellings.
fn is_loose_bool(value: &Value) -> bool {
    match value {
        Value::Bool(_) => true,
        Value::Int(i) => matches!(*i, 0 | 1),
        Value::String(s) => matches!(s.as_str(), "0" | "1" | "true" | "false"),
        _ => false,
    }
}

impl TypeClassifier for FuzzyTypes {
    fn validation_type(&self) -> ValidationType {
        ValidationType::Fuzzy
    }

    fn is_bool(&self, value: &Value) -> bool {
        match value {
            Value::Object(_) | Value::Resource(_) => false,
            Value::Bool(_) | Value::Null | Value::Array(_) => true,
            other => {
                is_loose_bool(other) || numeric::numeric_value(other).is_some_and(|n| n >= 0.0)
            }
        }
    }

    fn is_int(&self, value: &Value) -> bool {
        match value {
            Value::Int(_) => true,
            Value::Float(f) => numeric::survives_int_round_trip(*f),
            Value::String(s) if numeric::is_numeric_str(s) => {
                numeric::parses_as_int(s)
                    || numeric::numeric_value(value).is_some_and(numeric::survives_int_round_trip)
            }
            _ => false,
        }
    }

    fn is_float(&self, value: &Value) -> bool {
        match value {
            Value::Float(_) | Value::Int(_) => true,
            Value::String(s) => numeric::parses_as_float(s),
            _ => false,
        }
    }

    fn is_string(&self, value: &Value) -> bool {
        strict::is_string(value)
    }

    fn is_array(&self, value: &Value) -> bool {
        match value {
            Value::Array(_) => true,
            Value::Object(o) => o.has_array_access(),
            _ => false,
        }
    }
}
