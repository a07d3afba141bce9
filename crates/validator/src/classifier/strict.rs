//! Strict classification: the value's runtime kind must match exactly.

use super::{TypeClassifier, ValidationType};
use crate::value::Value;

/// Exact-kind classifier. Nothing is coerced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct StrictTypes;

pub(super) fn is_bool(value: &Value) -> bool {
    matches!(value, Value::Bool(_))
}

pub(super) fn is_int(value: &Value) -> bool {
    matches!(value, Value::Int(_))
}

pub(super) fn is_float(value: &Value) -> bool {
    matches!(value, Value::Float(_))
}

pub(super) fn is_string(value: &Value) -> bool {
    matches!(value, Value::String(_))
}

pub(super) fn is_array(value: &Value) -> bool {
    matches!(value, Value::Array(_))
}

impl TypeClassifier for StrictTypes {
    fn validation_type(&self) -> ValidationType {
        ValidationType::Strict
    }

    fn is_bool(&self, value: &Value) -> bool {
        is_bool(value)
    }

    fn is_int(&self, value: &Value) -> bool {
        is_int(value)
    }

    fn is_float(&self, value: &Value) -> bool {
        is_float(value)
    }

    fn is_string(&self, value: &Value) -> bool {
        is_string(value)
    }

    fn is_array(&self, value: &Value) -> bool {
        is_array(value)
    }
}
