//! Class-name matching for object values.

use crate::value::Value;

/// Returns true if the value is an object whose short class name equals
/// `name`, ignoring case.
#[must_use]
pub fn matches_short_name(value: &Value, name: &str) -> bool {
    value
        .as_object()
        .is_some_and(|obj| obj.short_name().to_lowercase() == name.to_lowercase())
}

/// Returns true if the value is an object whose fully-qualified class name
/// is exactly `full_name`.
#[must_use]
pub fn matches_full_name(value: &Value, full_name: &str) -> bool {
    value
        .as_object()
        .is_some_and(|obj| obj.class_name() == full_name)
}
