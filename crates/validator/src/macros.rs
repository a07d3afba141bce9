//! Macros for building array values with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`array!`]: keyed array (`key => value` pairs), yields an [`Array`]
//! - [`list!`]: list with keys `0..n`, yields a [`Value`]
//!
//! Both accept anything convertible into a [`Value`].
//!
//! [`Array`]: crate::value::Array
//! [`Value`]: crate::value::Value

// ============================================================================
// ARRAY MACRO
// ============================================================================

/// Builds a keyed [`Array`](crate::value::Array).
///
/// ```rust,ignore
/// use datatype_validator::{array, list};
///
/// let rules = array! {
///     "name" => "string",
///     "lucky" => "int[]",
/// };
/// let values = array! {
///     "name" => "Cheyenne",
///     "lucky" => list![7, 2, 1],
///     7 => "int keys work too",
/// };
/// ```
#[macro_export]
macro_rules! array {
    () => {
        $crate::value::Array::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut array = $crate::value::Array::new();
        $(
            array.insert($key, $value);
        )+
        array
    }};
}

// ============================================================================
// LIST MACRO
// ============================================================================

/// Builds a list [`Value`](crate::value::Value) with keys `0..n`.
///
/// Elements may mix types:
///
/// ```rust,ignore
/// use datatype_validator::list;
///
/// let mixed = list![1, "x", 3.5, true];
/// ```
#[macro_export]
macro_rules! list {
    () => {
        $crate::value::Value::Array($crate::value::Array::new())
    };
    ($($value:expr),+ $(,)?) => {{
        let mut array = $crate::value::Array::new();
        $(
            array.push($value);
        )+
        $crate::value::Value::Array(array)
    }};
}
