//! Type descriptors and their resolution to a checking routine.
//!
//! A descriptor is a string such as `int`, `?string`, `null|float`,
//! `int[]`, `Carbon` or `chrono::DateTime`. Marker handling lives here
//! so that every caller strips markers the same way:
//!
//! 1. a nullable marker (`?` or `null|`) is checked and stripped first;
//! 2. an array marker (`[]`) is checked afterwards;
//! 3. what remains resolves to a [`TypeCheck`] via [`TypeCheck::resolve`].

use crate::value::NAMESPACE_SEPARATOR;
use std::fmt;
use std::str::FromStr;

// ============================================================================
// KNOWN TYPES
// ============================================================================

/// The primitive kinds every classifier understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KnownType {
    Bool,
    Int,
    Float,
    String,
    Array,
    Object,
    Callable,
    Resource,
}

impl KnownType {
    /// Every known type, in keyword order.
    pub const ALL: [KnownType; 8] = [
        KnownType::Bool,
        KnownType::Int,
        KnownType::Float,
        KnownType::String,
        KnownType::Array,
        KnownType::Object,
        KnownType::Callable,
        KnownType::Resource,
    ];

    /// The descriptor keyword for this type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            KnownType::Bool => "bool",
            KnownType::Int => "int",
            KnownType::Float => "float",
            KnownType::String => "string",
            KnownType::Array => "array",
            KnownType::Object => "object",
            KnownType::Callable => "callable",
            KnownType::Resource => "resource",
        }
    }

    /// Looks up a keyword. Matching is exact and case-sensitive.
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == keyword)
    }
}

impl fmt::Display for KnownType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not a known type keyword.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{0}' is not a known type")]
pub struct UnknownType(pub String);

impl FromStr for KnownType {
    type Err = UnknownType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_keyword(s).ok_or_else(|| UnknownType(s.to_owned()))
    }
}

// ============================================================================
// RESOLUTION
// ============================================================================

/// The routine a descriptor resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeCheck<'a> {
    /// One of the primitive classifiers.
    Known(KnownType),
    /// Exact, case-sensitive match on the fully-qualified class name.
    SpecificObject(&'a str),
    /// Case-insensitive match on the short class name.
    FuzzyObject(&'a str),
}

impl<'a> TypeCheck<'a> {
    /// Resolves a marker-free descriptor.
    ///
    /// Known keywords always win, even over a class of the same name.
    /// Otherwise a descriptor containing `::` is a fully-qualified class
    /// and anything else is a short class name.
    #[must_use]
    pub fn resolve(descriptor: &'a str) -> Self {
        if let Some(known) = KnownType::from_keyword(descriptor) {
            TypeCheck::Known(known)
        } else if descriptor.contains(NAMESPACE_SEPARATOR) {
            TypeCheck::SpecificObject(descriptor)
        } else {
            TypeCheck::FuzzyObject(descriptor)
        }
    }
}

// ============================================================================
// MARKERS
// ============================================================================

/// Marker appended to a descriptor to mean "array of".
pub const ARRAY_MARKER: &str = "[]";

const NULLABLE_SHORT: &str = "?";
const NULLABLE_UNION: &str = "null|";

/// Splits off a nullable marker.
///
/// Returns whether the descriptor was nullable and the remainder.
///
/// ```rust,ignore
/// assert_eq!(strip_nullable("?int"), (true, "int"));
/// assert_eq!(strip_nullable("null|float"), (true, "float"));
/// assert_eq!(strip_nullable("string"), (false, "string"));
/// ```
#[must_use]
pub fn strip_nullable(descriptor: &str) -> (bool, &str) {
    if let Some(rest) = descriptor.strip_prefix(NULLABLE_SHORT) {
        (true, rest)
    } else if let Some(rest) = descriptor.strip_prefix(NULLABLE_UNION) {
        (true, rest)
    } else {
        (false, descriptor)
    }
}

/// Returns true if the descriptor carries an array marker anywhere.
#[must_use]
pub fn is_array_descriptor(descriptor: &str) -> bool {
    descriptor.contains(ARRAY_MARKER)
}

/// Removes one trailing array marker, if present.
#[must_use]
pub fn strip_array_marker(descriptor: &str) -> &str {
    descriptor.strip_suffix(ARRAY_MARKER).unwrap_or(descriptor)
}

/// Drops the last two characters of an array descriptor.
///
/// Array rules are expected to end in `[]`; the cut is positional so a
/// marker elsewhere in the string still yields a two-character shorter
/// element descriptor.
#[must_use]
pub(crate) fn element_descriptor(descriptor: &str) -> &str {
    let cut = descriptor
        .char_indices()
        .rev()
        .nth(1)
        .map_or(0, |(i, _)| i);
    &descriptor[..cut]
}

/// Chooses "a" or "an" from the first character of the descriptor.
#[must_use]
pub fn article(descriptor: &str) -> &'static str {
    match descriptor.chars().next() {
        Some('a' | 'e' | 'i' | 'o' | 'u') => "an",
        _ => "a",
    }
}
