//! Type classification strategies.
//!
//! A [`TypeClassifier`] decides whether a [`Value`] belongs to one of the
//! [`KnownType`]s. Two strategies ship with the crate:
//!
//! - [`StrictTypes`]: exact runtime kind, no coercion;
//! - [`FuzzyTypes`]: coercion-tolerant, in the spirit of lenient form input.
//!
//! Only `bool`, `int`, `float`, `string` and `array` differ between
//! strategies. Object, callable and resource checks, class-name matching
//! and array-of-type checks are provided once as default methods.
//!
//! # Examples
//!
//! ```rust,ignore
//! use datatype_validator::classifier::{FuzzyTypes, StrictTypes, TypeClassifier};
//! use datatype_validator::value::Value;
//!
//! assert!(!StrictTypes.is_int(&Value::Float(1.0)));
//! assert!(FuzzyTypes.is_int(&Value::Float(1.0)));
//! ```

mod fuzzy;
mod strict;

pub use fuzzy::FuzzyTypes;
pub use strict::StrictTypes;

use crate::descriptor::{KnownType, TypeCheck};
use crate::object;
use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// CLASSIFIER TRAIT
// ============================================================================

/// Decides membership of a value in a primitive kind.
///
/// Implementations must be pure: the same value and descriptor always
/// classify the same way.
pub trait TypeClassifier {
    /// Identifier of this strategy.
    fn validation_type(&self) -> ValidationType;

    fn is_bool(&self, value: &Value) -> bool;

    fn is_int(&self, value: &Value) -> bool;

    fn is_float(&self, value: &Value) -> bool;

    fn is_string(&self, value: &Value) -> bool;

    fn is_array(&self, value: &Value) -> bool;

    /// Any object, including invocable ones.
    fn is_object(&self, value: &Value) -> bool {
        matches!(value, Value::Object(_))
    }

    /// Invocable objects.
    fn is_callable(&self, value: &Value) -> bool {
        matches!(value, Value::Object(o) if o.is_invocable())
    }

    fn is_resource(&self, value: &Value) -> bool {
        matches!(value, Value::Resource(_))
    }

    /// Matches an object by its short class name, ignoring case.
    fn is_fuzzy_object(&self, value: &Value, short_name: &str) -> bool {
        object::matches_short_name(value, short_name)
    }

    /// Matches an object by its exact fully-qualified class name.
    fn is_specific_object(&self, value: &Value, full_name: &str) -> bool {
        object::matches_full_name(value, full_name)
    }

    /// Runs the classifier for one known type.
    fn is_known(&self, value: &Value, known: KnownType) -> bool {
        match known {
            KnownType::Bool => self.is_bool(value),
            KnownType::Int => self.is_int(value),
            KnownType::Float => self.is_float(value),
            KnownType::String => self.is_string(value),
            KnownType::Array => self.is_array(value),
            KnownType::Object => self.is_object(value),
            KnownType::Callable => self.is_callable(value),
            KnownType::Resource => self.is_resource(value),
        }
    }

    /// Runs an already resolved check.
    fn check(&self, value: &Value, check: TypeCheck<'_>) -> bool {
        match check {
            TypeCheck::Known(known) => self.is_known(value, known),
            TypeCheck::SpecificObject(name) => self.is_specific_object(value, name),
            TypeCheck::FuzzyObject(name) => self.is_fuzzy_object(value, name),
        }
    }

    /// Resolves `descriptor` and classifies `value` against it.
    ///
    /// The descriptor must already be free of nullable and array markers.
    fn is_type(&self, value: &Value, descriptor: &str) -> bool {
        let check = TypeCheck::resolve(descriptor);
        let matched = self.check(value, check);
        tracing::trace!(descriptor, kind = value.kind_name(), ?check, matched, "type check");
        matched
    }

    /// Returns true if `values` is array-like and every element is of
    /// `descriptor`. An empty array always qualifies.
    fn is_array_of_something(&self, values: &Value, descriptor: &str) -> bool {
        if !self.is_array(values) {
            return false;
        }

        values
            .elements()
            .is_some_and(|mut elements| elements.all(|(_, v)| self.is_type(v, descriptor)))
    }
}

impl<T: TypeClassifier + ?Sized> TypeClassifier for &T {
    fn validation_type(&self) -> ValidationType {
        (**self).validation_type()
    }

    fn is_bool(&self, value: &Value) -> bool {
        (**self).is_bool(value)
    }

    fn is_int(&self, value: &Value) -> bool {
        (**self).is_int(value)
    }

    fn is_float(&self, value: &Value) -> bool {
        (**self).is_float(value)
    }

    fn is_string(&self, value: &Value) -> bool {
        (**self).is_string(value)
    }

    fn is_array(&self, value: &Value) -> bool {
        (**self).is_array(value)
    }

    fn is_object(&self, value: &Value) -> bool {
        (**self).is_object(value)
    }

    fn is_callable(&self, value: &Value) -> bool {
        (**self).is_callable(value)
    }

    fn is_resource(&self, value: &Value) -> bool {
        (**self).is_resource(value)
    }

    fn is_fuzzy_object(&self, value: &Value, short_name: &str) -> bool {
        (**self).is_fuzzy_object(value, short_name)
    }

    fn is_specific_object(&self, value: &Value, full_name: &str) -> bool {
        (**self).is_specific_object(value, full_name)
    }
}

// ============================================================================
// VALIDATION TYPE
// ============================================================================

/// Identifier of a classification strategy.
///
/// Also a classifier in its own right: it delegates to [`StrictTypes`] or
/// [`FuzzyTypes`], which lets a strategy chosen at runtime (for example from
/// configuration) drive a single `Validator` type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationType {
    /// Exact runtime kind only.
    #[default]
    Strict,
    /// Coercion-tolerant.
    Fuzzy,
}

impl ValidationType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ValidationType::Strict => "strict",
            ValidationType::Fuzzy => "fuzzy",
        }
    }

    fn classifier(self) -> &'static dyn TypeClassifier {
        match self {
            ValidationType::Strict => &StrictTypes,
            ValidationType::Fuzzy => &FuzzyTypes,
        }
    }
}

impl fmt::Display for ValidationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown strategy name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown validation type '{0}', expected 'strict' or 'fuzzy'")]
pub struct UnknownValidationType(pub String);

impl FromStr for ValidationType {
    type Err = UnknownValidationType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(ValidationType::Strict),
            "fuzzy" => Ok(ValidationType::Fuzzy),
            _ => Err(UnknownValidationType(s.to_owned())),
        }
    }
}

impl TypeClassifier for ValidationType {
    fn validation_type(&self) -> ValidationType {
        *self
    }

    fn is_bool(&self, value: &Value) -> bool {
        self.classifier().is_bool(value)
    }

    fn is_int(&self, value: &Value) -> bool {
        self.classifier().is_int(value)
    }

    fn is_float(&self, value: &Value) -> bool {
        self.classifier().is_float(value)
    }

    fn is_string(&self, value: &Value) -> bool {
        self.classifier().is_string(value)
    }

    fn is_array(&self, value: &Value) -> bool {
        self.classifier().is_array(value)
    }
}
