//! The public validation engine.
//!
//! [`Validator`] wraps one [`TypeClassifier`] and exposes three layers:
//!
//! - **predicates** (`is_*`) that answer yes or no;
//! - **assertions** (`assert_is_*`) that fail with a [`TypeMismatch`];
//! - **bulk validation** ([`Validator::validate`]) that checks a keyed value
//!   set against a keyed rule set and reports every failure at once.
//!
//! # Examples
//!
//! ```rust,ignore
//! use datatype_validator::{Validator, array, list};
//!
//! let validator = Validator::strict();
//! let values = array! { "name" => "Cheyenne", "age" => 22, "lucky" => list![7, 2, 1] };
//! let rules = array! { "name" => "string", "age" => "int", "lucky" => "int[]", "email" => "?string" };
//!
//! assert!(validator.validate(&values, &rules)?);
//! ```

use crate::classifier::{FuzzyTypes, StrictTypes, TypeClassifier, ValidationType};
use crate::descriptor::{self, KnownType, TypeCheck};
use crate::error::{LogicError, Reasons, TypeMismatch, ValidateError, ValidationFailed};
use crate::value::{Array, Value};

/// Checks values against type descriptors with one classification strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Validator<C = ValidationType> {
    classifier: C,
}

impl Validator<StrictTypes> {
    /// A validator using exact-kind checks.
    #[must_use]
    pub fn strict() -> Self {
        Self::with_classifier(StrictTypes)
    }
}

impl Validator<FuzzyTypes> {
    /// A validator using coercion-tolerant checks.
    #[must_use]
    pub fn fuzzy() -> Self {
        Self::with_classifier(FuzzyTypes)
    }
}

impl Validator<ValidationType> {
    /// A validator whose strategy is chosen at runtime.
    #[must_use]
    pub fn new(validation_type: ValidationType) -> Self {
        Self::with_classifier(validation_type)
    }
}

impl<C: TypeClassifier> Validator<C> {
    pub fn with_classifier(classifier: C) -> Self {
        Self { classifier }
    }

    /// Identifier of the active strategy.
    pub fn validation_type(&self) -> ValidationType {
        self.classifier.validation_type()
    }

    pub fn classifier(&self) -> &C {
        &self.classifier
    }

    // ========================================================================
    // PREDICATES
    // ========================================================================

    pub fn is_bool(&self, value: &Value) -> bool {
        self.classifier.is_bool(value)
    }

    pub fn is_int(&self, value: &Value) -> bool {
        self.classifier.is_int(value)
    }

    pub fn is_float(&self, value: &Value) -> bool {
        self.classifier.is_float(value)
    }

    pub fn is_string(&self, value: &Value) -> bool {
        self.classifier.is_string(value)
    }

    pub fn is_array(&self, value: &Value) -> bool {
        self.classifier.is_array(value)
    }

    /// Returns true if `values` is array-like and every element matches
    /// `descriptor`. Empty arrays always match.
    pub fn is_array_of_something(&self, values: &Value, descriptor: &str) -> bool {
        self.classifier.is_array_of_something(values, descriptor)
    }

    pub fn is_object(&self, value: &Value) -> bool {
        self.classifier.is_object(value)
    }

    pub fn is_callable(&self, value: &Value) -> bool {
        self.classifier.is_callable(value)
    }

    pub fn is_resource(&self, value: &Value) -> bool {
        self.classifier.is_resource(value)
    }

    /// Matches an object by short class name, ignoring case.
    pub fn is_fuzzy_object(&self, value: &Value, short_name: &str) -> bool {
        self.classifier.is_fuzzy_object(value, short_name)
    }

    /// Matches an object by exact fully-qualified class name.
    pub fn is_specific_object(&self, value: &Value, full_name: &str) -> bool {
        self.classifier.is_specific_object(value, full_name)
    }

    /// Resolves `descriptor` and checks `value` against it.
    pub fn is_type(&self, value: &Value, descriptor: &str) -> bool {
        self.classifier.is_type(value, descriptor)
    }

    // ========================================================================
    // ASSERTIONS
    // ========================================================================

    pub fn assert_is_bool(&self, value: &Value) -> Result<(), TypeMismatch> {
        self.assert_is_known(value, KnownType::Bool)
    }

    pub fn assert_is_int(&self, value: &Value) -> Result<(), TypeMismatch> {
        self.assert_is_known(value, KnownType::Int)
    }

    pub fn assert_is_float(&self, value: &Value) -> Result<(), TypeMismatch> {
        self.assert_is_known(value, KnownType::Float)
    }

    pub fn assert_is_string(&self, value: &Value) -> Result<(), TypeMismatch> {
        self.assert_is_known(value, KnownType::String)
    }

    pub fn assert_is_array(&self, value: &Value) -> Result<(), TypeMismatch> {
        self.assert_is_known(value, KnownType::Array)
    }

    pub fn assert_is_object(&self, value: &Value) -> Result<(), TypeMismatch> {
        self.assert_is_known(value, KnownType::Object)
    }

    pub fn assert_is_callable(&self, value: &Value) -> Result<(), TypeMismatch> {
        self.assert_is_known(value, KnownType::Callable)
    }

    pub fn assert_is_resource(&self, value: &Value) -> Result<(), TypeMismatch> {
        self.assert_is_known(value, KnownType::Resource)
    }

    /// Asserts that `value` is an object of `class_name`.
    ///
    /// A name containing `::` must match the fully-qualified class exactly;
    /// any other name matches the short class name, ignoring case.
    pub fn assert_is_specific_object(
        &self,
        value: &Value,
        class_name: &str,
    ) -> Result<(), TypeMismatch> {
        self.assert_is_type(value, class_name)
    }

    fn assert_is_known(&self, value: &Value, known: KnownType) -> Result<(), TypeMismatch> {
        self.assert_is_type(value, known.as_str())
    }

    /// Asserts that `value` matches `descriptor`.
    ///
    /// On failure the message reads `'<value>' is not a(n) <descriptor>.`
    ///
    /// ```rust,ignore
    /// let err = Validator::strict().assert_is_type(&Value::from("22"), "int").unwrap_err();
    /// assert_eq!(err.message(), "'22' is not an int.");
    /// ```
    pub fn assert_is_type(&self, value: &Value, descriptor: &str) -> Result<(), TypeMismatch> {
        if self.classifier.check(value, TypeCheck::resolve(descriptor)) {
            return Ok(());
        }

        Err(TypeMismatch::not_a(&value.display_value(), descriptor))
    }

    /// Asserts that `values` is array-like and every element matches
    /// `descriptor`. A trailing `[]` on the descriptor is ignored.
    ///
    /// Stops at the first bad element and names its key.
    pub fn assert_is_array_of_something(
        &self,
        values: &Value,
        descriptor: &str,
    ) -> Result<(), TypeMismatch> {
        self.assert_is_array(values)?;

        let element = descriptor::strip_array_marker(descriptor);
        let check = TypeCheck::resolve(element);
        for (key, value) in values.elements().into_iter().flatten() {
            if !self.classifier.check(value, check) {
                return Err(TypeMismatch::bad_index(key, element));
            }
        }

        Ok(())
    }

    // ========================================================================
    // BULK VALIDATION
    // ========================================================================

    /// Validates `values` against `rules`, collecting every failure.
    ///
    /// Each rule maps a field key to a descriptor string. Rules are checked
    /// in order; missing fields count as null and fields without a rule are
    /// ignored. A rule whose descriptor is not a string aborts immediately
    /// with [`ValidateError::Logic`].
    ///
    /// Returns `Ok(true)` when every field passes, otherwise
    /// [`ValidateError::Invalid`] carrying one reason per failed field.
    pub fn validate(&self, values: &Array, rules: &Array) -> Result<bool, ValidateError> {
        let mut reasons = Reasons::new();

        for (key, rule) in rules {
            let Value::String(descriptor) = rule else {
                return Err(LogicError::non_string_rule(key.clone()).into());
            };
            let value = values.get(key).unwrap_or(&Value::Null);

            if descriptor::is_array_descriptor(descriptor) {
                if let Err(e) = self.validate_array_of_something(value, descriptor) {
                    reasons.insert(
                        key.clone(),
                        format!("{key} is not a valid array of {descriptor}: {}", e.message()),
                    );
                }
                continue;
            }

            if self.validate_value(value, descriptor).is_err() {
                let (_, expected) = descriptor::strip_nullable(descriptor);
                reasons.insert(key.clone(), format!("{key} is not a valid {expected}"));
            }
        }

        tracing::debug!(
            validation_type = %self.validation_type(),
            rules = rules.len(),
            failures = reasons.len(),
            "bulk validation finished"
        );

        if reasons.is_empty() {
            Ok(true)
        } else {
            Err(ValidationFailed::new(reasons).into())
        }
    }

    fn validate_value(&self, value: &Value, descriptor: &str) -> Result<(), TypeMismatch> {
        let (nullable, expected) = descriptor::strip_nullable(descriptor);
        if nullable && value.is_null() {
            return Ok(());
        }

        if KnownType::from_keyword(expected).is_some() {
            self.assert_is_type(value, expected)
        } else {
            self.assert_is_specific_object(value, expected)
        }
    }

    fn validate_array_of_something(
        &self,
        values: &Value,
        descriptor: &str,
    ) -> Result<(), TypeMismatch> {
        let (nullable, expected) = descriptor::strip_nullable(descriptor);
        if nullable && values.is_null() {
            return Ok(());
        }

        self.assert_is_array_of_something(values, descriptor::element_descriptor(expected))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{Key, Object, Resource};
    use crate::{array, list};
    use pretty_assertions::assert_eq;

    #[test]
    fn reports_its_strategy() {
        assert_eq!(Validator::strict().validation_type(), ValidationType::Strict);
        assert_eq!(Validator::fuzzy().validation_type(), ValidationType::Fuzzy);
        assert_eq!(
            Validator::new(ValidationType::Fuzzy).validation_type(),
            ValidationType::Fuzzy
        );
    }

    #[test]
    fn validators_are_shareable() {
        fn assert_send_sync<T: Send + Sync + Clone>() {}
        assert_send_sync::<Validator>();
        assert_send_sync::<Validator<StrictTypes>>();
        assert_send_sync::<Validator<FuzzyTypes>>();
    }

    #[test]
    fn assertion_messages_pick_the_article() {
        let strict = Validator::strict();
        let err = strict.assert_is_int(&Value::from("22")).unwrap_err();
        assert_eq!(err.message(), "'22' is not an int.");

        let err = strict.assert_is_string(&Value::Float(1.1)).unwrap_err();
        assert_eq!(err.message(), "'1.1' is not a string.");

        let err = strict.assert_is_array(&Value::Int(5)).unwrap_err();
        assert_eq!(err.message(), "'5' is not an array.");
    }

    #[test]
    fn non_scalar_values_display_as_json() {
        let strict = Validator::strict();
        let err = strict.assert_is_string(&Value::list([1, 2, 3])).unwrap_err();
        assert_eq!(err.message(), "'[1,2,3]' is not a string.");

        let err = strict.assert_is_int(&Value::Null).unwrap_err();
        assert_eq!(err.message(), "'null' is not an int.");

        let err = strict.assert_is_bool(&Value::from(Resource::stream(1))).unwrap_err();
        assert_eq!(err.message(), "'' is not a bool.");
    }

    #[test]
    fn specific_object_accepts_short_and_full_names() {
        let strict = Validator::strict();
        let v = Value::from(Object::named("datatype::Validator"));
        assert!(strict.assert_is_specific_object(&v, "Validator").is_ok());
        assert!(strict.assert_is_specific_object(&v, "datatype::Validator").is_ok());
        assert!(strict.assert_is_specific_object(&v, "doesntexist").is_err());
    }

    #[test]
    fn array_of_something_fails_fast_on_first_bad_index() {
        let strict = Validator::strict();
        let values = Value::list([Value::Int(1), Value::from("x"), Value::from("y")]);
        let err = strict.assert_is_array_of_something(&values, "int[]").unwrap_err();
        assert_eq!(err.message(), "Index '1' is not a valid 'int'.");
    }

    #[test]
    fn array_of_something_names_string_keys() {
        let strict = Validator::strict();
        let values = Value::from(array! { "a" => 1, "b" => "two" });
        let err = strict.assert_is_array_of_something(&values, "int").unwrap_err();
        assert_eq!(err.message(), "Index 'b' is not a valid 'int'.");
    }

    #[test]
    fn array_of_something_requires_an_array() {
        let err = Validator::fuzzy()
            .assert_is_array_of_something(&Value::Int(3), "int")
            .unwrap_err();
        assert_eq!(err.message(), "'3' is not an array.");
    }

    #[test]
    fn validate_accepts_matching_values() {
        let values = array! { "name" => "Cheyenne", "age" => 22 };
        let rules = array! { "name" => "string", "age" => "int" };
        assert_eq!(Validator::strict().validate(&values, &rules), Ok(true));
    }

    #[test]
    fn validate_reports_one_error() {
        let values = array! { "age" => "22" };
        let rules = array! { "age" => "int" };
        let err = Validator::strict().validate(&values, &rules).unwrap_err();
        assert_eq!(err.to_string(), "There was 1 validation error.");
        assert_eq!(
            err.reasons().and_then(|r| r.get(&Key::from("age"))).map(String::as_str),
            Some("age is not a valid int")
        );
    }

    #[test]
    fn validate_keeps_array_detail() {
        let values = array! { "ints" => list![1, "x", 3] };
        let rules = array! { "ints" => "int[]" };
        let err = Validator::strict().validate(&values, &rules).unwrap_err();
        assert_eq!(
            err.reasons().and_then(|r| r.get(&Key::from("ints"))).map(String::as_str),
            Some("ints is not a valid array of int[]: Index '1' is not a valid 'int'.")
        );
    }

    #[test]
    fn validate_strips_nullable_marker_from_reason() {
        let values = array! { "age" => "old" };
        let rules = array! { "age" => "?int" };
        let err = Validator::strict().validate(&values, &rules).unwrap_err();
        assert_eq!(
            err.reasons().and_then(|r| r.get(&Key::from("age"))).map(String::as_str),
            Some("age is not a valid int")
        );
    }

    #[test]
    fn missing_keys_are_null() {
        let rules = array! { "age" => "?int", "tags" => "?string[]" };
        assert_eq!(Validator::strict().validate(&Array::new(), &rules), Ok(true));

        let rules = array! { "age" => "int" };
        assert!(Validator::strict().validate(&Array::new(), &rules).is_err());
    }

    #[test]
    fn non_string_rules_are_logic_errors() {
        let values = array! { "asdf" => true };
        let rules = array! { "asdf" => 13 };
        let err = Validator::fuzzy().validate(&values, &rules).unwrap_err();
        assert!(err.is_logic_error());
        assert_eq!(err.to_string(), "The data type for asdf is not a string.");
    }
}
