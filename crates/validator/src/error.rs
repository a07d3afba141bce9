//! Error types for failed type checks and bulk validation.
//!
//! - [`TypeMismatch`]: one value failed one check (raised by the assertions);
//! - [`ValidationFailed`]: one or more fields failed in [`Validator::validate`];
//! - [`LogicError`]: a rule was malformed, which is a caller bug and is
//!   never aggregated.
//!
//! [`Validator::validate`]: crate::Validator::validate

use crate::value::Key;
use indexmap::IndexMap;
use std::borrow::Cow;
use std::fmt;

/// Ordered map from field key to the reason it failed.
pub type Reasons = IndexMap<Key, String>;

// ============================================================================
// TYPE MISMATCH
// ============================================================================

/// A single value did not satisfy a single descriptor.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct TypeMismatch {
    message: Cow<'static, str>,
    expected: Cow<'static, str>,
}

impl TypeMismatch {
    /// Stable code for programmatic handling.
    pub const CODE: &'static str = "type_mismatch";

    pub fn new(
        expected: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            message: message.into(),
            expected: expected.into(),
        }
    }

    /// Builds the `'<value>' is not a(n) <descriptor>.` message.
    pub(crate) fn not_a(display_value: &str, descriptor: &str) -> Self {
        let article = crate::descriptor::article(descriptor);
        Self::new(
            descriptor.to_owned(),
            format!("'{display_value}' is not {article} {descriptor}."),
        )
    }

    /// Builds the `Index '<key>' is not a valid '<descriptor>'.` message.
    pub(crate) fn bad_index(key: &Key, descriptor: &str) -> Self {
        Self::new(
            descriptor.to_owned(),
            format!("Index '{key}' is not a valid '{descriptor}'."),
        )
    }

    #[must_use]
    pub fn code(&self) -> &'static str {
        Self::CODE
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The descriptor the value was checked against.
    #[must_use]
    pub fn expected(&self) -> &str {
        &self.expected
    }
}

// ============================================================================
// VALIDATION FAILED
// ============================================================================

/// One or more fields failed bulk validation.
///
/// The message is derived from the number of reasons:
/// `There was 1 validation error.` or `There were N validation errors.`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFailed {
    reasons: Reasons,
}

impl ValidationFailed {
    pub const CODE: &'static str = "validation_failed";

    pub fn new(reasons: Reasons) -> Self {
        Self { reasons }
    }

    #[must_use]
    pub fn code(&self) -> &'static str {
        Self::CODE
    }

    /// Every failed field and why, in rule order.
    #[must_use]
    pub fn reasons(&self) -> &Reasons {
        &self.reasons
    }

    #[must_use]
    pub fn into_reasons(self) -> Reasons {
        self.reasons
    }

    /// The reason recorded for `key`, if that field failed.
    #[must_use]
    pub fn reason(&self, key: impl Into<Key>) -> Option<&str> {
        self.reasons.get(&key.into()).map(String::as_str)
    }

    #[must_use]
    pub fn error_count(&self) -> usize {
        self.reasons.len()
    }

    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Converts the error to a JSON structure.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        let reasons: serde_json::Map<String, serde_json::Value> = self
            .reasons
            .iter()
            .map(|(k, v)| (k.to_string(), serde_json::Value::String(v.clone())))
            .collect();

        serde_json::json!({
            "code": self.code(),
            "message": self.message(),
            "reasons": reasons,
        })
    }
}

impl fmt::Display for ValidationFailed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reasons.len() {
            1 => f.write_str("There was 1 validation error."),
            n => write!(f, "There were {n} validation errors."),
        }
    }
}

impl std::error::Error for ValidationFailed {}

// ============================================================================
// LOGIC ERROR
// ============================================================================

/// A rule's descriptor was not a string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("The data type for {key} is not a string.")]
pub struct LogicError {
    key: Key,
}

impl LogicError {
    pub const CODE: &'static str = "logic_error";

    pub fn non_string_rule(key: Key) -> Self {
        Self { key }
    }

    #[must_use]
    pub fn code(&self) -> &'static str {
        Self::CODE
    }

    /// Key of the offending rule.
    #[must_use]
    pub fn key(&self) -> &Key {
        &self.key
    }
}

// ============================================================================
// VALIDATE ERROR
// ============================================================================

/// Everything [`Validator::validate`](crate::Validator::validate) can fail with.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidateError {
    #[error(transparent)]
    Invalid(#[from] ValidationFailed),
    #[error(transparent)]
    Logic(#[from] LogicError),
}

impl ValidateError {
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            ValidateError::Invalid(e) => e.code(),
            ValidateError::Logic(e) => e.code(),
        }
    }

    /// The aggregated field failures, if this is not a logic error.
    #[must_use]
    pub fn reasons(&self) -> Option<&Reasons> {
        match self {
            ValidateError::Invalid(e) => Some(e.reasons()),
            ValidateError::Logic(_) => None,
        }
    }

    #[must_use]
    pub fn is_logic_error(&self) -> bool {
        matches!(self, ValidateError::Logic(_))
    }
}
