//! Prelude module for convenient imports.
//!
//! ```rust,ignore
//! use datatype_validator::prelude::*;
//!
//! let validator = Validator::fuzzy();
//! assert!(validator.is_int(&Value::from("42")));
//! ```

pub use crate::classifier::{FuzzyTypes, StrictTypes, TypeClassifier, ValidationType};
pub use crate::config::ValidatorConfig;
pub use crate::descriptor::{KnownType, TypeCheck};
pub use crate::error::{LogicError, Reasons, TypeMismatch, ValidateError, ValidationFailed};
pub use crate::validator::Validator;
pub use crate::value::{Array, Key, Object, Resource, Value};
pub use crate::{array, list};
