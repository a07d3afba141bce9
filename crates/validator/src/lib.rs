//! # datatype-validator
//!
//! Runtime data-type validation for dynamic values.
//!
//! Given a [`Value`](value::Value) and a type descriptor, decide whether the
//! value conforms, assert that it does, or validate a whole keyed value set
//! against a keyed rule set and collect every failure.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use datatype_validator::prelude::*;
//!
//! let strict = Validator::strict();
//! let fuzzy = Validator::fuzzy();
//!
//! assert!(!strict.is_int(&Value::from("1")));
//! assert!(fuzzy.is_int(&Value::from("1")));
//!
//! let values = array! { "name" => "Cheyenne", "age" => 22 };
//! let rules = array! { "name" => "string", "age" => "int", "email" => "?string" };
//! assert!(strict.validate(&values, &rules)?);
//! ```
//!
//! ## Descriptors
//!
//! - primitive keywords: `bool`, `int`, `float`, `string`, `array`,
//!   `object`, `callable`, `resource`
//! - fully-qualified class names (`chrono::DateTime`), matched exactly
//! - short class names (`DateTime`), matched ignoring case
//! - a leading `?` or `null|` makes a rule nullable
//! - a trailing `[]` means "array whose every element matches"
//!
//! ## Strategies
//!
//! - [`StrictTypes`](classifier::StrictTypes): exact runtime kind
//! - [`FuzzyTypes`](classifier::FuzzyTypes): accepts values that coerce
//!   cleanly, e.g. `"1"` as an int or `"true"` as a bool

pub mod classifier;
pub mod config;
pub mod descriptor;
pub mod error;
mod macros;
pub mod numeric;
pub mod object;
pub mod prelude;
pub mod validator;
pub mod value;

pub use classifier::{TypeClassifier, ValidationType};
pub use error::{TypeMismatch, ValidateError, ValidationFailed};
pub use validator::Validator;
