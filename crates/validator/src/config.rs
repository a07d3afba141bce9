//! Validator configuration.
//!
//! ```rust,ignore
//! use datatype_validator::config::ValidatorConfig;
//!
//! let config = ValidatorConfig::from_json(r#"{ "validation_type": "fuzzy" }"#)?;
//! let validator = config.build();
//! ```

use crate::classifier::ValidationType;
use crate::validator::Validator;
use serde::{Deserialize, Serialize};

/// Settings for building a [`Validator`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidatorConfig {
    /// Classification strategy. Defaults to strict.
    pub validation_type: ValidationType,
}

impl ValidatorConfig {
    #[must_use]
    pub fn new(validation_type: ValidationType) -> Self {
        Self { validation_type }
    }

    /// Parses a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Builds a validator with the configured strategy.
    #[must_use]
    pub fn build(self) -> Validator<ValidationType> {
        tracing::debug!(validation_type = %self.validation_type, "building validator");
        Validator::new(self.validation_type)
    }
}
