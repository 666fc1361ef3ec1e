//! Runtime configuration
//!
//! Every field has a default, so an empty JSON object (or no file at
//! all) is a valid configuration.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::currency::{Currency, RateTable};
use crate::error::ConfigError;
use crate::export::{DocumentLayout, Language};
use crate::persistence::DEFAULT_STORE_FILE;
use crate::plan::CoercionPolicy;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanConfig {
    /// Display currency for exported amounts
    #[serde(default)]
    pub currency: Currency,

    /// Label language for exports
    #[serde(default)]
    pub language: Language,

    /// Preferences file holding the saved plan
    #[serde(default = "default_store_path")]
    pub store_path: PathBuf,

    /// Units per EUR; replace to use fresher rates
    #[serde(default)]
    pub rates: RateTable,

    /// What to do with non-numeric field edits
    #[serde(default)]
    pub coercion: CoercionPolicy,

    #[serde(default)]
    pub document: DocumentLayout,
}

fn default_store_path() -> PathBuf {
    PathBuf::from(DEFAULT_STORE_FILE)
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            currency: Currency::default(),
            language: Language::default(),
            store_path: default_store_path(),
            rates: RateTable::default(),
            coercion: CoercionPolicy::default(),
            document: DocumentLayout::default(),
        }
    }
}

impl PlanConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load from a JSON file
    pub fn from_json_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
}
