//! Mutable parameter model driven by field edits

use log::warn;
use serde::{Deserialize, Serialize};

use super::params::{parse_amount, ParamField, PlanParams};
use crate::error::PlanError;

/// What to do with an edit that is not a usable number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoercionPolicy {
    /// Store zero in place of unparseable input
    #[default]
    ZeroFill,
    /// Leave the field unchanged and return the parse error
    Reject,
    /// Zero-fill, and also replace negative values with zero
    ClampNonNegative,
}

/// Holds the current parameter set and applies edits to it
#[derive(Debug, Clone, Default)]
pub struct ParameterModel {
    params: PlanParams,
    policy: CoercionPolicy,
}

impl ParameterModel {
    pub fn new(params: PlanParams, policy: CoercionPolicy) -> Self {
        Self { params, policy }
    }

    pub fn policy(&self) -> CoercionPolicy {
        self.policy
    }

    /// Apply a raw edit to the named field
    ///
    /// Returns the value actually stored. Unknown field names are always
    /// an error; parse failures are handled per the coercion policy.
    pub fn set_field(&mut self, name: &str, raw: &str) -> Result<f64, PlanError> {
        let field: ParamField = name.parse()?;
        self.set(field, raw)
    }

    /// Apply a raw edit to a field
    pub fn set(&mut self, field: ParamField, raw: &str) -> Result<f64, PlanError> {
        let value = match parse_amount(raw) {
            Ok(v) => v,
            Err(source) => match self.policy {
                CoercionPolicy::Reject => {
                    return Err(PlanError::InvalidValue {
                        field: field.name().to_string(),
                        source,
                    });
                }
                CoercionPolicy::ZeroFill | CoercionPolicy::ClampNonNegative => {
                    warn!("{} edit {:?} is not a number ({}), storing 0", field, raw, source);
                    0.0
                }
            },
        };

        let value = if self.policy == CoercionPolicy::ClampNonNegative && value < 0.0 {
            0.0
        } else {
            value
        };

        self.params.set(field, value);
        Ok(value)
    }

    /// Replace every field at once (e.g. after loading a saved record)
    pub fn replace(&mut self, params: PlanParams) {
        self.params = params;
    }

    /// Copy of the current values
    pub fn snapshot(&self) -> PlanParams {
        self.params
    }

    pub fn get(&self, field: ParamField) -> f64 {
        self.params.get(field)
    }
}
