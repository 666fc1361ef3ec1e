//! Saved business plan record under its own fixed key

use log::{debug, warn};

use super::store::KeyValueStore;
use crate::error::StoreError;
use crate::plan::{ParamField, PlanParams};

/// Key holding the business plan record; UI state lives under other keys
pub const PLAN_KEY: &str = "driverpro-business-plan";

/// Loads and saves the parameter set through a key-value store
#[derive(Debug, Clone)]
pub struct PlanRepository<S> {
    store: S,
}

impl<S: KeyValueStore> PlanRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    /// Serialize the parameter set and overwrite the saved record
    ///
    /// Fails with `StoreError::NonFinite` naming the first field that is
    /// not finite; the saved record is then left as it was.
    pub fn save(&mut self, params: &PlanParams) -> Result<(), StoreError> {
        if let Some(field) = ParamField::ALL.iter().find(|f| !params.get(**f).is_finite()) {
            return Err(StoreError::NonFinite(field.name()));
        }
        let json = serde_json::to_string(params)?;
        self.store.set(PLAN_KEY, &json)?;
        debug!("saved business plan ({} bytes)", json.len());
        Ok(())
    }

    /// Saved parameter set, or `None` when there is nothing usable
    ///
    /// Absence, an unreadable store and a corrupt record all yield `None`
    /// so the caller can fall back to defaults.
    pub fn load(&self) -> Option<PlanParams> {
        let raw = match self.store.get(PLAN_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("no saved business plan");
                return None;
            }
            Err(e) => {
                warn!("could not read saved business plan: {}", e);
                return None;
            }
        };

        match serde_json::from_str::<PlanParams>(&raw) {
            Ok(params) if params.is_finite() => Some(params),
            Ok(_) => {
                warn!("saved business plan has non-finite values, ignoring it");
                None
            }
            Err(e) => {
                warn!("saved business plan is corrupt, ignoring it: {}", e);
                None
            }
        }
    }
}
