//! Business plan inputs: the parameter set and the model that edits it

mod params;
mod model;

pub use params::{PlanParams, ParamField, parse_amount};
pub use model::{ParameterModel, CoercionPolicy};
