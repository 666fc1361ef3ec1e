//! DriverPro business plan - profitability projection engine for ride-hailing drivers
//!
//! This library provides:
//! - The editable parameter set and lenient field parsing
//! - Monthly/annual projection of revenue, costs and net income
//! - Persistence of the plan in a local key-value store
//! - CSV and single-page PDF reports with locale-aware currency formatting
//! - Batch and sensitivity scenario runs

pub mod error;
pub mod plan;
pub mod projection;
pub mod currency;
pub mod persistence;
pub mod export;
pub mod config;
pub mod session;
pub mod scenario;

// Re-export commonly used types
pub use error::{Error, Result};
pub use plan::{PlanParams, ParamField, ParameterModel, CoercionPolicy};
pub use projection::{project, ProjectionMetrics};
pub use currency::{Currency, CurrencyFormatter, LocaleFormatter, RateTable};
pub use persistence::{KeyValueStore, MemoryStore, FileStore, PlanRepository};
pub use export::{ExportArtifact, Language, ReportExporter};
pub use config::PlanConfig;
pub use session::BusinessPlan;
pub use scenario::{Scenario, ScenarioResult, ScenarioRunner};
