//! Projection calculator: parameter set in, derived metrics out

mod engine;

pub use engine::{project, ProjectionMetrics, MONTHS_PER_YEAR};
