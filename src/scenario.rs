//! Scenario runner for batch and sensitivity projections
//!
//! Each scenario is an independent parameter set, so batches are
//! projected in parallel. Results come back in input order.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::plan::{ParamField, PlanParams};
use crate::projection::{project, ProjectionMetrics};

/// A named parameter set to project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub params: PlanParams,
}

impl Scenario {
    pub fn new(name: impl Into<String>, params: PlanParams) -> Self {
        Self {
            name: name.into(),
            params,
        }
    }
}

/// Projection of one scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub name: String,
    pub params: PlanParams,
    pub metrics: ProjectionMetrics,
}

/// Projects scenarios derived from a base parameter set
///
/// # Example
/// ```
/// use driverpro_plan::{ParamField, PlanParams, ScenarioRunner};
///
/// let runner = ScenarioRunner::new(PlanParams::default());
/// let results = runner.sweep(ParamField::AvgTripValue, &[12.0, 15.5, 18.0]);
/// assert!(results[2].metrics.net_monthly_income > results[0].metrics.net_monthly_income);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    base: PlanParams,
}

impl ScenarioRunner {
    pub fn new(base: PlanParams) -> Self {
        Self { base }
    }

    pub fn base(&self) -> &PlanParams {
        &self.base
    }

    /// Mutable access to the base set for customization
    pub fn base_mut(&mut self) -> &mut PlanParams {
        &mut self.base
    }

    /// Project the base parameter set
    pub fn run(&self) -> ProjectionMetrics {
        project(&self.base)
    }

    /// Project many scenarios in parallel
    pub fn run_batch(&self, scenarios: &[Scenario]) -> Vec<ScenarioResult> {
        scenarios
            .par_iter()
            .map(|s| ScenarioResult {
                name: s.name.clone(),
                params: s.params,
                metrics: project(&s.params),
            })
            .collect()
    }

    /// Vary one field of the base set across `values`
    pub fn sweep(&self, field: ParamField, values: &[f64]) -> Vec<ScenarioResult> {
        let scenarios: Vec<Scenario> = values
            .iter()
            .map(|&v| Scenario::new(format!("{}={}", field, v), self.base.with(field, v)))
            .collect();
        self.run_batch(&scenarios)
    }

    /// Evenly spaced values from `start` to `end` inclusive
    pub fn steps(start: f64, end: f64, count: usize) -> Vec<f64> {
        match count {
            0 => Vec::new(),
            1 => vec![start],
            _ => {
                let step = (end - start) / (count - 1) as f64;
                (0..count).map(|i| start + step * i as f64).collect()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_run_batch_keeps_order() {
        let runner = ScenarioRunner::default();
        let scenarios: Vec<Scenario> = (0..50)
            .map(|i| {
                let params = PlanParams::default().with(ParamField::TripsPerDay, i as f64);
                Scenario::new(format!("s{}", i), params)
            })
            .collect();

        let results = runner.run_batch(&scenarios);
        assert_eq!(results.len(), 50);
        for (i, result) in results.iter().enumerate() {
            assert_eq!(result.name, format!("s{}", i));
            assert_eq!(result.metrics, project(&scenarios[i].params));
        }
    }

    #[test]
    fn test_sweep_trip_value() {
        let runner = ScenarioRunner::new(PlanParams::default());
        let results = runner.sweep(ParamField::AvgTripValue, &[10.0, 15.5, 20.0]);

        assert_eq!(results[1].name, "avgTripValue=15.5");
        assert_abs_diff_eq!(results[1].metrics.net_monthly_income, 6088.40, epsilon = 1e-9);
        // 440 trips a month, so each extra unit of trip value adds 440
        assert_abs_diff_eq!(
            results[2].metrics.net_monthly_income - results[1].metrics.net_monthly_income,
            4.5 * 440.0,
            epsilon = 1e-9
        );
        assert_eq!(runner.run(), project(runner.base()));
    }

    #[test]
    fn test_steps() {
        assert_eq!(ScenarioRunner::steps(0.0, 10.0, 0), Vec::<f64>::new());
        assert_eq!(ScenarioRunner::steps(5.0, 10.0, 1), vec![5.0]);
        assert_eq!(ScenarioRunner::steps(0.0, 10.0, 3), vec![0.0, 5.0, 10.0]);
    }
}
