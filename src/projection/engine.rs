//! Monthly and annual profitability from a parameter set

use serde::{Deserialize, Serialize};

use crate::plan::PlanParams;

/// Months in the annual projection
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Derived figures for one parameter set
///
/// Always recomputed from the inputs; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionMetrics {
    /// trip value x trips/day x days/month
    pub gross_monthly_revenue: f64,

    /// fuel cost/km x km/trip x trips/day x days/month
    pub fuel_cost_per_month: f64,

    /// fuel plus the fixed monthly costs
    pub total_monthly_costs: f64,

    /// revenue minus costs, negative when the month runs at a loss
    pub net_monthly_income: f64,

    /// net monthly income x 12
    pub annual_projection: f64,
}

impl ProjectionMetrics {
    /// True when the month covers its costs
    pub fn is_profitable(&self) -> bool {
        self.net_monthly_income > 0.0
    }
}

/// Run the projection for a parameter set
///
/// Pure multiply/add arithmetic: no division, no error cases, and the
/// same input always yields bit-identical output.
pub fn project(params: &PlanParams) -> ProjectionMetrics {
    let gross_monthly_revenue =
        params.avg_trip_value * params.trips_per_day * params.work_days_per_month;
    let fuel_cost_per_month = params.fuel_cost_per_km
        * params.avg_km_per_trip
        * params.trips_per_day
        * params.work_days_per_month;
    let total_monthly_costs = fuel_cost_per_month
        + params.maintenance_cost
        + params.insurance_cost
        + params.other_costs;
    let net_monthly_income = gross_monthly_revenue - total_monthly_costs;

    ProjectionMetrics {
        gross_monthly_revenue,
        fuel_cost_per_month,
        total_monthly_costs,
        net_monthly_income,
        annual_projection: net_monthly_income * MONTHS_PER_YEAR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_reference_scenario() {
        let params = PlanParams {
            avg_trip_value: 15.50,
            trips_per_day: 20.0,
            work_days_per_month: 22.0,
            fuel_cost_per_km: 0.08,
            avg_km_per_trip: 8.0,
            maintenance_cost: 200.0,
            insurance_cost: 100.0,
            other_costs: 150.0,
        };
        let m = project(&params);

        assert_abs_diff_eq!(m.gross_monthly_revenue, 6820.00, epsilon = EPS);
        assert_abs_diff_eq!(m.fuel_cost_per_month, 281.60, epsilon = EPS);
        assert_abs_diff_eq!(m.total_monthly_costs, 731.60, epsilon = EPS);
        assert_abs_diff_eq!(m.net_monthly_income, 6088.40, epsilon = EPS);
        assert_abs_diff_eq!(m.annual_projection, 73060.80, epsilon = EPS);
        assert!(m.is_profitable());
    }

    #[test]
    fn test_defaults_match_reference_scenario() {
        let m = project(&PlanParams::default());
        assert_abs_diff_eq!(m.net_monthly_income, 6088.40, epsilon = EPS);
    }

    #[test]
    fn test_all_zero_inputs() {
        let m = project(&PlanParams::zeroed());
        assert_eq!(m.gross_monthly_revenue, 0.0);
        assert_eq!(m.fuel_cost_per_month, 0.0);
        assert_eq!(m.total_monthly_costs, 0.0);
        assert_eq!(m.net_monthly_income, 0.0);
        assert_eq!(m.annual_projection, 0.0);
        assert!(!m.is_profitable());
    }

    #[test]
    fn test_negative_other_costs_act_as_rebate() {
        let base = PlanParams::default();
        let rebate = base.with(crate::plan::ParamField::OtherCosts, -100.0);

        let before = project(&base);
        let after = project(&rebate);

        // 150 of costs replaced by a 100 rebate
        assert_abs_diff_eq!(
            after.net_monthly_income - before.net_monthly_income,
            250.0,
            epsilon = EPS
        );
        assert_abs_diff_eq!(after.total_monthly_costs, 481.60, epsilon = EPS);
    }

    #[test]
    fn test_loss_making_month() {
        let params = PlanParams {
            trips_per_day: 1.0,
            work_days_per_month: 1.0,
            ..PlanParams::default()
        };
        let m = project(&params);
        assert!(m.net_monthly_income < 0.0);
        assert!(m.annual_projection < 0.0);
        assert!(!m.is_profitable());
    }

    fn non_negative_params() -> impl Strategy<Value = PlanParams> {
        (
            0.0..500.0f64,
            0u32..60,
            0u32..32,
            0.0..2.0f64,
            0.0..100.0f64,
            0.0..5000.0f64,
            0.0..5000.0f64,
            0.0..5000.0f64,
        )
            .prop_map(|(trip, trips, days, fuel, km, maint, ins, other)| PlanParams {
                avg_trip_value: trip,
                trips_per_day: trips as f64,
                work_days_per_month: days as f64,
                fuel_cost_per_km: fuel,
                avg_km_per_trip: km,
                maintenance_cost: maint,
                insurance_cost: ins,
                other_costs: other,
            })
    }

    proptest! {
        #![proptest_config(proptest::test_runner::Config::with_cases(64))]

        #[test]
        fn prop_net_and_annual_identities(params in non_negative_params()) {
            let m = project(&params);
            let net = m.gross_monthly_revenue - m.total_monthly_costs;
            prop_assert!((m.net_monthly_income - net).abs() <= EPS);
            prop_assert!((m.annual_projection - m.net_monthly_income * 12.0).abs() <= EPS);
        }

        #[test]
        fn prop_projection_is_deterministic(params in non_negative_params()) {
            let first = project(&params);
            let second = project(&params);
            prop_assert_eq!(first, second);
        }
    }
}
