//! Sensitivity sweep of one business plan field
//!
//! Usage: cargo run --bin sensitivity -- --field avgTripValue --from 10 --to 25 --steps 16

use anyhow::Context;
use clap::Parser;
use driverpro_plan::{BusinessPlan, FileStore, ParamField, PlanConfig, ScenarioRunner};
use std::time::Instant;

#[derive(Debug, Parser)]
#[command(name = "sensitivity", about = "Project the business plan across a range of one input")]
struct Args {
    /// Field to vary
    #[arg(long, default_value = "avgTripValue")]
    field: String,

    #[arg(long)]
    from: f64,

    #[arg(long)]
    to: f64,

    #[arg(long, default_value_t = 11)]
    steps: usize,

    /// Preferences file with the saved plan used as the base
    #[arg(long)]
    store: Option<std::path::PathBuf>,

    #[arg(long, default_value = "sensitivity.csv")]
    out: std::path::PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();
    let field: ParamField = args.field.parse()?;

    let mut config = PlanConfig::default();
    if let Some(store) = args.store {
        config.store_path = store;
    }
    let base = BusinessPlan::open(FileStore::new(&config.store_path), &config).params();

    let start = Instant::now();
    let runner = ScenarioRunner::new(base);
    let values = ScenarioRunner::steps(args.from, args.to, args.steps);
    let results = runner.sweep(field, &values);
    println!("Projected {} scenarios in {:?}", results.len(), start.elapsed());

    let mut writer = csv::Writer::from_path(&args.out)
        .with_context(|| format!("could not create {}", args.out.display()))?;
    writer.write_record([
        field.name(),
        "GrossMonthlyRevenue",
        "FuelCostPerMonth",
        "TotalMonthlyCosts",
        "NetMonthlyIncome",
        "AnnualProjection",
    ])?;
    for result in &results {
        let m = &result.metrics;
        writer.write_record([
            format!("{}", result.params.get(field)),
            format!("{:.2}", m.gross_monthly_revenue),
            format!("{:.2}", m.fuel_cost_per_month),
            format!("{:.2}", m.total_monthly_costs),
            format!("{:.2}", m.net_monthly_income),
            format!("{:.2}", m.annual_projection),
        ])?;
    }
    writer.flush()?;

    if let Some(breakeven) = results.iter().find(|r| r.metrics.is_profitable()) {
        println!("First profitable {}: {}", field, breakeven.params.get(field));
    } else {
        println!("No profitable scenario in range");
    }
    println!("Results written to: {}", args.out.display());
    Ok(())
}
