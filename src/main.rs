//! DriverPro business plan CLI
//!
//! Edit, save and export the driver's business plan from the command line

use anyhow::Context;
use clap::{Parser, Subcommand};
use driverpro_plan::{BusinessPlan, Currency, FileStore, Language, ParamField, PlanConfig};
use log::error;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "driverpro-plan", version, about = "Driver business plan projections")]
struct Cli {
    /// JSON configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Preferences file holding the saved plan (overrides config)
    #[arg(long)]
    store: Option<PathBuf>,

    /// Display currency: EUR, USD or GBP (overrides config)
    #[arg(long)]
    currency: Option<String>,

    /// Report language: pt, en or es (overrides config)
    #[arg(long)]
    language: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the current parameters and projection
    Show,
    /// Edit one field and save the plan
    Set {
        /// Field name, e.g. avgTripValue
        field: String,
        /// New value; non-numeric input follows the coercion policy
        value: String,
    },
    /// Write business-plan.csv
    ExportCsv {
        #[arg(long, default_value = ".")]
        out: PathBuf,
    },
    /// Write business-plan.pdf
    ExportPdf {
        #[arg(long, default_value = ".")]
        out: PathBuf,
    },
}

fn resolve_config(cli: &Cli) -> driverpro_plan::Result<PlanConfig> {
    let mut config = match &cli.config {
        Some(path) => PlanConfig::from_json_path(path)?,
        None => PlanConfig::default(),
    };

    if let Some(store) = &cli.store {
        config.store_path = store.clone();
    }
    if let Some(code) = &cli.currency {
        config.currency = code.parse::<Currency>()?;
    }
    if let Some(lang) = &cli.language {
        config.language = lang.parse::<Language>()?;
    }
    Ok(config)
}

fn print_plan(plan: &BusinessPlan<FileStore>) {
    println!("Business Plan ({})", if plan.restored() { "saved" } else { "defaults" });
    println!("{}", "-".repeat(44));
    for field in ParamField::ALL {
        println!("  {:<20} {:>20}", field.name(), plan.get(field));
    }

    let metrics = plan.metrics();
    println!();
    println!("Projection (EUR):");
    println!("  {:<24} {:>16.2}", "Gross monthly revenue", metrics.gross_monthly_revenue);
    println!("  {:<24} {:>16.2}", "Fuel cost per month", metrics.fuel_cost_per_month);
    println!("  {:<24} {:>16.2}", "Total monthly costs", metrics.total_monthly_costs);
    println!("  {:<24} {:>16.2}", "Net monthly income", metrics.net_monthly_income);
    println!("  {:<24} {:>16.2}", "Annual projection", metrics.annual_projection);
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = resolve_config(&cli).context("invalid configuration")?;
    let store = FileStore::new(&config.store_path);
    let mut plan = BusinessPlan::open(store, &config);

    match cli.command {
        Command::Show => print_plan(&plan),
        Command::Set { field, value } => {
            let stored = plan
                .set_field(&field, &value)
                .with_context(|| format!("could not set {}", field))?;
            println!("{} = {}", field, stored);

            // Saving is best effort; the edit still shows in this run
            if let Err(e) = plan.save() {
                error!("could not save business plan to {}: {}", config.store_path.display(), e);
            }
            print_plan(&plan);
        }
        Command::ExportCsv { out } => {
            let path = plan
                .export_text()
                .context("could not render CSV export")?
                .write_to(&out)
                .context("could not write CSV export")?;
            println!("CSV written to: {}", path.display());
        }
        Command::ExportPdf { out } => {
            let path = plan
                .export_document()
                .write_to(&out)
                .context("could not write PDF export")?;
            println!("PDF written to: {}", path.display());
        }
    }

    Ok(())
}
