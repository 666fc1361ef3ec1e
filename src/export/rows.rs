//! Ordered report rows shared by every exporter
//!
//! Both exporters walk `REPORT_ROWS` and format values through the same
//! call, so the figures in the CSV and in the document cannot disagree.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::currency::{Currency, CurrencyFormatter};
use crate::error::ConfigError;
use crate::plan::PlanParams;
use crate::projection::{project, ProjectionMetrics};

/// Label language for exported reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Pt,
    #[default]
    En,
    Es,
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Language::Pt => "pt",
            Language::En => "en",
            Language::Es => "es",
        })
    }
}

impl FromStr for Language {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pt" => Ok(Language::Pt),
            "en" => Ok(Language::En),
            "es" => Ok(Language::Es),
            _ => Err(ConfigError::UnknownLanguage(s.to_string())),
        }
    }
}

/// Header row of the delimited export, same in every language
pub const CSV_HEADER: [&str; 2] = ["Metric", "Value"];

/// Report title
pub fn report_title(language: Language) -> &'static str {
    match language {
        Language::Pt => "DriverPro Analytics - Plano de Negócio",
        Language::En => "DriverPro Analytics - Business Plan",
        Language::Es => "DriverPro Analytics - Plan de Negocio",
    }
}

/// How a row value is displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Plain number, never converted (trips, days)
    Count,
    /// Base-currency amount, passed to the currency formatter
    Money,
}

/// Identifies one line of the report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowKey {
    TripsPerDay,
    WorkDaysPerMonth,
    GrossRevenue,
    FuelCost,
    TotalCosts,
    NetIncome,
    AnnualProjection,
}

impl RowKey {
    pub fn label(self, language: Language) -> &'static str {
        use Language::*;
        use RowKey::*;
        match (self, language) {
            (TripsPerDay, En) => "Trips per Day",
            (TripsPerDay, Pt) => "Viagens por Dia",
            (TripsPerDay, Es) => "Viajes por Día",
            (WorkDaysPerMonth, En) => "Work Days per Month",
            (WorkDaysPerMonth, Pt) => "Dias Trabalhados/Mês",
            (WorkDaysPerMonth, Es) => "Días Trabajados/Mes",
            (GrossRevenue, En) => "Gross Monthly Revenue",
            (GrossRevenue, Pt) => "Receita Bruta Mensal",
            (GrossRevenue, Es) => "Ingresos Brutos Mensuales",
            (FuelCost, En) => "Fuel Cost per Month",
            (FuelCost, Pt) => "Custo Combustível/Mês",
            (FuelCost, Es) => "Costo de Combustible/Mes",
            (TotalCosts, En) => "Total Monthly Costs",
            (TotalCosts, Pt) => "Custos Totais Mensais",
            (TotalCosts, Es) => "Costos Totales Mensuales",
            (NetIncome, En) => "Net Monthly Income",
            (NetIncome, Pt) => "Rendimento Líquido Mensal",
            (NetIncome, Es) => "Ingreso Neto Mensual",
            (AnnualProjection, En) => "Annual Projection",
            (AnnualProjection, Pt) => "Projeção Anual",
            (AnnualProjection, Es) => "Proyección Anual",
        }
    }
}

/// Inputs and derived metrics captured together for one export
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReportData {
    pub params: PlanParams,
    pub metrics: ProjectionMetrics,
}

impl ReportData {
    pub fn from_params(params: PlanParams) -> Self {
        Self {
            params,
            metrics: project(&params),
        }
    }
}

/// One entry of the report table
#[derive(Clone, Copy)]
pub struct ReportRow {
    pub key: RowKey,
    pub kind: ValueKind,
    value: fn(&ReportData) -> f64,
}

impl ReportRow {
    pub fn value(&self, data: &ReportData) -> f64 {
        (self.value)(data)
    }
}

impl fmt::Debug for ReportRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReportRow")
            .field("key", &self.key)
            .field("kind", &self.kind)
            .finish()
    }
}

fn trips_per_day(d: &ReportData) -> f64 {
    d.params.trips_per_day
}

fn work_days_per_month(d: &ReportData) -> f64 {
    d.params.work_days_per_month
}

fn gross_revenue(d: &ReportData) -> f64 {
    d.metrics.gross_monthly_revenue
}

fn fuel_cost(d: &ReportData) -> f64 {
    d.metrics.fuel_cost_per_month
}

fn total_costs(d: &ReportData) -> f64 {
    d.metrics.total_monthly_costs
}

fn net_income(d: &ReportData) -> f64 {
    d.metrics.net_monthly_income
}

fn annual_projection(d: &ReportData) -> f64 {
    d.metrics.annual_projection
}

/// Fixed report order
pub const REPORT_ROWS: [ReportRow; 7] = [
    ReportRow {
        key: RowKey::TripsPerDay,
        kind: ValueKind::Count,
        value: trips_per_day,
    },
    ReportRow {
        key: RowKey::WorkDaysPerMonth,
        kind: ValueKind::Count,
        value: work_days_per_month,
    },
    ReportRow {
        key: RowKey::GrossRevenue,
        kind: ValueKind::Money,
        value: gross_revenue,
    },
    ReportRow {
        key: RowKey::FuelCost,
        kind: ValueKind::Money,
        value: fuel_cost,
    },
    ReportRow {
        key: RowKey::TotalCosts,
        kind: ValueKind::Money,
        value: total_costs,
    },
    ReportRow {
        key: RowKey::NetIncome,
        kind: ValueKind::Money,
        value: net_income,
    },
    ReportRow {
        key: RowKey::AnnualProjection,
        kind: ValueKind::Money,
        value: annual_projection,
    },
];

/// A report line ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedRow {
    pub key: RowKey,
    pub label: String,
    pub value: String,
}

/// Display settings for a report
pub struct ReportOptions<'a> {
    pub currency: Currency,
    pub language: Language,
    pub formatter: &'a dyn CurrencyFormatter,
}

/// Label and format every report row
pub fn render_rows(data: &ReportData, options: &ReportOptions<'_>) -> Vec<RenderedRow> {
    REPORT_ROWS
        .iter()
        .map(|row| {
            let raw = row.value(data);
            let value = match row.kind {
                // "-0" parses to negative zero
                ValueKind::Count if raw == 0.0 => "0".to_string(),
                ValueKind::Count => format!("{}", raw),
                ValueKind::Money => options.formatter.format(raw, options.currency),
            };
            RenderedRow {
                key: row.key,
                label: row.key.label(options.language).to_string(),
                value,
            }
        })
        .collect()
}
