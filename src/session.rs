//! Business plan facade used by the UI layer
//!
//! Owns the parameter model and the saved record; metrics are derived on
//! every read, exports are rendered from a fresh snapshot.

use log::info;

use crate::config::PlanConfig;
use crate::currency::{Currency, CurrencyFormatter, LocaleFormatter};
use crate::error::{ExportError, PlanError, StoreError};
use crate::export::{
    DocumentLayout, ExportArtifact, Language, ReportData, ReportExporter, ReportOptions,
};
use crate::persistence::{KeyValueStore, PlanRepository};
use crate::plan::{ParamField, ParameterModel, PlanParams};
use crate::projection::{project, ProjectionMetrics};

pub struct BusinessPlan<S> {
    model: ParameterModel,
    repository: PlanRepository<S>,
    formatter: Box<dyn CurrencyFormatter>,
    currency: Currency,
    language: Language,
    layout: DocumentLayout,
    restored: bool,
}

impl<S: KeyValueStore> BusinessPlan<S> {
    /// Restore the saved plan from `store`, or start from defaults
    pub fn open(store: S, config: &PlanConfig) -> Self {
        let repository = PlanRepository::new(store);
        let saved = repository.load();
        let restored = saved.is_some();
        if restored {
            info!("restored saved business plan");
        } else {
            info!("no usable saved business plan, using defaults");
        }

        Self {
            model: ParameterModel::new(saved.unwrap_or_default(), config.coercion),
            repository,
            formatter: Box::new(LocaleFormatter::new(config.rates)),
            currency: config.currency,
            language: config.language,
            layout: config.document,
            restored,
        }
    }

    /// Swap the currency formatter (e.g. one backed by live rates)
    pub fn with_formatter<F: CurrencyFormatter + 'static>(mut self, formatter: F) -> Self {
        self.formatter = Box::new(formatter);
        self
    }

    /// Whether the current values came from a saved record
    pub fn restored(&self) -> bool {
        self.restored
    }

    pub fn params(&self) -> PlanParams {
        self.model.snapshot()
    }

    pub fn get(&self, field: ParamField) -> f64 {
        self.model.get(field)
    }

    /// Derived metrics for the current values
    pub fn metrics(&self) -> ProjectionMetrics {
        project(&self.model.snapshot())
    }

    /// Apply a raw edit from the UI
    pub fn set_field(&mut self, name: &str, raw: &str) -> Result<f64, PlanError> {
        self.model.set_field(name, raw)
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn set_currency(&mut self, currency: Currency) {
        self.currency = currency;
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    /// Persist the current values, replacing any saved record
    pub fn save(&mut self) -> Result<(), StoreError> {
        let snapshot = self.model.snapshot();
        self.repository.save(&snapshot)
    }

    pub fn report_data(&self) -> ReportData {
        ReportData::from_params(self.model.snapshot())
    }

    fn exporter(&self) -> ReportExporter<'_> {
        let options = ReportOptions {
            currency: self.currency,
            language: self.language,
            formatter: &*self.formatter,
        };
        ReportExporter::new(options, self.layout)
    }

    /// `business-plan.csv` for the current values
    pub fn export_text(&self) -> Result<ExportArtifact, ExportError> {
        self.exporter().text(&self.report_data())
    }

    /// `business-plan.pdf` for the current values
    pub fn export_document(&self) -> ExportArtifact {
        self.exporter().document(&self.report_data())
    }

    pub fn into_store(self) -> S {
        self.repository.into_inner()
    }
}
