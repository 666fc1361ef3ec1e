//! Report exporters: delimited text and a one-page document
//!
//! Both exporters render from the same `RenderedRow` list, produced once
//! per export from `REPORT_ROWS`.

mod rows;
mod artifact;
mod text;
mod document;
pub mod pdf;

pub use rows::{
    render_rows, report_title, Language, RenderedRow, ReportData, ReportOptions, ReportRow, RowKey,
    ValueKind, CSV_HEADER, REPORT_ROWS,
};
pub use artifact::ExportArtifact;
pub use text::{export_csv, CSV_FILENAME, CSV_MIME};
pub use document::{export_document, DocumentLayout, PDF_FILENAME, PDF_MIME};

use crate::error::ExportError;

/// Renders reports for one currency, language and page layout
pub struct ReportExporter<'a> {
    options: ReportOptions<'a>,
    layout: DocumentLayout,
}

impl<'a> ReportExporter<'a> {
    pub fn new(options: ReportOptions<'a>, layout: DocumentLayout) -> Self {
        Self { options, layout }
    }

    pub fn rows(&self, data: &ReportData) -> Vec<RenderedRow> {
        render_rows(data, &self.options)
    }

    /// `business-plan.csv`
    pub fn text(&self, data: &ReportData) -> Result<ExportArtifact, ExportError> {
        export_csv(&self.rows(data))
    }

    /// `business-plan.pdf`
    pub fn document(&self, data: &ReportData) -> ExportArtifact {
        export_document(&self.layout, report_title(self.options.language), &self.rows(data))
    }
}
