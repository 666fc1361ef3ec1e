//! Delimited-text (CSV) export

use csv::{Terminator, WriterBuilder};
use log::debug;

use super::artifact::ExportArtifact;
use super::rows::{RenderedRow, CSV_HEADER};
use crate::error::ExportError;

pub const CSV_FILENAME: &str = "business-plan.csv";
pub const CSV_MIME: &str = "text/csv";

/// Header row followed by one `label,value` line per report row
///
/// Values that contain a comma or quote (e.g. `6088,40 €`) are quoted
/// by the writer.
pub fn export_csv(rows: &[RenderedRow]) -> Result<ExportArtifact, ExportError> {
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(CSV_HEADER)?;
    for row in rows {
        writer.write_record([row.label.as_str(), row.value.as_str()])?;
    }

    let bytes = writer.into_inner().map_err(|e| ExportError::Io(e.into_error()))?;
    debug!("rendered CSV export, {} rows", rows.len());

    Ok(ExportArtifact {
        filename: CSV_FILENAME,
        mime: CSV_MIME,
        bytes,
    })
}
