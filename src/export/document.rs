//! Paginated-document (PDF) export

use log::debug;
use serde::{Deserialize, Serialize};

use super::artifact::ExportArtifact;
use super::pdf::{render_pdf, FontFace, Page, TextRun};
use super::rows::RenderedRow;

pub const PDF_FILENAME: &str = "business-plan.pdf";
pub const PDF_MIME: &str = "application/pdf";

/// Fixed page geometry, in points from the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentLayout {
    pub page_width: f64,
    pub page_height: f64,
    pub margin_left: f64,
    pub title_y: f64,
    pub first_line_y: f64,
    pub line_spacing: f64,
    pub title_size: f64,
    pub body_size: f64,
}

impl Default for DocumentLayout {
    /// A4 portrait
    fn default() -> Self {
        Self {
            page_width: 595.28,
            page_height: 841.89,
            margin_left: 40.0,
            title_y: 48.0,
            first_line_y: 84.0,
            line_spacing: 18.0,
            title_size: 18.0,
            body_size: 12.0,
        }
    }
}

impl DocumentLayout {
    /// Bold title, then one `label: value` line per row
    pub fn layout(&self, title: &str, rows: &[RenderedRow]) -> Page {
        let mut page = Page::new(self.page_width, self.page_height);

        page.push(TextRun {
            x: self.margin_left,
            y: self.title_y,
            font: FontFace::Bold,
            size: self.title_size,
            text: title.to_string(),
        });

        for (i, row) in rows.iter().enumerate() {
            page.push(TextRun {
                x: self.margin_left,
                y: self.first_line_y + self.line_spacing * i as f64,
                font: FontFace::Regular,
                size: self.body_size,
                text: format!("{}: {}", row.label, row.value),
            });
        }

        page
    }
}

/// Lay out and serialize the report as a one-page PDF
pub fn export_document(
    layout: &DocumentLayout,
    title: &str,
    rows: &[RenderedRow],
) -> ExportArtifact {
    let page = layout.layout(title, rows);
    let bytes = render_pdf(&page);
    debug!("rendered PDF export, {} lines, {} bytes", page.runs.len(), bytes.len());

    ExportArtifact {
        filename: PDF_FILENAME,
        mime: PDF_MIME,
        bytes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::rows::RowKey;

    fn rows(n: usize) -> Vec<RenderedRow> {
        (0..n)
            .map(|i| RenderedRow {
                key: RowKey::NetIncome,
                label: format!("Line {}", i),
                value: format!("{}", i * 10),
            })
            .collect()
    }

    #[test]
    fn test_layout_positions() {
        let page = DocumentLayout::default().layout("Plan", &rows(7));
        assert_eq!(page.runs.len(), 8);

        let title = &page.runs[0];
        assert_eq!((title.x, title.y, title.size, title.font), (40.0, 48.0, 18.0, FontFace::Bold));

        let ys: Vec<f64> = page.runs[1..].iter().map(|r| r.y).collect();
        assert_eq!(ys, vec![84.0, 102.0, 120.0, 138.0, 156.0, 174.0, 192.0]);
        assert!(page.runs[1..].iter().all(|r| r.font == FontFace::Regular && r.size == 12.0));
        assert_eq!(page.runs[3].text, "Line 2: 20");
    }

    #[test]
    fn test_custom_layout() {
        let layout = DocumentLayout {
            line_spacing: 20.0,
            first_line_y: 100.0,
            ..Default::default()
        };
        let page = layout.layout("Plan", &rows(2));
        assert_eq!(page.runs[2].y, 120.0);
    }

    #[test]
    fn test_export_document_artifact() {
        let artifact = export_document(&DocumentLayout::default(), "Plan", &rows(1));
        assert_eq!(artifact.filename, "business-plan.pdf");
        assert_eq!(artifact.mime, "application/pdf");
        assert!(artifact.bytes.starts_with(b"%PDF-"));
        assert!(String::from_utf8_lossy(&artifact.bytes).contains("(Line 0: 0) Tj"));
    }
}
