//! Minimal single-page PDF writer
//!
//! Enough of PDF 1.4 for text-only pages set in the standard Helvetica
//! faces: catalog, page tree, one page, two Type1 fonts with
//! WinAnsiEncoding, one uncompressed content stream and the xref table.

use std::fmt::Write as _;

/// Font face used for a text run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontFace {
    Regular,
    Bold,
}

impl FontFace {
    fn resource_name(self) -> &'static str {
        match self {
            FontFace::Regular => "F1",
            FontFace::Bold => "F2",
        }
    }
}

/// A line of text positioned from the top-left corner of the page
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub x: f64,
    /// Baseline, measured down from the top edge
    pub y: f64,
    pub font: FontFace,
    pub size: f64,
    pub text: String,
}

/// One page of positioned text, in points
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub width: f64,
    pub height: f64,
    pub runs: Vec<TextRun>,
}

impl Page {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            runs: Vec::new(),
        }
    }

    pub fn push(&mut self, run: TextRun) {
        self.runs.push(run);
    }
}

/// Serialize a page to PDF bytes
pub fn render_pdf(page: &Page) -> Vec<u8> {
    let content = content_stream(page);

    let objects = [
        "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
        "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
        format!(
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {} {}] \
             /Resources << /Font << /F1 4 0 R /F2 5 0 R >> >> /Contents 6 0 R >>",
            num(page.width),
            num(page.height)
        ),
        font_object("Helvetica"),
        font_object("Helvetica-Bold"),
        format!("<< /Length {} >>\nstream\n{}\nendstream", content.len(), content),
    ];

    let mut out: Vec<u8> = Vec::new();
    out.extend_from_slice(b"%PDF-1.4\n%\xE2\xE3\xCF\xD3\n");

    let mut offsets = Vec::with_capacity(objects.len());
    for (i, body) in objects.iter().enumerate() {
        offsets.push(out.len());
        out.extend_from_slice(format!("{} 0 obj\n{}\nendobj\n", i + 1, body).as_bytes());
    }

    let xref_at = out.len();
    let mut xref = format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1);
    for offset in &offsets {
        // Entries are exactly 20 bytes including the two-byte EOL
        let _ = writeln!(xref, "{:010} 00000 n ", offset);
    }
    let _ = write!(
        xref,
        "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
        objects.len() + 1,
        xref_at
    );
    out.extend_from_slice(xref.as_bytes());
    out
}

fn font_object(base_font: &str) -> String {
    format!("<< /Type /Font /Subtype /Type1 /BaseFont /{base_font} /Encoding /WinAnsiEncoding >>")
}

/// Text operators, one run per line, without a trailing newline
fn content_stream(page: &Page) -> String {
    let mut ops = String::new();
    for run in &page.runs {
        if !ops.is_empty() {
            ops.push('\n');
        }
        let _ = write!(
            ops,
            "BT /{} {} Tf {} {} Td ({}) Tj ET",
            run.font.resource_name(),
            num(run.size),
            num(run.x),
            num(page.height - run.y),
            escape_text(&run.text)
        );
    }
    ops
}

/// Compact decimal: at most two places, trailing zeros dropped
fn num(v: f64) -> String {
    let s = format!("{:.2}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s.is_empty() || s == "-" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

/// Encode text as a PDF literal string body in WinAnsi
///
/// Non-ASCII bytes are written as octal escapes so the content stream
/// stays 7-bit. Characters with no WinAnsi code become `?`.
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        let byte = win_ansi(ch).unwrap_or(b'?');
        match byte {
            b'(' | b')' | b'\\' => {
                out.push('\\');
                out.push(byte as char);
            }
            0x20..=0x7E => out.push(byte as char),
            _ => {
                let _ = write!(out, "\\{:03o}", byte);
            }
        }
    }
    out
}

fn win_ansi(ch: char) -> Option<u8> {
    let code = ch as u32;
    match code {
        0x20..=0x7E | 0xA0..=0xFF => Some(code as u8),
        _ => match ch {
            '€' => Some(0x80),
            '‚' => Some(0x82),
            '…' => Some(0x85),
            '‘' => Some(0x91),
            '’' => Some(0x92),
            '“' => Some(0x93),
            '”' => Some(0x94),
            '•' => Some(0x95),
            '–' => Some(0x96),
            '—' => Some(0x97),
            '\u{202F}' => Some(0xA0),
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_page() -> Page {
        let mut page = Page::new(595.28, 841.89);
        page.push(TextRun {
            x: 40.0,
            y: 48.0,
            font: FontFace::Bold,
            size: 18.0,
            text: "Title".into(),
        });
        page.push(TextRun {
            x: 40.0,
            y: 84.0,
            font: FontFace::Regular,
            size: 12.0,
            text: "A (b): 1".into(),
        });
        page
    }

    #[test]
    fn test_escape_text() {
        assert_eq!(escape_text("a(b)c\\"), "a\\(b\\)c\\\\");
        assert_eq!(escape_text("6088,40\u{a0}€"), "6088,40\\240\\200");
        assert_eq!(escape_text("£1"), "\\2431");
        assert_eq!(escape_text("ç"), "\\347");
        assert_eq!(escape_text("日"), "?");
    }

    #[test]
    fn test_number_formatting() {
        assert_eq!(num(40.0), "40");
        assert_eq!(num(841.89), "841.89");
        assert_eq!(num(793.9), "793.9");
        assert_eq!(num(0.0), "0");
    }

    #[test]
    fn test_content_uses_bottom_left_origin() {
        let content = content_stream(&sample_page());
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "BT /F2 18 Tf 40 793.89 Td (Title) Tj ET");
        assert_eq!(lines[1], "BT /F1 12 Tf 40 757.89 Td (A \\(b\\): 1) Tj ET");
    }

    #[test]
    fn test_document_structure() {
        let bytes = render_pdf(&sample_page());
        let text = String::from_utf8_lossy(&bytes);

        assert!(bytes.starts_with(b"%PDF-1.4\n"));
        assert!(text.ends_with("%%EOF\n"));
        assert!(text.contains("/BaseFont /Helvetica-Bold"));
        assert!(text.contains("/MediaBox [0 0 595.28 841.89]"));
        assert_eq!(text.matches("/Type /Page ").count(), 1);
    }

    #[test]
    fn test_stream_length_excludes_eol_before_endstream() {
        let bytes = render_pdf(&sample_page());
        let text = String::from_utf8_lossy(&bytes).into_owned();

        let length_at = text.find("/Length ").unwrap() + "/Length ".len();
        let length: usize = text[length_at..].split(' ').next().unwrap().parse().unwrap();

        let data_at = text.find("stream\n").unwrap() + "stream\n".len();
        let data = &text[data_at..data_at + length];
        assert!(data.ends_with("Tj ET"));
        assert!(text[data_at + length..].starts_with("\nendstream"));
        assert!(!content_stream(&sample_page()).ends_with('\n'));
    }

    #[test]
    fn test_xref_offsets_point_at_objects() {
        let bytes = render_pdf(&sample_page());
        let text = String::from_utf8_lossy(&bytes).into_owned();

        let startxref = text.rfind("startxref\n").unwrap();
        let xref_at: usize = text[startxref + 10..].lines().next().unwrap().parse().unwrap();

        let tail = std::str::from_utf8(&bytes[xref_at..]).unwrap();
        assert!(tail.starts_with("xref\n"));

        let entries: Vec<&str> = tail.lines().skip(3).take(6).collect();
        for (i, entry) in entries.iter().enumerate() {
            let offset: usize = entry[..10].parse().unwrap();
            let header = format!("{} 0 obj", i + 1);
            assert!(bytes[offset..].starts_with(header.as_bytes()), "object {}", i + 1);
        }
    }
}
