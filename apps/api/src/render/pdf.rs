//! PDF serialization for the export control.
//!
//! The response text is wrapped to the fixed export measure, escaped, and fed
//! to printpdf's HTML renderer, which handles page breaks. Deliberately plain:
//! no complex CSS or layout the renderer might not support.

use std::collections::BTreeMap;

use anyhow::{anyhow, Result};
use printpdf::{GeneratePdfOptions, PdfDocument};
use tracing::warn;

use crate::render::wrap::{wrap_to_measure, EXPORT_MEASURE_CHARS};

/// Fixed name of the exported file, set in the Content-Disposition header.
pub const EXPORT_FILE_NAME: &str = "Legalhub.pdf";

/// Serializes the given response text into PDF bytes.
///
/// Stateless: every export re-derives its content from the text it is given.
pub fn render_pdf(text: &str) -> Result<Vec<u8>> {
    let html = export_html(text);
    let mut warnings = Vec::new();

    let doc = PdfDocument::from_html(
        &html,
        &BTreeMap::new(), // images
        &BTreeMap::new(), // fonts
        &GeneratePdfOptions::default(),
        &mut warnings,
    )
    .map_err(|e| anyhow!("Failed to render PDF: {e}"))?;

    if !warnings.is_empty() {
        warn!("PDF generation produced {} warnings", warnings.len());
    }

    Ok(doc.save(&Default::default(), &mut warnings))
}

/// Builds the minimal HTML document the PDF renderer consumes: one paragraph
/// per wrapped line, blank lines preserved as empty paragraphs.
fn export_html(text: &str) -> String {
    let mut html = String::new();
    html.push_str(
        "<!DOCTYPE html><html><head><style>body { font-family: sans-serif; }</style></head><body>",
    );

    for line in wrap_to_measure(text, EXPORT_MEASURE_CHARS) {
        if line.is_empty() {
            html.push_str("<p>&nbsp;</p>");
        } else {
            html.push_str(&format!("<p>{}</p>", escape_html(&line)));
        }
    }

    html.push_str("</body></html>");
    html
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
