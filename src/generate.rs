//! Generation pipeline
//!
//! Load → compose → render → check → write. Every failure comes back as an
//! [`Error`](crate::error::Error); nothing is written to the output path
//! unless the engine produced a PDF with at least one page.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;

use crate::compose::{compose, QuoteFields};
use crate::date;
use crate::error::{Error, Result};
use crate::pdf::{count_pages, Renderer};
use crate::quote::{load_html, QuoteMetadata};

/// Options for generating a quote PDF from files
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// HTML document to render
    pub html_path: PathBuf,
    /// Where the PDF is written
    pub output_path: PathBuf,
    /// Quote metadata, a JSON object
    pub metadata_json: String,
}

/// A rendered quote
#[derive(Debug, Clone)]
pub struct RenderedQuote {
    pub pdf: Vec<u8>,
    pub page_count: usize,
    pub fields: QuoteFields,
}

/// A quote PDF written to disk
#[derive(Debug, Clone)]
pub struct GeneratedPdf {
    pub output_path: PathBuf,
    pub page_count: usize,
    pub fields: QuoteFields,
}

/// Render one quote in memory
pub fn render_quote(
    html: &str,
    metadata: &QuoteMetadata,
    generated_at: &NaiveDateTime,
    renderer: &dyn Renderer,
) -> Result<RenderedQuote> {
    let composed = compose(html, metadata, generated_at);
    log::debug!(
        "Composed quote {} (valid until {})",
        composed.fields.numero,
        composed.fields.validade
    );

    let pdf = renderer.render(&composed.html, &composed.stylesheet)?;
    let page_count = count_pages(&pdf)?;

    Ok(RenderedQuote {
        pdf,
        page_count,
        fields: composed.fields,
    })
}

/// Read the inputs named in `options`, render, and write the PDF
///
/// Dates are taken from the local clock at the time of the call.
pub fn generate_pdf_file(
    options: &GenerateOptions,
    renderer: &dyn Renderer,
) -> Result<GeneratedPdf> {
    let html = load_html(&options.html_path)?;
    let metadata = QuoteMetadata::from_json(&options.metadata_json)?;

    let rendered = render_quote(&html, &metadata, &date::now(), renderer)?;
    write_pdf(&options.output_path, &rendered.pdf)?;

    log::info!(
        "Wrote '{}' ({} bytes, {} page{})",
        options.output_path.display(),
        rendered.pdf.len(),
        rendered.page_count,
        if rendered.page_count == 1 { "" } else { "s" }
    );

    Ok(GeneratedPdf {
        output_path: options.output_path.clone(),
        page_count: rendered.page_count,
        fields: rendered.fields,
    })
}

fn write_pdf(path: &Path, pdf: &[u8]) -> Result<()> {
    fs::write(path, pdf).map_err(|source| Error::WriteOutput {
        path: path.to_path_buf(),
        source,
    })
}
