//! Template composition
//!
//! Turns the input HTML and quote metadata into the two strings handed to
//! the rendering engine:
//! - the HTML, with the quote fields added as `data-*` attributes on the
//!   root element
//! - the page stylesheet, whose margin boxes carry the running headers and
//!   footers (quote number, date, company, page counter, validity date)
//!
//! Both are plain single-occurrence substring replacements. Only the first
//! `<html` in the document and the first occurrence of each placeholder are
//! touched.

use chrono::NaiveDateTime;

use crate::date::{format_date, validity_date};
use crate::quote::{QuoteMetadata, DEFAULT_CLIENTE, DEFAULT_EMPRESA, DEFAULT_NUMERO};

/// Paged-media stylesheet with `$`-prefixed placeholders
pub const PAGE_STYLESHEET_TEMPLATE: &str = r#"
@page {
    size: A4;
    margin: 10mm;

    @top-left {
        content: "Orçamento #$NUMERO";
        font-family: Arial, sans-serif;
        font-size: 10pt;
        color: #666;
    }

    @top-right {
        content: "Data: $DATA_ORCAMENTO";
        font-family: Arial, sans-serif;
        font-size: 10pt;
        color: #666;
    }

    @bottom-left {
        content: "$EMPRESA";
        font-family: Arial, sans-serif;
        font-size: 9pt;
        color: #888;
    }

    @bottom-center {
        content: "Página " counter(page) " de " counter(pages);
        font-family: Arial, sans-serif;
        font-size: 9pt;
        color: #888;
        text-align: center;
    }

    @bottom-right {
        content: "Válido até: $VALIDADE";
        font-family: Arial, sans-serif;
        font-size: 9pt;
        color: #888;
    }
}

body {
    font-family: Arial, sans-serif;
    line-height: 1.6;
    color: #333;
    -webkit-print-color-adjust: exact;
}

.page-break-before { page-break-before: always; }
.page-break-after { page-break-after: always; }
.page-break-avoid { page-break-inside: avoid; }
"#;

const NUMERO_PLACEHOLDER: &str = "$NUMERO";
const DATA_PLACEHOLDER: &str = "$DATA_ORCAMENTO";
const EMPRESA_PLACEHOLDER: &str = "$EMPRESA";
const VALIDADE_PLACEHOLDER: &str = "$VALIDADE";

const ROOT_TAG: &str = "<html";

/// Quote fields after defaults have been applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteFields {
    pub numero: String,
    pub data: String,
    pub empresa: String,
    /// Resolved for compatibility, never rendered
    pub cliente: String,
    /// Validity date, `DD/MM/YYYY`
    pub validade: String,
}

impl QuoteFields {
    /// Apply defaults to `metadata`. Dates are counted from `generated_at`.
    pub fn resolve(metadata: &QuoteMetadata, generated_at: &NaiveDateTime) -> Self {
        Self {
            numero: metadata
                .numero
                .clone()
                .unwrap_or_else(|| DEFAULT_NUMERO.to_string()),
            data: metadata
                .data
                .clone()
                .unwrap_or_else(|| format_date(&generated_at.date())),
            empresa: metadata
                .empresa
                .clone()
                .unwrap_or_else(|| DEFAULT_EMPRESA.to_string()),
            cliente: metadata
                .cliente
                .clone()
                .unwrap_or_else(|| DEFAULT_CLIENTE.to_string()),
            validade: format_date(&validity_date(generated_at)),
        }
    }
}

/// HTML and stylesheet ready for the rendering engine
#[derive(Debug, Clone)]
pub struct ComposedDocument {
    pub html: String,
    pub stylesheet: String,
    pub fields: QuoteFields,
}

/// Compose the engine inputs for one quote
pub fn compose(
    html: &str,
    metadata: &QuoteMetadata,
    generated_at: &NaiveDateTime,
) -> ComposedDocument {
    let fields = QuoteFields::resolve(metadata, generated_at);
    let html = inject_root_attributes(html, &fields);

    // Header/footer text uses the raw metadata: a missing field leaves its
    // margin box empty rather than showing the attribute default.
    let stylesheet = fill_template(
        PAGE_STYLESHEET_TEMPLATE,
        &[
            (NUMERO_PLACEHOLDER, metadata.numero.as_deref().unwrap_or("")),
            (DATA_PLACEHOLDER, metadata.data.as_deref().unwrap_or("")),
            (EMPRESA_PLACEHOLDER, metadata.empresa.as_deref().unwrap_or("")),
            (VALIDADE_PLACEHOLDER, &fields.validade),
        ],
    );

    ComposedDocument {
        html,
        stylesheet,
        fields,
    }
}

/// Add the quote fields as `data-*` attributes to the first `<html` tag
///
/// Existing attributes on the tag are kept after the injected ones. A
/// document without `<html` is returned unchanged.
pub fn inject_root_attributes(html: &str, fields: &QuoteFields) -> String {
    let replacement = format!(
        "{ROOT_TAG} data-numero=\"{}\" data-data=\"{}\" data-empresa=\"{}\" data-validade=\"{}\" ",
        fields.numero, fields.data, fields.empresa, fields.validade
    );
    html.replacen(ROOT_TAG, &replacement, 1)
}

/// Apply `(placeholder, value)` pairs in order, first occurrence only
pub fn fill_template(template: &str, substitutions: &[(&str, &str)]) -> String {
    substitutions
        .iter()
        .fold(template.to_string(), |text, (placeholder, value)| {
            text.replacen(placeholder, value, 1)
        })
}
