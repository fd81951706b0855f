//! Quote PDF Library
//!
//! Renders an HTML quote ("orçamento") to a paginated PDF. The quote
//! metadata is added to the document in two places:
//! - as `data-*` attributes on the root `<html>` element
//! - in a paged-media stylesheet whose margin boxes show the quote number,
//!   date, company, page counter and validity date on every page
//!
//! The layout itself is delegated to an external HTML/CSS engine through the
//! [`pdf::Renderer`] trait.
//!
//! # Example
//!
//! ```no_run
//! use quote_pdf::generate::{generate_pdf_file, GenerateOptions};
//! use quote_pdf::pdf::WeasyPrint;
//! use std::path::PathBuf;
//!
//! let options = GenerateOptions {
//!     html_path: PathBuf::from("orcamento.html"),
//!     output_path: PathBuf::from("orcamento.pdf"),
//!     metadata_json: r#"{"numero": "2025-001", "empresa": "ACME"}"#.to_string(),
//! };
//!
//! generate_pdf_file(&options, &WeasyPrint::default()).expect("Failed to generate PDF");
//! ```

pub mod compose;
pub mod date;
pub mod error;
pub mod generate;
pub mod pdf;
pub mod quote;
pub mod report;

// Re-export commonly used items
pub use error::{Error, Result, Stage};
pub use quote::QuoteMetadata;
