//! Error types for quote PDF generation

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Pipeline stage an error belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Reading the HTML file or parsing the metadata
    Load,
    /// Running the engine, checking its output, writing the PDF
    Render,
}

/// Main error type for quote PDF generation
#[derive(Error, Debug)]
pub enum Error {
    /// HTML input could not be read
    #[error("Cannot read HTML file {}: {source}", path.display())]
    ReadHtml {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Metadata argument is not valid JSON
    #[error("Invalid metadata JSON: {0}")]
    Metadata(#[from] serde_json::Error),

    /// Metadata argument is not valid UTF-8
    #[error("Metadata argument is not valid UTF-8")]
    MetadataEncoding,

    /// Metadata argument parsed, but is not a JSON object
    #[error("Metadata must be a JSON object, got {0}")]
    MetadataNotObject(&'static str),

    /// Scratch directory for the engine could not be prepared
    #[error("Cannot prepare render workspace: {0}")]
    Workspace(#[source] std::io::Error),

    /// Engine executable could not be started
    #[error("Cannot launch rendering engine '{program}': {source}")]
    EngineLaunch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Engine ran and reported failure
    #[error("Rendering engine failed (exit status {code}): {stderr}")]
    EngineFailed { code: i32, stderr: String },

    /// Engine exited successfully but left no PDF behind
    #[error("Rendering engine produced no output: {0}")]
    MissingOutput(#[source] std::io::Error),

    /// Rendered bytes are not a readable PDF
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),

    /// Rendered PDF has a malformed page tree
    #[error("Invalid PDF structure: {0}")]
    PdfStructure(String),

    /// Rendered PDF has no pages
    #[error("Rendered PDF has no pages")]
    EmptyPdf,

    /// Final PDF could not be written
    #[error("Cannot write PDF to {}: {source}", path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Which pipeline stage produced this error
    pub fn stage(&self) -> Stage {
        match self {
            Error::ReadHtml { .. }
            | Error::Metadata(_)
            | Error::MetadataEncoding
            | Error::MetadataNotObject(_) => Stage::Load,
            _ => Stage::Render,
        }
    }
}
