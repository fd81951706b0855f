//! Rendering engine invocation
//!
//! Layout, pagination, font handling and PDF encoding all happen in an
//! external HTML/CSS engine. The default engine is the WeasyPrint command
//! line, which implements the CSS Paged Media margin boxes and page counters
//! the quote stylesheet relies on.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::error::{Error, Result};

/// An HTML + CSS to PDF engine
pub trait Renderer {
    /// Render `html` with `stylesheet` applied and return the PDF bytes
    fn render(&self, html: &str, stylesheet: &str) -> Result<Vec<u8>>;
}

/// Executable name used when no engine is configured
pub const DEFAULT_ENGINE: &str = "weasyprint";

/// WeasyPrint command-line renderer
///
/// Each call gets its own temporary directory holding the document, the
/// stylesheet and the engine's output. The directory is removed when the
/// call returns, whether it succeeded or not.
#[derive(Debug, Clone)]
pub struct WeasyPrint {
    program: PathBuf,
    base_url: Option<String>,
}

impl Default for WeasyPrint {
    fn default() -> Self {
        Self::new(DEFAULT_ENGINE)
    }
}

impl WeasyPrint {
    /// Use the engine executable at `program` (looked up on `PATH` if bare)
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            base_url: None,
        }
    }

    /// Resolve relative URLs in the document against `base_url`
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Engine executable that will be run
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Value passed as `--base-url`, if any
    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }
}

impl Renderer for WeasyPrint {
    fn render(&self, html: &str, stylesheet: &str) -> Result<Vec<u8>> {
        let workspace = tempfile::Builder::new()
            .prefix("quote-pdf-")
            .tempdir()
            .map_err(Error::Workspace)?;

        let html_path = workspace.path().join("document.html");
        let css_path = workspace.path().join("page.css");
        let pdf_path = workspace.path().join("document.pdf");

        fs::write(&html_path, html).map_err(Error::Workspace)?;
        fs::write(&css_path, stylesheet).map_err(Error::Workspace)?;

        let mut command = Command::new(&self.program);
        command
            .arg("--encoding")
            .arg("utf-8")
            .arg("--stylesheet")
            .arg(&css_path);
        if let Some(base_url) = &self.base_url {
            command.arg("--base-url").arg(base_url);
        }
        command
            .arg(&html_path)
            .arg(&pdf_path)
            .stdin(Stdio::null());

        log::debug!("Running rendering engine: {:?}", command);

        let output = command.output().map_err(|source| Error::EngineLaunch {
            program: self.program.display().to_string(),
            source,
        })?;

        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();

        if !output.status.success() {
            return Err(Error::EngineFailed {
                code: output.status.code().unwrap_or(-1),
                stderr,
            });
        }

        if !stderr.is_empty() {
            log::warn!("Rendering engine reported: {}", stderr);
        }

        fs::read(&pdf_path).map_err(Error::MissingOutput)
    }
}
