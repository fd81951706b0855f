//! JSON status report printed by the CLI
//!
//! Callers spawn the tool and parse the single JSON line it prints, so the
//! field names and messages are part of its interface.

use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::error::{Error, Stage};

/// Outcome of one invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationReport {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub message: String,
}

impl GenerationReport {
    /// The PDF was written to `output_path`
    pub fn success(output_path: &Path) -> Self {
        let output_path = output_path.display().to_string();
        Self {
            success: true,
            message: format!("PDF gerado com sucesso: {output_path}"),
            output_path: Some(output_path),
            error: None,
        }
    }

    /// Generation failed with `err`
    pub fn failure(err: &Error) -> Self {
        let error = err.to_string();
        let message = match err.stage() {
            Stage::Load => format!("Erro na execução: {error}"),
            Stage::Render => format!("Erro ao gerar PDF: {error}"),
        };
        Self {
            success: false,
            output_path: None,
            error: Some(error),
            message,
        }
    }

    /// Process exit code for this outcome
    pub fn exit_code(&self) -> u8 {
        if self.success {
            0
        } else {
            1
        }
    }

    /// Write the report as one JSON line
    pub fn write_to<W: Write>(&self, mut out: W) -> serde_json::Result<()> {
        serde_json::to_writer(&mut out, self)?;
        writeln!(out).map_err(serde_json::Error::io)?;
        out.flush().map_err(serde_json::Error::io)
    }
}
