//! Quote PDF CLI tool
//!
//! Renders an HTML quote to PDF and prints a one-line JSON report on stdout.

use clap::error::ErrorKind;
use clap::Parser;
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use quote_pdf::generate::{generate_pdf_file, GenerateOptions, GeneratedPdf};
use quote_pdf::pdf::{WeasyPrint, DEFAULT_ENGINE};
use quote_pdf::quote::metadata_arg;
use quote_pdf::report::GenerationReport;

const USAGE: &str = "Uso: quote-pdf <html_file> <output_pdf> <orcamento_data_json>";

/// Quote PDF - Render an HTML quote with header/footer metadata
#[derive(Parser)]
#[command(name = "quote-pdf")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    # Render a quote with number, date and company in the page margins
    quote-pdf orcamento.html orcamento.pdf '{\"numero\": \"2025-001\", \"data\": \"01/12/2025\", \"empresa\": \"ACME\"}'

    # Use a specific WeasyPrint install (options go before the file arguments)
    quote-pdf --engine /opt/weasyprint/bin/weasyprint in.html out.pdf '{}'")]
struct Cli {
    /// HTML file to convert
    #[arg(allow_hyphen_values = true)]
    html_file: PathBuf,

    /// Output PDF file path
    #[arg(allow_hyphen_values = true)]
    output_pdf: PathBuf,

    /// Quote metadata as a JSON object with optional "numero", "data",
    /// "empresa" and "cliente" fields
    #[arg(allow_hyphen_values = true)]
    metadata_json: OsString,

    /// Ignored
    #[arg(hide = true, allow_hyphen_values = true)]
    extra: Vec<OsString>,

    /// Rendering engine executable (WeasyPrint command line)
    #[arg(long, env = "QUOTE_PDF_ENGINE", default_value = DEFAULT_ENGINE)]
    engine: PathBuf,

    /// Base URL for relative links in the HTML (default: the HTML file's directory)
    #[arg(long)]
    base_url: Option<String>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            log::debug!("Argument error: {}", e);
            println!("{}", USAGE);
            return ExitCode::FAILURE;
        }
    };

    if !cli.extra.is_empty() {
        log::warn!("Ignoring extra arguments: {:?}", cli.extra);
    }

    let report = match run(cli) {
        Ok(generated) => GenerationReport::success(&generated.output_path),
        Err(e) => {
            log::error!("{}", e);
            GenerationReport::failure(&e)
        }
    };

    if let Err(e) = report.write_to(io::stdout().lock()) {
        log::error!("Cannot write report: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::from(report.exit_code())
}

fn run(cli: Cli) -> quote_pdf::Result<GeneratedPdf> {
    let base_url = cli
        .base_url
        .unwrap_or_else(|| default_base_url(&cli.html_file));
    let renderer = WeasyPrint::new(&cli.engine).with_base_url(base_url);

    let options = GenerateOptions {
        html_path: cli.html_file,
        output_path: cli.output_pdf,
        metadata_json: metadata_arg(cli.metadata_json)?,
    };

    generate_pdf_file(&options, &renderer)
}

/// Directory containing the HTML file, so relative assets resolve next to it
fn default_base_url(html_file: &Path) -> String {
    match html_file.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.display().to_string(),
        _ => ".".to_string(),
    }
}
