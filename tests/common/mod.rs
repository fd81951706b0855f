//! Shared helpers for CLI integration tests

#![allow(dead_code)]

use lopdf::{dictionary, Document, Object};
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Command for the built `quote-pdf` binary, isolated from the caller's
/// engine configuration
pub fn cli() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_quote-pdf"));
    command.env_remove("QUOTE_PDF_ENGINE").env_remove("RUST_LOG");
    command
}

/// Parse the single JSON line the tool prints on stdout
pub fn report(output: &Output) -> Value {
    let stdout = String::from_utf8(output.stdout.clone()).expect("stdout is not UTF-8");
    assert_eq!(stdout.lines().count(), 1, "expected one report line, got: {stdout}");
    serde_json::from_str(stdout.trim()).expect("report is not JSON")
}

/// Write a small quote document into `dir`
pub fn write_quote_html(dir: &Path) -> PathBuf {
    let path = dir.join("orcamento.html");
    std::fs::write(
        &path,
        "<!DOCTYPE html>\n<html lang=\"pt-BR\">\n<head><meta charset=\"utf-8\"></head>\n\
         <body>\n<h1>Orçamento</h1>\n<p class=\"page-break-after\">Instalação de móveis</p>\n\
         <p>Total: R$ 206,76</p>\n</body>\n</html>\n",
    )
    .expect("Failed to write HTML fixture");
    path
}

/// Build a PDF with `count` blank pages
pub fn pdf_with_pages(count: usize) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let kids: Vec<Object> = (0..count)
        .map(|_| {
            doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "MediaBox" => vec![
                    Object::Integer(0),
                    Object::Integer(0),
                    Object::Integer(595),
                    Object::Integer(842),
                ],
            })
            .into()
        })
        .collect();
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count as i64,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).expect("Failed to serialize PDF fixture");
    bytes
}
