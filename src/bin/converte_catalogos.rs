//! Catalog Batch Converter
//!
//! Converts the fixed set of catalog workbooks into JSON array files.
//! The conversion list is hardcoded: each workbook is expected in the
//! current working directory and each output file is created (or
//! overwritten) next to it. Conversions run strictly in order and the
//! first failure aborts the whole run.

use std::process;
use xlsx2json::{run_batch, ConversionJob, ConverterBuilder, XlsxToJsonError};

/// The catalog bases, converted in this order.
const JOBS: &[(&str, &str)] = &[
    ("catalogo_causas.xlsx", "causas.json"),
    ("catalogo_modelos.xlsx", "modelos.json"),
    ("catalogo_responsabilidades.xlsx", "responsabilidades.json"),
    ("catalogo_codigos_defeitos.xlsx", "defeitos.json"),
    ("catalogo_codigos.xlsx", "codigos_categoria.json"),
    ("catalogo_fmea.xlsx", "fmea.json"),
    ("catalogo_nao_mostrar_indice.xlsx", "nao_mostrar_indice.json"),
];

fn main() {
    match convert_catalogs() {
        Ok(_) => {
            println!("Conversão concluída!");
        }
        Err(e) => {
            handle_error(e);
            process::exit(1);
        }
    }
}

fn convert_catalogs() -> Result<usize, XlsxToJsonError> {
    let converter = ConverterBuilder::new().build()?;

    let jobs: Vec<ConversionJob> = JOBS
        .iter()
        .map(|(input, output)| ConversionJob::new(*input, *output))
        .collect();

    run_batch(&converter, &jobs)
}

fn handle_error(error: XlsxToJsonError) {
    match error {
        // Batch errors carry the failing input path; unwrap to report the cause too.
        XlsxToJsonError::Job { input, source } => {
            eprintln!("Error converting '{}':", input.display());
            handle_error(*source);
        }
        XlsxToJsonError::Io(io_err) => {
            eprintln!("I/O Error: {}", io_err);
            eprintln!("Please check that the file exists and you have permission to access it.");
        }
        XlsxToJsonError::Parse(parse_err) => {
            eprintln!("Parse Error: {}", parse_err);
            eprintln!("The file may not be a valid spreadsheet or may be corrupted.");
        }
        XlsxToJsonError::Json(json_err) => {
            eprintln!("JSON Error: {}", json_err);
        }
        XlsxToJsonError::Config(msg) => {
            eprintln!("Configuration Error: {}", msg);
        }
        XlsxToJsonError::SecurityViolation(msg) => {
            eprintln!("Security Violation: {}", msg);
            eprintln!("The file violates security constraints (e.g., file size limit).");
        }
    }
}
