//! xlsx2json - Excel catalog to JSON records converter
//!
//! This crate reads a spreadsheet workbook, loads one worksheet into a
//! tabular structure, and serializes the rows as a JSON array of objects
//! (one object per row, column headers as keys).
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//! use xlsx2json::ConverterBuilder;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Create a converter with default settings
//!     let converter = ConverterBuilder::new().build()?;
//!
//!     // Convert one workbook into one JSON file
//!     converter.convert_path(
//!         Path::new("catalogo_causas.xlsx"),
//!         Path::new("causas.json"),
//!     )?;
//!
//!     Ok(())
//! }
//! ```
//!
//! For in-memory conversion, use `Cursor`:
//!
//! ```rust,no_run
//! use std::io::Cursor;
//! use xlsx2json::ConverterBuilder;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let converter = ConverterBuilder::new().build()?;
//! let excel_data: Vec<u8> = vec![]; // Your Excel file bytes
//! let mut json_output = Vec::new();
//! converter.convert(Cursor::new(excel_data), &mut json_output)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Custom Configuration
//!
//! ```rust,no_run
//! use std::fs::File;
//! use xlsx2json::{ConverterBuilder, DateFormat, SheetSelector};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Create a converter with custom settings
//!     let converter = ConverterBuilder::new()
//!         .with_sheet_selector(SheetSelector::Name("Plan1".to_string()))  // Named sheet
//!         .with_date_format(DateFormat::Iso8601)  // ISO dates instead of epoch millis
//!         .build()?;
//!
//!     let input = File::open("catalogo_fmea.xlsx")?;
//!     let output = File::create("fmea.json")?;
//!     converter.convert(input, output)?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Batch Conversion
//!
//! ```rust,no_run
//! use xlsx2json::{run_batch, ConversionJob, ConverterBuilder};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let converter = ConverterBuilder::new().build()?;
//!
//!     // Jobs run strictly in order; the first failure aborts the run.
//!     let jobs = vec![
//!         ConversionJob::new("catalogo_causas.xlsx", "causas.json"),
//!         ConversionJob::new("catalogo_modelos.xlsx", "modelos.json"),
//!     ];
//!
//!     let completed = run_batch(&converter, &jobs)?;
//!     println!("{} conversions completed", completed);
//!
//!     Ok(())
//! }
//! ```

mod api;
mod batch;
mod builder;
mod error;
mod formatter;
mod output;
mod parser;
mod security;
mod types;

// 公開API
pub use api::{DateFormat, SheetSelector};
pub use batch::{run_batch, ConversionJob};
pub use builder::{Converter, ConverterBuilder};
pub use error::XlsxToJsonError;
