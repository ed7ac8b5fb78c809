//! Parser Module
//!
//! calamineを使用したワークブック解析の実装。

mod workbook;

pub(crate) use workbook::WorkbookParser;
