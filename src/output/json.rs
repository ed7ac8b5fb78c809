//! JSON Records Formatter
//!
//! 表データをJSONオブジェクトの配列として出力する実装。

use serde_json::{Map, Value};
use std::io::Write;

use crate::builder::ConversionConfig;
use crate::error::XlsxToJsonError;
use crate::formatter::CellFormatter;
use crate::types::Table;

/// JSONレコード形式のフォーマッター
pub(crate) struct JsonFormatter;

impl JsonFormatter {
    /// 表データをJSONレコードの配列に変換
    ///
    /// 各データ行が1つのJSONオブジェクトになります。キーは列名
    /// （列順を保持）、値は`CellFormatter`で変換されたJSON値です。
    /// 同名の列が複数ある場合、キーは1つに畳まれ、右側の列の値が優先されます。
    pub fn to_records(
        &self,
        table: &Table,
        formatter: &CellFormatter,
        config: &ConversionConfig,
    ) -> Result<Vec<Value>, XlsxToJsonError> {
        let mut records = Vec::with_capacity(table.row_count());

        for row in &table.rows {
            let mut record = Map::new();
            for (header, cell) in table.headers.iter().zip(row.iter()) {
                record.insert(header.clone(), formatter.format_cell(cell, config)?);
            }
            records.push(Value::Object(record));
        }

        Ok(records)
    }

    /// 変換済みレコードをライターに出力
    ///
    /// 2スペースインデントの複数行JSONとして出力します。非ASCII文字は
    /// エスケープせずそのまま出力されます（serde_jsonのデフォルト動作）。
    /// 末尾に改行を1つ付加します。
    pub fn render<W: Write>(
        &self,
        records: &[Value],
        writer: &mut W,
    ) -> Result<(), XlsxToJsonError> {
        serde_json::to_writer_pretty(&mut *writer, records)?;
        writeln!(writer)?;
        writer.flush()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CellValue;

    fn sample_table() -> Table {
        Table {
            headers: vec!["codigo".to_string(), "descricao".to_string()],
            rows: vec![
                vec![
                    CellValue::String("D001".to_string()),
                    CellValue::String("Falha de solda".to_string()),
                ],
                vec![CellValue::String("D002".to_string()), CellValue::Empty],
            ],
        }
    }

    #[test]
    fn test_to_records_shape() {
        let table = sample_table();
        let formatter = CellFormatter::new();
        let config = ConversionConfig::default();

        let records = JsonFormatter
            .to_records(&table, &formatter, &config)
            .unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["codigo"], "D001");
        assert_eq!(records[0]["descricao"], "Falha de solda");
        // 空セルはキーを残したままnullになる
        assert_eq!(records[1]["descricao"], Value::Null);
    }

    #[test]
    fn test_to_records_preserves_column_order() {
        let table = Table {
            headers: vec!["z".to_string(), "a".to_string(), "m".to_string()],
            rows: vec![vec![
                CellValue::Int(1),
                CellValue::Int(2),
                CellValue::Int(3),
            ]],
        };
        let formatter = CellFormatter::new();
        let config = ConversionConfig::default();

        let records = JsonFormatter
            .to_records(&table, &formatter, &config)
            .unwrap();

        let keys: Vec<&String> = records[0].as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_to_records_duplicate_header_last_wins() {
        let table = Table {
            headers: vec!["codigo".to_string(), "codigo".to_string()],
            rows: vec![vec![
                CellValue::String("left".to_string()),
                CellValue::String("right".to_string()),
            ]],
        };
        let formatter = CellFormatter::new();
        let config = ConversionConfig::default();

        let records = JsonFormatter
            .to_records(&table, &formatter, &config)
            .unwrap();

        let record = records[0].as_object().unwrap();
        assert_eq!(record.len(), 1);
        assert_eq!(record["codigo"], "right");
    }

    #[test]
    fn test_render_pretty_output() {
        let table = sample_table();
        let formatter = CellFormatter::new();
        let config = ConversionConfig::default();

        let records = JsonFormatter
            .to_records(&table, &formatter, &config)
            .unwrap();

        let mut buffer = Vec::new();
        JsonFormatter.render(&records, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        // 複数行の整形出力であること
        assert!(text.lines().count() > 1);
        assert!(text.contains("  {"));
        // 末尾に改行があること
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_render_empty_table() {
        let mut buffer = Vec::new();
        JsonFormatter.render(&[], &mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "[]\n");
    }

    #[test]
    fn test_render_literal_non_ascii() {
        let table = Table {
            headers: vec!["responsabilidade".to_string()],
            rows: vec![vec![CellValue::String("Fornecedor não aprovado".to_string())]],
        };
        let formatter = CellFormatter::new();
        let config = ConversionConfig::default();

        let records = JsonFormatter
            .to_records(&table, &formatter, &config)
            .unwrap();

        let mut buffer = Vec::new();
        JsonFormatter.render(&records, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        // 非ASCII文字は\uXXXXにエスケープされない
        assert!(text.contains("não"));
        assert!(!text.contains("\\u"));
    }
}
