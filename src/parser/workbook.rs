//! Workbook Parser
//!
//! calamineのラッパーとして、ワークブックレベルの操作を提供します。
//! シート選択の解決と、ヘッダー行＋データ行の表構造への抽出を行います。

use calamine::{open_workbook_auto_from_rs, Data, DataType, Reader, Sheets};
use std::io::{Cursor, Read, Seek};

use crate::api::SheetSelector;
use crate::error::XlsxToJsonError;
use crate::security::SecurityConfig;
use crate::types::{col_to_letter, CellValue, Table};

/// ワークブックパーサー
pub(crate) struct WorkbookParser<RS: Read + Seek> {
    /// calamineのワークブック（形式は自動判別）
    workbook: Sheets<RS>,
}

impl WorkbookParser<Cursor<Vec<u8>>> {
    /// ワークブックを開く
    ///
    /// # 引数
    ///
    /// * `reader` - ワークブックを読み込むためのリーダー（Read + Seekトレイトを実装）
    ///
    /// # 戻り値
    ///
    /// * `Ok(WorkbookParser)` - ワークブックの読み込みに成功した場合
    /// * `Err(XlsxToJsonError)` - エラーが発生した場合
    ///
    /// # 発生し得るエラー
    ///
    /// * `XlsxToJsonError::Io` - リーダーからの読み込みに失敗した場合
    /// * `XlsxToJsonError::SecurityViolation` - 入力サイズが上限を超過した場合
    /// * `XlsxToJsonError::Parse` - ワークブックとして解析できない場合
    pub fn open<R: Read + Seek>(mut reader: R) -> Result<Self, XlsxToJsonError> {
        // セキュリティチェック: 入力ファイルサイズの上限
        let security_config = SecurityConfig::default();

        // ファイル全体をメモリに読み込む
        let mut buffer = Vec::new();
        let bytes_read = reader.read_to_end(&mut buffer)?;

        if bytes_read as u64 > security_config.max_input_file_size {
            return Err(XlsxToJsonError::SecurityViolation(format!(
                "Input file size exceeds maximum: {} bytes (max: {} bytes)",
                bytes_read, security_config.max_input_file_size
            )));
        }

        // calamineでワークブックを開く（XLSX/XLS/XLSB/ODSを自動判別）
        let workbook =
            open_workbook_auto_from_rs(Cursor::new(buffer)).map_err(XlsxToJsonError::Parse)?;

        Ok(WorkbookParser { workbook })
    }
}

impl<RS: Read + Seek> WorkbookParser<RS> {
    /// すべてのシート名を取得
    pub fn sheet_names(&self) -> Vec<String> {
        self.workbook.sheet_names().to_vec()
    }

    /// シート選択方式に基づいてシート名を解決
    ///
    /// # 引数
    ///
    /// * `selector` - シート選択方式
    ///
    /// # 戻り値
    ///
    /// * `Ok(String)` - 解決されたシート名
    /// * `Err(XlsxToJsonError::Config)` - シートが見つからない、またはインデックスが範囲外の場合
    pub fn select_sheet(&self, selector: &SheetSelector) -> Result<String, XlsxToJsonError> {
        let all_sheet_names = self.sheet_names();

        match selector {
            SheetSelector::First => all_sheet_names
                .first()
                .cloned()
                .ok_or_else(|| XlsxToJsonError::Config("Workbook has no sheets".to_string())),

            SheetSelector::Index(index) => {
                if *index >= all_sheet_names.len() {
                    return Err(XlsxToJsonError::Config(format!(
                        "Sheet index {} is out of range (total: {})",
                        index,
                        all_sheet_names.len()
                    )));
                }
                Ok(all_sheet_names[*index].clone())
            }

            SheetSelector::Name(name) => {
                if !all_sheet_names.contains(name) {
                    return Err(XlsxToJsonError::Config(format!("Sheet '{}' not found", name)));
                }
                Ok(name.clone())
            }
        }
    }

    /// シートをパースして表構造を抽出
    ///
    /// 先頭行が列名、残りがデータ行になります。calamineの返す範囲は
    /// 全行が同じ幅にパディングされているため、各データ行の長さは
    /// 常にヘッダー数と一致します。
    ///
    /// # 引数
    ///
    /// * `sheet_name` - パースするシート名
    ///
    /// # 戻り値
    ///
    /// * `Ok(Table)` - 抽出された表（空シートの場合は空の表）
    /// * `Err(XlsxToJsonError)` - パースエラーが発生した場合
    pub fn parse_table(&mut self, sheet_name: &str) -> Result<Table, XlsxToJsonError> {
        // 1. シートの取得
        let range = self
            .workbook
            .worksheet_range(sheet_name)
            .map_err(XlsxToJsonError::Parse)?;

        if range.is_empty() {
            return Ok(Table::empty());
        }

        // 2. 範囲の開始列（列名フォールバックは絶対位置の列名を使用）
        let start_col = range.start().map(|(_, col)| col).unwrap_or(0);

        let mut rows_iter = range.rows();

        // 3. ヘッダー行の抽出
        // 空のヘッダーセルはExcel列名（A, B, C, ...）にフォールバック
        let headers: Vec<String> = match rows_iter.next() {
            Some(header_row) => header_row
                .iter()
                .enumerate()
                .map(|(idx, cell)| {
                    extract_cell_value(cell)
                        .header_name()
                        .unwrap_or_else(|| col_to_letter(start_col + idx as u32))
                })
                .collect(),
            None => return Ok(Table::empty()),
        };

        // 4. データ行の抽出
        let rows: Vec<Vec<CellValue>> = rows_iter
            .map(|row| row.iter().map(extract_cell_value).collect())
            .collect();

        Ok(Table { headers, rows })
    }
}

/// calamineのセルデータをCellValueに変換
fn extract_cell_value(cell: &Data) -> CellValue {
    match cell {
        Data::Int(i) => CellValue::Int(*i),
        Data::Float(f) => CellValue::Float(*f),
        Data::String(s) => CellValue::String(s.clone()),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(dt) => match cell.as_datetime() {
            Some(naive) => CellValue::DateTime(naive),
            // 変換できないシリアル値は数値のまま保持
            None => CellValue::Float(dt.as_f64()),
        },
        Data::DateTimeIso(s) => CellValue::DateTimeIso(s.clone()),
        Data::DurationIso(s) => CellValue::Duration(s.clone()),
        Data::Error(e) => CellValue::Error(format!("{:?}", e)),
        Data::Empty => CellValue::Empty,
    }
}

// テストは統合テスト（tests/）で実装します。
// 実際のワークブックファイルが必要なため、単体テストではなく統合テストとして実装します。
