//! Builder Module
//!
//! Fluent Builder APIを提供し、`Converter`インスタンスを段階的に構築する。

use crate::api::{DateFormat, SheetSelector};
use crate::error::XlsxToJsonError;
use crate::formatter::CellFormatter;
use crate::output::JsonFormatter;
use crate::parser::WorkbookParser;
use chrono::NaiveDate;
use serde_json::Value;
use std::fs::File;
use std::io::{BufWriter, Read, Seek, Write};
use std::path::Path;

/// 変換処理の設定を保持する内部構造体
#[derive(Debug, Clone)]
pub(crate) struct ConversionConfig {
    /// シート選択方式
    pub sheet_selector: SheetSelector,

    /// 日付形式
    pub date_format: DateFormat,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            sheet_selector: SheetSelector::First,
            date_format: DateFormat::EpochMillis,
        }
    }
}

/// Fluent Builder APIを提供する構造体
///
/// `Converter`インスタンスを段階的に構築するためのビルダーです。
/// すべての設定項目にデフォルト値が設定されており、必要な設定のみをオーバーライドできます。
///
/// # 使用例
///
/// ```rust,no_run
/// use xlsx2json::{ConverterBuilder, DateFormat, SheetSelector};
///
/// # fn main() -> Result<(), xlsx2json::XlsxToJsonError> {
/// let converter = ConverterBuilder::new()
///     .with_sheet_selector(SheetSelector::Index(0))
///     .with_date_format(DateFormat::Iso8601)
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ConverterBuilder {
    /// 内部設定（構築中）
    config: ConversionConfig,
}

impl Default for ConverterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ConverterBuilder {
    /// デフォルト設定を持つビルダーインスタンスを生成する
    ///
    /// # デフォルト設定
    ///
    /// - シート選択: 先頭のシート
    /// - 日付形式: Unixエポックからのミリ秒数
    pub fn new() -> Self {
        Self {
            config: ConversionConfig::default(),
        }
    }

    /// 変換対象のシートを選択する
    ///
    /// # 引数
    ///
    /// * `selector: SheetSelector`: シート選択方式
    ///
    /// # 使用例
    ///
    /// ```rust,no_run
    /// use xlsx2json::{ConverterBuilder, SheetSelector};
    ///
    /// // シートをインデックスで指定
    /// let builder = ConverterBuilder::new()
    ///     .with_sheet_selector(SheetSelector::Index(1));
    ///
    /// // シートを名前で指定
    /// let builder = ConverterBuilder::new()
    ///     .with_sheet_selector(SheetSelector::Name("Plan1".to_string()));
    /// ```
    pub fn with_sheet_selector(mut self, selector: SheetSelector) -> Self {
        self.config.sheet_selector = selector;
        self
    }

    /// 日付セルの出力形式を指定する
    ///
    /// # 引数
    ///
    /// * `format: DateFormat`: 日付形式
    ///
    /// # 使用例
    ///
    /// ```rust,no_run
    /// use xlsx2json::{ConverterBuilder, DateFormat};
    ///
    /// // ISO 8601形式の文字列として出力
    /// let builder = ConverterBuilder::new()
    ///     .with_date_format(DateFormat::Iso8601);
    /// ```
    pub fn with_date_format(mut self, format: DateFormat) -> Self {
        self.config.date_format = format;
        self
    }

    /// 設定を検証し、`Converter`インスタンスを生成する
    ///
    /// # 戻り値
    ///
    /// * `Ok(Converter)`: 設定が有効な場合、Converterインスタンス
    /// * `Err(XlsxToJsonError::Config)`: 設定が無効な場合
    ///
    /// # 発生し得るエラー
    ///
    /// * `XlsxToJsonError::Config(String)`: カスタム日付形式が不正な書式文字列の場合
    pub fn build(self) -> Result<Converter, XlsxToJsonError> {
        // カスタム日付形式の検証
        if let DateFormat::Custom(ref format_str) = self.config.date_format {
            // テスト用の日付でフォーマット試行
            let test_date = NaiveDate::from_ymd_opt(2025, 1, 1)
                .ok_or_else(|| XlsxToJsonError::Config("Failed to create test date".to_string()))?;
            let formatted = test_date.format(format_str).to_string();
            if formatted.is_empty() {
                return Err(XlsxToJsonError::Config(format!(
                    "Invalid date format string: '{}'",
                    format_str
                )));
            }
        }

        Ok(Converter::new(self.config))
    }
}

/// 変換処理のファサード
///
/// ワークブックをJSONレコードの配列に変換するためのメインエントリーポイントです。
/// `ConverterBuilder`を使用して構築された設定に基づいて変換処理を実行します。
///
/// # 使用例
///
/// ```rust,no_run
/// use xlsx2json::ConverterBuilder;
/// use std::fs::File;
///
/// # fn main() -> Result<(), xlsx2json::XlsxToJsonError> {
/// let converter = ConverterBuilder::new().build()?;
/// let input = File::open("catalogo_causas.xlsx")?;
/// let mut output = Vec::new();
/// converter.convert(input, &mut output)?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Converter {
    /// 変換設定
    config: ConversionConfig,

    /// セルフォーマッター
    formatter: CellFormatter,
}

impl Converter {
    pub(crate) fn new(config: ConversionConfig) -> Self {
        Self {
            formatter: CellFormatter::new(),
            config,
        }
    }

    /// ワークブックをJSONレコードの配列に変換
    ///
    /// # 引数
    ///
    /// * `input` - ワークブックを読み込むためのリーダー（Read + Seekトレイトを実装）
    /// * `output` - JSON出力先のライター（Writeトレイトを実装）
    ///
    /// # 戻り値
    ///
    /// * `Ok(())` - 変換に成功した場合
    /// * `Err(XlsxToJsonError)` - エラーが発生した場合
    ///
    /// # 処理フロー
    ///
    /// 1. WorkbookParserの初期化
    /// 2. シート選択の解決
    /// 3. 表構造の抽出（ヘッダー行＋データ行）
    /// 4. セル値のJSON値への変換
    /// 5. JSONレコード配列の出力
    ///
    /// # 使用例
    ///
    /// ## ファイルからファイルへの変換
    ///
    /// ```rust,no_run
    /// use xlsx2json::ConverterBuilder;
    /// use std::fs::File;
    ///
    /// # fn main() -> Result<(), xlsx2json::XlsxToJsonError> {
    /// let converter = ConverterBuilder::new().build()?;
    /// let input = File::open("catalogo_modelos.xlsx")?;
    /// let output = File::create("modelos.json")?;
    /// converter.convert(input, output)?;
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// ## メモリバッファからの変換
    ///
    /// ```rust,no_run
    /// use xlsx2json::ConverterBuilder;
    /// use std::io::Cursor;
    ///
    /// # fn main() -> Result<(), xlsx2json::XlsxToJsonError> {
    /// let converter = ConverterBuilder::new().build()?;
    /// let excel_data: Vec<u8> = vec![]; // ワークブックのバイト列
    /// let mut json_output = Vec::new();
    /// converter.convert(Cursor::new(excel_data), &mut json_output)?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn convert<R: Read + Seek, W: Write>(
        &self,
        input: R,
        mut output: W,
    ) -> Result<(), XlsxToJsonError> {
        let records = self.build_records(input)?;

        let mut writer = BufWriter::new(&mut output);
        JsonFormatter.render(&records, &mut writer)?;
        writer.flush()?;

        Ok(())
    }

    /// ワークブックをJSON文字列に変換
    ///
    /// # 引数
    ///
    /// * `input` - ワークブックを読み込むためのリーダー（Read + Seekトレイトを実装）
    ///
    /// # 戻り値
    ///
    /// * `Ok(String)` - 変換されたJSON文字列
    /// * `Err(XlsxToJsonError)` - エラーが発生した場合
    pub fn convert_to_string<R: Read + Seek>(&self, input: R) -> Result<String, XlsxToJsonError> {
        let mut buffer = Vec::new();
        self.convert(input, &mut buffer)?;

        let result = String::from_utf8(buffer).map_err(|e| {
            XlsxToJsonError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
        })?;

        Ok(result)
    }

    /// ワークブックを`serde_json::Value`に変換
    ///
    /// 出力ファイルを経由せずにレコードを直接扱いたい場合に使用します。
    ///
    /// # 戻り値
    ///
    /// * `Ok(Value)` - レコードのJSON配列
    /// * `Err(XlsxToJsonError)` - エラーが発生した場合
    pub fn convert_to_value<R: Read + Seek>(&self, input: R) -> Result<Value, XlsxToJsonError> {
        Ok(Value::Array(self.build_records(input)?))
    }

    /// ワークブックファイルをJSONファイルに変換
    ///
    /// 入力の読み込み・解析・変換がすべて成功してから出力ファイルを
    /// 作成（または上書き）します。変換のいずれかの段階で失敗した場合、
    /// 既存の出力ファイルは変更されず、新規ファイルも作成されません。
    ///
    /// # 引数
    ///
    /// * `input` - 入力ワークブックのパス
    /// * `output` - 出力JSONファイルのパス（作成または上書き）
    ///
    /// # 戻り値
    ///
    /// * `Ok(())` - 変換に成功した場合
    /// * `Err(XlsxToJsonError)` - エラーが発生した場合
    ///
    /// # 使用例
    ///
    /// ```rust,no_run
    /// use std::path::Path;
    /// use xlsx2json::ConverterBuilder;
    ///
    /// # fn main() -> Result<(), xlsx2json::XlsxToJsonError> {
    /// let converter = ConverterBuilder::new().build()?;
    /// converter.convert_path(
    ///     Path::new("catalogo_causas.xlsx"),
    ///     Path::new("causas.json"),
    /// )?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn convert_path(&self, input: &Path, output: &Path) -> Result<(), XlsxToJsonError> {
        // 出力ファイルに触れる前に変換を完了させる
        let input_file = File::open(input)?;
        let records = self.build_records(input_file)?;

        let output_file = File::create(output)?;
        let mut writer = BufWriter::new(output_file);
        JsonFormatter.render(&records, &mut writer)?;
        writer.flush()?;

        Ok(())
    }

    /// ワークブックを解析してJSONレコードの配列を構築（内部ヘルパー）
    fn build_records<R: Read + Seek>(&self, input: R) -> Result<Vec<Value>, XlsxToJsonError> {
        // 1. ワークブックを開く
        let mut parser = WorkbookParser::open(input)?;

        // 2. シート選択の解決
        let sheet_name = parser.select_sheet(&self.config.sheet_selector)?;

        // 3. 表構造の抽出
        let table = parser.parse_table(&sheet_name)?;

        // 4. レコードへの変換
        JsonFormatter.to_records(&table, &self.formatter, &self.config)
    }
}
