//! Formatter Module
//!
//! セル値をJSON値へ変換する処理を提供するモジュール。

use chrono::NaiveDateTime;
use serde_json::Value;

use crate::api::DateFormat;
use crate::builder::ConversionConfig;
use crate::error::XlsxToJsonError;
use crate::types::CellValue;

/// f64がJSON整数として正確に表現できる上限（2^53）
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

/// セルフォーマッター
///
/// セル値のJSON値への変換処理のファサードとして機能します。
#[derive(Debug)]
pub(crate) struct CellFormatter {
    /// 日付フォーマッター
    date_formatter: DateFormatter,
}

impl CellFormatter {
    /// 新しいCellFormatterインスタンスを生成
    pub fn new() -> Self {
        Self {
            date_formatter: DateFormatter,
        }
    }

    /// セル値をJSON値に変換
    ///
    /// # 変換規則
    ///
    /// - 文字列セル → JSON文字列
    /// - 数値セル → JSON数値（小数部を持たない値はJSON整数）
    /// - 論理値セル → JSON論理値
    /// - 日付セル → `DateFormat`に応じた値（ミリ秒数または文字列）
    /// - 空セル → JSON null
    /// - エラーセル（#DIV/0!など） → JSON null
    ///
    /// # 引数
    ///
    /// * `value` - パーサーから抽出されたセル値
    /// * `config` - 変換設定
    ///
    /// # 戻り値
    ///
    /// * `Ok(Value)` - 変換されたJSON値
    /// * `Err(XlsxToJsonError)` - エラーが発生した場合
    pub fn format_cell(
        &self,
        value: &CellValue,
        config: &ConversionConfig,
    ) -> Result<Value, XlsxToJsonError> {
        let json_value = match value {
            CellValue::Int(i) => Value::from(*i),

            CellValue::Float(f) => number_value(*f),

            CellValue::String(s) => Value::String(s.clone()),

            CellValue::Bool(b) => Value::Bool(*b),

            CellValue::DateTime(dt) => self.date_formatter.format(dt, &config.date_format)?,

            CellValue::DateTimeIso(s) | CellValue::Duration(s) => Value::String(s.clone()),

            // エラーセルは欠損値として扱う
            CellValue::Error(_) => Value::Null,

            CellValue::Empty => Value::Null,
        };

        Ok(json_value)
    }
}

impl Default for CellFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// 数値をJSON数値に変換
///
/// 小数部を持たず、JSON整数として正確に表現できる範囲の値は整数として
/// 出力します。非有限値（NaN、無限大）はJSONで表現できないためnullになります。
fn number_value(f: f64) -> Value {
    if f.is_finite() && f.fract() == 0.0 && f.abs() < MAX_SAFE_INTEGER {
        Value::from(f as i64)
    } else {
        serde_json::Number::from_f64(f)
            .map(Value::Number)
            .unwrap_or(Value::Null)
    }
}

/// 日付フォーマッター
///
/// 日付・時刻値を`DateFormat`に応じたJSON値に変換します。
#[derive(Debug)]
pub(crate) struct DateFormatter;

impl DateFormatter {
    /// 日付値をフォーマット
    ///
    /// # 引数
    ///
    /// * `dt` - 日付・時刻値
    /// * `format` - 日付形式
    ///
    /// # 戻り値
    ///
    /// * `Ok(Value)` - `EpochMillis`の場合はJSON数値、それ以外はJSON文字列
    pub fn format(
        &self,
        dt: &NaiveDateTime,
        format: &DateFormat,
    ) -> Result<Value, XlsxToJsonError> {
        let value = match format {
            DateFormat::EpochMillis => Value::from(dt.and_utc().timestamp_millis()),

            DateFormat::Iso8601 => {
                // 時刻成分を持たない日付は日付のみで出力
                let formatted = if dt.time() == chrono::NaiveTime::MIN {
                    dt.format("%Y-%m-%d").to_string()
                } else {
                    dt.format("%Y-%m-%dT%H:%M:%S").to_string()
                };
                Value::String(formatted)
            }

            DateFormat::Custom(format_str) => Value::String(dt.format(format_str).to_string()),
        };

        Ok(value)
    }
}
