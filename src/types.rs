//! Types Module
//!
//! クレート全体で使用する共通データ型を定義するモジュール。

use chrono::NaiveDateTime;

/// セルの値を表す列挙型
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum CellValue {
    /// 整数値
    Int(i64),

    /// 浮動小数点値
    Float(f64),

    /// 文字列
    String(String),

    /// 論理値
    Bool(bool),

    /// 日付・時刻値
    DateTime(NaiveDateTime),

    /// ISO 8601文字列として格納された日付・時刻値
    DateTimeIso(String),

    /// ISO 8601文字列として格納された期間値
    Duration(String),

    /// エラー値（例: #DIV/0!）
    Error(String),

    /// 空セル
    Empty,
}

impl CellValue {
    /// 値が空かどうかを判定
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// ヘッダー名として使用する文字列を取得
    ///
    /// 空セルの場合は`None`を返します（呼び出し側で列名にフォールバック）。
    /// 小数部を持たない数値はExcelの表示に合わせて整数として文字列化します。
    pub fn header_name(&self) -> Option<String> {
        match self {
            CellValue::Int(i) => Some(i.to_string()),
            CellValue::Float(f) => {
                if f.is_finite() && f.fract() == 0.0 {
                    Some(format!("{}", *f as i64))
                } else {
                    Some(f.to_string())
                }
            }
            CellValue::String(s) => Some(s.clone()),
            CellValue::Bool(b) => Some(b.to_string()),
            CellValue::DateTime(dt) => Some(dt.format("%Y-%m-%d %H:%M:%S").to_string()),
            CellValue::DateTimeIso(s) | CellValue::Duration(s) => Some(s.clone()),
            CellValue::Error(e) => Some(e.clone()),
            CellValue::Empty => None,
        }
    }
}

/// 1シート分の表データ
///
/// 先頭行から得られた列名と、データ行の生のセル値を保持します。
/// 各データ行の長さは常に`headers.len()`と一致します（パーサーが保証）。
#[derive(Debug, Clone, Default)]
pub(crate) struct Table {
    /// 列名（列順）
    pub headers: Vec<String>,

    /// データ行（行順、各行は列順のセル値）
    pub rows: Vec<Vec<CellValue>>,
}

impl Table {
    /// 空の表を生成
    pub fn empty() -> Self {
        Self::default()
    }

    /// データ行数を取得（ヘッダー行は含まない）
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// 列インデックスをExcel列名（A, B, C, ...）に変換
pub(crate) fn col_to_letter(mut col: u32) -> String {
    let mut result = String::new();
    loop {
        result.push((b'A' + (col % 26) as u8) as char);
        if col < 26 {
            break;
        }
        col = col / 26 - 1;
    }
    result.chars().rev().collect()
}
