//! Public API Types
//!
//! 公開APIで使用する列挙型を定義するモジュール。

/// シート選択方式
///
/// 変換対象のワークシートを選択する方法を指定します。
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SheetSelector {
    /// 先頭のシートを変換（デフォルト）
    ///
    /// ワークブックの最初のシートを対象とします。
    First,

    /// インデックス指定（0始まり）
    ///
    /// 例: `SheetSelector::Index(2)` は3番目のシートを選択
    Index(usize),

    /// シート名指定
    ///
    /// 例: `SheetSelector::Name("Plan1".to_string())`
    Name(String),
}

/// 日付セルの出力形式
///
/// 日付セルをJSON値に変換する際の出力形式を指定します。
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DateFormat {
    /// Unixエポックからのミリ秒数（デフォルト）
    ///
    /// 日付セルをJSON数値として出力します。
    /// 例: `2024-05-15` → `1715731200000`
    EpochMillis,

    /// ISO 8601形式の文字列
    ///
    /// 時刻が00:00:00の場合は日付のみ（`YYYY-MM-DD`）、
    /// それ以外は`YYYY-MM-DDTHH:MM:SS`として出力します。
    ///
    /// 例: `2024-05-15` → `"2024-05-15"`
    Iso8601,

    /// カスタム形式（chrono互換フォーマット文字列）
    ///
    /// chrono互換のフォーマット文字列を使用して、カスタム日付形式を指定します。
    ///
    /// # フォーマット指定子（主要なもの）
    ///
    /// - `%Y`: 4桁の年（例: 2024）
    /// - `%m`: 2桁の月（01-12）
    /// - `%d`: 2桁の日（01-31）
    /// - `%H`: 24時間形式の時（00-23）
    /// - `%M`: 分（00-59）
    /// - `%S`: 秒（00-59）
    ///
    /// # 使用例
    ///
    /// ```rust,no_run
    /// use xlsx2json::{ConverterBuilder, DateFormat};
    ///
    /// # fn main() -> Result<(), xlsx2json::XlsxToJsonError> {
    /// let converter = ConverterBuilder::new()
    ///     .with_date_format(DateFormat::Custom("%d/%m/%Y".to_string()))
    ///     .build()?;
    /// # Ok(())
    /// # }
    /// ```
    Custom(String),
}
