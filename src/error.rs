//! Error Types Module
//!
//! クレート全体で使用する構造化エラー型を定義するモジュール。
//! `thiserror`を使用して、エラーの自動変換とメッセージフォーマットを実現する。

use std::path::PathBuf;
use thiserror::Error;

/// xlsx2jsonクレート全体で使用するエラー型
///
/// このエラー型は、ワークブックの読み込み、解析、JSON変換処理中に発生する
/// すべてのエラーを統一的に扱うために使用されます。
///
/// # エラーの種類
///
/// - `Io`: I/O操作中に発生したエラー（ファイル読み込み・書き込み失敗など）
/// - `Parse`: ワークブックの解析中に発生したエラー（calamine由来）
/// - `Json`: JSONシリアライズ中に発生したエラー（serde_json由来）
/// - `Config`: 設定の検証に失敗したエラー（無効なシート指定など）
/// - `SecurityViolation`: 入力サイズ制限に違反したエラー
/// - `Job`: バッチ実行中の1件の変換が失敗したエラー（入力パス付き）
///
/// # 使用例
///
/// ```rust,no_run
/// use std::fs::File;
/// use xlsx2json::XlsxToJsonError;
///
/// fn open_workbook(path: &str) -> Result<(), XlsxToJsonError> {
///     let file = File::open(path)?;  // Ioエラーが自動的に変換される
///     // ... 処理 ...
///     Ok(())
/// }
/// ```
#[derive(Error, Debug)]
pub enum XlsxToJsonError {
    /// I/O操作中に発生したエラー
    ///
    /// 入力ファイルの読み込み失敗、出力ファイルの作成・書き込み失敗など、
    /// 標準ライブラリの`std::io::Error`が発生した場合に使用されます。
    ///
    /// `#[from]`属性により、`std::io::Error`から自動的に変換されます。
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// ワークブックの解析中に発生したエラー
    ///
    /// calamineクレートがワークブックを解析する際に発生したエラーです。
    /// ファイル形式が不正、破損したファイルなどが原因となります。
    ///
    /// `#[from]`属性により、`calamine::Error`から自動的に変換されます。
    #[error("Failed to parse workbook: {0}")]
    Parse(#[from] calamine::Error),

    /// JSONシリアライズ中に発生したエラー
    ///
    /// `#[from]`属性により、`serde_json::Error`から自動的に変換されます。
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// 設定の検証に失敗したエラー
    ///
    /// `ConverterBuilder::build()`時の設定検証、またはシート選択の解決に
    /// 失敗した場合に発生します。例えば、指定されたシートが存在しない場合や、
    /// カスタム日付形式が不正な場合などです。
    ///
    /// # 例
    ///
    /// ```rust,no_run
    /// use xlsx2json::{ConverterBuilder, DateFormat, XlsxToJsonError};
    ///
    /// let result = ConverterBuilder::new()
    ///     .with_date_format(DateFormat::Custom("".to_string()))  // 無効な形式
    ///     .build();
    ///
    /// match result {
    ///     Err(XlsxToJsonError::Config(msg)) => {
    ///         println!("設定エラー: {}", msg);
    ///     }
    ///     _ => {}
    /// }
    /// ```
    #[error("Configuration error: {0}")]
    Config(String),

    /// セキュリティ制限に違反したエラー
    ///
    /// 入力ファイルサイズの上限を超過した場合に発生します。
    #[error("Security violation: {0}")]
    SecurityViolation(String),

    /// バッチ実行中の1件の変換が失敗したエラー
    ///
    /// `run_batch`が変換の失敗を検出した際、どの入力で失敗したかを
    /// 保持するために元のエラーをラップします。
    #[error("Failed to convert '{}': {source}", .input.display())]
    Job {
        /// 失敗した変換の入力パス
        input: PathBuf,
        /// 元のエラー
        #[source]
        source: Box<XlsxToJsonError>,
    },
}
