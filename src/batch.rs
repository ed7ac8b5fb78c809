//! Batch Module
//!
//! 固定された変換ジョブ列の逐次実行を提供するモジュール。

use std::path::PathBuf;

use crate::builder::Converter;
use crate::error::XlsxToJsonError;

/// 1件の変換ジョブ（入力ワークブックと出力JSONファイルのパスの組）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionJob {
    /// 入力ワークブックのパス
    pub input: PathBuf,

    /// 出力JSONファイルのパス
    pub output: PathBuf,
}

impl ConversionJob {
    /// 新しい変換ジョブを生成
    ///
    /// # 使用例
    ///
    /// ```rust
    /// use xlsx2json::ConversionJob;
    ///
    /// let job = ConversionJob::new("catalogo_causas.xlsx", "causas.json");
    /// ```
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }
}

/// 変換ジョブ列を順番に実行する
///
/// ジョブはスライスの順序どおりに厳密に逐次実行されます。
/// いずれかのジョブが失敗した時点で実行を中断し、以降のジョブは
/// 実行されません（部分的な成功の報告やリトライはありません）。
///
/// # 引数
///
/// * `converter` - 使用するConverterインスタンス
/// * `jobs` - 実行する変換ジョブのスライス
///
/// # 戻り値
///
/// * `Ok(usize)` - すべてのジョブが成功した場合、完了したジョブ数
/// * `Err(XlsxToJsonError::Job)` - 最初に失敗したジョブの入力パスと元のエラー
///
/// # 使用例
///
/// ```rust,no_run
/// use xlsx2json::{run_batch, ConversionJob, ConverterBuilder};
///
/// # fn main() -> Result<(), xlsx2json::XlsxToJsonError> {
/// let converter = ConverterBuilder::new().build()?;
/// let jobs = [
///     ConversionJob::new("catalogo_causas.xlsx", "causas.json"),
///     ConversionJob::new("catalogo_modelos.xlsx", "modelos.json"),
/// ];
/// run_batch(&converter, &jobs)?;
/// # Ok(())
/// # }
/// ```
pub fn run_batch(
    converter: &Converter,
    jobs: &[ConversionJob],
) -> Result<usize, XlsxToJsonError> {
    for job in jobs {
        converter
            .convert_path(&job.input, &job.output)
            .map_err(|e| XlsxToJsonError::Job {
                input: job.input.clone(),
                source: Box::new(e),
            })?;
    }

    Ok(jobs.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversion_job_new() {
        let job = ConversionJob::new("catalogo_causas.xlsx", "causas.json");
        assert_eq!(job.input, PathBuf::from("catalogo_causas.xlsx"));
        assert_eq!(job.output, PathBuf::from("causas.json"));
    }

    // run_batchの動作はファイルシステムを使用するため、
    // 統合テスト（tests/batch_test.rs）で検証します。
}
