//! リクエストモデル定義

use serde::Deserialize;

/// 語彙解析リクエスト
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
  /// 解析対象のテキスト
  pub text: String,
}
