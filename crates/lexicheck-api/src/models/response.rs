//! Response Model Definition

use lexicheck::AnalysisResult;
use serde::Serialize;

/// Vocabulary Analysis Response
///
/// The analysis fields are flattened, so the body is the analysis record plus `elapsedMs`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
  /// Analysis result
  #[serde(flatten)]
  pub result: AnalysisResult,
  /// Elapsed time (milliseconds)
  pub elapsed_ms: u64,
}

/// Loaded vocabulary information
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabularyInfoResponse {
  /// Label of the reference corpus
  pub source: String,
  /// Number of distinct words
  pub word_count: usize,
}
