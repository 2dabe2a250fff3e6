//! HTTPハンドラー定義

use axum::{
  Json,
  extract::{State, rejection::JsonRejection},
};
use tracing::{debug, error, info};

use crate::errors::ApiError;
use crate::models::{AnalyzeRequest, AnalyzeResponse, VocabularyInfoResponse};

use super::state::AppState;

/// POST /analyze エンドポイント
///
/// テキスト中の異なり語のうち、参照語彙に含まれる割合を返す。
///
/// # Request Body
/// ```json
/// { "text": "解析対象のテキスト" }
/// ```
///
/// # Response
/// - 200 OK: 解析成功（空テキストも 0% として成功）
/// - 400 Bad Request: JSON が不正 (`invalid_request`)、テキスト長超過 (`text_too_long`)
/// - 413 Payload Too Large: ボディが受信上限を超えた (`payload_too_large`)
/// - 500 Internal Server Error: 内部エラー
pub async fn post_analyze(
  State(state): State<AppState>,
  payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
  let Json(request) = payload?;
  debug!(text_len = request.text.len(), "解析リクエストを受信");

  // CPUバウンドな処理を spawn_blocking で実行
  // 大きなテキストのトークナイズで非同期ランタイムをブロックしないよう分離
  let service = state.service.clone();

  let response =
    tokio::task::spawn_blocking(move || service.analyze(request)).await.map_err(|e| {
      error!(error = %e, "spawn_blocking エラー");
      ApiError::internal("処理の実行に失敗しました")
    })??;

  info!(
    total_words = response.result.total_words,
    words_in_bible = response.result.words_in_bible,
    percentage = response.result.percentage,
    elapsed_ms = response.elapsed_ms,
    "解析完了"
  );

  Ok(Json(response))
}

/// GET /vocabulary エンドポイント
///
/// ロード済み語彙のラベルと語数を返す。
pub async fn get_vocabulary(State(state): State<AppState>) -> Json<VocabularyInfoResponse> {
  Json(state.service.vocabulary_info())
}

/// ヘルスチェックエンドポイント
///
/// サーバーが稼働しているかを確認する。
pub async fn health_check() -> &'static str {
  "OK"
}
