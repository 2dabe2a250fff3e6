//! API統合テスト
//!
//! Router 経由で HTTP エンドポイントの振る舞いを検証する。
//! スタブサービスと小さなインメモリ語彙を使用するため、スナップショットファイル不要で高速なテスト。

use std::sync::Arc;

use axum::{
  Router,
  body::Body,
  http::{Request, StatusCode},
};
use tower::ServiceExt;

use lexicheck::{
  AnalysisResult, LexicheckService, config::LexicheckConfig, config::LogLevel,
  vocabulary::VocabularyIndex,
};
use lexicheck_api::{
  api::{AppState, create_router},
  config::{Config, MAX_TEXT_LENGTH},
  errors::{ApiError, Result as ApiResult},
  models::{AnalyzeRequest, AnalyzeResponse, VocabularyInfoResponse},
  service::{LexicheckApiService, LexicheckApiServiceFull},
};

/// 統合テスト用の軽量スタブサービス
///
/// - `max_bytes` 超過: `text_too_long` エラー
/// - それ以外: 空の解析結果と 0ms を返す
struct StubLexicheckApiService {
  max_bytes: usize,
}

impl LexicheckApiService for StubLexicheckApiService {
  fn analyze(&self, request: AnalyzeRequest) -> ApiResult<AnalyzeResponse> {
    let text_bytes = request.text.len();

    if text_bytes > self.max_bytes {
      return Err(ApiError::text_too_long(text_bytes, self.max_bytes));
    }

    Ok(AnalyzeResponse {
      result: AnalysisResult::default(),
      elapsed_ms: 0,
    })
  }

  fn vocabulary_info(&self) -> VocabularyInfoResponse {
    VocabularyInfoResponse {
      source: "stub".to_string(),
      word_count: 0,
    }
  }
}

fn test_config() -> Config {
  Config {
    bind_addr: "127.0.0.1:0".to_string(),
    vocabulary_path: None,
    log_level: LogLevel::Info,
  }
}

/// スタブを注入した Router を構築する
fn stub_app(max_bytes: usize) -> Router {
  let service: Arc<dyn LexicheckApiService> = Arc::new(StubLexicheckApiService { max_bytes });
  create_router(AppState::new(test_config(), service))
}

/// 本番実装 + インメモリ語彙の Router を構築する
fn full_app(vocabulary_text: &str) -> Router {
  let index = VocabularyIndex::build("test corpus", vocabulary_text);
  let inner = LexicheckService::from_index(index, &LexicheckConfig::default())
    .expect("in-memory service should initialize");
  let service: Arc<dyn LexicheckApiService> = Arc::new(LexicheckApiServiceFull::from_service(inner));
  create_router(AppState::new(test_config(), service))
}

fn post_analyze_request(body: impl Into<Body>) -> Request<Body> {
  Request::builder()
    .method("POST")
    .uri("/analyze")
    .header("content-type", "application/json")
    .body(body.into())
    .unwrap()
}

async fn read_json(response: axum::response::Response) -> serde_json::Value {
  let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.expect("read body");
  serde_json::from_slice(&body_bytes).expect("body should be valid json")
}

// ============================================================================
// 正常系テスト
// ============================================================================

#[tokio::test]
async fn health_check_returns_ok() {
  let app = stub_app(MAX_TEXT_LENGTH);

  let response = app
    .oneshot(Request::builder().method("GET").uri("/health").body(Body::empty()).unwrap())
    .await
    .expect("request should succeed");

  assert_eq!(response.status(), StatusCode::OK);

  let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.expect("read body");
  assert_eq!(body_bytes.as_ref(), b"OK");
}

#[tokio::test]
async fn post_analyze_returns_camel_case_result() {
  let app = full_app("the fox");

  let payload = serde_json::json!({ "text": "The quick brown fox jumps over the lazy dog" });
  let response = app
    .oneshot(post_analyze_request(payload.to_string()))
    .await
    .expect("request should succeed");

  assert_eq!(response.status(), StatusCode::OK);

  let json = read_json(response).await;
  assert_eq!(json["totalWords"], 8);
  assert_eq!(json["wordsInBible"], 2);
  assert_eq!(json["percentage"], 25);
  assert_eq!(json["foundWords"], serde_json::json!(["fox", "the"]));
  assert_eq!(
    json["notFoundWords"],
    serde_json::json!(["brown", "dog", "jumps", "lazy", "over", "quick"])
  );
  assert!(json.get("elapsedMs").is_some());
}

#[tokio::test]
async fn post_analyze_empty_text_returns_zero_result() {
  let app = full_app("the fox");

  let payload = serde_json::json!({ "text": "" });
  let response = app
    .oneshot(post_analyze_request(payload.to_string()))
    .await
    .expect("request should succeed");

  assert_eq!(response.status(), StatusCode::OK);

  let json = read_json(response).await;
  assert_eq!(json["totalWords"], 0);
  assert_eq!(json["wordsInBible"], 0);
  assert_eq!(json["percentage"], 0);
  assert_eq!(json["foundWords"], serde_json::json!([]));
  assert_eq!(json["notFoundWords"], serde_json::json!([]));
}

#[tokio::test]
async fn get_vocabulary_describes_loaded_snapshot() {
  let app = full_app("In the beginning God created the heaven and the earth.");

  let response = app
    .oneshot(Request::builder().method("GET").uri("/vocabulary").body(Body::empty()).unwrap())
    .await
    .expect("request should succeed");

  assert_eq!(response.status(), StatusCode::OK);

  let json = read_json(response).await;
  assert_eq!(json["source"], "test corpus");
  assert_eq!(json["wordCount"], 8);
}

// ============================================================================
// 異常系テスト（サービスエラー）
// ============================================================================

#[tokio::test]
async fn post_analyze_too_long_text_returns_400() {
  let app = stub_app(16);

  let payload = serde_json::json!({ "text": "a".repeat(17) });
  let response = app
    .oneshot(post_analyze_request(payload.to_string()))
    .await
    .expect("request should succeed");

  assert_eq!(response.status(), StatusCode::BAD_REQUEST);

  let json = read_json(response).await;
  assert_eq!(json["error"]["code"], "text_too_long");
  assert_eq!(json["error"]["limit"]["max"], 16);
}

#[tokio::test]
async fn post_analyze_oversized_body_returns_payload_too_large() {
  let app = stub_app(MAX_TEXT_LENGTH);

  // MAX_TEXT_LENGTH + 1 バイトのテキストを送る
  // 注: Axum のデフォルトリクエストサイズ制限（2MB）が先に適用されるため、
  // 413 PAYLOAD_TOO_LARGE が返る
  let long_text = "a".repeat(MAX_TEXT_LENGTH + 1);
  let payload = serde_json::json!({ "text": long_text });

  let response = app
    .oneshot(post_analyze_request(payload.to_string()))
    .await
    .expect("request should succeed");

  assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);

  let json = read_json(response).await;
  assert_eq!(json["error"]["code"], "payload_too_large");
}

// ============================================================================
// JSON パースエラーテスト（Axum 側）
// ============================================================================

#[tokio::test]
async fn post_analyze_invalid_json_returns_invalid_request() {
  let app = stub_app(MAX_TEXT_LENGTH);

  let response = app
    .oneshot(post_analyze_request("{ invalid json"))
    .await
    .expect("request should succeed");

  assert_eq!(response.status(), StatusCode::BAD_REQUEST);

  let json = read_json(response).await;
  assert_eq!(json["error"]["code"], "invalid_request");
  assert!(json["error"]["message"].as_str().is_some_and(|m| !m.is_empty()));
}

#[tokio::test]
async fn post_analyze_missing_text_field_returns_invalid_request() {
  let app = stub_app(MAX_TEXT_LENGTH);

  let payload = serde_json::json!({ "foo": "bar" });
  let response = app
    .oneshot(post_analyze_request(payload.to_string()))
    .await
    .expect("request should succeed");

  // axum 単体では 422 だが、API エラーとして 400 に揃える
  assert_eq!(response.status(), StatusCode::BAD_REQUEST);

  let json = read_json(response).await;
  assert_eq!(json["error"]["code"], "invalid_request");
}

#[tokio::test]
async fn post_analyze_without_json_content_type_returns_invalid_request() {
  let app = stub_app(MAX_TEXT_LENGTH);

  let request = Request::builder()
    .method("POST")
    .uri("/analyze")
    .body(Body::from(r#"{"text":"the fox"}"#))
    .unwrap();
  let response = app.oneshot(request).await.expect("request should succeed");

  assert_eq!(response.status(), StatusCode::BAD_REQUEST);

  let json = read_json(response).await;
  assert_eq!(json["error"]["code"], "invalid_request");
}
