//! APIエラー定義
//!
//! すべての失敗は `{"error": {"code": ..., "message": ...}}` 形式の JSON で返す。
//! axum の抽出エラー（不正な JSON、サイズ超過）もこの形式に揃える。

use axum::{
  Json,
  extract::rejection::JsonRejection,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

use lexicheck::errors::{CorpusLoadError, LexicheckError};

/// エラーの種類（レスポンスの `code` と HTTP ステータスを決める）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
  /// リクエストボディが JSON として読めない、または `text` がない
  InvalidRequest,
  /// リクエストボディがサーバーの受信上限を超えた
  PayloadTooLarge,
  /// `text` が解析上限のバイト数を超えた
  TextTooLong,
  /// 語彙スナップショットが使えない
  VocabularyUnavailable,
  /// 起動時の設定エラー
  Config,
  /// 内部エラー
  Internal,
}

impl ApiErrorKind {
  /// レスポンスの `code` フィールド
  #[must_use]
  pub fn code(self) -> &'static str {
    match self {
      Self::InvalidRequest => "invalid_request",
      Self::PayloadTooLarge => "payload_too_large",
      Self::TextTooLong => "text_too_long",
      Self::VocabularyUnavailable => "vocabulary_unavailable",
      Self::Config => "config_error",
      Self::Internal => "internal_error",
    }
  }

  /// HTTPステータスコード
  #[must_use]
  pub fn status(self) -> StatusCode {
    match self {
      Self::InvalidRequest | Self::TextTooLong => StatusCode::BAD_REQUEST,
      Self::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
      Self::VocabularyUnavailable => StatusCode::SERVICE_UNAVAILABLE,
      Self::Config | Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }
}

/// APIエラー
#[derive(Debug, Error)]
pub enum ApiError {
  /// リクエストボディの解釈に失敗
  #[error("リクエストが不正です: {reason}")]
  InvalidRequest {
    /// axum が報告した理由
    reason: String,
  },

  /// リクエストボディが受信上限を超えた
  #[error("リクエストボディが大きすぎます: {reason}")]
  PayloadTooLarge {
    /// axum が報告した理由
    reason: String,
  },

  /// 解析対象テキストが長すぎる
  #[error("テキストが長すぎます: {actual} バイト（最大: {max} バイト）")]
  TextTooLong {
    /// 受け取ったバイト数
    actual: usize,
    /// 許容される最大バイト数
    max: usize,
  },

  /// 語彙スナップショットのロード失敗
  #[error("語彙をロードできません: {0}")]
  VocabularyUnavailable(#[from] CorpusLoadError),

  /// 設定エラー
  #[error("設定エラー: {0}")]
  Config(String),

  /// 内部エラー
  #[error("内部エラー: {0}")]
  Internal(String),
}

impl ApiError {
  /// エラーの種類を取得
  #[must_use]
  pub fn kind(&self) -> ApiErrorKind {
    match self {
      Self::InvalidRequest { .. } => ApiErrorKind::InvalidRequest,
      Self::PayloadTooLarge { .. } => ApiErrorKind::PayloadTooLarge,
      Self::TextTooLong { .. } => ApiErrorKind::TextTooLong,
      Self::VocabularyUnavailable(_) => ApiErrorKind::VocabularyUnavailable,
      Self::Config(_) => ApiErrorKind::Config,
      Self::Internal(_) => ApiErrorKind::Internal,
    }
  }

  /// エラーコードを取得
  #[must_use]
  pub fn code(&self) -> &'static str {
    self.kind().code()
  }

  /// HTTPステータスコードを取得
  #[must_use]
  pub fn status(&self) -> StatusCode {
    self.kind().status()
  }

  /// テキスト長超過エラーを作成
  #[must_use]
  pub fn text_too_long(actual: usize, max: usize) -> Self {
    Self::TextTooLong { actual, max }
  }

  /// 内部エラーを作成
  #[must_use]
  pub fn internal(message: impl Into<String>) -> Self {
    Self::Internal(message.into())
  }

  /// 設定エラーを作成
  #[must_use]
  pub fn config(message: impl Into<String>) -> Self {
    Self::Config(message.into())
  }

  /// 上限値の詳細（テキスト長超過のときのみ）
  fn limit(&self) -> Option<TextLimit> {
    match self {
      Self::TextTooLong { actual, max } => Some(TextLimit {
        actual: *actual,
        max: *max,
      }),
      _ => None,
    }
  }
}

/// エラーレスポンスのJSON構造
#[derive(Serialize)]
struct ErrorResponse {
  error: ErrorBody,
}

#[derive(Serialize)]
struct ErrorBody {
  code: &'static str,
  message: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  limit: Option<TextLimit>,
}

#[derive(Serialize)]
struct TextLimit {
  actual: usize,
  max: usize,
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = self.status();
    if status.is_server_error() {
      error!(code = self.code(), error = %self, "リクエスト処理に失敗");
    } else {
      warn!(code = self.code(), error = %self, "リクエストを拒否");
    }

    let body = ErrorResponse {
      error: ErrorBody {
        code: self.code(),
        message: self.to_string(),
        limit: self.limit(),
      },
    };

    (status, Json(body)).into_response()
  }
}

/// axum の Json 抽出エラーを API エラーに揃える
///
/// ボディ受信上限の超過は 413、それ以外（構文エラー、欠落フィールド、Content-Type 不一致）は 400。
impl From<JsonRejection> for ApiError {
  fn from(rejection: JsonRejection) -> Self {
    let reason = rejection.body_text();
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
      Self::PayloadTooLarge { reason }
    } else {
      Self::InvalidRequest { reason }
    }
  }
}

/// LexicheckError から ApiError への変換
impl From<LexicheckError> for ApiError {
  fn from(err: LexicheckError) -> Self {
    match err {
      LexicheckError::CorpusLoad(source) => Self::VocabularyUnavailable(source),
      LexicheckError::Config(source) => Self::Config(source.to_string()),
      LexicheckError::Build(source) => Self::Internal(source.to_string()),
      // #[non_exhaustive] な enum のため、将来追加されるバリアントに対応
      other => Self::Internal(other.to_string()),
    }
  }
}

/// Result 型エイリアス
pub type Result<T> = std::result::Result<T, ApiError>;
