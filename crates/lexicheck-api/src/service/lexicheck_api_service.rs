//! Vocabulary Analysis Service

use std::time::Instant;

use lexicheck::LexicheckService;

use crate::config::Config;
use crate::errors::{ApiError, Result};
use crate::models::{AnalyzeRequest, AnalyzeResponse, VocabularyInfoResponse};

/// Common interface for the analysis service
///
/// This trait allows swapping production implementation (`LexicheckApiServiceFull`) with
/// test stubs/mocks.
pub trait LexicheckApiService: Send + Sync {
  /// Executes vocabulary membership analysis
  ///
  /// Empty or word-less text is not an error; it yields an all-zero result.
  ///
  /// # Errors
  /// - Text exceeds the maximum length
  fn analyze(&self, request: AnalyzeRequest) -> Result<AnalyzeResponse>;

  /// Describes the loaded vocabulary
  fn vocabulary_info(&self) -> VocabularyInfoResponse;
}

/// Analysis Service backed by a loaded vocabulary snapshot
pub struct LexicheckApiServiceFull {
  /// Core service (holds the shared, read-only vocabulary)
  inner: LexicheckService,
}

impl LexicheckApiServiceFull {
  /// Initializes the service
  ///
  /// # Arguments
  /// * `config` - Configuration (including the snapshot path)
  ///
  /// # Errors
  /// Returns an error if the vocabulary snapshot is missing or corrupt.
  /// The server cannot run without it, so this is not retried.
  pub fn new(config: &Config) -> Result<Self> {
    let inner = LexicheckService::init(&config.to_lexicheck_config())?;
    Ok(Self { inner })
  }

  /// Wraps an already initialized core service
  #[must_use]
  pub fn from_service(inner: LexicheckService) -> Self {
    Self { inner }
  }

  /// Executes analysis
  ///
  /// # Arguments
  /// * `request` - Analysis request
  ///
  /// # Returns
  /// Analysis result and processing time
  ///
  /// # Errors
  /// - If text exceeds maximum length
  pub fn analyze(&self, request: AnalyzeRequest) -> Result<AnalyzeResponse> {
    // Validate text length
    let text_bytes = request.text.len();
    let max_bytes = self.inner.max_text_bytes();
    if text_bytes > max_bytes {
      return Err(ApiError::text_too_long(text_bytes, max_bytes));
    }

    // Start measuring processing time
    let start = Instant::now();

    let result = self.inner.analyze(&request.text);

    // End measuring processing time
    let elapsed_ms = start.elapsed().as_millis() as u64;

    Ok(AnalyzeResponse { result, elapsed_ms })
  }

  /// Describes the loaded vocabulary
  #[must_use]
  pub fn vocabulary_info(&self) -> VocabularyInfoResponse {
    let vocabulary = self.inner.vocabulary();
    VocabularyInfoResponse {
      source: vocabulary.source().to_string(),
      word_count: vocabulary.len(),
    }
  }
}

/// Production implementation of trait `LexicheckApiService`
impl LexicheckApiService for LexicheckApiServiceFull {
  fn analyze(&self, request: AnalyzeRequest) -> Result<AnalyzeResponse> {
    // Note: Writing `self.analyze(...)` would recursively call the trait method,
    // so explicitly call the inherent method.
    LexicheckApiServiceFull::analyze(self, request)
  }

  fn vocabulary_info(&self) -> VocabularyInfoResponse {
    LexicheckApiServiceFull::vocabulary_info(self)
  }
}
