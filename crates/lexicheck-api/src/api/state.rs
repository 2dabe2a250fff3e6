//! API State Definition

use std::sync::Arc;

use crate::config::Config;
use crate::service::LexicheckApiService;

/// Application State
///
/// State shared across the entire server.
/// Contains configuration and service.
#[derive(Clone)]
pub struct AppState {
  /// Configuration
  pub config: Config,
  /// Vocabulary Analysis Service
  ///
  /// - Production: `Arc::new(LexicheckApiServiceFull::new(&config)?)`
  /// - Test: `Arc::new(StubLexicheckApiService)`
  pub service: Arc<dyn LexicheckApiService>,
}

impl AppState {
  /// Creates a new AppState
  #[must_use]
  pub fn new(config: Config, service: Arc<dyn LexicheckApiService>) -> Self {
    Self { config, service }
  }
}
