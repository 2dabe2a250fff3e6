//! Config loading from environment variables

use std::path::PathBuf;
use std::str::FromStr;

use lexicheck::config::{LexicheckConfig, LogLevel};

use super::constants::{
  DEFAULT_BIND_ADDR, ENV_BIND_ADDR, ENV_LOG_LEVEL, ENV_VOCABULARY_PATH, MAX_TEXT_LENGTH,
};
use crate::errors::ApiError;

/// API Server Configuration
#[derive(Debug, Clone)]
pub struct Config {
  /// Bind address (e.g. "127.0.0.1:5540")
  pub bind_addr: String,
  /// Vocabulary snapshot path (`None` = per-user data directory)
  pub vocabulary_path: Option<PathBuf>,
  /// Log level used when `RUST_LOG` is not set
  pub log_level: LogLevel,
}

impl Config {
  /// Loads configuration from environment variables
  ///
  /// # Errors
  /// Returns an error if environment variable values are invalid
  pub fn from_env() -> crate::errors::Result<Self> {
    let bind_addr =
      std::env::var(ENV_BIND_ADDR).unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

    let vocabulary_path =
      std::env::var(ENV_VOCABULARY_PATH).ok().filter(|s| !s.is_empty()).map(PathBuf::from);

    let log_level = match std::env::var(ENV_LOG_LEVEL) {
      Ok(s) => LogLevel::from_str(&s).map_err(ApiError::config)?,
      Err(_) => LogLevel::default(),
    };

    Ok(Self {
      bind_addr,
      vocabulary_path,
      log_level,
    })
  }

  /// Converts to the core library configuration
  #[must_use]
  pub fn to_lexicheck_config(&self) -> LexicheckConfig {
    let mut config = LexicheckConfig::default();
    config.vocabulary.path = self.vocabulary_path.clone();
    config.analysis.max_text_bytes = MAX_TEXT_LENGTH;
    config.logging.level = self.log_level;
    config
  }
}
