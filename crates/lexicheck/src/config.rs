// crates/lexicheck/src/config.rs

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::errors::{ConfigError, CorpusLoadError};
use crate::vocabulary::vocabulary_store::default_snapshot_path;

/// Default upper bound on analyzed input (bytes)
///
/// 10MB. Callers that accept text from the outside reject anything larger.
pub const DEFAULT_MAX_TEXT_BYTES: usize = 10_000_000;

/// Top-level configuration for lexicheck.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LexicheckConfig {
  /// [vocabulary] section
  #[serde(default)]
  pub vocabulary: VocabularyConfig,
  /// [analysis] section
  #[serde(default)]
  pub analysis: AnalysisConfig,
  /// [logging] section
  #[serde(default)]
  pub logging: LoggingConfig,
}

/// [vocabulary] section configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VocabularyConfig {
  /// Snapshot file path.
  ///
  /// If omitted, it becomes `None` and the per-user data directory is used.
  #[serde(default)]
  pub path: Option<PathBuf>,
}

/// [analysis] section configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisConfig {
  /// Maximum accepted input size in bytes
  #[serde(default = "default_max_text_bytes")]
  pub max_text_bytes: usize,
}

fn default_max_text_bytes() -> usize {
  DEFAULT_MAX_TEXT_BYTES
}

impl Default for AnalysisConfig {
  fn default() -> Self {
    Self {
      max_text_bytes: DEFAULT_MAX_TEXT_BYTES,
    }
  }
}

/// [logging] section configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingConfig {
  /// Log level: "trace" | "debug" | "info" | "warn" | "error"
  #[serde(default)]
  pub level: LogLevel,
}

/// Log level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
  /// trace
  Trace,

  /// debug
  Debug,

  /// info
  #[default]
  Info,

  /// warn
  Warn,

  /// error
  Error,
}

impl LogLevel {
  /// Directive string accepted by `tracing_subscriber::EnvFilter`
  pub fn as_str(&self) -> &'static str {
    match self {
      LogLevel::Trace => "trace",
      LogLevel::Debug => "debug",
      LogLevel::Info => "info",
      LogLevel::Warn => "warn",
      LogLevel::Error => "error",
    }
  }
}

impl std::str::FromStr for LogLevel {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_lowercase().as_str() {
      "trace" => Ok(LogLevel::Trace),
      "debug" => Ok(LogLevel::Debug),
      "info" => Ok(LogLevel::Info),
      "warn" => Ok(LogLevel::Warn),
      "error" => Ok(LogLevel::Error),
      _ => Err(format!(
        "Unknown log level: {s}. Valid values: trace, debug, info, warn, error"
      )),
    }
  }
}

impl std::fmt::Display for LogLevel {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

// ===== Accessor Methods =====

impl LexicheckConfig {
  /// Config reading the snapshot at `path`, everything else default.
  pub fn with_vocabulary_path(path: impl Into<PathBuf>) -> Self {
    Self {
      vocabulary: VocabularyConfig {
        path: Some(path.into()),
      },
      ..Self::default()
    }
  }

  /// Returns the configured snapshot path.
  ///
  /// `None` if unspecified.
  pub fn vocabulary_path(&self) -> Option<&Path> {
    self.vocabulary.path.as_deref()
  }

  /// Returns the snapshot path to actually read: the configured one, or the default location.
  ///
  /// # Errors
  /// [`CorpusLoadError::DataDirNotFound`] if no path is configured and the platform has
  /// no data directory.
  pub fn resolved_vocabulary_path(&self) -> Result<PathBuf, CorpusLoadError> {
    match &self.vocabulary.path {
      Some(path) => Ok(path.clone()),
      None => default_snapshot_path(),
    }
  }

  /// Returns the maximum accepted input size in bytes.
  pub fn max_text_bytes(&self) -> usize {
    self.analysis.max_text_bytes
  }

  /// Returns the log level.
  pub fn log_level(&self) -> LogLevel {
    self.logging.level
  }

  /// Validates the configuration.
  ///
  /// # Validation Items
  /// - `analysis.max_text_bytes` >= 1
  /// - `vocabulary.path`, if set, is not a directory
  ///
  /// Whether the snapshot exists is not checked here; that surfaces as a
  /// `CorpusLoadError` when it is loaded.
  ///
  /// # Errors
  /// Returns the corresponding `ConfigError` if validation fails.
  pub fn validate(&self) -> Result<(), ConfigError> {
    if self.analysis.max_text_bytes < 1 {
      return Err(ConfigError::InvalidMaxTextBytes {
        actual: self.analysis.max_text_bytes,
      });
    }

    if let Some(path) = &self.vocabulary.path {
      if path.is_dir() {
        return Err(ConfigError::VocabularyPathIsDirectory { path: path.clone() });
      }
    }

    Ok(())
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────
