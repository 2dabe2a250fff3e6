//! Error definitions
//!
//! Tokenization and analysis are total and have no error type.
//! Everything here concerns acquiring or producing a vocabulary snapshot.

use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// Configuration (LexicheckConfig) errors
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum ConfigError {
  /// analysis.max_text_bytes < 1
  #[error("analysis.max_text_bytes must be at least 1: actual={actual}")]
  InvalidMaxTextBytes {
    /// Value actually specified
    actual: usize,
  },

  /// vocabulary.path points at a directory
  #[error("vocabulary.path must point to a file, not a directory: path={path:?}")]
  VocabularyPathIsDirectory {
    /// Offending path
    path: PathBuf,
  },
}

/// Failure to obtain a usable vocabulary snapshot.
///
/// Fatal for callers: nothing can be analyzed without a vocabulary, and loading is never retried.
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum CorpusLoadError {
  /// No platform data directory to derive the default snapshot path from
  #[error("could not determine a data directory for the default vocabulary path")]
  DataDirNotFound,

  /// Snapshot file does not exist
  #[error("vocabulary snapshot not found: {0}")]
  NotFound(PathBuf),

  /// Snapshot file exists but could not be read
  #[error("failed to read vocabulary snapshot: path={path:?}, error={source}")]
  Io {
    /// Snapshot path
    path: PathBuf,
    /// Underlying I/O error
    #[source]
    source: Arc<io::Error>,
  },

  /// Snapshot is not valid JSON, or a required field is missing or mistyped
  #[error("malformed vocabulary snapshot: {0}")]
  Malformed(Arc<serde_json::Error>),

  /// `wordCount` disagrees with the number of entries in `words`
  #[error("vocabulary snapshot wordCount={declared} but words has {actual} entries")]
  WordCountMismatch {
    /// Value of the `wordCount` field
    declared: usize,
    /// Length of the `words` array
    actual: usize,
  },

  /// `words` is not strictly ascending (out of order, or a duplicate entry)
  #[error("vocabulary snapshot words are not strictly ascending at index {position}: {previous:?} then {word:?}")]
  UnsortedWords {
    /// Index of the offending entry
    position: usize,
    /// Entry before it
    previous: String,
    /// Offending entry
    word: String,
  },

  /// An entry the tokenizer would never emit, so it could never be matched
  #[error("vocabulary snapshot entry {position} is not a normalized word: {word:?}")]
  NonNormalizedWord {
    /// Index of the offending entry
    position: usize,
    /// Offending entry
    word: String,
  },
}

impl From<serde_json::Error> for CorpusLoadError {
  fn from(err: serde_json::Error) -> Self {
    CorpusLoadError::Malformed(Arc::new(err))
  }
}

/// Errors while building and persisting a snapshot from raw reference text
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum BuildError {
  /// Raw reference text could not be read
  #[error("failed to read raw reference text: path={path:?}, error={source}")]
  ReadRawText {
    /// Raw text path
    path: PathBuf,
    /// Underlying I/O error
    #[source]
    source: Arc<io::Error>,
  },

  /// Snapshot could not be serialized
  #[error("failed to serialize vocabulary snapshot: {0}")]
  Serialize(Arc<serde_json::Error>),

  /// Snapshot could not be written
  #[error("failed to write vocabulary snapshot: path={path:?}, error={source}")]
  WriteSnapshot {
    /// Output path
    path: PathBuf,
    /// Underlying I/O error
    #[source]
    source: Arc<io::Error>,
  },
}

/// Unified error
/// Public APIs of this crate that can fail return this error
/// Used as `LexicheckResult<T>` = `Result<T, LexicheckError>`
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum LexicheckError {
  /// Vocabulary could not be loaded
  #[error(transparent)]
  CorpusLoad(#[from] CorpusLoadError),

  /// Vocabulary could not be built or saved
  #[error(transparent)]
  Build(#[from] BuildError),

  /// Configuration error
  #[error(transparent)]
  Config(#[from] ConfigError),
}

/// Standard Result type alias for the lexicheck crate
pub type LexicheckResult<T> = Result<T, LexicheckError>;
