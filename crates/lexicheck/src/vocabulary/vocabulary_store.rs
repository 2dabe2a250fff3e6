//! Vocabulary snapshot location and one-time loading
//!
//! Resolves where the snapshot lives (explicit path or the per-user data directory)
//! and loads it at most once. A failed load is cached too: the vocabulary is required,
//! so a bad snapshot is reported to every caller instead of being retried.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

use super::vocabulary_index::VocabularyIndex;
use crate::errors::CorpusLoadError;

/// File name of the snapshot inside the default data directory
pub const DEFAULT_SNAPSHOT_FILE_NAME: &str = "vocabulary.json";

/// Owner of the shared, read-only [`VocabularyIndex`]
pub struct VocabularyStore {
  /// Snapshot file path
  snapshot_path: PathBuf,

  /// Loaded vocabulary (initialized on the first `load`)
  /// Errors are cached as well; CorpusLoadError implements Clone
  vocabulary: OnceLock<Result<Arc<VocabularyIndex>, CorpusLoadError>>,
}

impl VocabularyStore {
  /// Store reading the snapshot at `path`
  pub fn from_path(path: impl Into<PathBuf>) -> Self {
    Self {
      snapshot_path: path.into(),
      vocabulary: OnceLock::new(),
    }
  }

  /// Store reading `vocabulary.json` from the per-user data directory
  ///
  /// # Errors
  /// [`CorpusLoadError::DataDirNotFound`] if the platform has no data directory.
  pub fn with_default_path() -> Result<Self, CorpusLoadError> {
    Ok(Self::from_path(default_snapshot_path()?))
  }

  /// Store wrapping an index that is already in memory (no file access)
  pub fn from_index(index: VocabularyIndex) -> Self {
    Self {
      snapshot_path: PathBuf::new(),
      vocabulary: OnceLock::from(Ok(Arc::new(index))),
    }
  }

  /// Snapshot file path
  pub fn snapshot_path(&self) -> &Path {
    &self.snapshot_path
  }

  /// Returns `true` once a load has been attempted
  pub fn is_loaded(&self) -> bool {
    self.vocabulary.get().is_some()
  }

  /// Loads the vocabulary
  /// - Reads the snapshot on the first call
  /// - Returns a clone of the same `Arc<VocabularyIndex>` afterwards
  /// - If the first call fails, the error is cached and returned on every call
  pub fn load(&self) -> Result<Arc<VocabularyIndex>, CorpusLoadError> {
    self
      .vocabulary
      .get_or_init(|| VocabularyIndex::load_from_path(&self.snapshot_path).map(Arc::new))
      .clone()
  }
}

/// Returns the default snapshot path according to the OS
///
/// | OS      | Example Path                                               |
/// |---------|------------------------------------------------------------|
/// | Linux   | `~/.local/share/lexicheck/vocabulary.json`                 |
/// | macOS   | `~/Library/Application Support/lexicheck/vocabulary.json`  |
/// | Windows | `C:\Users\{user}\AppData\Roaming\lexicheck\vocabulary.json`|
pub fn default_snapshot_path() -> Result<PathBuf, CorpusLoadError> {
  let base = dirs::data_dir().ok_or(CorpusLoadError::DataDirNotFound)?;

  Ok(base.join("lexicheck").join(DEFAULT_SNAPSHOT_FILE_NAME))
}

impl fmt::Debug for VocabularyStore {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("VocabularyStore")
      .field("snapshot_path", &self.snapshot_path)
      // Only the state, not the (large) word set
      .field("vocabulary_loaded", &self.is_loaded())
      .finish()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::fs;
  use tempfile::TempDir;

  #[test]
  fn load_returns_same_shared_index() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join(DEFAULT_SNAPSHOT_FILE_NAME);
    VocabularyIndex::build("x", "the fox").save_to_path(&path).unwrap();

    let store = VocabularyStore::from_path(&path);
    assert!(!store.is_loaded());

    let first = store.load().expect("first load");
    let second = store.load().expect("second load");
    assert!(store.is_loaded());
    assert!(Arc::ptr_eq(&first, &second));
    assert!(first.contains("fox"));
  }

  #[test]
  fn load_error_is_cached_without_retry() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join(DEFAULT_SNAPSHOT_FILE_NAME);

    let store = VocabularyStore::from_path(&path);
    assert!(matches!(store.load(), Err(CorpusLoadError::NotFound(_))));

    // A snapshot appearing later is not picked up
    VocabularyIndex::build("x", "the fox").save_to_path(&path).unwrap();
    assert!(matches!(store.load(), Err(CorpusLoadError::NotFound(_))));
  }

  #[test]
  fn from_index_skips_file_access() {
    let store = VocabularyStore::from_index(VocabularyIndex::build("x", "alpha"));
    assert!(store.is_loaded());
    assert!(store.load().unwrap().contains("alpha"));
  }

  #[test]
  fn malformed_snapshot_surfaces_as_error() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join(DEFAULT_SNAPSHOT_FILE_NAME);
    fs::write(&path, r#"{"source":"x","wordCount":1}"#).unwrap();

    let store = VocabularyStore::from_path(&path);
    assert!(matches!(store.load(), Err(CorpusLoadError::Malformed(_))));
  }

  #[test]
  fn debug_does_not_dump_words() {
    let store = VocabularyStore::from_index(VocabularyIndex::build("x", "secretword"));
    let debug = format!("{store:?}");
    assert!(debug.contains("vocabulary_loaded: true"));
    assert!(!debug.contains("secretword"));
  }
}
