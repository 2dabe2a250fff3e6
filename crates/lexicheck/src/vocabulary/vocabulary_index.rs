//! In-memory reference vocabulary

use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info};

use super::snapshot::VocabularySnapshot;
use crate::errors::{BuildError, CorpusLoadError};
use crate::tokenizer::tokenize;

/// Immutable set of normalized words from a reference corpus.
///
/// - Built once from raw text, or loaded from a [`VocabularySnapshot`]
/// - Never mutated afterwards; share it with `Arc` across any number of analyses
/// - `Send + Sync`, lookups take `&self`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabularyIndex {
  /// Label of the reference corpus
  source: String,

  /// Distinct normalized words
  words: HashSet<String>,
}

impl VocabularyIndex {
  /// Builds a vocabulary by tokenizing the whole reference text.
  ///
  /// Uses the same tokenizer as analysis, so every member is a tokenizer fixed point.
  pub fn build(source: impl Into<String>, raw_text: &str) -> Self {
    let source = source.into();
    let words: HashSet<String> = tokenize(raw_text).into_iter().collect();

    info!(
      source = %source,
      raw_text_bytes = raw_text.len(),
      word_count = words.len(),
      "Vocabulary built"
    );

    Self { source, words }
  }

  /// Converts a snapshot into an index.
  ///
  /// The snapshot is validated first, so `len()` always equals its `word_count`.
  ///
  /// # Errors
  /// Any error of [`VocabularySnapshot::validate`].
  pub fn from_snapshot(snapshot: VocabularySnapshot) -> Result<Self, CorpusLoadError> {
    snapshot.validate()?;
    let VocabularySnapshot { source, words, .. } = snapshot;
    Ok(Self {
      source,
      words: words.into_iter().collect(),
    })
  }

  /// Parses serialized snapshot bytes.
  ///
  /// # Errors
  /// [`CorpusLoadError::Malformed`] if the JSON is unusable, otherwise any error of
  /// [`VocabularySnapshot::validate`].
  pub fn load(bytes: &[u8]) -> Result<Self, CorpusLoadError> {
    let snapshot: VocabularySnapshot = serde_json::from_slice(bytes)?;
    Self::from_snapshot(snapshot)
  }

  /// Reads and parses a snapshot file.
  ///
  /// # Errors
  /// - [`CorpusLoadError::NotFound`] if the file does not exist
  /// - [`CorpusLoadError::Io`] if it cannot be read
  /// - parse errors as in [`load`](Self::load)
  pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, CorpusLoadError> {
    let path = path.as_ref();
    debug!(path = %path.display(), "Loading vocabulary snapshot");

    let bytes = fs::read(path).map_err(|e| match e.kind() {
      ErrorKind::NotFound => CorpusLoadError::NotFound(path.to_path_buf()),
      _ => CorpusLoadError::Io {
        path: path.to_path_buf(),
        source: Arc::new(e),
      },
    })?;

    let index = Self::load(&bytes)?;

    info!(
      path = %path.display(),
      source = %index.source,
      word_count = index.len(),
      "Vocabulary loaded"
    );

    Ok(index)
  }

  /// Produces the persisted form: words sorted ascending, `word_count` equal to their number.
  pub fn to_snapshot(&self) -> VocabularySnapshot {
    let words = self.sorted_words();
    VocabularySnapshot {
      source: self.source.clone(),
      word_count: words.len(),
      words,
    }
  }

  /// Writes the snapshot as JSON, creating parent directories as needed.
  ///
  /// # Errors
  /// [`BuildError::Serialize`] or [`BuildError::WriteSnapshot`].
  pub fn save_to_path(&self, path: impl AsRef<Path>) -> Result<(), BuildError> {
    let path = path.as_ref();
    let json = self.to_snapshot().to_json().map_err(|e| BuildError::Serialize(Arc::new(e)))?;

    let write_err = |e| BuildError::WriteSnapshot {
      path: path.to_path_buf(),
      source: Arc::new(e),
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
      fs::create_dir_all(parent).map_err(write_err)?;
    }
    fs::write(path, json).map_err(write_err)?;

    info!(path = %path.display(), word_count = self.len(), "Vocabulary snapshot saved");
    Ok(())
  }

  /// Returns `true` if `word` (already normalized) is in the vocabulary.
  pub fn contains(&self, word: &str) -> bool {
    self.words.contains(word)
  }

  /// Number of distinct words
  pub fn len(&self) -> usize {
    self.words.len()
  }

  /// Returns `true` if the vocabulary has no words
  pub fn is_empty(&self) -> bool {
    self.words.is_empty()
  }

  /// Label of the reference corpus
  pub fn source(&self) -> &str {
    &self.source
  }

  /// All words, sorted ascending
  pub fn sorted_words(&self) -> Vec<String> {
    let mut words: Vec<String> = self.words.iter().cloned().collect();
    words.sort_unstable();
    words
  }
}
