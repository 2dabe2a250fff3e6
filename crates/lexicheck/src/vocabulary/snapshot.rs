//! Persisted vocabulary snapshot
//!
//! JSON record with three required fields:
//!
//! ```json
//! { "source": "World English Bible", "wordCount": 2, "words": ["fox", "the"] }
//! ```
//!
//! A snapshot is accepted only if `words` is strictly ascending, has `wordCount` entries,
//! and every entry is a word the tokenizer emits unchanged.

use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::errors::CorpusLoadError;
use crate::tokenizer::is_normalized_word;

/// On-disk form of a [`VocabularyIndex`](super::VocabularyIndex).
///
/// No field has a default: a snapshot missing any of them is rejected as malformed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabularySnapshot {
  /// Free-text label of the reference corpus
  pub source: String,
  /// Number of entries in `words`
  pub word_count: usize,
  /// Distinct words, sorted ascending
  pub words: Vec<String>,
}

impl VocabularySnapshot {
  /// Parses a snapshot from JSON bytes and [`validate`](Self::validate)s it.
  pub fn from_slice(bytes: &[u8]) -> Result<Self, CorpusLoadError> {
    let snapshot: Self = serde_json::from_slice(bytes)?;
    snapshot.validate()?;
    Ok(snapshot)
  }

  /// Parses a snapshot from a reader and [`validate`](Self::validate)s it.
  pub fn from_reader<R: Read>(reader: R) -> Result<Self, CorpusLoadError> {
    let snapshot: Self = serde_json::from_reader(reader)?;
    snapshot.validate()?;
    Ok(snapshot)
  }

  /// Serializes to compact JSON.
  pub fn to_json(&self) -> Result<String, serde_json::Error> {
    serde_json::to_string(self)
  }

  /// Checks the invariants every loadable snapshot satisfies.
  ///
  /// # Errors
  /// - [`CorpusLoadError::WordCountMismatch`] if `word_count != words.len()`
  /// - [`CorpusLoadError::UnsortedWords`] if an entry is not greater than the one before it
  /// - [`CorpusLoadError::NonNormalizedWord`] if the tokenizer would not emit an entry as-is
  pub fn validate(&self) -> Result<(), CorpusLoadError> {
    if self.word_count != self.words.len() {
      return Err(CorpusLoadError::WordCountMismatch {
        declared: self.word_count,
        actual: self.words.len(),
      });
    }

    for (position, pair) in self.words.windows(2).enumerate() {
      if pair[0] >= pair[1] {
        return Err(CorpusLoadError::UnsortedWords {
          position: position + 1,
          previous: pair[0].clone(),
          word: pair[1].clone(),
        });
      }
    }

    if let Some((position, word)) =
      self.words.iter().enumerate().find(|(_, word)| !is_normalized_word(word))
    {
      return Err(CorpusLoadError::NonNormalizedWord {
        position,
        word: word.clone(),
      });
    }

    Ok(())
  }
}
