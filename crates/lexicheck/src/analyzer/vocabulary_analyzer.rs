//! Vocabulary membership analyzer

use std::sync::Arc;

use tracing::debug;

use crate::models::AnalysisResult;
use crate::tokenizer::tokenize_unique;
use crate::vocabulary::VocabularyIndex;

/// Computes membership statistics of `text` against `index`.
///
/// 1. Tokenize and deduplicate
/// 2. Partition the distinct words into found / not found
/// 3. Compute the rounded percentage
///
/// Total: any string, including empty input, yields a result.
pub fn analyze(index: &VocabularyIndex, text: &str) -> AnalysisResult {
  // BTreeSet iterates in ascending order, so both partitions come out sorted
  let distinct = tokenize_unique(text);
  let total_words = distinct.len();

  let (found_words, not_found_words): (Vec<String>, Vec<String>) =
    distinct.into_iter().partition(|word| index.contains(word));

  let words_in_bible = found_words.len();
  let percentage = membership_percentage(words_in_bible, total_words);

  debug!(
    total_words,
    words_in_bible,
    percentage,
    vocabulary = %index.source(),
    "Analysis completed"
  );

  AnalysisResult {
    total_words,
    words_in_bible,
    percentage,
    found_words,
    not_found_words,
  }
}

/// `found / total` as an integer percentage, rounding halves up; 0 when `total` is 0.
///
/// Integer arithmetic, so exact `.5` ties always round up regardless of float behavior.
pub fn membership_percentage(found: usize, total: usize) -> u32 {
  if total == 0 {
    return 0;
  }
  let found = found.min(total) as u128;
  let total = total as u128;
  // round(100 * found / total) = floor((200 * found + total) / (2 * total))
  ((200 * found + total) / (2 * total)) as u32
}

/// Analyzer bound to one shared vocabulary
///
/// Cheap to clone; every clone reads the same `Arc<VocabularyIndex>`.
#[derive(Debug, Clone)]
pub struct VocabularyAnalyzer {
  vocabulary: Arc<VocabularyIndex>,
}

impl VocabularyAnalyzer {
  /// Creates an analyzer over a shared vocabulary
  pub fn new(vocabulary: Arc<VocabularyIndex>) -> Self {
    Self { vocabulary }
  }

  /// See [`analyze`]
  pub fn analyze(&self, text: &str) -> AnalysisResult {
    analyze(&self.vocabulary, text)
  }

  /// The vocabulary this analyzer queries
  pub fn vocabulary(&self) -> &Arc<VocabularyIndex> {
    &self.vocabulary
  }
}
