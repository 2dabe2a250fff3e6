//! Data Model Definition
use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

/// Vocabulary membership statistics for one input text
///
/// Counts are over distinct normalized words: a word repeated in the input counts once.
///
/// Invariants (guaranteed by the analyzer):
/// - `found_words` and `not_found_words` are disjoint, each sorted ascending
/// - `found_words.len() + not_found_words.len() == total_words`
/// - `words_in_bible == found_words.len()`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
  /// Number of distinct words in the input
  pub total_words: usize,

  /// Number of those words present in the vocabulary
  pub words_in_bible: usize,

  /// `words_in_bible / total_words` as a rounded percentage, 0 for empty input
  pub percentage: u32,

  /// Words present in the vocabulary
  pub found_words: Vec<String>,

  /// Words absent from the vocabulary
  pub not_found_words: Vec<String>,
}

impl AnalysisResult {
  /// Returns `true` if the input had no words at all
  pub fn is_empty(&self) -> bool {
    self.total_words == 0
  }

  /// Plain-text report of the result
  ///
  /// ```text
  /// Total words: 8
  /// Words in vocabulary: 2 (25%)
  /// Found: fox, the
  /// Not found: brown, dog, jumps, lazy, over, quick
  /// ```
  ///
  /// Empty lists are shown as `(none)`.
  pub fn summary(&self) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail
    let _ = writeln!(out, "Total words: {}", self.total_words);
    let _ = writeln!(
      out,
      "Words in vocabulary: {} ({}%)",
      self.words_in_bible, self.percentage
    );
    let _ = writeln!(out, "Found: {}", join_or_none(&self.found_words));
    let _ = write!(out, "Not found: {}", join_or_none(&self.not_found_words));
    out
  }
}

fn join_or_none(words: &[String]) -> String {
  if words.is_empty() {
    "(none)".to_string()
  } else {
    words.join(", ")
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────
