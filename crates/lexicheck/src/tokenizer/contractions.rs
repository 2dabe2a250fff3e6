//! Contraction allow-list

/// Contractions that keep their apostrophe even when it lands on a word edge.
///
/// Matched case-insensitively against this exact list; inflected variants are not generated.
pub const VALID_CONTRACTIONS: [&str; 54] = [
  "don't", "doesn't", "didn't", "won't", "wouldn't", "shouldn't", "couldn't", "can't", "isn't",
  "aren't", "wasn't", "weren't", "hasn't", "haven't", "hadn't", "i'm", "i've", "i'll", "i'd",
  "you're", "you've", "you'll", "you'd", "he's", "he'll", "he'd", "she's", "she'll", "she'd",
  "it's", "it'll", "we're", "we've", "we'll", "we'd", "they're", "they've", "they'll", "they'd",
  "that's", "that'll", "that'd", "who's", "who'll", "who'd", "what's", "what'll", "where's",
  "where'll", "when's", "how's", "let's", "here's", "there's",
];

/// Returns `true` if `word` is one of [`VALID_CONTRACTIONS`] (case-insensitive).
pub fn is_valid_contraction(word: &str) -> bool {
  let lowered = word.to_lowercase();
  VALID_CONTRACTIONS.contains(&lowered.as_str())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn accepts_listed_contractions() {
    assert!(is_valid_contraction("don't"));
    assert!(is_valid_contraction("they'd"));
    assert!(is_valid_contraction("there's"));
  }

  #[test]
  fn matching_ignores_case() {
    assert!(is_valid_contraction("DON'T"));
    assert!(is_valid_contraction("I'm"));
  }

  #[test]
  fn rejects_unlisted_forms() {
    assert!(!is_valid_contraction("'tis"));
    assert!(!is_valid_contraction("rock-"));
    assert!(!is_valid_contraction("mustn't"));
    assert!(!is_valid_contraction("don’t"));
    assert!(!is_valid_contraction(""));
  }

  #[test]
  fn list_has_no_duplicates() {
    let mut sorted = VALID_CONTRACTIONS.to_vec();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(sorted.len(), VALID_CONTRACTIONS.len());
  }
}
