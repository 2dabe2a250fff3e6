//! Word tokenizer
//!
//! Turns arbitrary text into lowercase word tokens made of `a-z`, apostrophe and hyphen.
//!
//! The same pipeline runs when a vocabulary snapshot is built and when user text is analyzed,
//! so both sides of the membership comparison agree on what a "word" is.
//!
//! Steps, in order:
//! 1. lowercase
//! 2. drop verse references (`3:16`)
//! 3. drop chapter headings (`chapter 7`)
//! 4. drop standalone digit runs
//! 5. `--` becomes a space
//! 6. apostrophe-like characters become `'`
//! 7. everything except `a-z`, whitespace, `'` and `-` becomes a space
//! 8. split on whitespace
//! 9. - 12. filter and trim edge punctuation per candidate

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

use super::contractions::is_valid_contraction;

/// Canonical apostrophe every apostrophe-like character is folded into.
const APOSTROPHE: char = '\'';

static VERSE_REFERENCE_RE: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"\b[0-9]+:[0-9]+\b").expect("verse reference pattern is valid"));

/// Separator allowed between `chapter` and its number.
///
/// A fixed set rather than Unicode `\s`: U+FEFF separates a heading, U+0085 does not.
const HEADING_SPACE: &str = r"[\t\n\x0B\x0C\r \u{A0}\u{1680}\u{2000}-\u{200A}\u{2028}\u{2029}\u{202F}\u{205F}\u{3000}\u{FEFF}]";

static CHAPTER_HEADING_RE: Lazy<Regex> = Lazy::new(|| {
  Regex::new(&format!(r"(?i)chapter{HEADING_SPACE}+[0-9]+"))
    .expect("chapter heading pattern is valid")
});

static STANDALONE_NUMBER_RE: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"\b[0-9]+\b").expect("standalone number pattern is valid"));

static DISALLOWED_CHARS_RE: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"[^a-z\s'-]").expect("character filter pattern is valid"));

/// Tokenizes `text` into normalized words, in order of appearance (duplicates kept).
///
/// Total: never fails, returns an empty vector when nothing word-like remains.
///
/// # Examples
/// ```
/// use lexicheck::tokenizer::tokenize;
///
/// assert_eq!(tokenize("Don't -- stop! 3:16"), vec!["don't", "stop"]);
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
  let cleaned = clean_text(text);

  let mut tokens = Vec::new();
  let mut candidates = 0usize;
  for raw in cleaned.split_whitespace() {
    candidates += 1;
    if let Some(word) = normalize_candidate(raw) {
      tokens.push(word.to_string());
    }
  }

  trace!(
    input_bytes = text.len(),
    candidates,
    emitted = tokens.len(),
    "Tokenization completed"
  );

  tokens
}

/// Tokenizes `text` and collapses the result into a sorted set of distinct words.
pub fn tokenize_unique(text: &str) -> BTreeSet<String> {
  tokenize(text).into_iter().collect()
}

/// Returns `true` if `word` is emitted unchanged as the only token of itself.
///
/// Exactly the words that can appear in a vocabulary: anything else would never be
/// produced when analyzed text is tokenized, so it could not be matched.
pub fn is_normalized_word(word: &str) -> bool {
  match tokenize(word).as_slice() {
    [only] => only == word,
    _ => false,
  }
}

/// Steps 1 - 7: whole-text rewrites before splitting.
fn clean_text(text: &str) -> String {
  let lowered = text.to_lowercase();
  let without_verses = VERSE_REFERENCE_RE.replace_all(&lowered, " ");
  let without_chapters = CHAPTER_HEADING_RE.replace_all(&without_verses, " ");
  let without_numbers = STANDALONE_NUMBER_RE.replace_all(&without_chapters, " ");

  let without_dashes = without_numbers.replace("--", " ");
  let apostrophes: String = without_dashes.chars().map(fold_apostrophe).collect();

  DISALLOWED_CHARS_RE.replace_all(&apostrophes, " ").into_owned()
}

/// Maps straight, curly and backtick quotes to [`APOSTROPHE`].
fn fold_apostrophe(c: char) -> char {
  match c {
    '\u{2018}' | '\u{2019}' | '`' => APOSTROPHE,
    other => other,
  }
}

/// Steps 9 - 12 for a single whitespace-delimited candidate.
///
/// Returns the trimmed word to emit, or `None` if the candidate is rejected.
fn normalize_candidate(raw: &str) -> Option<&str> {
  let raw = raw.trim();
  if raw.is_empty() || raw == "'" || raw == "-" {
    return None;
  }

  let word = trim_edge_punctuation(raw);
  if word.is_empty() {
    return None;
  }

  if has_edge_punctuation(word) && !is_valid_contraction(word) {
    return None;
  }

  Some(word)
}

/// Strips leading and trailing runs of `'`, `"` and `-`.
fn trim_edge_punctuation(word: &str) -> &str {
  word.trim_matches(|c: char| matches!(c, '\'' | '"' | '-'))
}

fn has_edge_punctuation(word: &str) -> bool {
  let is_edge = |c: char| c == '-' || c == APOSTROPHE;
  word.starts_with(is_edge) || word.ends_with(is_edge)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn lowercases_and_splits() {
    assert_eq!(tokenize("The Quick  BROWN\tfox"), vec!["the", "quick", "brown", "fox"]);
  }

  #[test]
  fn keeps_duplicates_in_order() {
    assert_eq!(tokenize("the fox the"), vec!["the", "fox", "the"]);
  }

  #[test]
  fn strips_verse_references() {
    assert_eq!(tokenize("John 3:16 For God"), vec!["john", "for", "god"]);
  }

  #[test]
  fn strips_chapter_headings() {
    assert_eq!(tokenize("Chapter 12 In the beginning"), vec!["in", "the", "beginning"]);
    assert_eq!(tokenize("CHAPTER\n3 end"), vec!["end"]);
  }

  #[test]
  fn chapter_heading_separators() {
    assert_eq!(tokenize("chapter\u{FEFF}7 word"), vec!["word"]);
    assert_eq!(tokenize("chapter\u{A0}\u{2003}7 word"), vec!["word"]);
    // NEL splits words but does not join a heading
    assert_eq!(tokenize("chapter\u{85}7 word"), vec!["chapter", "word"]);
  }

  #[test]
  fn chapter_without_number_is_a_word() {
    assert_eq!(tokenize("the next chapter"), vec!["the", "next", "chapter"]);
  }

  #[test]
  fn numbers_only_yield_nothing() {
    assert!(tokenize("3:16 42 chapter 7").is_empty());
    assert!(tokenize("1,000 2.5 99%").is_empty());
  }

  #[test]
  fn digits_glued_to_letters_split_the_word() {
    assert_eq!(tokenize("abc123def"), vec!["abc", "def"]);
  }

  #[test]
  fn double_hyphen_separates_words() {
    assert_eq!(tokenize("wait--what"), vec!["wait", "what"]);
  }

  #[test]
  fn hyphenated_compound_survives() {
    assert_eq!(tokenize("a well-known fact"), vec!["a", "well-known", "fact"]);
  }

  #[test]
  fn dangling_hyphens_are_trimmed() {
    assert_eq!(tokenize("rock- -stone"), vec!["rock", "stone"]);
  }

  #[test]
  fn contractions_are_preserved() {
    assert_eq!(
      tokenize("don't isn't shouldn't"),
      vec!["don't", "isn't", "shouldn't"]
    );
  }

  #[test]
  fn curly_and_backtick_apostrophes_are_folded() {
    assert_eq!(tokenize("Don\u{2019}t it`s \u{2018}twas"), vec!["don't", "it's", "twas"]);
  }

  #[test]
  fn surrounding_quotes_are_trimmed() {
    assert_eq!(tokenize("\"'Hello,' she said.\""), vec!["hello", "she", "said"]);
  }

  #[test]
  fn lone_punctuation_is_dropped() {
    assert!(tokenize("' - -- '' --- \"").is_empty());
  }

  #[test]
  fn non_ascii_letters_act_as_separators() {
    assert_eq!(tokenize("café naïve"), vec!["caf", "na", "ve"]);
  }

  #[test]
  fn empty_and_whitespace_input() {
    assert!(tokenize("").is_empty());
    assert!(tokenize("  \n\t ").is_empty());
  }

  #[test]
  fn retokenizing_is_a_fixed_point() {
    let text = "In the beginning--God created (Genesis 1:1) the heavens' host; don't-stop \
                ``rock-'n'-roll'' CHAPTER 2 and it\u{2019}s well-known.";
    let once = tokenize(text);
    let twice = tokenize(&once.join(" "));
    assert_eq!(once, twice);
    for word in &once {
      assert_eq!(tokenize(word), vec![word.clone()]);
    }
  }

  #[test]
  fn normalized_words() {
    for word in ["fox", "don't", "well-known", "rock-'n'-roll"] {
      assert!(is_normalized_word(word), "{word:?}");
    }
    for word in ["Fox", "fox.", "'fox", "the fox", "3", "chapter 3", ""] {
      assert!(!is_normalized_word(word), "{word:?}");
    }
  }

  #[test]
  fn tokenize_unique_sorts_and_dedups() {
    let unique: Vec<String> = tokenize_unique("b a b c a").into_iter().collect();
    assert_eq!(unique, vec!["a", "b", "c"]);
  }

  #[test]
  fn emitted_tokens_use_only_allowed_characters() {
    let text = "Æsop's fables, 1912 ed. — vol. II: «The Fox & the Grapes» … don't!";
    for word in tokenize(text) {
      assert!(!word.is_empty());
      assert!(word.chars().all(|c| c.is_ascii_lowercase() || c == '\'' || c == '-'));
      assert!(!word.starts_with(['\'', '-']) && !word.ends_with(['\'', '-']));
    }
  }
}
