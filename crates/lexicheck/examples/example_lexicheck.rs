//! lexicheck crate example
//!
//! Builds a vocabulary from a short raw text, then analyzes a few phrases against it.
//!
//! ```bash
//! cargo run -p lexicheck --example example_lexicheck
//! RUST_LOG=lexicheck=trace cargo run -p lexicheck --example example_lexicheck
//! ```

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use lexicheck::VocabularyAnalyzer;
use lexicheck::vocabulary::VocabularyIndex;

/// Stand-in for the downloaded reference text
const REFERENCE_TEXT: &str = "\
Chapter 1
1:1 In the beginning, God created the heavens and the earth.
1:2 The earth was formless and empty. Darkness was on the surface of the deep--and
God's Spirit was hovering over the surface of the waters.
1:3 God said, \"Let there be light,\" and there was light.";

const TEST_PHRASES: &[&str] = &[
  "there is no such thing as a coincidence",
  "how many",
  "the quick brown fox jumps over the lazy dog",
];

fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .init();

  let vocabulary = VocabularyIndex::build("Genesis 1:1-3", REFERENCE_TEXT);
  println!(
    "Loaded {} unique words from {}",
    vocabulary.len(),
    vocabulary.source()
  );

  let analyzer = VocabularyAnalyzer::new(Arc::new(vocabulary));

  for phrase in TEST_PHRASES {
    let result = analyzer.analyze(phrase);
    println!("\nPhrase: \"{phrase}\"");
    println!("{}", result.summary());
  }
}
