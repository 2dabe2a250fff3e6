//! tokenizer module
//!
//! The single normalization pipeline shared by vocabulary building and analysis.
pub mod contractions;
pub mod word_tokenizer;

/// Re-exports
pub use contractions::{VALID_CONTRACTIONS, is_valid_contraction};
pub use word_tokenizer::{is_normalized_word, tokenize, tokenize_unique};
