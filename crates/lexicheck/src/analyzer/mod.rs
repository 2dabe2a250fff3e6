//! analyzer module
//!
//! Vocabulary membership statistics for arbitrary text.

pub mod vocabulary_analyzer;

/// Re-exports
pub use vocabulary_analyzer::{VocabularyAnalyzer, analyze, membership_percentage};
