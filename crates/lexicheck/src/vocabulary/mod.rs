//! vocabulary module
//!
//! Builds, persists and loads the reference vocabulary that analysis queries.

pub mod snapshot;
pub mod vocabulary_index;
pub mod vocabulary_store;

/// Re-export major types
pub use snapshot::VocabularySnapshot;
pub use vocabulary_index::VocabularyIndex;
pub use vocabulary_store::VocabularyStore;
