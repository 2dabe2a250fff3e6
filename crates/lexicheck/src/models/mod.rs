//! models module

pub mod model_definition;

/// Re-exports
pub use model_definition::AnalysisResult;
