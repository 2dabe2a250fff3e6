//! lexicheck-api crate
//!
//! Web server exposing vocabulary membership analysis as an HTTP API.
//! The vocabulary snapshot is loaded once at startup and shared by every request.
//!
//! ## Endpoints
//! - `POST /analyze` - Vocabulary membership analysis
//! - `GET /vocabulary` - Loaded vocabulary label and size
//! - `GET /health` - Health Check
//!
//! ## Usage Example
//! ```bash
//! curl -X POST http://127.0.0.1:5540/analyze \
//!   -H "Content-Type: application/json" \
//!   -d '{"text": "the quick brown fox jumps over the lazy dog"}'
//! ```

pub mod api;
pub mod config;
pub mod errors;
pub mod models;
pub mod service;

pub use api::AppState;
pub use config::Config;
pub use errors::{ApiError, ApiErrorKind};
pub use models::{AnalyzeRequest, AnalyzeResponse, VocabularyInfoResponse};
pub use service::LexicheckApiServiceFull;
