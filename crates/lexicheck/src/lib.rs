//! lexicheck: vocabulary membership analysis
//!
//! Measures what share of the distinct words in a text also occur in a fixed reference
//! vocabulary. Both the vocabulary and the analyzed text go through the same tokenizer.

/// 設定モジュール - LexicheckConfig, LogLevel 等の設定構造体を定義
pub mod config;

/// エラーモジュール - CorpusLoadError, LexicheckError 等のエラー型を定義
pub mod errors;

/// 解析モジュール - 語彙メンバーシップ統計の計算
pub mod analyzer;

/// データモデルモジュール - AnalysisResult を定義
pub mod models;

/// サービスモジュール - LexicheckService 等の上位レベルAPIを提供
pub mod service;

/// トークナイザーモジュール - 語彙構築と解析で共有する正規化パイプライン
pub mod tokenizer;

/// 語彙モジュール - 参照語彙の構築・永続化・ロード
pub mod vocabulary;

/// 再エクスポート
pub use analyzer::{VocabularyAnalyzer, analyze};
pub use config::LexicheckConfig;
pub use errors::{CorpusLoadError, LexicheckError, LexicheckResult};
pub use models::AnalysisResult;
pub use service::LexicheckService;
pub use tokenizer::tokenize;
pub use vocabulary::{VocabularyIndex, VocabularySnapshot};
