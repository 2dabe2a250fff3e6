//! API設定の定数定義

/// 入力テキストの最大長（バイト単位）
///
/// 10MB までのテキストを許可する。
/// 大きなテキストの処理によるリソース枯渇を防ぐための制限。
pub const MAX_TEXT_LENGTH: usize = lexicheck::config::DEFAULT_MAX_TEXT_BYTES;

/// デフォルトのバインドアドレス
///
/// 開発環境での利用を想定した localhost のポート。
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5540";

/// バインドアドレスを指定する環境変数
pub const ENV_BIND_ADDR: &str = "LEXICHECK_API_BIND_ADDR";

/// 語彙スナップショットのパスを指定する環境変数
///
/// 未指定の場合はユーザーデータディレクトリの `lexicheck/vocabulary.json` を使用する。
pub const ENV_VOCABULARY_PATH: &str = "LEXICHECK_VOCABULARY_PATH";

/// ログレベルを指定する環境変数
pub const ENV_LOG_LEVEL: &str = "LEXICHECK_LOG_LEVEL";
