//! lexicheck-api サーバーエントリーポイント

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use lexicheck_api::ApiError;
use lexicheck_api::api::AppState;
use lexicheck_api::api::run_server;
use lexicheck_api::config::Config;
use lexicheck_api::service::LexicheckApiServiceFull;

#[tokio::main]
async fn main() -> Result<(), ApiError> {
  // 設定の読み込み（ログレベルを決めるためロギング初期化より先に行う）
  let config = Config::from_env()?;

  // ロギングの初期化（RUST_LOG があればそちらを優先）
  let filter = EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));
  tracing_subscriber::registry().with(filter).with(tracing_subscriber::fmt::layer()).init();

  tracing::info!(
    bind_addr = %config.bind_addr,
    vocabulary_path = ?config.vocabulary_path,
    "設定を読み込みました"
  );

  // サービスの初期化（語彙がロードできなければ起動しない）
  let service = Arc::new(LexicheckApiServiceFull::new(&config)?);
  tracing::info!("語彙解析サービスを初期化しました");

  // アプリケーション状態の作成
  let state = AppState::new(config, service);

  // サーバー起動
  run_server(state).await
}
