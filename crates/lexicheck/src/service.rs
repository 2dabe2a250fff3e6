// crates/lexicheck/src/service.rs

//! LexicheckService: lexicheck クレートの統合ファサード。
//!
//! - 語彙スナップショットの解決とロード (VocabularyStore)
//! - 語彙メンバーシップ解析 (VocabularyAnalyzer)
//! - 生テキストからのスナップショット構築 (build_snapshot_file)
//!
//! ボットや HTTP サーバーなど外部の呼び出し側は、この構造体だけを意識すればよい。

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::analyzer::VocabularyAnalyzer;
use crate::config::LexicheckConfig;
use crate::errors::{BuildError, LexicheckResult};
use crate::models::AnalysisResult;
use crate::vocabulary::{VocabularyIndex, VocabularyStore};

/// lexicheck クレートの統合ファサード。
///
/// 語彙は初期化時に一度だけロードされ、以後は読み取り専用で共有される。
/// `analyze` は `&self` で呼べるため、`Arc<LexicheckService>` を複数スレッドから同時に使用できる。
#[derive(Debug)]
pub struct LexicheckService {
  /// 語彙ストア（ロード済み）
  store: VocabularyStore,

  /// 共有語彙に束縛されたアナライザー
  analyzer: VocabularyAnalyzer,

  /// 受け付ける入力の最大バイト数
  max_text_bytes: usize,
}

impl LexicheckService {
  /// 初期化（設定検証 + 語彙スナップショットのロード）
  ///
  /// # 処理フロー
  /// 1. 設定の妥当性を検証
  /// 2. スナップショットのパスを解決（未指定ならユーザーデータディレクトリ）
  /// 3. 語彙をロード
  ///
  /// # エラー
  /// - 設定が不正
  /// - スナップショットが存在しない・壊れている（`CorpusLoadError`、リトライしない）
  pub fn init(config: &LexicheckConfig) -> LexicheckResult<Self> {
    // ConfigError は #[from] で LexicheckError に自動変換
    config.validate()?;

    let store = VocabularyStore::from_path(config.resolved_vocabulary_path()?);
    let vocabulary = store.load()?;

    info!(
      path = %store.snapshot_path().display(),
      source = %vocabulary.source(),
      word_count = vocabulary.len(),
      "LexicheckService initialized"
    );

    Ok(Self {
      analyzer: VocabularyAnalyzer::new(vocabulary),
      store,
      max_text_bytes: config.max_text_bytes(),
    })
  }

  /// ロード済みの語彙から直接構築する（ファイルアクセスなし）
  pub fn from_index(index: VocabularyIndex, config: &LexicheckConfig) -> LexicheckResult<Self> {
    config.validate()?;

    let store = VocabularyStore::from_index(index);
    let vocabulary = store.load()?;

    Ok(Self {
      analyzer: VocabularyAnalyzer::new(vocabulary),
      store,
      max_text_bytes: config.max_text_bytes(),
    })
  }

  /// テキストを解析する。失敗しない。
  ///
  /// 入力長の上限チェックは行わない（[`max_text_bytes`](Self::max_text_bytes) を参照して呼び出し側で判断する）。
  pub fn analyze(&self, text: &str) -> AnalysisResult {
    self.analyzer.analyze(text)
  }

  /// 共有語彙への参照
  pub fn vocabulary(&self) -> &Arc<VocabularyIndex> {
    self.analyzer.vocabulary()
  }

  /// 語彙スナップショットのパス
  pub fn snapshot_path(&self) -> &Path {
    self.store.snapshot_path()
  }

  /// 受け付ける入力の最大バイト数
  pub fn max_text_bytes(&self) -> usize {
    self.max_text_bytes
  }
}

/// スナップショット構築結果のサマリー
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildReport {
  /// コーパスのラベル
  pub source: String,
  /// 語彙の異なり語数
  pub word_count: usize,
  /// 読み込んだ生テキストのバイト数
  pub raw_text_bytes: usize,
  /// 書き出したスナップショットのパス
  pub output_path: PathBuf,
}

/// 生テキストファイルから語彙を構築し、スナップショットとして保存する。
///
/// 生テキストの取得（ダウンロード、HTML 除去、キャッシュ）は呼び出し側の責務。
///
/// # エラー
/// - 生テキストが読めない（UTF-8 でない場合を含む）
/// - スナップショットの書き出しに失敗
pub fn build_snapshot_file(
  source: &str,
  raw_text_path: impl AsRef<Path>,
  output_path: impl AsRef<Path>,
) -> LexicheckResult<BuildReport> {
  let raw_text_path = raw_text_path.as_ref();
  let output_path = output_path.as_ref();

  let raw_text = fs::read_to_string(raw_text_path).map_err(|e| BuildError::ReadRawText {
    path: raw_text_path.to_path_buf(),
    source: Arc::new(e),
  })?;

  let index = VocabularyIndex::build(source, &raw_text);
  index.save_to_path(output_path)?;

  Ok(BuildReport {
    source: index.source().to_string(),
    word_count: index.len(),
    raw_text_bytes: raw_text.len(),
    output_path: output_path.to_path_buf(),
  })
}
