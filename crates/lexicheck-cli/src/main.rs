//! lexicheck コマンドラインツール
//!
//! - `lexicheck build`   : 生テキストファイルから語彙スナップショットを構築
//! - `lexicheck analyze` : テキストの語彙メンバーシップを解析して表示

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use lexicheck::config::LexicheckConfig;
use lexicheck::service::build_snapshot_file;
use lexicheck::vocabulary::vocabulary_store::default_snapshot_path;
use lexicheck::{AnalysisResult, LexicheckService};

/// Vocabulary membership checker - Report which words of a text occur in a reference corpus
#[derive(Parser, Debug)]
#[command(name = "lexicheck", version, about, long_about = None)]
struct Args {
  /// Log level used when RUST_LOG is not set
  #[arg(long, global = true, env = "LEXICHECK_LOG_LEVEL", default_value = "warn")]
  log_level: String,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// Build a vocabulary snapshot from a raw reference text file
  Build {
    /// Raw reference text (UTF-8), already stripped of markup
    #[arg(long)]
    input: PathBuf,

    /// Snapshot output path (default: per-user data directory)
    #[arg(long, env = "LEXICHECK_VOCABULARY_PATH")]
    output: Option<PathBuf>,

    /// Label of the reference corpus stored in the snapshot
    #[arg(long, default_value = "World English Bible")]
    source: String,
  },

  /// Analyze text against a vocabulary snapshot
  Analyze {
    /// Text to analyze (reads stdin when neither TEXT nor --file is given)
    #[arg(conflicts_with = "file")]
    text: Option<String>,

    /// Read the text to analyze from a file
    #[arg(long)]
    file: Option<PathBuf>,

    /// Snapshot path (default: per-user data directory)
    #[arg(long, env = "LEXICHECK_VOCABULARY_PATH")]
    vocabulary: Option<PathBuf>,

    /// Print the result as JSON instead of the plain report
    #[arg(long)]
    json: bool,
  },
}

fn main() -> anyhow::Result<()> {
  let args = Args::parse();

  // ログは stderr に出す（stdout は結果の出力専用）
  let filter =
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
  tracing_subscriber::registry()
    .with(filter)
    .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
    .init();

  match args.command {
    Command::Build {
      input,
      output,
      source,
    } => run_build(&input, output, &source),
    Command::Analyze {
      text,
      file,
      vocabulary,
      json,
    } => {
      let text = read_input(text, file.as_deref())?;
      let result = run_analyze(&text, vocabulary)?;
      if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
      } else {
        println!("{}", result.summary());
      }
      Ok(())
    }
  }
}

fn run_build(input: &Path, output: Option<PathBuf>, source: &str) -> anyhow::Result<()> {
  let output = match output {
    Some(path) => path,
    None => default_snapshot_path()?,
  };

  let report = build_snapshot_file(source, input, &output)
    .with_context(|| format!("Failed to build vocabulary from {}", input.display()))?;

  println!(
    "Built {} unique words from {} ({} bytes) -> {}",
    report.word_count,
    report.source,
    report.raw_text_bytes,
    report.output_path.display()
  );
  Ok(())
}

fn run_analyze(text: &str, vocabulary: Option<PathBuf>) -> anyhow::Result<AnalysisResult> {
  let config = match vocabulary {
    Some(path) => LexicheckConfig::with_vocabulary_path(path),
    None => LexicheckConfig::default(),
  };

  let service =
    LexicheckService::init(&config).context("Vocabulary snapshot could not be loaded")?;

  if text.len() > service.max_text_bytes() {
    anyhow::bail!(
      "Text is too long: {} bytes (max: {} bytes)",
      text.len(),
      service.max_text_bytes()
    );
  }

  Ok(service.analyze(text))
}

/// Resolves the text to analyze: positional argument > --file > stdin
fn read_input(text: Option<String>, file: Option<&Path>) -> anyhow::Result<String> {
  if let Some(text) = text {
    return Ok(text);
  }

  if let Some(path) = file {
    return std::fs::read_to_string(path)
      .with_context(|| format!("Failed to read {}", path.display()));
  }

  let mut buf = String::new();
  std::io::stdin().read_to_string(&mut buf).context("Failed to read stdin")?;
  Ok(buf)
}
