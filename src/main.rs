mod output;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use textsplit_core::{ChunkingPipeline, Config};

use crate::output::OutputFormat;

/// Split `.txt` and `.pdf` documents into bounded, overlapping chunks.
#[derive(Debug, Parser)]
#[command(name = "textsplit", version, about)]
struct Cli {
    /// File or directory to load.
    path: PathBuf,

    /// TOML configuration file. Missing files fall back to defaults.
    #[arg(long, env = "TEXTSPLIT_CONFIG", default_value = "config/default.toml")]
    config: PathBuf,

    /// Maximum chunk length in characters.
    #[arg(long)]
    chunk_size: Option<usize>,

    /// Characters shared by consecutive chunks of one document.
    #[arg(long)]
    chunk_overlap: Option<usize>,

    /// Encoding label for `.txt` files, e.g. `utf-8` or `latin1`.
    #[arg(long)]
    encoding: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Summary)]
    format: OutputFormat,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_subscriber();
    let cli = Cli::parse();

    let mut config = Config::load(&cli.config)?;
    if let Some(size) = cli.chunk_size {
        config.splitter.chunk_size = size;
    }
    if let Some(overlap) = cli.chunk_overlap {
        config.splitter.chunk_overlap = overlap;
    }
    if let Some(encoding) = cli.encoding {
        config.loader.encoding = encoding;
    }
    config.validate()?;
    tracing::debug!(
        config = %cli.config.display(),
        chunk_size = config.splitter.chunk_size,
        chunk_overlap = config.splitter.chunk_overlap,
        encoding = %config.loader.encoding,
        "configuration resolved"
    );

    let pipeline = ChunkingPipeline::from_config(&config)?;
    let output = pipeline
        .run(&cli.path)
        .await
        .with_context(|| format!("failed to split {}", cli.path.display()))?;

    let mut out = std::io::stdout().lock();
    match cli.format {
        OutputFormat::Summary => output::write_summary(&mut out, &output.chunks)?,
        OutputFormat::Jsonl => output::write_jsonl(&mut out, &output)?,
    }
    Ok(())
}

fn init_subscriber() {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
