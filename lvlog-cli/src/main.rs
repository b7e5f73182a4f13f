use anyhow::{Context, Result};
use clap::Parser;
use lvlog::{LogConfig, Severity};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Write one line through lvlog", long_about = None)]
struct Args {
    /// Config file with `level` and `file` keys
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Minimum severity to emit (overrides config)
    #[arg(short, long)]
    level: Option<Severity>,
    /// Append to this file instead of stdout (overrides config)
    #[arg(short, long)]
    file: Option<PathBuf>,
    /// Severity of the emitted line
    #[arg(short, long, default_value = "notice")]
    severity: Severity,
    /// Message words, joined by spaces
    #[arg(required = true)]
    message: Vec<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => LogConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => LogConfig::default(),
    };
    if let Some(level) = args.level {
        config.level = level;
    }
    if let Some(file) = args.file {
        config.file = Some(file);
    }

    lvlog::init(&config).context("Failed to initialize logger")?;

    let message = args.message.join(" ");
    lvlog::log!(args.severity, "{}", message);

    lvlog::close().context("Failed to close log sink")?;
    Ok(())
}
