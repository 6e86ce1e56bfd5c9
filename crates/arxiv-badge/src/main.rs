//! arXiv Citation Badge Generator - Entry Point
//!
//! Loads the tracked-paper list, fetches and sums citation counts from
//! Semantic Scholar, and writes a Shields.io endpoint badge JSON file.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use arxiv_badge::badge::{build_badge, write_badge};
use arxiv_badge::client::CitationClient;
use arxiv_badge::config::{Config, defaults};
use arxiv_badge::papers::{extract_arxiv_ids, load_papers};

#[derive(Parser, Debug)]
#[command(name = "arxiv-badge")]
#[command(about = "Update arXiv citation counts and generate a Shields.io badge JSON")]
#[command(version)]
struct Cli {
    /// Path to the papers JSON config file
    #[arg(long, default_value = defaults::CONFIG_PATH)]
    config: PathBuf,

    /// Path for the output badge JSON file
    #[arg(long, default_value = defaults::OUTPUT_PATH)]
    output: PathBuf,

    /// Badge label text
    #[arg(long, default_value = defaults::LABEL)]
    label: String,

    /// Badge color
    #[arg(long, default_value = defaults::COLOR)]
    color: String,

    /// HTTP request timeout in seconds
    #[arg(long, default_value = "10")]
    timeout: u64,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,
}

fn init_tracing(log_level: &str, json: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        subscriber.with(tracing_subscriber::fmt::layer().compact()).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting citation update");

    let papers = load_papers(&cli.config)?;
    let arxiv_ids = extract_arxiv_ids(&papers);
    tracing::info!(count = arxiv_ids.len(), ids = ?arxiv_ids, "Tracking papers");

    let config = Config::new(Duration::from_secs(cli.timeout));
    let client = CitationClient::new(&config)?;
    let total = client.fetch_total(&arxiv_ids).await;

    let badge = build_badge(total, &cli.label, &cli.color);
    let output_path = write_badge(&badge, &cli.output)?;

    tracing::info!(total, path = %output_path.display(), "Done");
    Ok(())
}
