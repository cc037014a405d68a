mod action;
mod app;
mod app_state;
mod component;
mod components;
mod focus;
mod navigator;
mod settle;
mod theme;
mod widgets;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use tv_core::config::Config;
use tv_core::{platform, Session};

/// livetv - browse, favorite and watch live TV channels from the terminal
#[derive(Parser, Debug)]
#[command(name = "livetv")]
#[command(version)]
#[command(about = "Browse, favorite and watch live TV channels from the terminal", long_about = None)]
struct Args {
    /// Channel catalog to load (.toml, .json or .m3u); overrides the config
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Milliseconds a newly selected channel stays "loading"
    #[arg(long)]
    settle_ms: Option<u64>,

    /// Read this config file instead of the default one
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let data_dir = platform::data_dir();
    std::fs::create_dir_all(&data_dir)?;
    let log_path = platform::log_path();

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;

    let log_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "debug".to_string());
    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_env_filter(log_filter.as_str())
        .with_ansi(false)
        .init();

    // Print log path to stderr so the operator can tail it immediately.
    eprintln!("livetv log: {}", log_path.display());

    tracing::info!("livetv starting…");

    // ── Load config ──────────────────────────────────────────────────────────
    let (mut config, config_path) = match &args.config {
        Some(path) => (
            Config::load_from(path)
                .with_context(|| format!("failed to read config {}", path.display()))?,
            path.clone(),
        ),
        None => {
            let config = Config::load().unwrap_or_else(|e| {
                tracing::warn!("config unavailable, using defaults: {:#}", e);
                Config::default()
            });
            (config, Config::config_path())
        }
    };
    if let Some(path) = args.catalog {
        config.catalog.path = path;
    }
    if let Some(ms) = args.settle_ms {
        config.player.settle_delay_ms = ms;
    }

    // ── Catalog + session ────────────────────────────────────────────────────
    let catalog = config
        .catalog
        .load()
        .with_context(|| format!("failed to load catalog {}", config.catalog.path.display()))?;
    tracing::info!(
        "catalog loaded: {} channels in {} categories",
        catalog.len(),
        catalog.categories().len()
    );
    let session = Session::new(Arc::new(catalog));

    let navigator = navigator::CommandNavigator::new(config.navigator.command_line())?;

    // ── Run TUI ──────────────────────────────────────────────────────────────
    let app = app::App::new(session, config, Some(config_path), Arc::new(navigator));
    app.run().await?;

    Ok(())
}
