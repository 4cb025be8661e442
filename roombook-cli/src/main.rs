mod api;
mod config;
mod tui;

use std::fs::{self, File};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::config::Config;

#[derive(Parser)]
#[command(
    name = "roombook-cli",
    about = "Terminal client for the RoomBook room-booking service",
    version
)]
struct Cli {
    /// Base URL of the RoomBook backend (overrides env and config file)
    #[arg(long)]
    api_url: Option<String>,
}

fn log_path() -> Result<PathBuf> {
    let dir = dirs::data_dir()
        .context("could not determine user data directory")?
        .join("roombook");
    fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create {}", dir.display()))?;
    Ok(dir.join("roombook.log"))
}

/// Logs go to a file; stdout belongs to the alternate screen.
fn init_logging() -> Result<()> {
    let file = File::create(log_path()?)?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_logging()?;

    let config = Config::load(cli.api_url)?;
    log::info!("starting against backend {}", config.api_base_url);

    tui::run(config).await
}
