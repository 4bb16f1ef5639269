//! Spawner menu preview binary.
//!
//! Composition root that loads menu content and a spawner snapshot, renders
//! the main spawner menu, and prints it to stdout.
//!
//! # Examples
//!
//! ```bash
//! spawner-preview demos/zombie.ron
//! CONTENT_DATA_DIR=./data SPAWNER_SELL_INTEGRATION=true spawner-preview state.ron --refresh
//! ```
mod console;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use console::{ConsoleViewer, StdoutPresenter};
use spawner_content::ContentFactory;
use spawner_core::SpawnerState;
use spawner_runtime::{MenuService, OracleManager, RuntimeConfig};

#[derive(Parser, Debug)]
#[command(name = "spawner-preview")]
#[command(about = "Render the main spawner menu for a snapshot", long_about = None)]
#[command(version)]
struct Args {
    /// Spawner snapshot in RON format
    state: PathBuf,

    /// Re-render the open menu without the opened notification
    #[arg(long)]
    refresh: bool,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    // 1. Resolve configuration: config.toml from the data dir, then env overrides
    let data_dir = RuntimeConfig::from_env().data_dir;
    let factory = ContentFactory::new(&data_dir);
    let menu_config = factory
        .load_config()
        .with_context(|| format!("loading content from {}", data_dir.display()))?;
    let config = RuntimeConfig::new(menu_config)
        .with_data_dir(data_dir)
        .with_env_overrides();

    // 2. Build oracles and the service
    let oracles = OracleManager::load(&factory, &config.menu)?;
    let service = MenuService::from_config(oracles, &config.menu);

    // 3. Load the snapshot and open the menu
    let snapshot = std::fs::read_to_string(&args.state)
        .with_context(|| format!("reading {}", args.state.display()))?;
    let state: SpawnerState = ron::from_str(&snapshot)
        .with_context(|| format!("parsing spawner snapshot {}", args.state.display()))?;

    let viewer = ConsoleViewer::new("console");
    let presenter = StdoutPresenter;
    service.open(&viewer, &presenter, &state, args.refresh)?;

    tracing::info!(cached = service.cache_len(), "preview complete");
    Ok(())
}
