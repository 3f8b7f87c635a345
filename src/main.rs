//! Marga - interactive weighted-graph builder and A* pathfinder.
//!
//! Builds a graph from console commands, finds least-cost paths with A*,
//! and draws ASCII views of the graph and the discovered path.

use std::io;
use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::info;

use marga::cli::Menu;
use marga::config::MargaConfig;
use marga::error::Result;

/// Interactive weighted-graph builder with A* pathfinding and ASCII views
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the render grid width
    #[arg(long)]
    width: Option<usize>,

    /// Override the render grid height
    #[arg(long)]
    height: Option<usize>,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("marga=info".parse().unwrap()),
        )
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => {
            info!("Loading configuration from {:?}", path);
            MargaConfig::load(path)?
        }
        None => {
            if Path::new("marga.toml").exists() {
                info!("Loading configuration from marga.toml");
                MargaConfig::load(Path::new("marga.toml"))?
            } else {
                MargaConfig::default()
            }
        }
    };

    if let Some(width) = args.width {
        config.render.grid_width = width;
    }
    if let Some(height) = args.height {
        config.render.grid_height = height;
    }

    info!("Marga v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Render grid: {}x{}",
        config.render.grid_width, config.render.grid_height
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut menu = Menu::new(stdin.lock(), stdout.lock(), &config.render);
    menu.run()
}
