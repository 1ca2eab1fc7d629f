//! garden.rs CLI
//!
//! Entry point for the portfolio server. Commands:
//! - serve: static site plus the workshop API
//! - export: write the current item document to a file
//! - check: validate a replacement document without loading it
//! - paths: show resolved locations and configuration

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use gardenrs::config::GardenConfig;
use gardenrs::core::persistence;
use gardenrs::paths::GardenPaths;
use gardenrs::server;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "garden")]
#[command(about = "garden.rs - a digital garden portfolio with a workshop mode", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path (defaults to system config directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Item document to seed the store from (overrides config)
    #[arg(long, env = "GARDEN_DATA")]
    data: Option<PathBuf>,

    /// Static site directory to serve (overrides config)
    #[arg(long, env = "GARDEN_SITE_ROOT")]
    site_root: Option<PathBuf>,

    /// Log level
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the static site and the workshop API
    Serve {
        /// Bind address (overrides config)
        #[arg(short, long)]
        bind: Option<String>,
    },

    /// Write the current item document (the manual download)
    Export {
        /// Output path
        #[arg(default_value = "data.json")]
        output: PathBuf,
    },

    /// Validate a replacement item document
    Check {
        /// Document to validate
        file: PathBuf,
    },

    /// Show resolved paths and configuration
    Paths,
}

/// Initialize logging
fn init_logging(level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("gardenrs={level},garden={level}").into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Resolve paths with precedence: CLI args > env vars > config > system
/// defaults. clap handles the env-var step through `#[arg(env = ...)]`.
fn resolve_paths(cli: &Cli, config: &GardenConfig) -> Result<GardenPaths> {
    let mut paths = GardenPaths::new()?;

    if let Some(ref data_file) = config.paths.data_file {
        paths.data_file = data_file.clone();
    }
    if let Some(ref site_root) = config.paths.site_root {
        paths.site_root = site_root.clone();
    }

    if let Some(ref data) = cli.data {
        paths.data_file = data.clone();
    }
    if let Some(ref site_root) = cli.site_root {
        paths.site_root = site_root.clone();
    }

    Ok(paths)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(&cli.log_level);

    let config_path = if let Some(ref config_file) = cli.config {
        config_file.clone()
    } else {
        let sys_paths = GardenPaths::new()?;
        let sys_config = sys_paths.default_config_file();

        // Fall back to ./garden.yaml if the system config doesn't exist
        if sys_config.exists() {
            sys_config
        } else {
            PathBuf::from("garden.yaml")
        }
    };

    let config = GardenConfig::load(&config_path)?;
    let paths = resolve_paths(&cli, &config)?;

    match cli.command {
        Commands::Serve { bind } => {
            let bind = bind.unwrap_or_else(|| config.server.bind.clone());
            let items = persistence::load_items(&paths.data_file)?;

            info!("Starting garden.rs with {} items", items.len());
            server::run(&config, &paths.site_root, items, &bind).await?;
        }

        Commands::Export { output } => {
            let items = persistence::load_items(&paths.data_file)?;
            persistence::write_items(&output, &items)?;
            println!("Wrote {} items to {}", items.len(), output.display());
        }

        Commands::Check { file } => {
            let text = std::fs::read_to_string(&file)
                .with_context(|| format!("Failed to read {}", file.display()))?;

            match persistence::parse_document(&text) {
                Ok(items) => println!("OK: {} items", items.len()),
                Err(err) => bail!("Invalid document {}: {err}", file.display()),
            }
        }

        Commands::Paths => {
            println!("Config file:  {}", config_path.display());
            println!("Data file:    {}", paths.data_file.display());
            println!("Site root:    {}", paths.site_root.display());
            println!("Bind address: {}", config.server.bind);
        }
    }

    Ok(())
}
