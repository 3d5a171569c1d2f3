use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use voxlearn::Config;

mod cli;

#[derive(Parser)]
#[command(name = "voxlearn")]
#[command(about = "Accessible e-learning: course API and voice/keyboard accessibility layer")]
#[command(version)]
struct Cli {
    /// Project directory (defaults to current directory)
    #[arg(short, long, global = true)]
    path: Option<PathBuf>,

    /// Path to the config file (defaults to .voxlearn/config.toml in the project directory)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the course REST API
    Serve,

    /// Interactive console session driving the accessibility layer
    Listen,

    /// Show voice commands and keyboard shortcuts
    Commands,

    /// Initialize a new .voxlearn/config.toml configuration file
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    let work_dir = cli.path.unwrap_or_else(|| PathBuf::from("."));

    let load_config = || match &cli.config {
        Some(path) => Config::from_file(path),
        None => Config::from_dir(&work_dir),
    };

    match cli.command {
        Some(Commands::Serve) => {
            cli::serve::serve_command(&load_config()?).await?;
        }
        Some(Commands::Listen) | None => {
            cli::listen::listen_command(&work_dir, &load_config()?).await?;
        }
        Some(Commands::Commands) => {
            cli::commands::commands_command();
        }
        Some(Commands::Init { force }) => {
            cli::init::init_command(&work_dir, cli.config.clone(), force).await?;
        }
    }

    Ok(())
}
