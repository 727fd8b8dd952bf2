//! CamCheck CLI — Camera permission diagnostics.
//!
//! Usage:
//!   camcheck status     Report the camera authorization status
//!   camcheck request    Trigger the consent prompt if undetermined
//!   camcheck check      Check system capabilities

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "camcheck",
    about = "Camera permission diagnostics and consent triggering",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Report the current camera authorization status
    Status,

    /// Trigger the consent prompt when the decision is still open
    Request {
        /// How long to wait for the user's response, in seconds
        #[arg(long)]
        timeout_secs: Option<u64>,
    },

    /// Check system capabilities
    Check,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    camcheck_common::logging::init_logging(&camcheck_common::config::LoggingConfig {
        level: log_level.to_string(),
        json: false,
        file: None,
    });

    match cli.command {
        Commands::Status => commands::status::run(),
        Commands::Request { timeout_secs } => commands::request::run(timeout_secs).await,
        Commands::Check => commands::check::run(),
    }
}
