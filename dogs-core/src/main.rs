use anyhow::Result;
use clap::{Parser, Subcommand};
use dogs_core::{config::Config, migration, server, telemetry};
use tracing::info;

#[derive(Parser)]
#[command(name = "dogs-core", version, about = "Dogs API server")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Start the HTTP server (default)
    Serve,
    /// Create the database if needed and apply migrations
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    let metrics_handle = telemetry::init(&config.telemetry)?;

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => {
            info!("Starting Dogs Core Service");
            info!("HTTP server listening on {}", config.http_addr());
            server::run(config, metrics_handle).await
        }
        Command::Migrate => migration::run_migrations(&config).await,
    }
}
