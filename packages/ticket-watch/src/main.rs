// Entry point for the ticket watcher

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::sync::Arc;
use ticket_watch::kernel::start_scheduler;
use ticket_watch::{Config, TicketChecker};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "ticket-watch", version, about = "Watch HYROX event pages for ticket sales")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run a single check cycle (default)
    Once {
        /// Log the notification instead of sending it
        #[arg(long)]
        dry_run: bool,
    },
    /// Run check cycles on TICKET_WATCH_SCHEDULE until interrupted
    Watch {
        /// Log notifications instead of sending them
        #[arg(long)]
        dry_run: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,ticket_watch=debug,ntfy_client=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(
        events = config.events.len(),
        daily_hour = config.daily_hour,
        topic = %config.ntfy_topic,
        "Configuration loaded"
    );

    match cli.command.unwrap_or(Command::Once { dry_run: false }) {
        Command::Once { dry_run } => {
            let checker = TicketChecker::from_config(&config)?.with_dry_run(dry_run);
            checker.run_once().await;
        }
        Command::Watch { dry_run } => {
            let mut scheduler = start_scheduler(Arc::new(config), dry_run)
                .await
                .context("Failed to start scheduler")?;

            tokio::signal::ctrl_c()
                .await
                .context("Failed to listen for shutdown signal")?;
            tracing::info!("Shutting down");

            scheduler.shutdown().await?;
        }
    }

    Ok(())
}
