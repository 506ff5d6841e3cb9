//! Homework bot CLI
//!
//! Local execution entry point.

use clap::{Parser, Subcommand};
use homework_bot::{
    config::Credentials,
    error::Result,
    pipeline::{self, run_cycle},
    services::{ReviewApiClient, TelegramNotifier},
};

/// Homework review status notifier
#[derive(Parser, Debug)]
#[command(name = "homework-bot", version, about = "Watches homework review statuses")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Poll forever, notifying on every status change
    Run,

    /// Run a single poll cycle and exit
    Once {
        /// Watermark override (seconds since epoch, default: now)
        #[arg(long)]
        from_date: Option<i64>,
    },

    /// Check that all credentials are present, without network calls
    Validate,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Startup-fatal: the loop never starts without all three secrets.
    let credentials = Credentials::from_env().inspect_err(|e| {
        log::error!("Startup aborted: {e}");
    })?;

    match cli.command {
        Command::Run => {
            let api = ReviewApiClient::new(&credentials)?;
            let notifier = TelegramNotifier::new(&credentials)?;

            log::info!("Homework bot starting...");
            pipeline::run_forever(&api, &notifier).await;
        }

        Command::Once { from_date } => {
            let api = ReviewApiClient::new(&credentials)?;
            let notifier = TelegramNotifier::new(&credentials)?;

            let watermark = from_date.unwrap_or_else(|| chrono::Utc::now().timestamp());
            log::info!("Running a single poll cycle from {watermark}");

            let next = run_cycle(&api, &notifier, watermark).await?;
            log::info!("Cycle complete, next watermark would be {next}");
        }

        Command::Validate => {
            log::info!("Tokens - OK");
            log::info!("Endpoint: {}", homework_bot::config::ENDPOINT);
            log::info!(
                "Poll interval: {}s",
                homework_bot::config::RETRY_TIME.as_secs()
            );
        }
    }

    Ok(())
}
