//! Homework bot CLI
//!
//! Polls the homework review API and reports status changes to Telegram.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Parser, Subcommand};
use homework_bot::{
    error::Result,
    models::{Config, Credentials},
    pipeline::Poller,
    services::{PracticumClient, TelegramNotifier},
    utils::http,
};

/// homework-bot - Homework Review Notifier
#[derive(Parser, Debug)]
#[command(
    name = "homework-bot",
    version,
    about = "Reports homework review status changes to Telegram"
)]

struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "homework-bot.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    /// Poll forever (default)
    Run,

    /// Run a single poll cycle and exit
    Once,

    /// Check configuration and credentials without polling
    Validate,
}

/// Initialize logging. `RUST_LOG` takes precedence over `level`.
fn init_logging(level: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Settle configuration and credentials before anything touches the network.
///
/// Falls back to defaults when the config file could not be loaded. Invalid
/// configuration or missing credentials are returned as errors, which makes
/// `main` exit non-zero before any client is built.
fn prepare(
    loaded: Result<Config>,
    path: &Path,
    read_credentials: impl FnOnce() -> Result<Credentials>,
) -> Result<(Config, Credentials)> {
    let config = loaded.unwrap_or_else(|e| {
        log::warn!(
            "Config load failed from {}: {}. Using defaults.",
            path.display(),
            e
        );
        Config::default()
    });

    if let Err(e) = config.validate() {
        log::error!("Config validation failed: {}", e);
        return Err(e);
    }

    let credentials = read_credentials().inspect_err(|e| log::error!("{}", e))?;
    Ok((config, credentials))
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let loaded = Config::load(&cli.config);
    let level = match (&loaded, cli.verbose) {
        (_, true) => "debug".to_string(),
        (Ok(config), false) => config.logging.level.clone(),
        (Err(_), false) => "info".to_string(),
    };
    init_logging(&level);

    let (config, credentials) = prepare(loaded, &cli.config, Credentials::from_env)?;

    let command = cli.command.unwrap_or(Command::Run);
    if command == Command::Validate {
        log::info!("✓ Config OK (endpoint {})", config.api.endpoint);
        log::info!("✓ Credentials present (chat {})", credentials.telegram_chat_id);
        return Ok(());
    }

    let client = http::create_async_client(&config.api)?;
    let source = PracticumClient::new(client.clone(), &config.api, &credentials.practicum_token)?;
    let notifier = TelegramNotifier::new(client, &config.telegram, &credentials)?;
    let mut poller = Poller::new(&config, Arc::new(source), Arc::new(notifier));

    log::info!("Homework bot starting...");

    match command {
        Command::Once => {
            let outcome = poller.run_cycle().await;
            log::info!("Cycle finished: {:?}", outcome);
        }
        _ => poller.run().await,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use homework_bot::error::AppError;

    use super::*;

    fn credentials() -> Result<Credentials> {
        Credentials::from_lookup(|key| Some(format!("{key}-value")))
    }

    #[test]
    fn test_missing_credentials_stop_startup() {
        let result = prepare(Ok(Config::default()), Path::new("bot.toml"), || {
            Credentials::from_lookup(|_| None)
        });
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_invalid_config_checked_before_credentials() {
        let mut config = Config::default();
        config.polling.retry_period_secs = 0;

        let result = prepare(Ok(config), Path::new("bot.toml"), || {
            panic!("credentials must not be read for an invalid config")
        });
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_unreadable_config_falls_back_to_defaults() {
        let loaded = Config::load("/nonexistent/homework-bot.toml");
        assert!(loaded.is_err());

        let (config, credentials) =
            prepare(loaded, Path::new("/nonexistent/homework-bot.toml"), credentials).unwrap();
        assert_eq!(config.polling.retry_period_secs, 600);
        assert_eq!(credentials.telegram_chat_id, "TELEGRAM_CHAT_ID-value");
    }
}
