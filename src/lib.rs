pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod history;
pub mod log;
pub mod providers;
pub mod rates;
pub mod trend;
pub mod view;

use anyhow::Result;
use tracing::{debug, info};

use crate::config::AppConfig;
use crate::providers::CurrencyApiProvider;

/// Commands the application can run, independent of the clap surface.
pub enum AppCommand {
    Convert {
        amount: String,
        from: Option<String>,
        to: Option<String>,
    },
    Trend {
        from: Option<String>,
        to: Option<String>,
        days: Option<usize>,
    },
    Currencies,
    Shell,
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("Currency converter starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let provider =
        CurrencyApiProvider::new(&config.provider.base_url, &config.provider.api_key);

    match command {
        AppCommand::Convert { amount, from, to } => {
            let from = from.unwrap_or_else(|| config.base_currency.clone());
            let to = to.unwrap_or_else(|| config.target_currency.clone());
            cli::convert::run(&provider, &amount, &from, &to).await
        }
        AppCommand::Trend { from, to, days } => {
            let from = from.unwrap_or_else(|| config.base_currency.clone());
            let to = to.unwrap_or_else(|| config.target_currency.clone());
            let days = days.unwrap_or(config.trend_days);
            cli::trend::run(&provider, &from, &to, days).await
        }
        AppCommand::Currencies => cli::currencies::run(&provider).await,
        AppCommand::Shell => cli::shell::run(&provider, &config).await,
    }
}
