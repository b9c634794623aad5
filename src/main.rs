use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use fxc::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl From<Commands> for fxc::AppCommand {
    fn from(cmd: Commands) -> fxc::AppCommand {
        match cmd {
            Commands::Convert { amount, from, to } => {
                fxc::AppCommand::Convert { amount, from, to }
            }
            Commands::Trend { from, to, days } => fxc::AppCommand::Trend { from, to, days },
            Commands::Currencies => fxc::AppCommand::Currencies,
            Commands::Shell => fxc::AppCommand::Shell,
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Convert an amount between two currencies
    Convert {
        /// Amount to convert, e.g. 100 or 99.95
        amount: String,

        /// Currency code to convert from
        #[arg(short, long)]
        from: Option<String>,

        /// Currency code to convert to
        #[arg(short, long)]
        to: Option<String>,
    },
    /// Display the 7-day rate trend for a currency pair
    Trend {
        /// Currency code to convert from
        #[arg(short, long)]
        from: Option<String>,

        /// Currency code to convert to
        #[arg(short, long)]
        to: Option<String>,

        /// Days in the trend window
        #[arg(short, long)]
        days: Option<usize>,
    },
    /// List currency codes known to the rate source
    Currencies,
    /// Start an interactive conversion session
    Shell,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => fxc::cli::setup::setup(),
        Some(cmd) => fxc::run_command(cmd.into(), cli.config_path.as_deref()).await,
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
