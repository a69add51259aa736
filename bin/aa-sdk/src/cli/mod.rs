use crate::utils::run_until_ctrl_c;
use clap::{value_parser, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

pub mod args;
pub mod commands;

/// The aa-sdk CLI interface
#[derive(Debug, Parser)]
#[command(author, version, about = "aa-sdk bundler client", long_about = None)]
pub struct Cli {
    /// The command to execute
    #[clap(subcommand)]
    command: Commands,

    /// The verbosity level
    #[clap(
        long,
        short,
        global = true,
        default_value_t = 2,
        value_parser = value_parser!(u8).range(..=4)
    )]
    verbosity: u8,
}

impl Cli {
    /// Get the log level based on the verbosity level
    pub fn get_log_level(&self) -> String {
        match self.verbosity {
            0 => "error",
            1 => "warn",
            2 => "info",
            3 => "debug",
            _ => "trace",
        }
        .into()
    }
}

/// Commands to be executed
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the chain id reported by the bundler
    #[command(name = "chain-id")]
    ChainId(commands::ChainIdCommand),

    /// Print the entry points supported by the bundler
    #[command(name = "entry-points")]
    EntryPoints(commands::EntryPointsCommand),

    /// Look up a user operation by its hash
    #[command(name = "user-operation")]
    UserOperation(commands::UserOperationCommand),

    /// Look up the receipt of a user operation
    #[command(name = "receipt")]
    Receipt(commands::ReceiptCommand),

    /// Estimate the gas of a user operation
    #[command(name = "estimate-gas")]
    EstimateGas(commands::EstimateGasCommand),
}

pub fn run() -> eyre::Result<()> {
    let cli = Cli::parse();

    let directive = match std::env::var("RUST_LOG") {
        Ok(val) => format!("{val},aa_sdk={}", cli.get_log_level()),
        Err(_) => format!("aa_sdk={}", cli.get_log_level()),
    };
    tracing_subscriber::fmt().with_env_filter(EnvFilter::new(directive)).init();

    let rt = tokio::runtime::Builder::new_multi_thread().enable_all().build()?;

    let task = async move {
        match cli.command {
            Commands::ChainId(command) => command.execute().await,
            Commands::EntryPoints(command) => command.execute().await,
            Commands::UserOperation(command) => command.execute().await,
            Commands::Receipt(command) => command.execute().await,
            Commands::EstimateGas(command) => command.execute().await,
        }
    };

    rt.block_on(run_until_ctrl_c(task))
}
