//! # Trade Smoke CLI
//!
//! Command-line interface for running smoke checks against the trade web API.

mod cli;

use clap::{Parser, Subcommand};
use trade_smoke::logging::{init_logging, LogFormat};
use trade_smoke::SmokeConfig;
use tracing::info;

use cli::{
    handle_auth_command, handle_config_command, handle_health_command, handle_list_command,
    handle_run_command,
};

#[derive(Parser, Debug)]
#[command(name = "trade-smoke")]
#[command(about = "Smoke tests for the trade intelligence web API")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Configuration file path (default: ./trade-smoke.toml or ~/.trade-smoke/config.toml)
    #[arg(short, long)]
    config: Option<String>,

    /// Override the base URL of the web application
    #[arg(short, long)]
    base_url: Option<String>,

    /// Verbose output level (use multiple times for more verbosity)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Subcommands
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run smoke checks
    Run {
        /// Only run the named check (repeatable)
        #[arg(long = "check", value_name = "NAME")]
        checks: Vec<String>,
        /// Only run the ten core API checks
        #[arg(long)]
        core_only: bool,
        /// Output format (table, json)
        #[arg(long, default_value = "table", value_parser = ["table", "json"])]
        format: String,
        /// Do not wait for the server before running
        #[arg(long)]
        no_wait: bool,
    },
    /// List available checks
    List,
    /// Request a token and print the session
    Auth {
        /// Bearer token to send with the token request
        #[arg(short, long)]
        token: Option<String>,
    },
    /// Wait until the web application answers
    Health,
    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration (token redacted)
    Show,
    /// Write the default configuration to a file
    Init {
        /// Output path (default: ~/.trade-smoke/config.toml)
        #[arg(short, long)]
        output: Option<String>,
    },
}

#[tokio::main]
async fn main() -> trade_smoke::ClientResult<()> {
    let cli = Cli::parse();

    let mut config = match cli.config {
        Some(ref config_path) => SmokeConfig::load_with_file(std::path::Path::new(config_path))?,
        None => SmokeConfig::load()?,
    };
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
        config.validate()?;
    }

    init_logging(
        cli.verbose,
        LogFormat::parse(&config.log.format),
        &config.log.level,
    );

    info!(base_url = %config.base_url, "trade-smoke starting");

    match cli.command {
        Commands::Run {
            checks,
            core_only,
            format,
            no_wait,
        } => {
            let report = handle_run_command(&config, &checks, core_only, &format, no_wait).await?;
            if !report.success() {
                std::process::exit(1);
            }
            Ok(())
        }
        Commands::List => handle_list_command(),
        Commands::Auth { token } => handle_auth_command(&config, token.as_deref()).await,
        Commands::Health => handle_health_command(&config).await,
        Commands::Config(config_cmd) => handle_config_command(config_cmd, &config),
    }
}
