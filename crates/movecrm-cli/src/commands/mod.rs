//! CLI command definitions and dispatch.

pub mod config;
pub mod customer;
pub mod dashboard;
pub mod job;
pub mod migrate;
pub mod password;
pub mod rows;
pub mod serve;
pub mod shell;

use clap::{Parser, Subcommand};
use tracing::debug;

use movecrm_core::config::{AppConfig, StoreProvider};
use movecrm_core::error::AppError;
use movecrm_database::RecordStores;
use movecrm_service::CrmServices;

use crate::output::{self, OutputFormat};

/// MoveCRM: customers and moving jobs for a moving company
#[derive(Debug, Parser)]
#[command(name = "movecrm", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the HTTP server
    Serve(serve::ServeArgs),
    /// Database migration management
    Migrate(migrate::MigrateArgs),
    /// Configuration management
    Config(config::ConfigArgs),
    /// Customer records
    Customer(customer::CustomerArgs),
    /// Moving job records
    Job(job::JobArgs),
    /// Print the dashboard summary
    Dashboard,
    /// Interactive shell with sign-in and tabs
    Shell,
    /// Hash a password for a staff account entry
    HashPassword(password::HashPasswordArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            Commands::Serve(args) => serve::execute(args, &self.config).await,
            Commands::Migrate(args) => migrate::execute(args, &self.config).await,
            Commands::Config(args) => config::execute(args, &self.config, self.format).await,
            Commands::Customer(args) => customer::execute(args, &self.config, self.format).await,
            Commands::Job(args) => job::execute(args, &self.config, self.format).await,
            Commands::Dashboard => dashboard::execute(&self.config, self.format).await,
            Commands::Shell => shell::execute(&self.config).await,
            Commands::HashPassword(args) => password::execute(args),
        }
    }
}

/// Helper: load configuration from file
pub fn load_config(config_path: &str) -> Result<AppConfig, AppError> {
    AppConfig::load(config_path)
}

/// Helper: open the configured stores and wire the managers over them.
pub async fn open_services(config: &AppConfig) -> Result<(RecordStores, CrmServices), AppError> {
    let stores = RecordStores::open(config).await?;
    debug!(provider = %stores.provider(), "Record stores opened");
    let services = CrmServices::bootstrap(&stores, config).await?;
    Ok((stores, services))
}

/// Warn that one-shot changes vanish when the process exits.
pub fn warn_if_ephemeral(config: &AppConfig) {
    if config.store.provider == StoreProvider::Memory {
        output::print_warning(
            "Using the in-memory store; changes are discarded when this command exits",
        );
    }
}

/// Helper: map a prompt failure to an application error.
pub fn input_error(e: dialoguer::Error) -> AppError {
    AppError::internal(format!("Input error: {e}"))
}

/// Ask for confirmation unless `yes` was passed.
pub fn confirm(prompt: &str, yes: bool) -> Result<bool, AppError> {
    if yes {
        return Ok(true);
    }
    dialoguer::Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(input_error)
}
