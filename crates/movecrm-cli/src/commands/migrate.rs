//! Database migration CLI commands.

use clap::{Args, Subcommand};

use movecrm_core::error::AppError;
use movecrm_database::DatabasePool;
use movecrm_database::migration::run_migrations;

use crate::output;

/// Arguments for migrate commands
#[derive(Debug, Args)]
pub struct MigrateArgs {
    /// Migration subcommand
    #[command(subcommand)]
    pub command: MigrateCommand,
}

/// Migration subcommands
#[derive(Debug, Subcommand)]
pub enum MigrateCommand {
    /// Apply all pending migrations to the configured database
    Run,
}

/// Execute migration commands
pub async fn execute(args: &MigrateArgs, config_path: &str) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;

    match &args.command {
        MigrateCommand::Run => {
            println!("Running database migrations...");
            let pool = DatabasePool::connect(&config.database).await?;
            let result = run_migrations(pool.pool()).await;
            pool.close().await;
            let known = result?;
            output::print_success(&format!("Schema up to date ({known} migrations)"));
        }
    }

    Ok(())
}
