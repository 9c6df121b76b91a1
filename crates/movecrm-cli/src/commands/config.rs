//! Configuration management CLI commands.

use clap::{Args, Subcommand};

use movecrm_core::error::AppError;
use movecrm_database::connection::mask_password;

use crate::output::{self, OutputFormat};

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration (secrets masked)
    Show,
    /// Validate the configuration file
    Validate,
}

/// Execute config commands
pub async fn execute(
    args: &ConfigArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    match &args.command {
        ConfigCommand::Show => {
            let mut config = super::load_config(config_path)?;
            config.auth.jwt_secret = "****".to_string();
            config.database.url = mask_password(&config.database.url);

            match format {
                OutputFormat::Json => output::print_json(&config),
                OutputFormat::Table => {
                    output::print_kv("server", &format!("{}:{}", config.server.host, config.server.port));
                    output::print_kv("store.provider", &config.store.provider.to_string());
                    output::print_kv("store.auto_migrate", &config.store.auto_migrate.to_string());
                    output::print_kv("store.seed_demo_data", &config.store.seed_demo_data.to_string());
                    output::print_kv("database.url", &config.database.url);
                    output::print_kv(
                        "auth.jwt_access_ttl",
                        &format!("{} min", config.auth.jwt_access_ttl_minutes),
                    );
                    output::print_kv("auth.accounts", &config.auth.accounts.len().to_string());
                    output::print_kv(
                        "dashboard.window",
                        &format!("{} days", config.dashboard.upcoming_window_days),
                    );
                    output::print_kv(
                        "logging",
                        &format!("{} ({})", config.logging.level, config.logging.format),
                    );
                }
            }
        }
        ConfigCommand::Validate => match super::load_config(config_path) {
            Ok(config) => {
                output::print_success(&format!("Configuration '{config_path}' is valid"));
                println!("  Server: {}:{}", config.server.host, config.server.port);
                println!("  Store: {}", config.store.provider);
                println!("  Database: {}", mask_password(&config.database.url));
                println!("  Staff accounts: {}", config.auth.accounts.len());
                if config.auth.accounts.is_empty() {
                    output::print_warning("No staff accounts configured; sign-in will always fail");
                }
                if config.auth.jwt_secret == "CHANGE_ME_IN_PRODUCTION" {
                    output::print_warning("auth.jwt_secret is still the default value");
                }
            }
            Err(e) => {
                output::print_error(&format!("Configuration invalid: {e}"));
                return Err(e);
            }
        },
    }

    Ok(())
}
