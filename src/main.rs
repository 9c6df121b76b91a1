//! MoveCRM server: customer and moving-job records for a moving company.
//!
//! Main entry point that loads configuration, sets up logging, and starts
//! the HTTP API.

use tracing_subscriber::{EnvFilter, fmt};

use movecrm_core::config::AppConfig;
use movecrm_core::error::AppError;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = movecrm_api::run_server(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from the file named by `MOVECRM_CONFIG` and the
/// environment.
fn load_configuration() -> Result<AppConfig, AppError> {
    let config_path =
        std::env::var("MOVECRM_CONFIG").unwrap_or_else(|_| "config/default.toml".to_string());

    AppConfig::load(&config_path)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }

    tracing::info!(
        store = %config.store.provider,
        "Configuration loaded"
    );
}
