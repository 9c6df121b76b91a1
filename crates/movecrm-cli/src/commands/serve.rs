//! Start the MoveCRM HTTP server.

use clap::Args;

use movecrm_core::config::StoreProvider;
use movecrm_core::error::AppError;

/// Arguments for the serve command
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Override the server port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Override the server host
    #[arg(long)]
    pub host: Option<String>,

    /// Override the record store provider
    #[arg(long, value_parser = parse_provider)]
    pub store: Option<StoreProvider>,
}

fn parse_provider(s: &str) -> Result<StoreProvider, String> {
    match s.to_ascii_lowercase().as_str() {
        "memory" => Ok(StoreProvider::Memory),
        "postgres" => Ok(StoreProvider::Postgres),
        other => Err(format!("unknown store provider '{other}' (memory, postgres)")),
    }
}

/// Execute the serve command
pub async fn execute(args: &ServeArgs, config_path: &str) -> Result<(), AppError> {
    let mut config = super::load_config(config_path)?;

    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(ref host) = args.host {
        config.server.host = host.clone();
    }
    if let Some(provider) = args.store {
        config.store.provider = provider;
    }

    println!("Starting MoveCRM server...");
    println!("  Host:  {}", config.server.host);
    println!("  Port:  {}", config.server.port);
    println!("  Store: {}", config.store.provider);

    movecrm_api::run_server(config).await
}
