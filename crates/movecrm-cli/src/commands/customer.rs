//! Customer CLI commands.

use clap::{Args, Subcommand};

use movecrm_core::error::AppError;
use movecrm_core::types::CustomerId;
use movecrm_service::{CustomerForm, RequestContext};

use super::rows::CustomerRow;
use crate::output::{self, OutputFormat};

/// Arguments for customer commands
#[derive(Debug, Args)]
pub struct CustomerArgs {
    /// Customer subcommand
    #[command(subcommand)]
    pub command: CustomerCommand,
}

/// Customer subcommands
#[derive(Debug, Subcommand)]
pub enum CustomerCommand {
    /// List all customers
    List,
    /// Add a customer
    Add {
        /// Full name
        #[arg(long)]
        name: String,
        /// Contact email
        #[arg(long)]
        email: String,
        /// Contact phone
        #[arg(long)]
        phone: String,
        /// Postal address
        #[arg(long, default_value = "")]
        address: String,
        /// Notes
        #[arg(long, default_value = "")]
        notes: String,
    },
    /// Delete a customer
    Delete {
        /// Customer ID
        id: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

/// Execute customer commands
pub async fn execute(
    args: &CustomerArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let (stores, services) = super::open_services(&config).await?;
    let ctx = RequestContext::system("cli");

    let result = async {
        match &args.command {
            CustomerCommand::List => {
                let customers = services.customers.list().await?;
                let rows: Vec<CustomerRow> = customers.iter().map(CustomerRow::from).collect();
                output::print_list(&rows, format);
            }
            CustomerCommand::Add {
                name,
                email,
                phone,
                address,
                notes,
            } => {
                super::warn_if_ephemeral(&config);
                let form = CustomerForm {
                    name: name.clone(),
                    email: email.clone(),
                    phone: phone.clone(),
                    address: address.clone(),
                    notes: notes.clone(),
                };
                let customer = services.customers.create(&ctx, form).await?;
                match format {
                    OutputFormat::Json => output::print_json(&customer),
                    OutputFormat::Table => output::print_success(&format!(
                        "Customer '{}' created (id: {})",
                        customer.name, customer.id
                    )),
                }
            }
            CustomerCommand::Delete { id, yes } => {
                super::warn_if_ephemeral(&config);
                let id: CustomerId = id
                    .parse()
                    .map_err(|_| AppError::validation(format!("Invalid customer id: '{id}'")))?;
                if !super::confirm(&format!("Delete customer {id}?"), *yes)? {
                    println!("Cancelled.");
                    return Ok(());
                }
                services.customers.delete(&ctx, id).await?;
                output::print_success(&format!("Customer {id} deleted"));
            }
        }
        Ok::<(), AppError>(())
    }
    .await;

    stores.close().await;
    result
}
