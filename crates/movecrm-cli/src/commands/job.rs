//! Moving job CLI commands.

use clap::{Args, Subcommand};

use movecrm_core::error::AppError;
use movecrm_core::types::MovingJobId;
use movecrm_entity::JobStatus;
use movecrm_service::{JobForm, RequestContext};

use super::rows::JobRow;
use crate::output::{self, OutputFormat};

/// Arguments for job commands
#[derive(Debug, Args)]
pub struct JobArgs {
    /// Job subcommand
    #[command(subcommand)]
    pub command: JobCommand,
}

/// Job subcommands
#[derive(Debug, Subcommand)]
pub enum JobCommand {
    /// List all jobs with customer names
    List,
    /// Schedule a move
    Add {
        /// Customer ID
        #[arg(long)]
        customer: String,
        /// Pick-up address
        #[arg(long)]
        from: String,
        /// Drop-off address
        #[arg(long)]
        to: String,
        /// Move day (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// SCHEDULED, IN_PROGRESS, COMPLETED or CANCELLED
        #[arg(long, default_value = "SCHEDULED")]
        status: String,
        /// SMALL, MEDIUM, LARGE or EXTRA_LARGE
        #[arg(long, default_value = "MEDIUM")]
        size: String,
        /// Pianos, safes, artwork...
        #[arg(long, default_value = "")]
        special_items: String,
        /// Quoted price
        #[arg(long, default_value = "")]
        estimated_cost: String,
        /// Invoiced price
        #[arg(long, default_value = "")]
        actual_cost: String,
        /// Notes
        #[arg(long, default_value = "")]
        notes: String,
    },
    /// Change a job's status
    Status {
        /// Job ID
        id: String,
        /// New status
        status: String,
    },
    /// Delete a job
    Delete {
        /// Job ID
        id: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

fn parse_job_id(id: &str) -> Result<MovingJobId, AppError> {
    id.parse()
        .map_err(|_| AppError::validation(format!("Invalid job id: '{id}'")))
}

/// Execute job commands
pub async fn execute(args: &JobArgs, config_path: &str, format: OutputFormat) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let (stores, services) = super::open_services(&config).await?;
    let ctx = RequestContext::system("cli");

    let result = async {
        match &args.command {
            JobCommand::List => {
                let views = services.jobs.list_with_names().await?;
                match format {
                    OutputFormat::Json => output::print_json(&views),
                    OutputFormat::Table => {
                        let rows: Vec<JobRow> = views
                            .iter()
                            .map(|v| JobRow::new(&v.job, &v.customer_name))
                            .collect();
                        output::print_table(&rows);
                    }
                }
            }
            JobCommand::Add {
                customer,
                from,
                to,
                date,
                status,
                size,
                special_items,
                estimated_cost,
                actual_cost,
                notes,
            } => {
                super::warn_if_ephemeral(&config);
                let form = JobForm {
                    customer_id: customer.clone(),
                    current_address: from.clone(),
                    destination_address: to.clone(),
                    scheduled_date: date.clone(),
                    status: status.clone(),
                    job_size: size.clone(),
                    special_items: special_items.clone(),
                    estimated_cost: estimated_cost.clone(),
                    actual_cost: actual_cost.clone(),
                    notes: notes.clone(),
                };
                let job = services.jobs.create(&ctx, &form).await?;
                match format {
                    OutputFormat::Json => output::print_json(&job),
                    OutputFormat::Table => output::print_success(&format!(
                        "Job scheduled for {} (id: {})",
                        job.scheduled_day(),
                        job.id
                    )),
                }
            }
            JobCommand::Status { id, status } => {
                super::warn_if_ephemeral(&config);
                let id = parse_job_id(id)?;
                let status: JobStatus = status.parse()?;
                let job = services.jobs.update_status(&ctx, id, status).await?;
                match format {
                    OutputFormat::Json => output::print_json(&job),
                    OutputFormat::Table => {
                        output::print_success(&format!("Job {id} is now {}", status.label()))
                    }
                }
            }
            JobCommand::Delete { id, yes } => {
                super::warn_if_ephemeral(&config);
                let id = parse_job_id(id)?;
                if !super::confirm(&format!("Delete job {id}?"), *yes)? {
                    println!("Cancelled.");
                    return Ok(());
                }
                services.jobs.delete(&ctx, id).await?;
                output::print_success(&format!("Job {id} deleted"));
            }
        }
        Ok::<(), AppError>(())
    }
    .await;

    stores.close().await;
    result
}
