//! Dashboard summary command.

use movecrm_core::error::AppError;
use movecrm_entity::JobStatus;
use movecrm_service::DashboardSnapshot;

use super::rows::UpcomingRow;
use crate::output::{self, OutputFormat};

/// Execute the dashboard command
pub async fn execute(config_path: &str, format: OutputFormat) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let (stores, services) = super::open_services(&config).await?;

    let result = services.dashboard.load().await;
    stores.close().await;
    let snapshot = result?;

    match format {
        OutputFormat::Json => output::print_json(&snapshot),
        OutputFormat::Table => print_snapshot(&snapshot),
    }
    Ok(())
}

/// Render the summary cards and the upcoming-jobs table.
pub fn print_snapshot(snapshot: &DashboardSnapshot) {
    output::print_heading("Dashboard");
    output::print_kv("Total customers", &snapshot.customer_count.to_string());
    output::print_kv("Active jobs", &snapshot.active_jobs.to_string());
    output::print_kv("Completed jobs", &snapshot.completed_jobs.to_string());
    output::print_kv("Revenue", &snapshot.revenue_display);

    output::print_heading("Jobs by status");
    for status in JobStatus::ALL {
        output::print_kv(status.label(), &snapshot.status_counts.get(status).to_string());
    }

    output::print_heading(&format!(
        "Upcoming jobs (next {} days from {})",
        snapshot.window_days, snapshot.today
    ));
    let rows: Vec<UpcomingRow> = snapshot.upcoming.iter().map(UpcomingRow::from).collect();
    if rows.is_empty() {
        println!("No upcoming jobs.");
    } else {
        output::print_table(&rows);
    }
}
