//! Sample data for a fresh development store.

use chrono::{Days, Local};
use tracing::info;

use movecrm_core::error::AppError;
use movecrm_entity::{JobSize, JobStatus};

use crate::context::RequestContext;
use crate::customer::{CustomerForm, CustomerManager};
use crate::job::{JobForm, JobManager};

/// Insert one customer and one upcoming job when both collections are
/// empty. Returns whether anything was inserted.
pub async fn seed_demo_data(
    customers: &CustomerManager,
    jobs: &JobManager,
) -> Result<bool, AppError> {
    if !customers.list().await?.is_empty() || !jobs.list().await?.is_empty() {
        return Ok(false);
    }

    let ctx = RequestContext::system("seed");
    let customer = customers
        .create(
            &ctx,
            CustomerForm {
                name: "Jane Doe".to_string(),
                email: "jane@example.com".to_string(),
                phone: "555-0100".to_string(),
                address: "12 Elm Street".to_string(),
                notes: "Prefers morning calls".to_string(),
            },
        )
        .await?;

    let move_day = Local::now()
        .date_naive()
        .checked_add_days(Days::new(3))
        .unwrap_or_else(|| Local::now().date_naive());
    jobs.create(
        &ctx,
        &JobForm {
            customer_id: customer.id.to_string(),
            current_address: "12 Elm Street".to_string(),
            destination_address: "48 Harbor View".to_string(),
            scheduled_date: move_day.format("%Y-%m-%d").to_string(),
            status: JobStatus::Scheduled.as_str().to_string(),
            job_size: JobSize::Large.as_str().to_string(),
            special_items: "Upright piano".to_string(),
            estimated_cost: "1200".to_string(),
            ..Default::default()
        },
    )
    .await?;

    info!("Seeded demo customer and job");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::CrmServices;
    use movecrm_core::config::AppConfig;
    use movecrm_database::RecordStores;

    #[tokio::test]
    async fn test_seeds_only_empty_stores() {
        let services = CrmServices::new(&RecordStores::in_memory(), &AppConfig::default());
        assert!(seed_demo_data(&services.customers, &services.jobs).await.unwrap());
        assert!(!seed_demo_data(&services.customers, &services.jobs).await.unwrap());
        assert_eq!(services.customers.list().await.unwrap().len(), 1);

        let snapshot = services.dashboard.load().await.unwrap();
        assert_eq!(snapshot.upcoming.len(), 1);
        assert_eq!(snapshot.upcoming[0].customer_name, "Jane Doe");
    }
}
