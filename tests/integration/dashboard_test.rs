//! Integration tests for the dashboard endpoint.

mod helpers;

use chrono::{Days, Local, NaiveDate, TimeZone, Utc};
use http::StatusCode;

use movecrm_core::types::{CustomerId, MovingJobId};
use movecrm_entity::{JobSize, JobStatus, MovingJob};

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn job_on(day: NaiveDate, status: Option<JobStatus>) -> MovingJob {
    let now = Utc::now();
    MovingJob {
        id: MovingJobId::new(),
        customer_id: CustomerId::new(),
        current_address: "1 Old Rd".to_string(),
        destination_address: "2 New St".to_string(),
        scheduled_date: Utc.from_utc_datetime(&day.and_hms_opt(0, 0, 0).unwrap()),
        status,
        job_size: Some(JobSize::Medium),
        special_items: None,
        estimated_cost: None,
        actual_cost: None,
        notes: None,
        created_at: now,
        updated_at: now,
    }
}

#[tokio::test]
async fn test_empty_dashboard() {
    let app = helpers::TestApp::new().await;
    let token = app.login().await;

    let response = app.request("GET", "/api/dashboard", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    let data = response.data();
    assert_eq!(data["customerCount"], 0);
    assert_eq!(data["activeJobs"], 0);
    assert_eq!(data["completedJobs"], 0);
    assert_eq!(data["revenueDisplay"], "$0.00");
    assert_eq!(data["windowDays"], 7);
    assert!(data["upcoming"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_new_job_is_upcoming_until_cancelled() {
    let app = helpers::TestApp::new().await;
    let token = app.login().await;
    let customer_id = app.create_customer(&token, "Jane Doe", "jane@x.com").await;
    let date = today().checked_add_days(Days::new(3)).unwrap().to_string();
    let job_id = app
        .create_job(
            &token,
            serde_json::json!({
                "customerId": customer_id,
                "currentAddress": "1 Old Rd",
                "destinationAddress": "2 New St",
                "scheduledDate": date,
            }),
        )
        .await;

    let response = app.request("GET", "/api/dashboard", None, Some(&token)).await;
    let upcoming = response.data()["upcoming"].as_array().unwrap().clone();
    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0]["id"], job_id.as_str());
    assert_eq!(upcoming[0]["customerName"], "Jane Doe");
    assert_eq!(upcoming[0]["statusLabel"], "SCHEDULED");
    assert_eq!(response.data()["activeJobs"], 1);

    app.request(
        "PATCH",
        &format!("/api/jobs/{job_id}/status"),
        Some(serde_json::json!({ "status": "CANCELLED" })),
        Some(&token),
    )
    .await;

    let response = app.request("GET", "/api/dashboard", None, Some(&token)).await;
    let data = response.data();
    assert!(data["upcoming"].as_array().unwrap().is_empty());
    assert_eq!(data["statusCounts"]["CANCELLED"], 1);
    assert_eq!(data["activeJobs"], 0);
}

#[tokio::test]
async fn test_revenue_prefers_actual_cost() {
    let day = today();
    let mut first = job_on(day, Some(JobStatus::Completed));
    first.actual_cost = Some(100.0);
    first.estimated_cost = Some(80.0);
    let mut second = job_on(day, Some(JobStatus::Completed));
    second.estimated_cost = Some(50.0);
    let mut open = job_on(day, Some(JobStatus::Scheduled));
    open.estimated_cost = Some(999.0);

    let app = helpers::TestApp::with_records(Vec::new(), vec![first, second, open]).await;
    let token = app.login().await;

    let response = app.request("GET", "/api/dashboard", None, Some(&token)).await;
    let data = response.data();

    assert_eq!(data["revenue"], 150.0);
    assert_eq!(data["revenueDisplay"], "$150.00");
    assert_eq!(data["completedJobs"], 2);
}

#[tokio::test]
async fn test_window_bounds_and_missing_status() {
    let day = today();
    let jobs = vec![
        job_on(day, Some(JobStatus::Scheduled)),
        job_on(day.checked_add_days(Days::new(7)).unwrap(), Some(JobStatus::InProgress)),
        job_on(day.checked_add_days(Days::new(8)).unwrap(), Some(JobStatus::Scheduled)),
        job_on(day.checked_sub_days(Days::new(1)).unwrap(), Some(JobStatus::Scheduled)),
        job_on(day.checked_add_days(Days::new(2)).unwrap(), None),
    ];
    let app = helpers::TestApp::with_records(Vec::new(), jobs).await;
    let token = app.login().await;

    let response = app.request("GET", "/api/dashboard", None, Some(&token)).await;
    let data = response.data();

    assert_eq!(data["upcoming"].as_array().unwrap().len(), 2);
    let counts = &data["statusCounts"];
    let total: u64 = ["SCHEDULED", "IN_PROGRESS", "COMPLETED", "CANCELLED"]
        .iter()
        .map(|k| counts[*k].as_u64().unwrap())
        .sum();
    assert_eq!(total, 4, "the job without a status is in no bucket");
}
