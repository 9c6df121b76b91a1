//! Integration tests for the jobs tab endpoints.

mod helpers;

use chrono::{Days, Local, TimeZone, Utc};
use http::StatusCode;

use movecrm_core::types::{CustomerId, MovingJobId};
use movecrm_entity::MovingJob;

fn job_body(customer_id: &str, date: &str) -> serde_json::Value {
    serde_json::json!({
        "customerId": customer_id,
        "currentAddress": "1 Old Rd",
        "destinationAddress": "2 New St",
        "scheduledDate": date,
        "estimatedCost": "80",
    })
}

fn in_days(days: u64) -> String {
    Local::now()
        .date_naive()
        .checked_add_days(Days::new(days))
        .unwrap()
        .to_string()
}

#[tokio::test]
async fn test_create_job_applies_defaults() {
    let app = helpers::TestApp::new().await;
    let token = app.login().await;
    let customer_id = app.create_customer(&token, "Jane Doe", "jane@x.com").await;

    let response = app
        .request(
            "POST",
            "/api/jobs",
            Some(serde_json::json!({
                "customerId": customer_id,
                "currentAddress": "1 Old Rd",
                "destinationAddress": "2 New St",
                "scheduledDate": "2026-10-22",
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    let data = response.data();
    assert_eq!(data["status"], "SCHEDULED");
    assert_eq!(data["jobSize"], "MEDIUM");
    assert!(data["estimatedCost"].is_null());
    assert!(
        data["scheduledDate"]
            .as_str()
            .unwrap()
            .starts_with("2026-10-22T00:00:00")
    );
}

#[tokio::test]
async fn test_list_resolves_customer_names() {
    let app = helpers::TestApp::new().await;
    let token = app.login().await;
    let customer_id = app.create_customer(&token, "Jane Doe", "jane@x.com").await;
    app.create_job(&token, job_body(&customer_id, &in_days(3))).await;

    let response = app.request("GET", "/api/jobs", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    let jobs = response.data().as_array().unwrap();
    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0]["customerName"], "Jane Doe");
    assert_eq!(jobs[0]["customerId"], customer_id.as_str());
    assert_eq!(jobs[0]["estimatedCost"], 80.0);
}

#[tokio::test]
async fn test_dangling_customer_shows_placeholder() {
    let app = helpers::TestApp::new().await;
    let token = app.login().await;
    let customer_id = app.create_customer(&token, "Jane Doe", "jane@x.com").await;
    app.create_job(&token, job_body(&customer_id, &in_days(1))).await;

    app.request("DELETE", &format!("/api/customers/{customer_id}"), None, Some(&token))
        .await;

    let response = app.request("GET", "/api/jobs", None, Some(&token)).await;
    let jobs = response.data().as_array().unwrap();
    assert_eq!(jobs.len(), 1, "jobs outlive their customer");
    assert_eq!(jobs[0]["customerName"], "Unknown Customer");
}

#[tokio::test]
async fn test_invalid_form_values_rejected() {
    let app = helpers::TestApp::new().await;
    let token = app.login().await;
    let customer_id = app.create_customer(&token, "Jane Doe", "jane@x.com").await;

    let cases = [
        serde_json::json!({
            "customerId": customer_id,
            "currentAddress": "1 Old Rd",
            "destinationAddress": "2 New St",
            "scheduledDate": "next tuesday",
        }),
        serde_json::json!({
            "customerId": customer_id,
            "currentAddress": "1 Old Rd",
            "destinationAddress": "2 New St",
            "scheduledDate": "2026-10-22",
            "estimatedCost": "lots",
        }),
        serde_json::json!({
            "customerId": customer_id,
            "currentAddress": "",
            "destinationAddress": "2 New St",
            "scheduledDate": "2026-10-22",
        }),
        serde_json::json!({
            "customerId": "not-an-id",
            "currentAddress": "1 Old Rd",
            "destinationAddress": "2 New St",
            "scheduledDate": "2026-10-22",
        }),
    ];

    for body in cases {
        let response = app
            .request("POST", "/api/jobs", Some(body.clone()), Some(&token))
            .await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{body}");
        assert_eq!(response.error_code(), "VALIDATION_ERROR");
    }

    let response = app.request("GET", "/api/jobs", None, Some(&token)).await;
    assert!(response.data().as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_status_update_changes_only_status() {
    let app = helpers::TestApp::new().await;
    let token = app.login().await;
    let customer_id = app.create_customer(&token, "Jane Doe", "jane@x.com").await;
    let job_id = app.create_job(&token, job_body(&customer_id, &in_days(2))).await;

    let response = app
        .request(
            "PATCH",
            &format!("/api/jobs/{job_id}/status"),
            Some(serde_json::json!({ "status": "IN_PROGRESS" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let data = response.data();
    assert_eq!(data["status"], "IN_PROGRESS");
    assert_eq!(data["currentAddress"], "1 Old Rd");
    assert_eq!(data["estimatedCost"], 80.0);
}

#[tokio::test]
async fn test_status_update_rejects_unknown_status() {
    let app = helpers::TestApp::new().await;
    let token = app.login().await;
    let customer_id = app.create_customer(&token, "Jane Doe", "jane@x.com").await;
    let job_id = app.create_job(&token, job_body(&customer_id, &in_days(2))).await;

    let response = app
        .request(
            "PATCH",
            &format!("/api/jobs/{job_id}/status"),
            Some(serde_json::json!({ "status": "DONE" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_status_update_without_status_field_rejected() {
    let app = helpers::TestApp::new().await;
    let token = app.login().await;
    let customer_id = app.create_customer(&token, "Jane Doe", "jane@x.com").await;
    let job_id = app.create_job(&token, job_body(&customer_id, &in_days(2))).await;

    let response = app
        .request_raw(
            "PATCH",
            &format!("/api/jobs/{job_id}/status"),
            r#"{"state": "COMPLETED"}"#,
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_status_update_unknown_job_is_not_found() {
    let app = helpers::TestApp::new().await;
    let token = app.login().await;

    let response = app
        .request(
            "PATCH",
            &format!("/api/jobs/{}/status", uuid::Uuid::new_v4()),
            Some(serde_json::json!({ "status": "COMPLETED" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_job() {
    let app = helpers::TestApp::new().await;
    let token = app.login().await;
    let customer_id = app.create_customer(&token, "Jane Doe", "jane@x.com").await;
    let job_id = app.create_job(&token, job_body(&customer_id, &in_days(2))).await;

    let response = app
        .request("DELETE", &format!("/api/jobs/{job_id}"), None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request("DELETE", &format!("/api/jobs/{job_id}"), None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_legacy_job_without_status_is_listed() {
    let now = Utc::now();
    let legacy = MovingJob {
        id: MovingJobId::new(),
        customer_id: CustomerId::new(),
        current_address: "9 Elm St".to_string(),
        destination_address: "10 Oak Ave".to_string(),
        scheduled_date: Utc.with_ymd_and_hms(2026, 1, 5, 0, 0, 0).unwrap(),
        status: None,
        job_size: None,
        special_items: None,
        estimated_cost: None,
        actual_cost: None,
        notes: None,
        created_at: now,
        updated_at: now,
    };
    let app = helpers::TestApp::with_records(Vec::new(), vec![legacy]).await;
    let token = app.login().await;

    let response = app.request("GET", "/api/jobs", None, Some(&token)).await;

    let jobs = response.data().as_array().unwrap();
    assert_eq!(jobs.len(), 1);
    assert!(jobs[0]["status"].is_null());
    assert_eq!(jobs[0]["customerName"], "Unknown Customer");
}
