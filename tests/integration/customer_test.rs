//! Integration tests for the customers tab endpoints.

mod helpers;

use http::StatusCode;

#[tokio::test]
async fn test_create_then_list_returns_the_customer() {
    let app = helpers::TestApp::new().await;
    let token = app.login().await;

    let response = app
        .request(
            "POST",
            "/api/customers",
            Some(serde_json::json!({
                "name": "Jane Doe",
                "email": "jane@x.com",
                "phone": "555-0100",
            })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    let id = response.data()["id"].as_str().unwrap().to_string();

    let response = app.request("GET", "/api/customers", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::OK);

    let customers = response.data().as_array().unwrap();
    assert_eq!(customers.len(), 1);
    assert_eq!(customers[0]["id"], id.as_str());
    assert_eq!(customers[0]["name"], "Jane Doe");
    assert_eq!(customers[0]["email"], "jane@x.com");
    assert_eq!(customers[0]["phone"], "555-0100");
    assert!(customers[0]["address"].is_null());
}

#[tokio::test]
async fn test_delete_removes_customer() {
    let app = helpers::TestApp::new().await;
    let token = app.login().await;
    let id = app.create_customer(&token, "Jane Doe", "jane@x.com").await;

    let response = app
        .request("DELETE", &format!("/api/customers/{id}"), None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app.request("GET", "/api/customers", None, Some(&token)).await;
    assert!(response.data().as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_unknown_customer_is_not_found() {
    let app = helpers::TestApp::new().await;
    let token = app.login().await;

    let response = app
        .request(
            "DELETE",
            &format!("/api/customers/{}", uuid::Uuid::new_v4()),
            None,
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.error_code(), "NOT_FOUND");
}

#[tokio::test]
async fn test_delete_with_malformed_id_is_bad_request() {
    let app = helpers::TestApp::new().await;
    let token = app.login().await;

    let response = app
        .request("DELETE", "/api/customers/not-an-id", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_missing_required_fields_rejected() {
    let app = helpers::TestApp::new().await;
    let token = app.login().await;

    let response = app
        .request(
            "POST",
            "/api/customers",
            Some(serde_json::json!({ "name": "Jane Doe", "email": "", "phone": "555" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), "VALIDATION_ERROR");

    let response = app.request("GET", "/api/customers", None, Some(&token)).await;
    assert!(response.data().as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_malformed_json_body_uses_error_envelope() {
    let app = helpers::TestApp::new().await;
    let token = app.login().await;

    let response = app
        .request_raw("POST", "/api/customers", "{not json", Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), "VALIDATION_ERROR");
    assert!(!response.body["message"].as_str().unwrap().is_empty());

    let response = app.request("GET", "/api/customers", None, Some(&token)).await;
    assert!(response.data().as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_customers_list_in_creation_order() {
    let app = helpers::TestApp::new().await;
    let token = app.login().await;
    app.create_customer(&token, "First", "first@x.com").await;
    app.create_customer(&token, "Second", "second@x.com").await;

    let response = app.request("GET", "/api/customers", None, Some(&token)).await;
    let names: Vec<&str> = response
        .data()
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();

    assert_eq!(names, vec!["First", "Second"]);
}
