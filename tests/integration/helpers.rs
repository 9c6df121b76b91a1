//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use movecrm_api::{AppState, build_app};
use movecrm_auth::PasswordHasher;
use movecrm_core::config::{AppConfig, StaffAccount};
use movecrm_database::{MemoryRecordStore, RecordStores};
use movecrm_entity::{Customer, MovingJob};
use movecrm_service::CrmServices;

/// Username of the staff account every test app is created with.
pub const STAFF_USERNAME: &str = "dispatch";
/// Password of that account.
pub const STAFF_PASSWORD: &str = "correct horse battery staple";
/// Display name of that account.
pub const STAFF_DISPLAY_NAME: &str = "Dispatch Desk";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Record stores behind the router
    pub stores: RecordStores,
    /// Application config
    pub config: AppConfig,
}

impl TestApp {
    /// Create a test application over empty in-memory stores.
    pub async fn new() -> Self {
        Self::with_records(Vec::new(), Vec::new()).await
    }

    /// Create a test application whose stores already hold the given
    /// records, including shapes the API itself never produces.
    pub async fn with_records(customers: Vec<Customer>, jobs: Vec<MovingJob>) -> Self {
        let stores = RecordStores::from_parts(
            Arc::new(MemoryRecordStore::with_records(customers)),
            Arc::new(MemoryRecordStore::with_records(jobs)),
        );
        Self::build(stores)
    }

    fn build(stores: RecordStores) -> Self {
        let mut config =
            AppConfig::load("tests/fixtures/test_config.toml").expect("Failed to load test config");

        let hash = PasswordHasher::new()
            .hash_password(STAFF_PASSWORD)
            .expect("Failed to hash password");
        config.auth.accounts = vec![StaffAccount {
            username: STAFF_USERNAME.to_string(),
            display_name: Some(STAFF_DISPLAY_NAME.to_string()),
            password_hash: hash,
        }];

        let services = CrmServices::new(&stores, &config);
        let state = AppState::new(config.clone(), stores.clone(), services);
        let router = build_app(state);

        Self {
            router,
            stores,
            config,
        }
    }

    /// Login and return the bearer token
    pub async fn login(&self) -> String {
        let body = serde_json::json!({
            "username": STAFF_USERNAME,
            "password": STAFF_PASSWORD,
        });

        let response = self
            .request("POST", "/api/auth/login", Some(body), None)
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );

        response.data()["accessToken"]
            .as_str()
            .expect("No accessToken in login response")
            .to_string()
    }

    /// Create a customer through the API and return its id.
    pub async fn create_customer(&self, token: &str, name: &str, email: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/customers",
                Some(serde_json::json!({
                    "name": name,
                    "email": email,
                    "phone": "555-0100",
                })),
                Some(token),
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Customer create failed: {:?}",
            response.body
        );

        response.data()["id"]
            .as_str()
            .expect("No id in customer response")
            .to_string()
    }

    /// Create a job through the API and return its id.
    pub async fn create_job(&self, token: &str, body: Value) -> String {
        let response = self.request("POST", "/api/jobs", Some(body), Some(token)).await;

        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Job create failed: {:?}",
            response.body
        );

        response.data()["id"]
            .as_str()
            .expect("No id in job response")
            .to_string()
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        self.request_raw(method, path, body_str, token).await
    }

    /// Make a request whose body is sent exactly as given.
    pub async fn request_raw(
        &self,
        method: &str,
        path: &str,
        body_str: impl Into<String>,
        token: Option<&str>,
    ) -> TestResponse {
        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {token}"));
        }

        let req = req
            .body(Body::from(body_str.into()))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}

impl TestResponse {
    /// The `data` member of a success envelope.
    pub fn data(&self) -> &Value {
        assert_eq!(self.body["success"], Value::Bool(true), "not a success body: {:?}", self.body);
        &self.body["data"]
    }

    /// The `error` code of an error body.
    pub fn error_code(&self) -> &str {
        self.body["error"].as_str().unwrap_or_default()
    }
}
