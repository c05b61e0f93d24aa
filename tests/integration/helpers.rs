//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{HeaderMap, Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use docsystem_api::AppState;
use docsystem_auth::InMemoryAuthGateway;
use docsystem_core::config::AppConfig;
use docsystem_dataset::Dataset;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Auth backend, for reading issued codes
    pub auth: Arc<InMemoryAuthGateway>,
}

/// Response to a test request
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    /// Parsed JSON body, or `Null` when the body is not JSON
    pub body: Value,
    /// Raw body as text
    pub text: String,
}

impl TestApp {
    /// Create a new test application over the seeded catalogs
    pub fn new() -> Self {
        let config = AppConfig::default();
        let dataset = Dataset::seeded().expect("Failed to seed dataset");
        let auth = Arc::new(InMemoryAuthGateway::new());

        let state = AppState::new(config, dataset, auth.clone());
        let router = docsystem_api::build_app(state);

        Self { router, auth }
    }

    /// GET a path and parse the response
    pub async fn get(&self, path: &str) -> TestResponse {
        self.request("GET", path, None).await
    }

    /// POST a JSON body
    pub async fn post(&self, path: &str, body: Value) -> TestResponse {
        self.request("POST", path, Some(body)).await
    }

    /// Make an HTTP request to the test app
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");
        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);
        let text = String::from_utf8_lossy(&body_bytes).into_owned();

        TestResponse {
            status,
            headers,
            body,
            text,
        }
    }

    /// Register, verify and sign in an account; returns the session payload
    pub async fn signed_in(&self, email: &str, password: &str) -> Value {
        let register = self
            .post(
                "/api/auth/register",
                serde_json::json!({ "email": email, "password": password }),
            )
            .await;
        assert_eq!(register.status, StatusCode::OK, "{:?}", register.body);

        let code = self
            .auth
            .verification_code(email)
            .await
            .expect("No verification code issued");
        let verify = self
            .post(
                "/api/auth/verify-email",
                serde_json::json!({ "email": email, "code": code }),
            )
            .await;
        assert_eq!(verify.status, StatusCode::OK, "{:?}", verify.body);

        let login = self
            .post(
                "/api/auth/login",
                serde_json::json!({ "email": email, "password": password }),
            )
            .await;
        assert_eq!(login.status, StatusCode::OK, "{:?}", login.body);
        login.body["data"].clone()
    }
}

/// Values of `field` across `data.items`
pub fn item_field(body: &Value, field: &str) -> Vec<String> {
    body["data"]["items"]
        .as_array()
        .expect("data.items is not an array")
        .iter()
        .map(|item| item[field].as_str().unwrap_or_default().to_string())
        .collect()
}
