//! HTTP API Handler Tests Infrastructure
//!
//! This module provides test utilities for HTTP handler testing without
//! external dependencies (no database).
//!
//! Key components:
//! - `TestAppState` - Test-friendly version of AppState implementing `HasDogs`
//! - Uses production `build_router()` with `TestAppState` for actual handler coverage
//! - Helper functions for making HTTP requests (get_json, post_json, etc.)


use crate::api::TestDogRepository;
use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use dogs_core::config::{Config, TelemetryConfig};
use dogs_core::repository::DogRepository;
use dogs_core::server::build_router;
use dogs_core::state::HasDogs;
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;
use tower::ServiceExt;

// ============================================================================
// Test Configuration
// ============================================================================

pub fn create_test_config() -> Config {
    Config {
        http_host: "127.0.0.1".to_string(),
        http_port: 3000,
        environment: "test".to_string(),
        database: None,
        telemetry: TelemetryConfig::default(),
    }
}

// ============================================================================
// Test AppState (uses test repositories)
// ============================================================================

/// Test-friendly version of AppState using test repository implementations
#[derive(Clone)]
pub struct TestAppState {
    pub config: Arc<Config>,
    pub dog_repo: Arc<TestDogRepository>,
}

impl TestAppState {
    pub fn new() -> Self {
        Self {
            config: Arc::new(create_test_config()),
            dog_repo: Arc::new(TestDogRepository::new()),
        }
    }
}

impl HasDogs for TestAppState {
    type DogRepo = TestDogRepository;

    fn config(&self) -> &Config {
        &self.config
    }

    fn dog_repo(&self) -> &Self::DogRepo {
        &self.dog_repo
    }

    async fn check_ready(&self) -> bool {
        self.dog_repo.ping().await.is_ok()
    }
}

// ============================================================================
// Test Router Builder
// ============================================================================

/// Build a router for HTTP handler tests using the PRODUCTION router.
pub fn build_test_router(state: TestAppState) -> Router {
    build_router(state)
}

// ============================================================================
// HTTP Test Helpers
// ============================================================================

async fn send<R: DeserializeOwned>(app: &Router, request: Request<Body>) -> (StatusCode, Option<R>) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap_or_default();

    if body_bytes.is_empty() {
        return (status, None);
    }

    match serde_json::from_slice(&body_bytes) {
        Ok(data) => (status, Some(data)),
        Err(_) => (status, None),
    }
}

/// Make a GET request and parse JSON response
pub async fn get_json<R: DeserializeOwned>(app: &Router, path: &str) -> (StatusCode, Option<R>) {
    let request = Request::builder()
        .method(Method::GET)
        .uri(path)
        .body(Body::empty())
        .unwrap();

    send(app, request).await
}

/// Make a POST request with JSON body and parse JSON response
pub async fn post_json<T: Serialize, R: DeserializeOwned>(
    app: &Router,
    path: &str,
    body: &T,
) -> (StatusCode, Option<R>) {
    let request = Request::builder()
        .method(Method::POST)
        .uri(path)
        .header("Content-Type", "application/json")
        .body(Body::from(serde_json::to_string(body).unwrap()))
        .unwrap();

    send(app, request).await
}

/// Make a PUT request with JSON body and parse JSON response
pub async fn put_json<T: Serialize, R: DeserializeOwned>(
    app: &Router,
    path: &str,
    body: &T,
) -> (StatusCode, Option<R>) {
    let request = Request::builder()
        .method(Method::PUT)
        .uri(path)
        .header("Content-Type", "application/json")
        .body(Body::from(serde_json::to_string(body).unwrap()))
        .unwrap();

    send(app, request).await
}

/// Make a DELETE request and parse JSON response
pub async fn delete_json<R: DeserializeOwned>(app: &Router, path: &str) -> (StatusCode, Option<R>) {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(path)
        .body(Body::empty())
        .unwrap();

    send(app, request).await
}

/// Make a request with a raw body and content type
pub async fn raw_request<R: DeserializeOwned>(
    app: &Router,
    method: Method,
    path: &str,
    content_type: &str,
    body: &str,
) -> (StatusCode, Option<R>) {
    let request = Request::builder()
        .method(method)
        .uri(path)
        .header("Content-Type", content_type)
        .body(Body::from(body.to_string()))
        .unwrap();

    send(app, request).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_test_config() {
        let config = create_test_config();
        assert!(config.database.is_none());
        assert!(!config.is_production());
    }
}
