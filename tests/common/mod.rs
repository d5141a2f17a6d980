//! Shared test utilities for integration tests.
//!
//! `TestClient` drives the full router against an in-memory database, one
//! request at a time, the way the frontend would.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use fintrack::config::Config;
use fintrack::db::{create_in_memory_pool, migrations};
use fintrack::models::{Budget, Transaction};
use fintrack::server::{build_router, state_with_pool};
use fintrack::state::AppState;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use tower::ServiceExt;

pub struct TestClient {
    state: AppState,
}

impl TestClient {
    /// Create a new test client with a fresh in-memory database.
    pub fn new() -> Self {
        let pool = create_in_memory_pool().expect("Failed to create in-memory pool");
        {
            let conn = pool.get().expect("Failed to get connection");
            migrations::run_migrations(&conn, Path::new("migrations"))
                .expect("Failed to run migrations");
        }

        let config = Config {
            host: "127.0.0.1".into(),
            port: 5000,
            database_path: PathBuf::from(":memory:"),
            migrations_path: PathBuf::from("migrations"),
            allowed_origins: vec!["http://localhost:5173".into()],
        };

        Self {
            state: state_with_pool(pool, config),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn router(&self) -> Router {
        build_router(self.state.clone())
    }

    /// Send a request with an optional raw body and return status and body text.
    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        body: Option<String>,
    ) -> (StatusCode, String) {
        let mut builder = Request::builder().method(method).uri(uri);
        if body.is_some() {
            builder = builder.header("Content-Type", "application/json");
        }
        let request = builder
            .body(body.map(Body::from).unwrap_or_else(Body::empty))
            .unwrap();

        let response = self.router().oneshot(request).await.unwrap();

        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8_lossy(&bytes).to_string())
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, String) {
        self.send(Method::GET, uri, None).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, String) {
        self.send(Method::DELETE, uri, None).await
    }

    pub async fn post_json(&self, uri: &str, body: &Value) -> (StatusCode, String) {
        self.send(Method::POST, uri, Some(body.to_string())).await
    }

    pub async fn put_json(&self, uri: &str, body: &Value) -> (StatusCode, String) {
        self.send(Method::PUT, uri, Some(body.to_string())).await
    }

    /// Get JSON from an endpoint and parse it.
    pub async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        uri: &str,
    ) -> (StatusCode, Option<T>) {
        let (status, body) = self.get(uri).await;
        (status, serde_json::from_str(&body).ok())
    }

    /// The `message` field of a JSON error body.
    pub fn message(body: &str) -> String {
        serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|v| v["message"].as_str().map(str::to_string))
            .unwrap_or_default()
    }

    // =========================================================================
    // Helper methods for creating entities through the API
    // =========================================================================

    pub async fn create_transaction(
        &self,
        kind: &str,
        amount: f64,
        date: &str,
        category: &str,
    ) -> Transaction {
        let (status, body) = self
            .post_json(
                "/api/transactions",
                &json!({
                    "amount": amount,
                    "description": format!("{} {}", category, date),
                    "date": date,
                    "category": category,
                    "type": kind,
                }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "create transaction: {}", body);
        serde_json::from_str(&body).unwrap()
    }

    pub async fn create_budget(
        &self,
        category: &str,
        limit: f64,
        month: &str,
    ) -> (StatusCode, Option<Budget>) {
        let (status, body) = self
            .post_json(
                "/api/budgets",
                &json!({ "category": category, "limit": limit, "month": month }),
            )
            .await;
        (status, serde_json::from_str(&body).ok())
    }
}

impl Default for TestClient {
    fn default() -> Self {
        Self::new()
    }
}
