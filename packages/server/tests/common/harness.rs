//! In-process test harness.
//!
//! Builds the real router around a fresh registry and drives it with
//! `tower::ServiceExt::oneshot`, so no socket is bound.

use std::time::Duration;

use activities_core::domains::activities::{ActivityRegistry, Roster};
use activities_core::server::build_app;
use axum::body::Body;
use axum::http::{HeaderMap, Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use super::test_roster;

/// A response with its body decoded as JSON (or `Value::Null` if not JSON).
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

pub struct TestHarness {
    pub app: Router,
    pub registry: ActivityRegistry,
}

impl TestHarness {
    /// Harness seeded with the standard two-activity roster.
    pub fn new() -> Self {
        Self::with_roster(test_roster())
    }

    pub fn with_roster(roster: Roster) -> Self {
        // Run tests with: RUST_LOG=debug cargo test -- --nocapture
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        let registry = ActivityRegistry::new(roster);
        let app = build_app(registry.clone(), Vec::new(), Duration::from_secs(5));
        Self { app, registry }
    }

    pub async fn request(&self, method: Method, uri: &str) -> TestResponse {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .expect("valid request");

        let response = self
            .app
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("readable body");
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            body,
        }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.request(Method::GET, uri).await
    }

    pub async fn activities(&self) -> Value {
        let response = self.get("/activities").await;
        assert_eq!(response.status, StatusCode::OK);
        response.body
    }

    pub async fn signup(&self, activity: &str, email: &str) -> TestResponse {
        self.request(Method::POST, &enrollment_uri(activity, "signup", email))
            .await
    }

    pub async fn remove(&self, activity: &str, email: &str) -> TestResponse {
        self.request(Method::DELETE, &enrollment_uri(activity, "remove", email))
            .await
    }

    /// Participant emails for one activity, as served by GET /activities.
    pub async fn participants(&self, activity: &str) -> Vec<String> {
        let activities = self.activities().await;
        activities[activity]["participants"]
            .as_array()
            .expect("participants array")
            .iter()
            .map(|v| v.as_str().expect("email string").to_string())
            .collect()
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

/// `/activities/{activity}/{action}?email={email}` with both values encoded.
pub fn enrollment_uri(activity: &str, action: &str, email: &str) -> String {
    format!(
        "/activities/{}/{}?email={}",
        urlencoding::encode(activity),
        action,
        urlencoding::encode(email)
    )
}
