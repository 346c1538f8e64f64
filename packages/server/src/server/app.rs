//! Application setup and server configuration.

use std::time::Duration;

use axum::{
    http::{header::CONTENT_TYPE, HeaderValue, Method, StatusCode},
    routing::{delete, get, post},
    Router,
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::domains::activities::ActivityRegistry;
use crate::server::routes::{
    health_handler, list_activities_handler, remove_handler, root_handler, signup_handler,
};
use crate::server::static_files::serve_static;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub registry: ActivityRegistry,
}

/// Build the Axum application router around an already-seeded registry.
pub fn build_app(
    registry: ActivityRegistry,
    allowed_origins: Vec<String>,
    request_timeout: Duration,
) -> Router {
    let app_state = AppState { registry };

    let cors = CorsLayer::new()
        .allow_origin(allow_origin(&allowed_origins))
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        .route("/", get(root_handler))
        .route("/activities", get(list_activities_handler))
        .route("/activities/:activity/signup", post(signup_handler))
        .route("/activities/:activity/remove", delete(remove_handler))
        .route("/static/*path", get(serve_static))
        .route("/health", get(health_handler))
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

/// Any origin when none are configured; otherwise the parseable ones.
fn allow_origin(allowed_origins: &[String]) -> AllowOrigin {
    if allowed_origins.is_empty() {
        return AllowOrigin::from(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(origin = %origin, error = %e, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    AllowOrigin::list(origins)
}
