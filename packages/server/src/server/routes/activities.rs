use axum::{
    extract::{rejection::PathRejection, Path, Query, State},
    response::Redirect,
    Json,
};
use serde::Serialize;
use tracing::debug;

use crate::domains::activities::{Enrollment, RegistryError, Roster};
use crate::server::app::AppState;
use crate::server::error::ApiError;

/// Raw query pairs. Taken as a list so a repeated `email` resolves to the
/// last value instead of a deserialization rejection.
pub type QueryPairs = Vec<(String, String)>;

/// Last `email` value in the query string, or 422 when absent.
pub fn require_email(pairs: QueryPairs) -> Result<String, ApiError> {
    pairs
        .into_iter()
        .filter(|(key, _)| key == "email")
        .map(|(_, value)| value)
        .last()
        .ok_or(ApiError::MissingQueryParameter("email"))
}

/// The decoded `{activity}` segment. A segment that cannot be decoded
/// matches no activity.
fn activity_name(path: Result<Path<String>, PathRejection>) -> Result<String, ApiError> {
    match path {
        Ok(Path(name)) => Ok(name),
        Err(rejection) => {
            debug!(error = %rejection, "Undecodable activity segment");
            Err(RegistryError::ActivityNotFound.into())
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl From<Enrollment> for MessageResponse {
    fn from(enrollment: Enrollment) -> Self {
        Self {
            message: enrollment.message(),
        }
    }
}

/// Root redirects to the front-end.
pub async fn root_handler() -> Redirect {
    Redirect::temporary("/static/index.html")
}

/// GET /activities
pub async fn list_activities_handler(State(state): State<AppState>) -> Json<Roster> {
    Json(state.registry.list_activities().await)
}

/// POST /activities/:activity/signup?email=
pub async fn signup_handler(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    Query(query): Query<QueryPairs>,
) -> Result<Json<MessageResponse>, ApiError> {
    let activity = activity_name(path)?;
    let email = require_email(query)?;
    let enrollment = state.registry.signup(&activity, &email).await?;
    Ok(Json(enrollment.into()))
}

/// DELETE /activities/:activity/remove?email=
pub async fn remove_handler(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    Query(query): Query<QueryPairs>,
) -> Result<Json<MessageResponse>, ApiError> {
    let activity = activity_name(path)?;
    let email = require_email(query)?;
    let enrollment = state.registry.remove(&activity, &email).await?;
    Ok(Json(enrollment.into()))
}
