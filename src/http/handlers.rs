//! Route handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::http::server::AppState;
use crate::logging::ErrorInput;

/// Failure modes of the simulated user lookup.
#[derive(Debug, Error)]
pub enum DiagnosticError {
    /// No user record exists to read a name from.
    #[error("user record not found")]
    MissingUserRecord,
}

/// Payload the diagnostic route would return if the lookup could succeed.
#[derive(Debug, Serialize)]
pub struct UserRecord {
    pub name: String,
}

/// Simulated lookup backing `GET /error`. Always fails: the route exists
/// to produce a reproducible error-log entry.
fn fetch_user_record() -> Result<UserRecord, DiagnosticError> {
    Err(DiagnosticError::MissingUserRecord)
}

#[utoipa::path(
    get,
    path = "/error",
    tag = "diagnostics",
    summary = "Trigger a test error",
    description = "Forces a failure so the error sinks receive a stack trace.",
    responses(
        (status = 500, description = "Internal Server Error", body = str, content_type = "text/plain")
    )
)]
pub async fn trigger_error(State(state): State<AppState>) -> Response {
    match fetch_user_record() {
        Ok(user) => Json(serde_json::json!({ "name": user.name })).into_response(),
        Err(err) => {
            state.logger.error(ErrorInput::from_error(&err));
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
    }
}
