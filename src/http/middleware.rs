//! Request-logging middleware.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::http::server::AppState;

/// Log `<method> <uri>` at info severity before delegating to the inner
/// handler. Applied to every route, the documentation UI and the 404
/// fallback included.
pub async fn log_requests(State(state): State<AppState>, request: Request, next: Next) -> Response {
    state
        .logger
        .info(format!("{} {}", request.method(), request.uri()));
    next.run(request).await
}
