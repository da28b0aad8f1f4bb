//! Routers for the HTTP surface.

pub mod common;
mod students;

pub use common::common_routes;
pub use students::student_routes;

use crate::state::AppState;
use axum::Router;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

/// Request bodies above this size are rejected with 413.
pub const BODY_LIMIT_BYTES: usize = 64 * 1024;

/// Full application router with request tracing and a body size cap.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(common_routes())
        .merge(student_routes(state))
        .layer(RequestBodyLimitLayer::new(BODY_LIMIT_BYTES))
        .layer(TraceLayer::new_for_http())
}
