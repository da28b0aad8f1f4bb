//! Common routes: greeting, capability listing, health checks, OpenAPI document.

use crate::doc::ApiDoc;
use axum::{
    http::StatusCode,
    response::Html,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use utoipa::OpenApi;

async fn home() -> Html<&'static str> {
    Html("<p>Hello from students API!</p>")
}

async fn capabilities() -> Json<Value> {
    Json(json!({
        "/api/students (GET)": { "200": "List of Student Objects" },
        "/api/students/get/<id> (GET)": { "200": "Student Object", "404": "student not found" },
        "/api/students/add (POST)": {
            "201": "Student Object",
            "400": "missing or invalid field",
            "409": "email or cellphone already taken"
        },
        "/api/students/modify/<id> (PATCH)": { "200": "Student Object" },
        "/api/students/change/<id> (PUT)": { "200": "Student Object" },
        "/api/students/delete/<id> (DELETE)": { "204": "resource deleted successfully" },
        "/api/health-check/ok (GET)": { "200": "Ok" },
        "/api/health-check/bad (GET)": { "500": "Bad" },
        "/api/openapi.json (GET)": { "200": "OpenAPI document" }
    }))
}

/// Liveness probe that always succeeds.
#[utoipa::path(
    get,
    path = "/api/health-check/ok",
    tags = ["health"],
    responses((status = 200, description = "Always Ok", body = String))
)]
pub async fn health_ok() -> (StatusCode, &'static str) {
    (StatusCode::OK, "Ok")
}

/// Probe that always fails, for exercising monitoring alerts.
#[utoipa::path(
    get,
    path = "/api/health-check/bad",
    tags = ["health"],
    responses((status = 500, description = "Always Bad", body = String))
)]
pub async fn health_bad() -> (StatusCode, &'static str) {
    (StatusCode::INTERNAL_SERVER_ERROR, "Bad")
}

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Common routes (no state): GET /, /api, /api/health-check/{ok,bad}, /api/openapi.json.
pub fn common_routes() -> Router {
    Router::new()
        .route("/", get(home))
        .route("/api", get(capabilities))
        .route("/api/health-check/ok", get(health_ok))
        .route("/api/health-check/bad", get(health_bad))
        .route("/api/openapi.json", get(openapi))
}
