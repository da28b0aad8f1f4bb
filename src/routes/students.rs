//! Student CRUD routes under /api/students.

use crate::handlers::students;
use crate::state::AppState;
use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};

pub fn student_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/students", get(students::list))
        .route("/api/students/get/:id", get(students::get))
        .route("/api/students/add", post(students::add))
        .route("/api/students/modify/:id", patch(students::modify))
        .route("/api/students/change/:id", put(students::change))
        .route("/api/students/delete/:id", delete(students::delete))
        .with_state(state)
}
