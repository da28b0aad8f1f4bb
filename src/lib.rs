//! Students API: CRUD over a single `student` table exposed as JSON over HTTP.

pub mod config;
pub mod doc;
pub mod error;
pub mod handlers;
pub mod model;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::{DbConfig, LISTEN_ADDR};
pub use error::{AppError, ConfigError};
pub use model::{Student, StudentPayload, StudentRecord};
pub use routes::{app, common_routes, student_routes};
pub use service::StudentService;
pub use state::AppState;
pub use store::{
    ensure_database_exists, ensure_student_table, InMemoryStudentRepository, PgStudentRepository,
    StudentRepository,
};
