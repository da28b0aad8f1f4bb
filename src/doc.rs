//! OpenAPI document for the student routes and health probes, served at `/api/openapi.json`.

use crate::error::{ErrorBody, ErrorDetail};
use crate::model::{Student, StudentPayload};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Students API",
        description = "CRUD over student records plus liveness probes."
    ),
    paths(
        crate::handlers::students::list,
        crate::handlers::students::get,
        crate::handlers::students::add,
        crate::handlers::students::modify,
        crate::handlers::students::change,
        crate::handlers::students::delete,
        crate::routes::common::health_ok,
        crate::routes::common::health_bad,
    ),
    components(schemas(Student, StudentPayload, ErrorBody, ErrorDetail)),
    tags(
        (name = "students", description = "Student records"),
        (name = "health", description = "Health check probes")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();
        for expected in [
            "/api/students",
            "/api/students/get/{id}",
            "/api/students/add",
            "/api/students/modify/{id}",
            "/api/students/change/{id}",
            "/api/students/delete/{id}",
            "/api/health-check/ok",
            "/api/health-check/bad",
        ] {
            assert!(paths.contains(&expected), "missing {}", expected);
        }
    }

    #[test]
    fn student_schema_is_registered() {
        let doc = ApiDoc::openapi();
        let schemas = doc.components.expect("components").schemas;
        assert!(schemas.contains_key("Student"));
        assert!(schemas.contains_key("StudentPayload"));
    }
}
