//! Student CRUD handlers: list, get, add, modify, change, delete.

use crate::error::{AppError, ErrorBody};
use crate::model::{Student, StudentPayload};
use crate::service::StudentService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;

fn parse_id(id_str: &str) -> Result<i32, AppError> {
    id_str
        .parse()
        .map_err(|_| AppError::BadRequest(format!("invalid id '{}'", id_str)))
}

#[utoipa::path(
    get,
    path = "/api/students",
    tags = ["students"],
    responses((status = 200, description = "All students", body = [Student]))
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Student>>, AppError> {
    let rows = StudentService::list(state.students.as_ref()).await?;
    Ok(Json(rows))
}

#[utoipa::path(
    get,
    path = "/api/students/get/{id}",
    tags = ["students"],
    params(("id" = i32, Path, description = "Student id")),
    responses(
        (status = 200, description = "The student", body = Student),
        (status = 404, description = "No student with this id", body = ErrorBody)
    )
)]
pub async fn get(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<Json<Student>, AppError> {
    let id = parse_id(&id_str)?;
    let student = StudentService::read(state.students.as_ref(), id).await?;
    Ok(Json(student))
}

#[utoipa::path(
    post,
    path = "/api/students/add",
    tags = ["students"],
    request_body = StudentPayload,
    responses(
        (status = 201, description = "Student created", body = Student),
        (status = 400, description = "Missing or invalid field", body = ErrorBody),
        (status = 409, description = "Email or cellphone already taken", body = ErrorBody)
    )
)]
pub async fn add(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Student>), AppError> {
    let student = StudentService::create(state.students.as_ref(), body).await?;
    Ok((StatusCode::CREATED, Json(student)))
}

#[utoipa::path(
    patch,
    path = "/api/students/modify/{id}",
    tags = ["students"],
    params(("id" = i32, Path, description = "Student id")),
    request_body = StudentPayload,
    responses(
        (status = 200, description = "Student after partial update", body = Student),
        (status = 400, description = "Invalid field", body = ErrorBody),
        (status = 404, description = "No student with this id", body = ErrorBody),
        (status = 409, description = "Email or cellphone already taken", body = ErrorBody)
    )
)]
pub async fn modify(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    Json(body): Json<Value>,
) -> Result<Json<Student>, AppError> {
    let id = parse_id(&id_str)?;
    let student = StudentService::modify(state.students.as_ref(), id, body).await?;
    Ok(Json(student))
}

#[utoipa::path(
    put,
    path = "/api/students/change/{id}",
    tags = ["students"],
    params(("id" = i32, Path, description = "Student id")),
    request_body = StudentPayload,
    responses(
        (status = 200, description = "Student after full replace", body = Student),
        (status = 400, description = "Invalid field", body = ErrorBody),
        (status = 404, description = "No student with this id", body = ErrorBody),
        (status = 409, description = "Email or cellphone already taken", body = ErrorBody)
    )
)]
pub async fn change(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    Json(body): Json<Value>,
) -> Result<Json<Student>, AppError> {
    let id = parse_id(&id_str)?;
    let student = StudentService::change(state.students.as_ref(), id, body).await?;
    Ok(Json(student))
}

#[utoipa::path(
    delete,
    path = "/api/students/delete/{id}",
    tags = ["students"],
    params(("id" = i32, Path, description = "Student id")),
    responses(
        (status = 204, description = "Student deleted"),
        (status = 404, description = "No student with this id", body = ErrorBody)
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<StatusCode, AppError> {
    let id = parse_id(&id_str)?;
    StudentService::remove(state.students.as_ref(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}
