//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    MissingVar(&'static str),
    #[error("invalid environment variable {key}: {reason}")]
    InvalidVar { key: &'static str, reason: String },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("validation: {0}")]
    Validation(String),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("bad request: {0}")]
    BadRequest(String),
}

impl AppError {
    pub fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Config(_) => (StatusCode::INTERNAL_SERVER_ERROR, "config_error"),
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, "validation_error"),
            AppError::Db(e) => {
                if let sqlx::Error::RowNotFound = e {
                    (StatusCode::NOT_FOUND, "not_found")
                } else {
                    (StatusCode::INTERNAL_SERVER_ERROR, "database_error")
                }
            }
            AppError::Conflict(_) => (StatusCode::CONFLICT, "conflict"),
            AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
        }
    }

    /// Classify a driver error raised while writing a student row.
    /// Unique violations become `Conflict`, NOT NULL and length violations become `Validation`.
    pub fn from_write(e: sqlx::Error) -> Self {
        let classified = e.as_database_error().and_then(|db| match db.kind() {
            sqlx::error::ErrorKind::UniqueViolation => {
                let field = conflicting_field(db.constraint());
                Some(AppError::Conflict(format!("{} already belongs to another student", field)))
            }
            sqlx::error::ErrorKind::NotNullViolation => Some(AppError::Validation(db.message().to_string())),
            // 22001: string_data_right_truncation
            _ if db.code().as_deref() == Some("22001") => Some(AppError::Validation(db.message().to_string())),
            _ => None,
        });
        match classified {
            Some(err) => err,
            None => AppError::Db(e),
        }
    }
}

fn conflicting_field(constraint: Option<&str>) -> &'static str {
    match constraint {
        Some(c) if c.contains("cellphone") => "cellphone",
        Some(c) if c.contains("email") => "email",
        _ => "email or cellphone",
    }
}

#[derive(Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub details: Option<serde_json::Value>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        let body = ErrorBody {
            error: ErrorDetail {
                code: code.to_string(),
                message: self.to_string(),
                details: None,
            },
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping() {
        assert_eq!(AppError::NotFound("7".into()).status_and_code().0, StatusCode::NOT_FOUND);
        assert_eq!(AppError::Validation("x".into()).status_and_code().0, StatusCode::BAD_REQUEST);
        assert_eq!(AppError::BadRequest("x".into()).status_and_code().0, StatusCode::BAD_REQUEST);
        assert_eq!(AppError::Conflict("x".into()).status_and_code().0, StatusCode::CONFLICT);
        assert_eq!(
            AppError::Db(sqlx::Error::RowNotFound).status_and_code(),
            (StatusCode::NOT_FOUND, "not_found")
        );
        assert_eq!(
            AppError::Db(sqlx::Error::PoolTimedOut).status_and_code().0,
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::from(ConfigError::MissingVar("DB_NAME")).status_and_code().1,
            "config_error"
        );
    }

    #[test]
    fn non_database_errors_stay_db() {
        assert!(matches!(AppError::from_write(sqlx::Error::PoolClosed), AppError::Db(_)));
    }

    #[test]
    fn constraint_names_map_to_fields() {
        assert_eq!(conflicting_field(Some("student_email_key")), "email");
        assert_eq!(conflicting_field(Some("student_cellphone_key")), "cellphone");
        assert_eq!(conflicting_field(None), "email or cellphone");
    }
}
