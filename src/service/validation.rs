//! Request body validation for student writes.

use crate::error::AppError;
use crate::model::{StudentPayload, StudentRecord};
use serde_json::Value;

pub struct RequestValidator;

impl RequestValidator {
    /// Decode a JSON object into a payload. Wrong JSON types are a bad request; unknown keys are ignored.
    pub fn payload(body: Value) -> Result<StudentPayload, AppError> {
        if !body.is_object() {
            return Err(AppError::BadRequest("body must be a JSON object".into()));
        }
        serde_json::from_value(body).map_err(|e| AppError::BadRequest(e.to_string()))
    }

    /// All four fields must be present and non-null for a new student.
    pub fn new_record(payload: StudentPayload) -> Result<StudentRecord, AppError> {
        let StudentPayload {
            name,
            email,
            age,
            cellphone,
        } = payload;
        let record = StudentRecord::new(
            name.ok_or_else(|| required("name"))?,
            email.ok_or_else(|| required("email"))?,
            age.ok_or_else(|| required("age"))?,
            cellphone.ok_or_else(|| required("cellphone"))?,
        );
        Self::record(&record)?;
        Ok(record)
    }

    /// Column limits on a record about to be saved.
    pub fn record(record: &StudentRecord) -> Result<(), AppError> {
        record.check_lengths().map_err(AppError::Validation)
    }
}

fn required(field: &str) -> AppError {
    AppError::Validation(format!("{} is required", field))
}
