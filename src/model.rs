//! Student entity, unsaved records, and request payloads.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const NAME_MAX_LEN: usize = 120;
pub const EMAIL_MAX_LEN: usize = 120;
pub const CELLPHONE_MAX_LEN: usize = 13;

/// A persisted student row. Serializes to exactly `id, name, email, age, cellphone`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Student {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Ann")]
    pub name: String,
    #[schema(example = "ann@x.com")]
    pub email: String,
    #[schema(example = 20)]
    pub age: i32,
    #[schema(example = "5551234")]
    pub cellphone: String,
}

/// A student as handed to `save`: without an id it is inserted, with one it replaces that row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentRecord {
    pub id: Option<i32>,
    pub name: String,
    pub email: String,
    pub age: i32,
    pub cellphone: String,
}

impl StudentRecord {
    pub fn new(name: String, email: String, age: i32, cellphone: String) -> Self {
        StudentRecord {
            id: None,
            name,
            email,
            age,
            cellphone,
        }
    }

    /// Overwrite only the fields present in the payload; absent or null fields keep their value.
    pub fn apply_patch(&mut self, patch: StudentPayload) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(age) = patch.age {
            self.age = age;
        }
        if let Some(cellphone) = patch.cellphone {
            self.cellphone = cellphone;
        }
    }

    /// Overwrite every field; absent or null fields reset to empty string or zero.
    pub fn apply_replace(&mut self, replacement: StudentPayload) {
        self.name = replacement.name.unwrap_or_default();
        self.email = replacement.email.unwrap_or_default();
        self.age = replacement.age.unwrap_or_default();
        self.cellphone = replacement.cellphone.unwrap_or_default();
    }

    /// Column length limits; mirrors the VARCHAR sizes of the `student` table.
    pub fn check_lengths(&self) -> Result<(), String> {
        check_len("name", &self.name, NAME_MAX_LEN)?;
        check_len("email", &self.email, EMAIL_MAX_LEN)?;
        check_len("cellphone", &self.cellphone, CELLPHONE_MAX_LEN)
    }
}

fn check_len(field: &str, value: &str, max: usize) -> Result<(), String> {
    if value.chars().count() > max {
        return Err(format!("{} must be at most {} characters", field, max));
    }
    Ok(())
}

impl From<Student> for StudentRecord {
    fn from(s: Student) -> Self {
        StudentRecord {
            id: Some(s.id),
            name: s.name,
            email: s.email,
            age: s.age,
            cellphone: s.cellphone,
        }
    }
}

/// JSON body for add, modify, and change. Every field is optional at this level;
/// which ones are required depends on the operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ToSchema)]
pub struct StudentPayload {
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<i32>,
    pub cellphone: Option<String>,
}
