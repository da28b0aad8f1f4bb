//! In-process student repository with the same uniqueness rules as the `student` table.

use super::StudentRepository;
use crate::error::AppError;
use crate::model::{Student, StudentRecord};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Mutex;

#[derive(Default)]
struct Rows {
    next_id: i32,
    by_id: BTreeMap<i32, Student>,
}

#[derive(Default)]
pub struct InMemoryStudentRepository {
    rows: Mutex<Rows>,
}

impl InMemoryStudentRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn check_unique(rows: &Rows, record: &StudentRecord) -> Result<(), AppError> {
    for other in rows.by_id.values() {
        if Some(other.id) == record.id {
            continue;
        }
        if other.email == record.email {
            return Err(AppError::Conflict("email already belongs to another student".into()));
        }
        if other.cellphone == record.cellphone {
            return Err(AppError::Conflict("cellphone already belongs to another student".into()));
        }
    }
    Ok(())
}

fn poisoned<T>(_: T) -> AppError {
    AppError::Db(sqlx::Error::Protocol("in-memory store lock poisoned".into()))
}

#[async_trait]
impl StudentRepository for InMemoryStudentRepository {
    async fn list_all(&self) -> Result<Vec<Student>, AppError> {
        let rows = self.rows.lock().map_err(poisoned)?;
        Ok(rows.by_id.values().cloned().collect())
    }

    async fn get_by_id(&self, id: i32) -> Result<Student, AppError> {
        let rows = self.rows.lock().map_err(poisoned)?;
        rows.by_id
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("student {}", id)))
    }

    async fn save(&self, record: &StudentRecord) -> Result<Student, AppError> {
        let mut rows = self.rows.lock().map_err(poisoned)?;
        check_unique(&rows, record)?;
        let id = match record.id {
            Some(id) if rows.by_id.contains_key(&id) => id,
            Some(id) => return Err(AppError::NotFound(format!("student {}", id))),
            None => {
                rows.next_id += 1;
                rows.next_id
            }
        };
        let student = Student {
            id,
            name: record.name.clone(),
            email: record.email.clone(),
            age: record.age,
            cellphone: record.cellphone.clone(),
        };
        rows.by_id.insert(id, student.clone());
        Ok(student)
    }

    async fn delete(&self, student: &Student) -> Result<(), AppError> {
        let mut rows = self.rows.lock().map_err(poisoned)?;
        rows.by_id
            .remove(&student.id)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(format!("student {}", student.id)))
    }
}
