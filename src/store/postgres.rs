//! PostgreSQL-backed student repository. Each call runs in its own transaction.

use super::StudentRepository;
use crate::error::AppError;
use crate::model::{Student, StudentRecord};
use async_trait::async_trait;
use sqlx::PgPool;

const SELECT_ALL: &str = "SELECT id, name, email, age, cellphone FROM student ORDER BY id";
const SELECT_BY_ID: &str = "SELECT id, name, email, age, cellphone FROM student WHERE id = $1";
const INSERT: &str = "INSERT INTO student (name, email, age, cellphone) VALUES ($1, $2, $3, $4) \
                      RETURNING id, name, email, age, cellphone";
const UPDATE: &str = "UPDATE student SET name = $1, email = $2, age = $3, cellphone = $4 WHERE id = $5 \
                      RETURNING id, name, email, age, cellphone";
const DELETE: &str = "DELETE FROM student WHERE id = $1";

#[derive(Clone)]
pub struct PgStudentRepository {
    pool: PgPool,
}

impl PgStudentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl StudentRepository for PgStudentRepository {
    async fn list_all(&self) -> Result<Vec<Student>, AppError> {
        tracing::debug!(sql = %SELECT_ALL, "query");
        let rows = sqlx::query_as::<_, Student>(SELECT_ALL)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn get_by_id(&self, id: i32) -> Result<Student, AppError> {
        tracing::debug!(sql = %SELECT_BY_ID, id, "query");
        sqlx::query_as::<_, Student>(SELECT_BY_ID)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("student {}", id)))
    }

    async fn save(&self, record: &StudentRecord) -> Result<Student, AppError> {
        // Dropping the transaction on an error path rolls it back and returns the connection.
        let mut tx = self.pool.begin().await?;
        let saved = match record.id {
            None => {
                tracing::debug!(sql = %INSERT, "query (tx)");
                sqlx::query_as::<_, Student>(INSERT)
                    .bind(&record.name)
                    .bind(&record.email)
                    .bind(record.age)
                    .bind(&record.cellphone)
                    .fetch_one(&mut *tx)
                    .await
                    .map_err(AppError::from_write)?
            }
            Some(id) => {
                tracing::debug!(sql = %UPDATE, id, "query (tx)");
                sqlx::query_as::<_, Student>(UPDATE)
                    .bind(&record.name)
                    .bind(&record.email)
                    .bind(record.age)
                    .bind(&record.cellphone)
                    .bind(id)
                    .fetch_optional(&mut *tx)
                    .await
                    .map_err(AppError::from_write)?
                    .ok_or_else(|| AppError::NotFound(format!("student {}", id)))?
            }
        };
        tx.commit().await?;
        Ok(saved)
    }

    async fn delete(&self, student: &Student) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;
        tracing::debug!(sql = %DELETE, id = student.id, "query (tx)");
        let result = sqlx::query(DELETE)
            .bind(student.id)
            .execute(&mut *tx)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("student {}", student.id)));
        }
        tx.commit().await?;
        Ok(())
    }
}
