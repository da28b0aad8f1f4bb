use crate::error::AppError;
use crate::model::{Student, StudentRecord};
use async_trait::async_trait;

/// Storage operations for students. Implementations own their own session handling;
/// nothing is cached between calls.
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// Every student; callers must not rely on ordering.
    async fn list_all(&self) -> Result<Vec<Student>, AppError>;

    /// `NotFound` when no row has this id.
    async fn get_by_id(&self, id: i32) -> Result<Student, AppError>;

    /// Insert when `record.id` is `None`, otherwise overwrite all columns of that row.
    /// `Conflict` when email or cellphone belongs to a different student.
    async fn save(&self, record: &StudentRecord) -> Result<Student, AppError>;

    /// `NotFound` when the row is already gone.
    async fn delete(&self, student: &Student) -> Result<(), AppError>;
}
