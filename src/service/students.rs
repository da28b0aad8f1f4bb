//! Student use cases on top of a [`StudentRepository`].

use crate::error::AppError;
use crate::model::{Student, StudentPayload, StudentRecord};
use crate::service::RequestValidator;
use crate::store::StudentRepository;
use serde_json::Value;

pub struct StudentService;

impl StudentService {
    pub async fn list(repo: &dyn StudentRepository) -> Result<Vec<Student>, AppError> {
        repo.list_all().await
    }

    pub async fn read(repo: &dyn StudentRepository, id: i32) -> Result<Student, AppError> {
        repo.get_by_id(id).await
    }

    /// Validate all four fields, then insert.
    pub async fn create(repo: &dyn StudentRepository, body: Value) -> Result<Student, AppError> {
        let record = RequestValidator::new_record(RequestValidator::payload(body)?)?;
        let student = repo.save(&record).await?;
        tracing::info!(id = student.id, "student created");
        Ok(student)
    }

    /// Overwrite only the non-null fields in `body`.
    pub async fn modify(repo: &dyn StudentRepository, id: i32, body: Value) -> Result<Student, AppError> {
        let payload = RequestValidator::payload(body)?;
        Self::rewrite(repo, id, |record| record.apply_patch(payload)).await
    }

    /// Overwrite every field; omitted ones reset to empty string or zero.
    pub async fn change(repo: &dyn StudentRepository, id: i32, body: Value) -> Result<Student, AppError> {
        let payload = RequestValidator::payload(body)?;
        Self::rewrite(repo, id, |record| record.apply_replace(payload)).await
    }

    pub async fn remove(repo: &dyn StudentRepository, id: i32) -> Result<(), AppError> {
        let student = repo.get_by_id(id).await?;
        repo.delete(&student).await?;
        tracing::info!(id, "student deleted");
        Ok(())
    }

    async fn rewrite<F>(repo: &dyn StudentRepository, id: i32, apply: F) -> Result<Student, AppError>
    where
        F: FnOnce(&mut StudentRecord),
    {
        let mut record = StudentRecord::from(repo.get_by_id(id).await?);
        apply(&mut record);
        RequestValidator::record(&record)?;
        repo.save(&record).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryStudentRepository;
    use serde_json::json;

    async fn seeded() -> (InMemoryStudentRepository, Student) {
        let repo = InMemoryStudentRepository::new();
        let ann = StudentService::create(
            &repo,
            json!({"name": "Ann", "email": "ann@x.com", "age": 20, "cellphone": "5551234"}),
        )
        .await
        .unwrap();
        (repo, ann)
    }

    #[tokio::test]
    async fn modify_missing_student_is_not_found_before_validation() {
        let repo = InMemoryStudentRepository::new();
        let err = StudentService::modify(&repo, 3, json!({"name": "x"})).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn modify_rejects_overlong_value_without_saving() {
        let (repo, ann) = seeded().await;
        let err = StudentService::modify(&repo, ann.id, json!({"cellphone": "12345678901234"}))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(StudentService::read(&repo, ann.id).await.unwrap(), ann);
    }

    #[tokio::test]
    async fn change_with_null_resets_field() {
        let (repo, ann) = seeded().await;
        let changed = StudentService::change(
            &repo,
            ann.id,
            json!({"name": "Ann", "email": "ann@x.com", "age": null, "cellphone": "5551234"}),
        )
        .await
        .unwrap();
        assert_eq!(changed.age, 0);
    }

    #[tokio::test]
    async fn remove_twice_is_not_found() {
        let (repo, ann) = seeded().await;
        StudentService::remove(&repo, ann.id).await.unwrap();
        assert!(matches!(
            StudentService::remove(&repo, ann.id).await,
            Err(AppError::NotFound(_))
        ));
    }
}
