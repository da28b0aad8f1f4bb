//! Database bootstrap and the student repository implementations.

mod memory;
mod postgres;
mod repository;

pub use memory::InMemoryStudentRepository;
pub use postgres::PgStudentRepository;
pub use repository::StudentRepository;

use crate::config::DbConfig;
use crate::error::AppError;
use sqlx::ConnectOptions;
use sqlx::PgPool;

pub const STUDENT_TABLE: &str = "student";

const STUDENT_DDL: &str = r#"
    CREATE TABLE IF NOT EXISTS student (
        id SERIAL PRIMARY KEY,
        name VARCHAR(120) NOT NULL,
        email VARCHAR(120) NOT NULL UNIQUE,
        age INTEGER NOT NULL,
        cellphone VARCHAR(13) NOT NULL UNIQUE
    )
"#;

/// Ensure the configured database exists; create it if not. Connects to the
/// maintenance `postgres` database to run CREATE DATABASE. Call before creating the main pool.
pub async fn ensure_database_exists(config: &DbConfig) -> Result<(), AppError> {
    if config.database == crate::config::ADMIN_DATABASE {
        return Ok(());
    }
    let mut conn: sqlx::PgConnection = config
        .admin_connect_options()
        .connect()
        .await
        .map_err(AppError::Db)?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&config.database)
        .fetch_one(&mut conn)
        .await
        .map_err(AppError::Db)?;
    if !exists.0 {
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&config.database)))
            .execute(&mut conn)
            .await
            .map_err(AppError::Db)?;
        tracing::info!(database = %config.database, "created database");
    }
    Ok(())
}

/// Create the `student` table if it does not exist.
pub async fn ensure_student_table(pool: &PgPool) -> Result<(), AppError> {
    sqlx::query(STUDENT_DDL).execute(pool).await?;
    tracing::info!(table = STUDENT_TABLE, "schema ready");
    Ok(())
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
