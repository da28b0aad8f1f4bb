use student_api::{
    app, ensure_database_exists, ensure_student_table, AppState, DbConfig, PgStudentRepository,
    LISTEN_ADDR,
};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = DbConfig::from_env()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("student_api=info,tower_http=info")),
        )
        .init();
    tracing::info!(?config, "starting");

    ensure_database_exists(&config).await?;
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect_with(config.connect_options())
        .await?;
    ensure_student_table(&pool).await?;

    let state = AppState::new(PgStudentRepository::new(pool));
    let listener = TcpListener::bind(LISTEN_ADDR).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app(state)).await?;
    Ok(())
}
