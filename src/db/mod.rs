use log::info;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::repository::RepositoryResult;

pub async fn create_pool(database_url: &str) -> RepositoryResult<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await?;
    Ok(pool)
}

pub async fn run_migrations(pool: &PgPool) -> RepositoryResult<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    info!("Database migrations applied");
    Ok(())
}
