use sqlx::PgPool;
use tracing::debug;

const SCHEMA: &str = include_str!("../../sql/schema.sql");

/// Create `plant_records` and its index. Safe to run against a database
/// that already has them.
pub async fn migrate(pool: &PgPool) -> Result<(), sqlx::Error> {
    let applied = sqlx::raw_sql(SCHEMA).execute(pool).await?;
    debug!(rows = applied.rows_affected(), "plant_records schema applied");
    Ok(())
}
