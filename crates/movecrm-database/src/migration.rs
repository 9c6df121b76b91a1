//! Schema migrations for the postgres store.

use sqlx::PgPool;
use sqlx::migrate::Migrator;
use tracing::info;

use movecrm_core::error::{AppError, ErrorKind};

/// The customer and moving job schema, embedded at compile time.
static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// Apply every pending migration. Returns how many migrations the schema
/// is made of.
pub async fn run_migrations(pool: &PgPool) -> Result<usize, AppError> {
    let known = MIGRATOR.iter().count();
    info!(known, "Applying record store migrations");

    MIGRATOR.run(pool).await.map_err(|e| {
        AppError::with_source(ErrorKind::Database, format!("Migration failed: {e}"), e)
    })?;

    info!("Record store schema is up to date");
    Ok(known)
}
