//! Embedded schema migrations applied at startup.
//!
//! `diesel_migrations` needs a synchronous connection, so the harness runs on
//! a blocking thread while the async pool serves everything else.

use diesel::Connection;
use diesel::pg::PgConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::info;

use crate::domain::ports::RepositoryError;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Apply any pending migrations against `database_url`.
///
/// Returns the versions that were applied; an up-to-date schema yields an
/// empty list.
///
/// # Errors
/// [`RepositoryError::Connection`] when the database cannot be reached and
/// [`RepositoryError::Query`] when a migration fails.
pub async fn run_migrations(database_url: &str) -> Result<Vec<String>, RepositoryError> {
    let url = database_url.to_owned();
    let applied = tokio::task::spawn_blocking(move || apply_pending(&url))
        .await
        .map_err(|err| RepositoryError::query(format!("migration task failed: {err}")))??;

    if applied.is_empty() {
        info!("database schema up to date");
    } else {
        info!(versions = ?applied, "applied database migrations");
    }
    Ok(applied)
}

fn apply_pending(database_url: &str) -> Result<Vec<String>, RepositoryError> {
    let mut conn = PgConnection::establish(database_url)
        .map_err(|err| RepositoryError::connection(err.to_string()))?;
    let versions = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|err| RepositoryError::query(format!("run migrations: {err}")))?;
    Ok(versions.into_iter().map(|version| version.to_string()).collect())
}
