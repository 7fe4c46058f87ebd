//! Embedded schema migrations.
//!
//! Migrations are compiled into the binary so a deployment needs no
//! external migration tooling; the server applies any pending ones during
//! startup, before the pool begins serving repositories.

use diesel::Connection;
use diesel::pg::PgConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::info;

/// Migrations bundled from the crate's `migrations/` directory.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// Errors raised while applying migrations.
#[derive(Debug, thiserror::Error)]
pub enum MigrationError {
    /// Could not open a connection to the database.
    #[error("failed to connect for migrations: {0}")]
    Connect(#[from] diesel::ConnectionError),

    /// A migration failed to apply.
    #[error("failed to run migrations: {0}")]
    Apply(String),
}

/// Apply all pending migrations over a short-lived synchronous connection.
///
/// Runs before the async pool is built, so blocking here is fine.
///
/// # Errors
/// Returns [`MigrationError`] when the database is unreachable or a
/// migration fails.
pub fn run_migrations(database_url: &str) -> Result<(), MigrationError> {
    let mut conn = PgConnection::establish(database_url)?;
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|err| MigrationError::Apply(err.to_string()))?;
    for version in &applied {
        info!(%version, "applied migration");
    }
    Ok(())
}
