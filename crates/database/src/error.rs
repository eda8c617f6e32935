use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    /// The store was unreachable or rejected our credentials while building
    /// the pool. Kept separate from `Query` so callers can surface it as a
    /// service-availability failure rather than a generic server error.
    #[error("Failed to connect to the database: {0}")]
    Connection(#[source] sqlx::Error),

    #[error("Database query failed: {0}")]
    Query(#[from] sqlx::Error),

    #[error("Database migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Absence is a determined outcome, not a fault: the lookup succeeded and
    /// found no row with the requested id.
    #[error("The requested student was not found in the database.")]
    NotFound,
}
