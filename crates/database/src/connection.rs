use crate::error::DbError;
use configuration::DatabaseSettings;
use sqlx::mysql::{MySqlConnectOptions, MySqlPoolOptions};
use sqlx::MySqlPool;
use std::time::Duration;

/// Typed connection options from the configured parameters.
///
/// Credentials are handed to the driver as-is, never assembled into a
/// `mysql://` DSN, so passwords containing `@`, `/`, `#` or other
/// URL-reserved characters need no escaping.
fn connect_options(settings: &DatabaseSettings) -> MySqlConnectOptions {
    MySqlConnectOptions::new()
        .host(&settings.host)
        .port(settings.port)
        .username(&settings.username)
        .password(&settings.password)
        .database(&settings.database_name)
}

/// Establishes a connection pool to the MySQL database.
///
/// The pool is bounded by the configured `max_connections`, and every
/// checkout is bounded by the configured acquire timeout, so a saturated or
/// unreachable database turns into a prompt error instead of an unbounded
/// wait. The returned pool is cheap to clone and is shared across the entire
/// application.
pub async fn connect(settings: &DatabaseSettings) -> Result<MySqlPool, DbError> {
    let pool = MySqlPoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(Duration::from_secs(settings.acquire_timeout_secs))
        .connect_with(connect_options(settings))
        .await
        .map_err(DbError::Connection)?;

    tracing::info!(
        host = %settings.host,
        database = %settings.database_name,
        "Connected to MySQL database"
    );

    Ok(pool)
}

/// Builds the same bounded pool without dialing the database up front.
///
/// Connections are opened on first use. Useful for tooling and tests that
/// construct the application without a reachable database.
pub fn connect_lazy(settings: &DatabaseSettings) -> MySqlPool {
    MySqlPoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(Duration::from_secs(settings.acquire_timeout_secs))
        .connect_lazy_with(connect_options(settings))
}

/// A utility function to run database migrations automatically.
///
/// This is useful for ensuring the database schema is up-to-date when the application starts,
/// which is especially important in production deployments.
pub async fn run_migrations(pool: &MySqlPool) -> Result<(), DbError> {
    // Use a relative path from the crate root
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings_with_password(password: &str) -> DatabaseSettings {
        DatabaseSettings {
            host: "localhost".to_string(),
            port: 3306,
            username: "roster".to_string(),
            password: password.to_string(),
            database_name: "students_db".to_string(),
            max_connections: 1,
            acquire_timeout_secs: 1,
        }
    }

    #[tokio::test]
    async fn credentials_with_url_reserved_characters_build_a_pool() {
        // No DSN is parsed anywhere, so nothing here can reject or mangle
        // the password.
        let pool = connect_lazy(&settings_with_password("p@ss:word/#?&="));
        assert_eq!(pool.size(), 0);
    }
}
