use serde::Deserialize;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub database: DatabaseSettings,
}

/// Contains parameters for the HTTP listener.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// The address to bind the listener to (e.g., "127.0.0.1").
    #[serde(default = "default_host")]
    pub host: String,
    /// The port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Contains the MySQL connection parameters.
///
/// These are configuration inputs, never hard-coded: they come from
/// `config.toml` or from `ROSTER_DATABASE__*` environment variables (the
/// usual place for the password in deployed environments).
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    pub host: String,
    #[serde(default = "default_db_port")]
    pub port: u16,
    pub username: String,
    pub password: String,
    pub database_name: String,
    /// Upper bound on the connection pool size.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// How long a request may wait for a pooled connection before failing.
    #[serde(default = "default_acquire_timeout_secs")]
    pub acquire_timeout_secs: u64,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_db_port() -> u16 {
    3306
}

fn default_max_connections() -> u32 {
    10
}

fn default_acquire_timeout_secs() -> u64 {
    5
}

impl ServerSettings {
    /// The `host:port` string the TCP listener binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
