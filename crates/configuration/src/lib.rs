use crate::error::ConfigError;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use settings::{DatabaseSettings, ServerSettings, Settings};

/// Loads the application configuration.
///
/// This function is the primary entry point for this crate. It reads
/// `config.toml` from the working directory, applies any `ROSTER_`-prefixed
/// environment overrides (e.g. `ROSTER_DATABASE__PASSWORD`), and deserializes
/// the result into our strongly-typed `Settings` struct.
pub fn load_settings() -> Result<Settings, ConfigError> {
    let builder = config::Config::builder()
        // Tells the builder to look for a file named `config.toml`.
        .add_source(config::File::with_name("config.toml").required(false))
        // Environment variables win over the file, so secrets like the
        // database password never need to live on disk.
        .add_source(config::Environment::with_prefix("ROSTER").separator("__"))
        .build()?;

    // Attempt to deserialize the entire configuration into our `Settings` struct.
    let settings = builder.try_deserialize::<Settings>()?;

    Ok(settings)
}
