use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use std::time::Duration;

// Default values for optional settings
fn default_shutdown_timeout() -> u64 {
  5
}

fn default_db_min_connections() -> u32 {
  2
}

fn default_db_connect_timeout() -> u64 {
  5
}

fn default_db_acquire_timeout() -> u64 {
  5
}

fn default_db_idle_timeout() -> u64 {
  30 * 60
}

fn default_db_max_lifetime() -> u64 {
  60 * 60
}

fn default_db_query_timeout() -> u64 {
  5
}

fn default_jwt_issuer() -> String {
  "hris".to_string()
}

fn default_token_ttl_hours() -> i64 {
  24
}

fn default_argon2_memory_kib() -> u32 {
  19456
}

fn default_argon2_iterations() -> u32 {
  2
}

fn default_argon2_parallelism() -> u32 {
  1
}

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
  pub server: ServerConfig,
  pub database: DatabaseConfig,
  pub security: SecurityConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
  pub host: String,
  pub port: u16,
  /// Grace period for in-flight requests on shutdown
  #[serde(default = "default_shutdown_timeout")]
  pub shutdown_timeout_seconds: u64,
}

/// Database pool configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
  pub url: String,
  pub max_connections: u32,
  #[serde(default = "default_db_min_connections")]
  pub min_connections: u32,
  #[serde(default = "default_db_connect_timeout")]
  pub connect_timeout_seconds: u64,
  #[serde(default = "default_db_acquire_timeout")]
  pub acquire_timeout_seconds: u64,
  #[serde(default = "default_db_idle_timeout")]
  pub idle_timeout_seconds: u64,
  #[serde(default = "default_db_max_lifetime")]
  pub max_lifetime_seconds: u64,
  /// Deadline for every repository call
  #[serde(default = "default_db_query_timeout")]
  pub query_timeout_seconds: u64,
}

impl DatabaseConfig {
  pub fn query_timeout(&self) -> Duration {
    Duration::from_secs(self.query_timeout_seconds)
  }
}

/// Token signing and password hashing configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SecurityConfig {
  /// HMAC secret for bearer tokens; startup fails when empty
  pub jwt_secret: String,
  #[serde(default = "default_jwt_issuer")]
  pub jwt_issuer: String,
  #[serde(default = "default_token_ttl_hours")]
  pub token_ttl_hours: i64,
  #[serde(default = "default_argon2_memory_kib")]
  pub argon2_memory_kib: u32,
  #[serde(default = "default_argon2_iterations")]
  pub argon2_iterations: u32,
  #[serde(default = "default_argon2_parallelism")]
  pub argon2_parallelism: u32,
}

impl Config {
  /// Load configuration from files and environment variables
  ///
  /// Sources, later ones overriding earlier ones:
  /// 1. config/default.toml
  /// 2. config/local.toml (if exists)
  /// 3. config/{RUN_MODE}.toml (if exists)
  /// 4. Environment variables with the HRIS_ prefix, e.g. `HRIS_DATABASE__URL`
  /// 5. The flat variables `APP_PORT`, `DATABASE_URL` and `JWT_SECRET`
  ///
  /// # Errors
  ///
  /// Returns a `ConfigError` if the default file is missing, a file is not
  /// valid TOML, or a required value is missing or has the wrong type.
  pub fn load() -> Result<Self, ConfigError> {
    let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

    let config = ConfigBuilder::builder()
      .add_source(File::with_name("config/default").required(true))
      .add_source(File::with_name("config/local").required(false))
      .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
      // Double underscore separates sections: HRIS_SERVER__PORT=8080
      .add_source(
        Environment::with_prefix("HRIS")
          .prefix_separator("_")
          .separator("__")
          .try_parsing(true),
      )
      .set_override_option("server.port", env::var("APP_PORT").ok())?
      .set_override_option("database.url", env::var("DATABASE_URL").ok())?
      .set_override_option("security.jwt_secret", env::var("JWT_SECRET").ok())?
      .build()?;

    config.try_deserialize()
  }
}
