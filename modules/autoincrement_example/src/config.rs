//! Configuration for the employee example
//!
//! Layers, lowest priority first: built-in defaults, an optional YAML file,
//! then `AUTOINC_` environment variables (`__` separates nested keys, e.g.
//! `AUTOINC_DATABASE__URL`).

use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable prefix
pub const ENV_PREFIX: &str = "AUTOINC_";

/// Example configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Database connection settings
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Operation log settings
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Number of ORM session resources handed out concurrently
    #[serde(default = "default_max_resources")]
    pub max_resources: usize,
}

/// Database connection settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatabaseConfig {
    /// SQLite URL; `mode=rwc` creates the file when missing
    #[serde(default = "default_database_url")]
    pub url: String,

    /// Connection pool size
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Connection establishment timeout
    #[serde(default = "default_connect_timeout", with = "humantime_serde")]
    pub connect_timeout: Duration,

    /// Log every SQL statement the ORM issues
    #[serde(default)]
    pub sqlx_logging: bool,
}

/// Operation log settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// File receiving the plain-text operation transcript
    #[serde(default = "default_log_file")]
    pub transcript_file: PathBuf,

    /// Default filter directive for diagnostic logs (overridden by `RUST_LOG`)
    #[serde(default = "default_level")]
    pub level: String,
}

impl Config {
    /// Load configuration from defaults, an optional YAML file and the environment
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Config::default()));
        if let Some(path) = path {
            if !path.exists() {
                anyhow::bail!("config file not found: {}", path.display());
            }
            figment = figment.merge(Yaml::file(path));
        }
        let config: Config = figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the ORM setup cannot work with
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.max_resources == 0 {
            anyhow::bail!("max_resources must be at least 1");
        }
        if self.database.max_connections == 0 {
            anyhow::bail!("database.max_connections must be at least 1");
        }
        if self.database.url.trim().is_empty() {
            anyhow::bail!("database.url must not be empty");
        }
        Ok(())
    }

    /// In-memory database, used by tests
    pub fn in_memory() -> Self {
        Self {
            database: DatabaseConfig {
                url: "sqlite::memory:".to_string(),
                ..DatabaseConfig::default()
            },
            ..Self::default()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: DatabaseConfig::default(),
            logging: LoggingConfig::default(),
            max_resources: default_max_resources(),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_database_url(),
            max_connections: default_max_connections(),
            connect_timeout: default_connect_timeout(),
            sqlx_logging: false,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            transcript_file: default_log_file(),
            level: default_level(),
        }
    }
}

fn default_database_url() -> String {
    "sqlite://autoincrement_example.db?mode=rwc".to_string()
}

// SQLite serialises writers; one connection keeps the script strictly ordered
fn default_max_connections() -> u32 {
    1
}

fn default_connect_timeout() -> Duration {
    Duration::from_secs(10)
}

fn default_max_resources() -> usize {
    1
}

fn default_log_file() -> PathBuf {
    PathBuf::from("orm.log")
}

fn default_level() -> String {
    "autoincrement_example=info".to_string()
}
