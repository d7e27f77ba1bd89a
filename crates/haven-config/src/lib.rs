//! # haven-config
//!
//! Layered configuration loading for Haven using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`HAVEN_*` prefix, `__` as separator)
//! 2. Project-level `.haven/config.toml`
//! 3. User-level `~/.config/haven/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `HAVEN_DATABASE__PATH` -> `database.path`,
//! `HAVEN_AUDIT__PRIMARY_KEY_FIELD` -> `audit.primary_key_field`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use haven_config::HavenConfig;
//!
//! let config = HavenConfig::load_with_dotenv().expect("config");
//! config.validate().expect("valid config");
//! println!("audit log at {}", config.database.path);
//! ```

mod audit;
mod database;
mod error;
mod general;

pub use audit::AuditConfig;
pub use database::DatabaseConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct HavenConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub audit: AuditConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl HavenConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if a source cannot be parsed or a value
    /// has the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration after reading a `.env` file from the current
    /// directory (or the nearest ancestor that has one).
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".haven/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("HAVEN_").split("__"))
    }

    /// Reject values the audit crates cannot work with.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for an empty primary key field,
    /// an empty database path, or a zero default limit.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.audit.primary_key_field.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "audit.primary_key_field".into(),
                reason: "must not be empty".into(),
            });
        }
        if self.database.path.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "database.path".into(),
                reason: "must not be empty".into(),
            });
        }
        if self.general.default_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "general.default_limit".into(),
                reason: "must be at least 1".into(),
            });
        }
        Ok(())
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("haven").join("config.toml"))
    }
}
