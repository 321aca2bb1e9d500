//! Load config from the process environment (after `.env`) or from any key lookup.

use crate::config::{validate, AppConfig};
use crate::error::ConfigError;

impl AppConfig {
    /// Read `DB_URI` (or `DATABASE_URL`) and `PORT` from the environment.
    /// Loads `.env` first when present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary lookup. Unset keys fall back to defaults; the result is validated.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = AppConfig::default();
        let database_url = lookup("DB_URI")
            .or_else(|| lookup("DATABASE_URL"))
            .map(|s| s.trim().to_string())
            .unwrap_or(defaults.database_url);
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| ConfigError::InvalidValue {
                key: "PORT",
                reason: e.to_string(),
            })?,
            None => defaults.port,
        };

        let config = AppConfig {
            database_url,
            port,
        };
        validate(&config)?;
        Ok(config)
    }
}
