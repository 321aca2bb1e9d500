//! Config validation.

use crate::config::AppConfig;
use crate::error::ConfigError;

pub fn validate(config: &AppConfig) -> Result<(), ConfigError> {
    if config.database_url.is_empty() {
        return Err(ConfigError::Validation("database url must not be empty".into()));
    }
    if !config.database_url.starts_with("sqlite:") {
        return Err(ConfigError::Validation(format!(
            "database url must be a sqlite: url, got '{}'",
            config.database_url
        )));
    }
    if config.port == 0 {
        return Err(ConfigError::Validation("port must be non-zero".into()));
    }
    Ok(())
}
