//! Runtime configuration: where the store lives and which port to serve on.

pub const DEFAULT_DATABASE_URL: &str = "sqlite://app.db";
pub const DEFAULT_PORT: u16 = 5555;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// SQLite connection string; the file is created if missing.
    pub database_url: String,
    pub port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.into(),
            port: DEFAULT_PORT,
        }
    }
}
