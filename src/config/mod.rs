//! Configuration module for the team directory.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::path::PathBuf;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the SQLite file backing the key-value store
    pub db_path: PathBuf,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let db_path = env::var("DIRECTORY_DB_PATH")
            .unwrap_or_else(|_| "./data/directory.sqlite".to_string())
            .into();

        let log_level = env::var("DIRECTORY_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Self { db_path, log_level }
    }
}
