//! Configuration module
//!
//! Loads configuration from environment variables.

use std::env;

use crate::registry::AccountSeed;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host
    pub host: String,

    /// Server port
    pub port: u16,

    /// Environment (development, production)
    pub environment: String,

    /// Accounts created at startup
    pub account_seeds: Vec<AccountSeed>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue("PORT"))?;

        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        // JSON array of {"account_number", "kind", "balance"}
        let account_seeds = match env::var("ACCOUNT_SEEDS") {
            Ok(raw) => parse_seeds(&raw)?,
            Err(_) => AccountSeed::defaults(),
        };

        Ok(Self {
            host,
            port,
            environment,
            account_seeds,
        })
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

fn parse_seeds(raw: &str) -> Result<Vec<AccountSeed>, ConfigError> {
    serde_json::from_str(raw).map_err(|_| ConfigError::InvalidValue("ACCOUNT_SEEDS"))
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(&'static str),
}
