use std::time::Duration;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_SERVER_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

pub struct Config {
    pub database_url: String,
    pub server_addr: String,
    /// Upper bound on handling a single request, including its database work.
    pub request_timeout: Duration,
}

impl Config {
    /// Reads configuration from environment variables.
    ///
    /// `DATABASE_URL` is required. `SERVER_ADDR` and `REQUEST_TIMEOUT_SECS` fall back
    /// to `0.0.0.0:8080` and 30 seconds.
    ///
    /// # Returns
    /// - `Ok(Config)` - Configuration loaded
    /// - `Err(AppError::ConfigErr)` - A required variable is missing or a value is invalid
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let database_url = lookup("DATABASE_URL")
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let server_addr =
            lookup("SERVER_ADDR").unwrap_or_else(|| DEFAULT_SERVER_ADDR.to_string());

        let request_timeout_secs = match lookup("REQUEST_TIMEOUT_SECS") {
            Some(value) => value
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidEnvVar {
                    name: "REQUEST_TIMEOUT_SECS".to_string(),
                    value,
                })?,
            None => DEFAULT_REQUEST_TIMEOUT_SECS,
        };

        Ok(Self {
            database_url,
            server_addr,
            request_timeout: Duration::from_secs(request_timeout_secs),
        })
    }
}
