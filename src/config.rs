//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts.
//!
//! ## Required Variables
//!
//! - `DATABASE_URL` - PostgreSQL connection string
//!
//! ## Optional Variables
//!
//! - `PORT` - Listen port (default: `3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `DB_MAX_CONNECTIONS` - Connection pool size (default: 10)
//! - `DB_CONNECT_TIMEOUT` - Pool acquire timeout in seconds (default: 30)
//! - `DNS_TIMEOUT` - Hostname resolution timeout in seconds (default: 5)

use anyhow::{Context, Result};
use std::env;

/// Default listen port when `PORT` is unset.
const DEFAULT_PORT: u16 = 3000;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub log_level: String,
    pub log_format: String,
    /// Maximum number of connections in the pool (`DB_MAX_CONNECTIONS`).
    pub db_max_connections: u32,
    /// Timeout for acquiring a connection from the pool in seconds
    /// (`DB_CONNECT_TIMEOUT`).
    pub db_connect_timeout: u64,
    /// Hostname resolution timeout in seconds (`DNS_TIMEOUT`).
    pub dns_timeout: u64,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `DATABASE_URL` is missing or `PORT` is not a valid
    /// port number.
    pub fn from_env() -> Result<Self> {
        let database_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("PORT is not a valid port number: {raw}"))?,
            Err(_) => DEFAULT_PORT,
        };

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let db_max_connections = env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        let db_connect_timeout = env::var("DB_CONNECT_TIMEOUT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        let dns_timeout = env::var("DNS_TIMEOUT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);

        Ok(Self {
            database_url,
            port,
            log_level,
            log_format,
            db_max_connections,
            db_connect_timeout,
            dns_timeout,
        })
    }

    /// Socket address string the server binds to.
    pub fn listen_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for key in [
            "DATABASE_URL",
            "PORT",
            "RUST_LOG",
            "LOG_FORMAT",
            "DB_MAX_CONNECTIONS",
            "DB_CONNECT_TIMEOUT",
            "DNS_TIMEOUT",
        ] {
            unsafe { env::remove_var(key) };
        }
    }

    #[test]
    #[serial]
    fn test_from_env_requires_database_url() {
        clear_env();

        let result = Config::from_env();

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("DATABASE_URL"));
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();
        unsafe { env::set_var("DATABASE_URL", "postgres://localhost/shorturl") };

        let config = Config::from_env().unwrap();

        assert_eq!(config.port, 3000);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_format, "text");
        assert_eq!(config.db_max_connections, 10);
        assert_eq!(config.db_connect_timeout, 30);
        assert_eq!(config.dns_timeout, 5);
        assert_eq!(config.listen_addr(), "0.0.0.0:3000");
    }

    #[test]
    #[serial]
    fn test_from_env_custom_port() {
        clear_env();
        unsafe {
            env::set_var("DATABASE_URL", "postgres://localhost/shorturl");
            env::set_var("PORT", "8080");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.listen_addr(), "0.0.0.0:8080");
    }

    #[test]
    #[serial]
    fn test_from_env_invalid_port() {
        clear_env();
        unsafe {
            env::set_var("DATABASE_URL", "postgres://localhost/shorturl");
            env::set_var("PORT", "not-a-port");
        }

        let result = Config::from_env();

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("PORT"));
    }
}
