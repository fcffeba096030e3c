//! Runtime configuration for the orders service.
//!
//! Values come from environment variables and fall back to defaults that
//! reproduce the historical behaviour (listen on port 8080, one local database).

use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DATABASE: &str = "orders.sqlite";
const DEFAULT_JSON_LIMIT: usize = 1024 * 1024; // 1 MiB

/// Path value that selects a private in-memory database.
pub const IN_MEMORY: &str = ":memory:";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// SQLite database file, or `:memory:`.
    pub database_path: String,
    /// Maximum accepted JSON body size in bytes.
    pub json_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            database_path: DEFAULT_DATABASE.to_string(),
            json_limit: DEFAULT_JSON_LIMIT,
        }
    }
}

impl Config {
    /// Reads `ORDERS_HOST`, `ORDERS_PORT` and `ORDERS_DATABASE` from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(host) = lookup("ORDERS_HOST").filter(|h| !h.trim().is_empty()) {
            config.host = host;
        }
        if let Some(port) = lookup("ORDERS_PORT") {
            config.port = port.trim().parse().map_err(|_| ConfigError::Invalid {
                key: "ORDERS_PORT",
                value: port.clone(),
            })?;
        }
        if let Some(path) = lookup("ORDERS_DATABASE").filter(|p| !p.trim().is_empty()) {
            config.database_path = path;
        }

        Ok(config)
    }

    pub fn is_in_memory(&self) -> bool {
        self.database_path == IN_MEMORY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_listen_on_8080() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.port, 8080);
        assert!(!config.is_in_memory());
    }

    #[test]
    fn environment_overrides_defaults() {
        let config = Config::from_lookup(lookup_from(&[
            ("ORDERS_HOST", "127.0.0.1"),
            ("ORDERS_PORT", "9090"),
            ("ORDERS_DATABASE", ":memory:"),
        ]))
        .unwrap();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 9090);
        assert!(config.is_in_memory());
    }

    #[test]
    fn bad_port_is_rejected() {
        let err = Config::from_lookup(lookup_from(&[("ORDERS_PORT", "eighty")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid {
                key: "ORDERS_PORT",
                value: "eighty".to_string()
            }
        );
    }
}
