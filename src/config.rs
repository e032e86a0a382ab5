//! Service configuration

use std::env;
use std::path::PathBuf;
use tracing::warn;

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Bind address
    pub address: String,
    /// Port
    pub port: u16,
    /// Path of the Turtle statement file
    pub data_path: PathBuf,
    /// Admin account name
    pub admin_username: String,
    /// Admin account password
    pub admin_password: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            address: "127.0.0.1".to_string(),
            port: 5000,
            data_path: PathBuf::from("database.ttl"),
            admin_username: "admin".to_string(),
            admin_password: "admin123".to_string(),
        }
    }
}

impl Config {
    /// Build the configuration from `PUSAKA_*` environment variables,
    /// falling back to the defaults for anything unset
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            address: env::var("PUSAKA_ADDRESS").unwrap_or(defaults.address),
            port: env::var("PUSAKA_PORT")
                .ok()
                .and_then(|raw| match raw.parse() {
                    Ok(port) => Some(port),
                    Err(_) => {
                        warn!("ignoring unparsable PUSAKA_PORT value {:?}", raw);
                        None
                    }
                })
                .unwrap_or(defaults.port),
            data_path: env::var("PUSAKA_DATA")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_path),
            admin_username: env::var("PUSAKA_ADMIN_USERNAME").unwrap_or(defaults.admin_username),
            admin_password: env::var("PUSAKA_ADMIN_PASSWORD").unwrap_or(defaults.admin_password),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.port, 5000);
        assert_eq!(config.data_path, PathBuf::from("database.ttl"));
        assert_eq!(config.admin_username, "admin");
    }
}
