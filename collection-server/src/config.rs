//! Server configuration.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Environment variable for the listen address.
pub const ADDR_VAR: &str = "COLLECTION_ADDR";
/// Environment variable for the dataset path.
pub const DATA_VAR: &str = "COLLECTION_DATA";
/// Environment variable for the static assets directory.
pub const STATIC_DIR_VAR: &str = "COLLECTION_STATIC_DIR";

/// Error returned when a configuration value cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{var}: invalid socket address {value:?}")]
    InvalidAddr { var: &'static str, value: String },
}

/// Configuration for the schedule server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to bind the HTTP listener to.
    pub addr: SocketAddr,

    /// Path to the schedule JSON file.
    pub data_path: PathBuf,

    /// Directory served under `/static`.
    pub static_dir: PathBuf,
}

impl ServerConfig {
    /// Create a new configuration.
    pub fn new(
        addr: SocketAddr,
        data_path: impl Into<PathBuf>,
        static_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            addr,
            data_path: data_path.into(),
            static_dir: static_dir.into(),
        }
    }

    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through a variable lookup, falling back to
    /// defaults for unset or empty variables.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |var: &str| lookup(var).filter(|v| !v.is_empty());
        let mut config = Self::default();

        if let Some(value) = get(ADDR_VAR) {
            config.addr = value.parse().map_err(|_| ConfigError::InvalidAddr {
                var: ADDR_VAR,
                value,
            })?;
        }
        if let Some(value) = get(DATA_VAR) {
            config.data_path = value.into();
        }
        if let Some(value) = get(STATIC_DIR_VAR) {
            config.static_dir = value.into();
        }

        Ok(config)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            data_path: PathBuf::from("data/routes.json"),
            static_dir: PathBuf::from("static"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var: &str| map.get(var).cloned()
    }

    #[test]
    fn default_config() {
        let config = ServerConfig::default();

        assert_eq!(config.addr, SocketAddr::from(([127, 0, 0, 1], 3000)));
        assert_eq!(config.data_path, PathBuf::from("data/routes.json"));
        assert_eq!(config.static_dir, PathBuf::from("static"));
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn overrides_from_environment() {
        let config = ServerConfig::from_lookup(lookup(&[
            (ADDR_VAR, "0.0.0.0:8080"),
            (DATA_VAR, "/srv/routes.json"),
            (STATIC_DIR_VAR, "/srv/static"),
        ]))
        .unwrap();

        assert_eq!(config.addr, SocketAddr::from(([0, 0, 0, 0], 8080)));
        assert_eq!(config.data_path, PathBuf::from("/srv/routes.json"));
        assert_eq!(config.static_dir, PathBuf::from("/srv/static"));
    }

    #[test]
    fn empty_values_fall_back() {
        let config = ServerConfig::from_lookup(lookup(&[(DATA_VAR, "")])).unwrap();
        assert_eq!(config.data_path, PathBuf::from("data/routes.json"));
    }

    #[test]
    fn invalid_addr_rejected() {
        let err = ServerConfig::from_lookup(lookup(&[(ADDR_VAR, "localhost")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidAddr {
                var: ADDR_VAR,
                value: "localhost".into()
            }
        );
        assert_eq!(
            err.to_string(),
            "COLLECTION_ADDR: invalid socket address \"localhost\""
        );
    }

    #[test]
    fn custom_config() {
        let addr = SocketAddr::from(([10, 0, 0, 1], 9000));
        let config = ServerConfig::new(addr, "a.json", "assets");

        assert_eq!(config.addr, addr);
        assert_eq!(config.data_path, PathBuf::from("a.json"));
        assert_eq!(config.static_dir, PathBuf::from("assets"));
    }
}
