//! Server process settings read from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::error::{EngineError, EngineResult};

/// Default address the HTTP server binds to.
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";

/// Settings for the `benefits-server` binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to bind the HTTP listener to (`LISTEN_ADDR`).
    pub listen_addr: SocketAddr,
    /// Benefits configuration file (`BENEFITS_CONFIG`). When unset the
    /// reference values are used.
    pub benefits_config_path: Option<PathBuf>,
}

impl ServerConfig {
    /// Reads settings from the process environment.
    pub fn from_env() -> EngineResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads settings through `lookup`, which maps a variable name to its value.
    pub fn from_lookup<F>(lookup: F) -> EngineResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let listen_addr = lookup("LISTEN_ADDR")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());
        let listen_addr = listen_addr
            .parse::<SocketAddr>()
            .map_err(|e| EngineError::InvalidConfig {
                field: "LISTEN_ADDR".to_string(),
                message: format!("'{}' is not a socket address: {}", listen_addr, e),
            })?;

        let benefits_config_path = lookup("BENEFITS_CONFIG")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            listen_addr,
            benefits_config_path,
        })
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
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.listen_addr, DEFAULT_LISTEN_ADDR.parse().unwrap());
        assert!(config.benefits_config_path.is_none());
    }

    #[test]
    fn test_reads_overrides() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("LISTEN_ADDR", "127.0.0.1:3000"),
            ("BENEFITS_CONFIG", "./config/benefits.yaml"),
        ]))
        .unwrap();

        assert_eq!(config.listen_addr, "127.0.0.1:3000".parse().unwrap());
        assert_eq!(
            config.benefits_config_path,
            Some(PathBuf::from("./config/benefits.yaml"))
        );
    }

    #[test]
    fn test_blank_values_fall_back_to_defaults() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("LISTEN_ADDR", "  "),
            ("BENEFITS_CONFIG", ""),
        ]))
        .unwrap();

        assert_eq!(config.listen_addr, DEFAULT_LISTEN_ADDR.parse().unwrap());
        assert!(config.benefits_config_path.is_none());
    }

    #[test]
    fn test_bad_listen_addr_is_rejected() {
        let result = ServerConfig::from_lookup(lookup_from(&[("LISTEN_ADDR", "not-an-addr")]));

        match result {
            Err(EngineError::InvalidConfig { field, .. }) => assert_eq!(field, "LISTEN_ADDR"),
            other => panic!("Expected InvalidConfig, got {:?}", other),
        }
    }
}
