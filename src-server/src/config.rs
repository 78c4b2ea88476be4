//! Server Configuration
//!
//! Read from the environment, with defaults for local development:
//! - `CORKBOARD_ADDR`: listen address (`127.0.0.1:4100`)
//! - `CORKBOARD_DB`: SQLite file; unset keeps cards in memory
//! - `CORKBOARD_SEED`: demo cards to create when the store starts empty (0)

use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

pub const DEFAULT_ADDR: &str = "127.0.0.1:4100";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {name}: {value:?} ({reason})")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub db_path: Option<PathBuf>,
    pub seed_cards: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 4100)),
            db_path: None,
            seed_cards: 0,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from any variable source; empty values count as unset
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let mut config = ServerConfig::default();

        if let Some(value) = get("CORKBOARD_ADDR") {
            config.addr = value.parse().map_err(|e: std::net::AddrParseError| ConfigError::Invalid {
                name: "CORKBOARD_ADDR",
                value: value.clone(),
                reason: e.to_string(),
            })?;
        }
        config.db_path = get("CORKBOARD_DB").map(PathBuf::from);
        if let Some(value) = get("CORKBOARD_SEED") {
            config.seed_cards = value.parse().map_err(|e: std::num::ParseIntError| ConfigError::Invalid {
                name: "CORKBOARD_SEED",
                value: value.clone(),
                reason: e.to_string(),
            })?;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> =
            vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.addr.to_string(), DEFAULT_ADDR);
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("CORKBOARD_ADDR", "0.0.0.0:8080"),
            ("CORKBOARD_DB", "/tmp/cards.db"),
            ("CORKBOARD_SEED", "2"),
        ]))
        .unwrap();
        assert_eq!(config.addr.port(), 8080);
        assert_eq!(config.db_path, Some(PathBuf::from("/tmp/cards.db")));
        assert_eq!(config.seed_cards, 2);
    }

    #[test]
    fn test_empty_values_are_unset() {
        let config = ServerConfig::from_lookup(lookup(&[("CORKBOARD_DB", " ")])).unwrap();
        assert_eq!(config.db_path, None);
    }

    #[test]
    fn test_invalid_values() {
        assert!(ServerConfig::from_lookup(lookup(&[("CORKBOARD_ADDR", "nowhere")])).is_err());
        assert!(ServerConfig::from_lookup(lookup(&[("CORKBOARD_SEED", "-1")])).is_err());
    }
}
