//! Server configuration.
//!
//! Everything is read from environment variables, each with a default, so
//! the server runs with no configuration at all.

use std::net::SocketAddr;

use crate::nextrip::NexTripConfig;

/// Address to listen on.
pub const BIND_ADDR_VAR: &str = "NEXTRIP_BIND_ADDR";
/// NexTrip base URL.
pub const BASE_URL_VAR: &str = "NEXTRIP_BASE_URL";
/// NexTrip request timeout in seconds.
pub const TIMEOUT_VAR: &str = "NEXTRIP_TIMEOUT_SECS";

/// An environment variable was set to something unusable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid value for {var}: {value:?} ({reason})")]
pub struct ConfigError {
    var: &'static str,
    value: String,
    reason: String,
}

/// Configuration for the whole server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to.
    pub bind_addr: SocketAddr,

    /// Upstream client settings.
    pub nextrip: NexTripConfig,
}

impl ServerConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through `lookup`, which returns the value of a
    /// variable if it's set.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(BIND_ADDR_VAR) {
            config.bind_addr = value.parse().map_err(|e: std::net::AddrParseError| ConfigError {
                var: BIND_ADDR_VAR,
                value: value.clone(),
                reason: e.to_string(),
            })?;
        }

        if let Some(value) = lookup(BASE_URL_VAR) {
            config.nextrip = config.nextrip.with_base_url(value);
        }

        if let Some(value) = lookup(TIMEOUT_VAR) {
            let secs: u64 = value.parse().map_err(|e: std::num::ParseIntError| ConfigError {
                var: TIMEOUT_VAR,
                value: value.clone(),
                reason: e.to_string(),
            })?;
            if secs == 0 {
                return Err(ConfigError {
                    var: TIMEOUT_VAR,
                    value,
                    reason: "must be at least 1 second".to_string(),
                });
            }
            config.nextrip = config.nextrip.with_timeout(secs);
        }

        Ok(config)
    }

    /// Set the listen address.
    pub fn with_bind_addr(mut self, addr: SocketAddr) -> Self {
        self.bind_addr = addr;
        self
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            nextrip: NexTripConfig::default(),
        }
    }
}
