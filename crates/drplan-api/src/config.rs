//! Server configuration from TOML and environment.

use std::net::SocketAddr;
use std::path::Path;

use drplan_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Default bind host.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default bind port.
pub const DEFAULT_PORT: u16 = 3000;

/// Default CORS origins (local dev frontends).
pub const DEFAULT_CORS_ORIGINS: &[&str] = &["http://localhost:5173", "http://127.0.0.1:5173"];

/// Server configuration.
///
/// Loaded from an optional TOML file, then overridden by environment
/// variables:
/// - `DRPLAN_HOST` - bind host
/// - `DRPLAN_PORT` - bind port
/// - `DRPLAN_LOG` - tracing filter directive (e.g. "info", "drplan_api=debug")
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind host address.
    pub host: String,
    /// Bind port.
    pub port: u16,
    /// Allowed CORS origins.
    pub cors_origins: Vec<String>,
    /// Tracing filter directive.
    pub log_filter: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            cors_origins: DEFAULT_CORS_ORIGINS.iter().map(|s| s.to_string()).collect(),
            log_filter: "info".to_string(),
        }
    }
}

impl ServerConfig {
    /// Load configuration: defaults, then the TOML file if given, then
    /// environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => {
                let raw = std::fs::read_to_string(path)?;
                toml::from_str(&raw)
                    .map_err(|e| Error::config(format!("invalid config file: {e}")))?
            }
            None => Self::default(),
        };
        config.apply_env();
        Ok(config)
    }

    /// Apply environment-variable overrides in place.
    pub fn apply_env(&mut self) {
        if let Ok(host) = std::env::var("DRPLAN_HOST") {
            self.host = host;
        }
        if let Ok(port) = std::env::var("DRPLAN_PORT") {
            if let Ok(port) = port.parse::<u16>() {
                self.port = port;
            }
        }
        if let Ok(filter) = std::env::var("DRPLAN_LOG") {
            self.log_filter = filter;
        }
    }

    /// The socket address to bind.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| Error::config(format!("invalid bind address: {e}")))
    }

    /// Check the configuration for values that cannot work.
    pub fn validate(&self) -> Result<()> {
        if self.host.is_empty() {
            return Err(Error::config("host cannot be empty"));
        }
        if self.port == 0 {
            return Err(Error::config("port cannot be zero"));
        }
        if self.log_filter.is_empty() {
            return Err(Error::config("log filter cannot be empty"));
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
