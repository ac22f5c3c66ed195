//! # Server Configuration
//!
//! Loaded from environment variables (a `.env` file is honoured via `dotenvy` in `main`).
//!
//! | Variable             | Default          | Meaning                          |
//! |----------------------|------------------|----------------------------------|
//! | `WALLET_SERVER_ADDR` | `127.0.0.1:8080` | Socket address to bind           |
//! | `WALLET_SERVER_DIST` | `dist`           | Directory holding the built page |
//! | `LOG_LEVEL`          | `info`           | Tracing level                    |

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;

pub const ADDR_VAR: &str = "WALLET_SERVER_ADDR";
pub const DIST_VAR: &str = "WALLET_SERVER_DIST";
pub const LOG_LEVEL_VAR: &str = "LOG_LEVEL";

pub const DEFAULT_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_DIST: &str = "dist";
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Configuration errors, reported before the server binds.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} must be a socket address like 127.0.0.1:8080, got {value:?}")]
    InvalidAddr { var: &'static str, value: String },

    #[error("dist directory {0} does not exist; build the page with `trunk build` first")]
    MissingDist(PathBuf),

    #[error("dist directory {0} has no index.html")]
    MissingIndex(PathBuf),
}

/// Static server configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_address: SocketAddr,
    pub dist_dir: PathBuf,
    pub log_level: String,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from any key lookup, falling back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let addr = lookup(ADDR_VAR).unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let bind_address = addr.parse().map_err(|_| ConfigError::InvalidAddr {
            var: ADDR_VAR,
            value: addr.clone(),
        })?;

        let dist_dir = PathBuf::from(lookup(DIST_VAR).unwrap_or_else(|| DEFAULT_DIST.to_string()));

        let log_level = lookup(LOG_LEVEL_VAR)
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string())
            .to_lowercase();

        Ok(Self {
            bind_address,
            dist_dir,
            log_level,
        })
    }

    /// Check that the dist directory exists and contains the page.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.dist_dir.is_dir() {
            return Err(ConfigError::MissingDist(self.dist_dir.clone()));
        }
        if !self.dist_dir.join("index.html").is_file() {
            return Err(ConfigError::MissingIndex(self.dist_dir.clone()));
        }
        Ok(())
    }
}
