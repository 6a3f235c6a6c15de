//! Service configuration loaded from environment variables.

use std::env;
use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::path::PathBuf;

use thiserror::Error;

pub const DATABASE_URL_VAR: &str = "DATABASE_URL";
pub const BIND_VAR: &str = "CLINIC_RECORDS_BIND";
pub const LOG_VAR: &str = "CLINIC_RECORDS_LOG";

pub const DEFAULT_DATABASE_PATH: &str = "records.db";
pub const DEFAULT_BIND: SocketAddr = SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::LOCALHOST, 8000));
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid bind address {value:?}: {source}")]
    InvalidBindAddress {
        value: String,
        source: std::net::AddrParseError,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// SQLite database file
    pub database_path: PathBuf,
    /// HTTP listen address
    pub bind_addr: SocketAddr,
    /// `EnvFilter` directive for logging
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from(DEFAULT_DATABASE_PATH),
            bind_addr: DEFAULT_BIND,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    /// Load `.env` from the working directory (if present), then the
    /// process environment. Variables already set in the process win.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_env()
    }

    /// Load from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load using `lookup` to resolve variable names.
    ///
    /// Unset and empty values fall back to defaults. `RUST_LOG` is used
    /// for the log filter when the service-specific variable is absent.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut cfg = Self::default();

        if let Some(v) = var(DATABASE_URL_VAR) {
            cfg.database_path = PathBuf::from(v);
        }
        if let Some(v) = var(BIND_VAR) {
            cfg.bind_addr = v
                .trim()
                .parse()
                .map_err(|source| ConfigError::InvalidBindAddress { value: v, source })?;
        }
        if let Some(v) = var(LOG_VAR).or_else(|| var("RUST_LOG")) {
            cfg.log_filter = v;
        }
        Ok(cfg)
    }
}
