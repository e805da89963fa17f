use std::net::SocketAddr;

use thiserror::Error;

/// Application-level constants
pub const APP_NAME: &str = "Vitalsense";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const BIND_ADDR_VAR: &str = "VITALSENSE_BIND_ADDR";
pub const MAX_BATCH_VAR: &str = "VITALSENSE_MAX_BATCH";

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_MAX_BATCH: usize = 500;

/// Log filter used when `RUST_LOG` is unset.
pub fn default_log_filter() -> &'static str {
    "vitalsense_lib=info,vitalsense=info,tower_http=warn"
}

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("{var} is not a valid socket address: {value}")]
    InvalidAddr { var: &'static str, value: String },

    #[error("{var} must be a positive integer: {value}")]
    InvalidBatchSize { var: &'static str, value: String },
}

/// Runtime settings for the HTTP server.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub max_batch_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
            max_batch_size: DEFAULT_MAX_BATCH,
        }
    }
}

impl ServerConfig {
    /// Read settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build settings from any key lookup. Unset keys take defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let addr_raw =
            lookup(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr: SocketAddr = addr_raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidAddr {
                var: BIND_ADDR_VAR,
                value: addr_raw.clone(),
            })?;

        let max_batch_size = match lookup(MAX_BATCH_VAR) {
            None => DEFAULT_MAX_BATCH,
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::InvalidBatchSize {
                        var: MAX_BATCH_VAR,
                        value: raw,
                    })
                }
            },
        };

        Ok(Self {
            bind_addr,
            max_batch_size,
        })
    }
}
