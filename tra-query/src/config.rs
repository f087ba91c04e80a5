//! Runtime configuration from environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::tdx::TdxConfig;

/// Default listen address.
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

/// Errors from reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A variable is set but can't be parsed
    #[error("invalid {name}: {value:?}")]
    Invalid { name: &'static str, value: String },

    /// Only one half of the client credentials is set
    #[error("TDX_CLIENT_ID and TDX_CLIENT_SECRET must be set together")]
    PartialCredentials,
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// TDX client settings
    pub tdx: TdxConfig,

    /// Replacement station table (JSON); `None` uses the built-in table
    pub station_table: Option<PathBuf>,

    /// Address to listen on
    pub bind_addr: SocketAddr,
}

impl AppConfig {
    /// Read configuration from the process environment.
    ///
    /// | Variable             | Default                       |
    /// |----------------------|-------------------------------|
    /// | `TDX_CLIENT_ID`      | unset (anonymous access)      |
    /// | `TDX_CLIENT_SECRET`  | unset (anonymous access)      |
    /// | `TDX_BASE_URL`       | production basic API v3       |
    /// | `TDX_AUTH_URL`       | production token endpoint     |
    /// | `TDX_TIMEOUT_SECS`   | 30                            |
    /// | `STATION_TABLE_PATH` | unset (built-in table)        |
    /// | `BIND_ADDR`          | `127.0.0.1:3000`              |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through a variable lookup function.
    pub fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        // Treat empty values as unset
        let var = |name: &str| var(name).filter(|v| !v.trim().is_empty());

        let mut tdx = TdxConfig::new();

        if let Some(url) = var("TDX_BASE_URL") {
            tdx = tdx.with_base_url(url);
        }

        if let Some(url) = var("TDX_AUTH_URL") {
            tdx = tdx.with_auth_url(url);
        }

        match (var("TDX_CLIENT_ID"), var("TDX_CLIENT_SECRET")) {
            (Some(id), Some(secret)) => tdx = tdx.with_credentials(id, secret),
            (None, None) => {}
            _ => return Err(ConfigError::PartialCredentials),
        }

        if let Some(value) = var("TDX_TIMEOUT_SECS") {
            let secs = value
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|&s| s > 0)
                .ok_or(ConfigError::Invalid {
                    name: "TDX_TIMEOUT_SECS",
                    value: value.clone(),
                })?;
            tdx = tdx.with_timeout(secs);
        }

        let bind_value = var("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr: SocketAddr = bind_value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid {
                name: "BIND_ADDR",
                value: bind_value.clone(),
            })?;

        Ok(Self {
            tdx,
            station_table: var("STATION_TABLE_PATH").map(PathBuf::from),
            bind_addr,
        })
    }
}
