use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::error::{AppError, Result};

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_STATIC_DIR: &str = "static";

/// Runtime settings, read from the environment (and `.env` via dotenvy).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
    pub seed_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            seed_file: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. Unparseable ports fall
    /// back to the default, empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            host: get("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: get("PORT")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(DEFAULT_PORT),
            static_dir: get("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR)),
            seed_file: get("ACTIVITIES_SEED_FILE").map(PathBuf::from),
        }
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        parse_addr(&self.host, self.port)
    }

    /// The address tried when the configured port is already taken.
    pub fn fallback_addr(&self) -> Result<SocketAddr> {
        let port = self.port.checked_add(1).ok_or(AppError::InvalidConfig {
            key: "PORT",
            value: self.port.to_string(),
        })?;
        parse_addr(&self.host, port)
    }
}

fn parse_addr(host: &str, port: u16) -> Result<SocketAddr> {
    format!("{}:{}", host, port)
        .parse()
        .map_err(|_| AppError::InvalidConfig {
            key: "HOST",
            value: host.to_string(),
        })
}
