//! Server configuration.
//!
//! Read from `staffdesk.toml` (or the file named by `STAFFDESK_CONFIG`) when
//! it exists, then patched by `STAFFDESK_*` variables. A malformed variable
//! is an error rather than being skipped.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::Deserialize;

const DEFAULT_PATH: &str = "staffdesk.toml";

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Socket the API listens on.
    pub listen: SocketAddr,
    /// sqlx `SQLite` URL; `?mode=rwc` creates the file on first start.
    pub database_url: String,
    /// `tracing` filter directive.
    pub log: String,
    /// Built dashboard served for every path outside the API.
    pub dashboard_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen: SocketAddr::from(([0, 0, 0, 0], 8080)),
            database_url: "sqlite:staffdesk.db?mode=rwc".to_string(),
            log: "staffdeskd=info,staffdesk=info,tower_http=debug".to_string(),
            dashboard_dir: None,
        }
    }
}

impl Config {
    /// Resolve the configuration from the file system and process environment.
    ///
    /// # Errors
    ///
    /// See [`ConfigError`].
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var_os("STAFFDESK_CONFIG")
            .map_or_else(|| PathBuf::from(DEFAULT_PATH), PathBuf::from);
        Self::resolve(&path, |key| std::env::var(key).ok())
    }

    fn resolve(path: &Path, env: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = match std::fs::read_to_string(path) {
            Ok(text) => toml::from_str(&text).map_err(|source| ConfigError::Parse {
                path: path.to_owned(),
                source,
            })?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Self::default(),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_owned(),
                    source,
                });
            }
        };
        config.apply_env(env)?;
        config.check()?;
        Ok(config)
    }

    fn apply_env(&mut self, env: impl Fn(&str) -> Option<String>) -> Result<(), ConfigError> {
        if let Some(value) = env("STAFFDESK_LISTEN") {
            self.listen = value.parse().map_err(|_| ConfigError::Env {
                key: "STAFFDESK_LISTEN",
                value,
            })?;
        }
        if let Some(value) = env("STAFFDESK_DATABASE_URL") {
            self.database_url = value;
        }
        if let Some(value) = env("STAFFDESK_DASHBOARD_DIR") {
            self.dashboard_dir = Some(PathBuf::from(value));
        }
        // The project variable wins over the generic one.
        if let Some(value) = env("STAFFDESK_LOG").or_else(|| env("RUST_LOG")) {
            self.log = value;
        }
        Ok(())
    }

    fn check(&self) -> Result<(), ConfigError> {
        if self.listen.port() == 0 {
            return Err(ConfigError::Invalid("listen port must be non-zero"));
        }
        if self.database_url.trim().is_empty() {
            return Err(ConfigError::Invalid("database_url must not be empty"));
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("{key} has an unusable value {value:?}")]
    Env { key: &'static str, value: String },
    #[error("invalid configuration: {0}")]
    Invalid(&'static str),
}
