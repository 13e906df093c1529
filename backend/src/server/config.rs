//! Server settings loaded via OrthoConfig and the resolved server configuration.

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;

#[cfg(feature = "metrics")]
use actix_web_prom::PrometheusMetrics;
use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_PORT: u16 = 8000;
const DEFAULT_POOL_MAX_SIZE: u32 = 8;

/// Raw settings. Every field may come from `SOCIETY_*` environment
/// variables, a config file or CLI flags.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "SOCIETY")]
pub struct ServerSettings {
    /// Interface to listen on.
    pub bind_addr: Option<String>,
    /// Listen port. Falls back to plain `PORT`.
    pub port: Option<u16>,
    /// `postgres`, `memory` or `auto`.
    pub storage: Option<String>,
    /// PostgreSQL URL. Falls back to plain `DATABASE_URL`.
    pub database_url: Option<String>,
    /// Upper bound on pooled database connections.
    pub pool_max_size: Option<u32>,
}

/// Which record store backs the handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageMode {
    Postgres,
    Memory,
    /// PostgreSQL when a URL is present, otherwise unconfigured.
    Auto,
}

impl FromStr for StorageMode {
    type Err = ConfigError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(Self::Postgres),
            "memory" => Ok(Self::Memory),
            "auto" | "" => Ok(Self::Auto),
            other => Err(ConfigError::UnknownStorage(other.to_owned())),
        }
    }
}

/// Store selection after resolving the mode against the database URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageBackend {
    Postgres {
        database_url: String,
        pool_max_size: u32,
    },
    Memory,
    Unconfigured,
}

/// Failures while resolving settings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid bind address `{0}`")]
    BindAddr(String),
    #[error("invalid PORT value `{0}`")]
    Port(String),
    #[error("unknown storage `{0}`; expected postgres, memory or auto")]
    UnknownStorage(String),
    #[error("postgres storage selected but no database url is set")]
    MissingDatabaseUrl,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_owned())
        .filter(|raw| !raw.is_empty())
}

impl ServerSettings {
    /// Resolve settings into a [`ServerConfig`], consulting plain `PORT` and
    /// `DATABASE_URL` when the prefixed values are absent.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for an unparsable address or port, an unknown
    /// storage mode, or `postgres` storage without a URL.
    pub fn resolve(self) -> Result<ServerConfig, ConfigError> {
        let ip = match non_blank(self.bind_addr) {
            Some(raw) => raw.parse::<IpAddr>().map_err(|_| ConfigError::BindAddr(raw))?,
            None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };
        let port = match self.port {
            Some(port) => port,
            None => match non_blank(env::var("PORT").ok()) {
                Some(raw) => raw.parse().map_err(|_| ConfigError::Port(raw))?,
                None => DEFAULT_PORT,
            },
        };
        let database_url =
            non_blank(self.database_url).or_else(|| non_blank(env::var("DATABASE_URL").ok()));
        let mode = match non_blank(self.storage) {
            Some(raw) => raw.parse()?,
            None => StorageMode::Auto,
        };
        let pool_max_size = self.pool_max_size.unwrap_or(DEFAULT_POOL_MAX_SIZE);

        let database_url_set = database_url.is_some();
        let storage = match (mode, database_url) {
            (StorageMode::Memory, _) => StorageBackend::Memory,
            (StorageMode::Postgres | StorageMode::Auto, Some(database_url)) => {
                StorageBackend::Postgres {
                    database_url,
                    pool_max_size,
                }
            }
            (StorageMode::Postgres, None) => return Err(ConfigError::MissingDatabaseUrl),
            (StorageMode::Auto, None) => StorageBackend::Unconfigured,
        };

        Ok(ServerConfig::new(SocketAddr::new(ip, port), storage)
            .with_database_url_set(database_url_set))
    }
}

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) storage: StorageBackend,
    pub(crate) database_url_set: bool,
    #[cfg(feature = "metrics")]
    pub(crate) prometheus: Option<PrometheusMetrics>,
}

impl ServerConfig {
    #[must_use]
    pub fn new(bind_addr: SocketAddr, storage: StorageBackend) -> Self {
        Self {
            bind_addr,
            storage,
            database_url_set: false,
            #[cfg(feature = "metrics")]
            prometheus: None,
        }
    }

    /// Record whether a database URL was supplied, even when unused.
    #[must_use]
    pub fn with_database_url_set(mut self, set: bool) -> Self {
        self.database_url_set = set;
        self
    }

    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    #[must_use]
    pub fn storage(&self) -> &StorageBackend {
        &self.storage
    }

    #[cfg(feature = "metrics")]
    /// Attach Prometheus middleware to the configuration.
    #[must_use]
    pub fn with_metrics(mut self, prometheus: Option<PrometheusMetrics>) -> Self {
        self.prometheus = prometheus;
        self
    }
}
