//! Server configuration
//!
//! Resolution order, lowest to highest precedence:
//! 1. built-in defaults
//! 2. TOML file named by `--config` / `SUNRISE_CONFIG`
//! 3. environment (`SUNRISE_BIND`, `SUNRISE_LOG_JSON`, `SUNRISE_MAX_BODY_BYTES`,
//!    `SUNRISE_MAX_RECORDS`)
//! 4. command-line flags
//!
//! Layers 3 and 4 are both read by clap, which lets a flag override its
//! environment variable.

use crate::DEFAULT_MAX_BODY_BYTES;
use clap::Parser;
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use sunrise_storage::StoreOptions;
use thiserror::Error;

/// Default listen address
pub const DEFAULT_BIND: &str = "0.0.0.0:5000";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read
    #[error("failed to read config file {path}: {source}")]
    Read {
        /// File path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML for [`ServerConfig`]
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        /// File path
        path: PathBuf,
        /// Underlying TOML error
        #[source]
        source: toml::de::Error,
    },
}

/// Resolved server configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// Listen address
    pub bind: SocketAddr,
    /// Emit JSON logs instead of plain text
    pub log_json: bool,
    /// Largest accepted request body in bytes
    pub max_body_bytes: usize,
    /// Per-table record cap; unbounded when absent
    pub max_records_per_table: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([0, 0, 0, 0], 5000)),
            log_json: false,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            max_records_per_table: None,
        }
    }
}

impl ServerConfig {
    /// Parse a TOML document; missing keys keep their defaults
    pub fn from_toml_str(raw: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load a TOML config file
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&raw, path)
    }

    /// Resolve all layers from parsed arguments
    pub fn resolve(args: &ServerArgs) -> Result<Self, ConfigError> {
        let base = match &args.config {
            Some(path) => Self::load_file(path)?,
            None => Self::default(),
        };
        Ok(base.with_overrides(args))
    }

    /// Apply environment and flag values on top of `self`
    #[must_use]
    pub fn with_overrides(mut self, args: &ServerArgs) -> Self {
        if let Some(bind) = args.bind {
            self.bind = bind;
        }
        if let Some(log_json) = args.log_json {
            self.log_json = log_json;
        }
        if let Some(max_body_bytes) = args.max_body_bytes {
            self.max_body_bytes = max_body_bytes;
        }
        if let Some(max_records) = args.max_records {
            self.max_records_per_table = Some(max_records);
        }
        self
    }

    /// Store options derived from this config
    pub fn store_options(&self) -> StoreOptions {
        match self.max_records_per_table {
            Some(limit) => StoreOptions::new().max_records_per_table(limit),
            None => StoreOptions::new(),
        }
    }
}

/// Command-line arguments for `sunrise-server`
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "sunrise-server", version, about = "Sunrise submission intake API")]
pub struct ServerArgs {
    /// Path to a TOML config file
    #[arg(long, env = "SUNRISE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Listen address, e.g. 127.0.0.1:5000
    #[arg(long, env = "SUNRISE_BIND")]
    pub bind: Option<SocketAddr>,

    /// Emit JSON logs
    #[arg(
        long,
        env = "SUNRISE_LOG_JSON",
        num_args = 0..=1,
        default_missing_value = "true",
        value_parser = clap::builder::BoolishValueParser::new()
    )]
    pub log_json: Option<bool>,

    /// Largest accepted request body in bytes
    #[arg(long, env = "SUNRISE_MAX_BODY_BYTES")]
    pub max_body_bytes: Option<usize>,

    /// Per-table record cap
    #[arg(long, env = "SUNRISE_MAX_RECORDS")]
    pub max_records: Option<usize>,
}
