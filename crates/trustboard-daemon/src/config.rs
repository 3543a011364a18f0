// crates/trustboard-daemon/src/config.rs
//
// Runtime configuration for the Trustboard daemon.
// Loaded from a TOML file or populated with defaults.

use std::fs;
use std::path::PathBuf;

use serde::Deserialize;
use thiserror::Error;

use trustboard_rpc::RpcConfig;
use trustboard_scoring::ScoringConfig;

/// Errors raised while loading the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Runtime configuration for the daemon.
#[derive(Debug, Clone, Deserialize)]
pub struct DaemonConfig {
    /// Host address for the HTTP server.
    #[serde(default = "default_rpc_host")]
    pub rpc_host: String,

    /// Port for the HTTP server.
    #[serde(default = "default_rpc_port")]
    pub rpc_port: u16,

    /// Directory holding the snapshot file.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    /// Restore from and flush to `data_dir/snapshot.json`.
    #[serde(default = "default_snapshot_enabled")]
    pub snapshot_enabled: bool,

    /// Seconds between periodic snapshot flushes.
    #[serde(default = "default_snapshot_interval_secs")]
    pub snapshot_interval_secs: u64,

    /// Log level used when RUST_LOG is unset: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Trust score engine tunables (`[scoring]` table).
    #[serde(default)]
    pub scoring: ScoringConfig,
}

fn default_rpc_host() -> String {
    "127.0.0.1".to_string()
}

fn default_rpc_port() -> u16 {
    8080
}

fn default_data_dir() -> String {
    "~/.trustboard/data".to_string()
}

fn default_snapshot_enabled() -> bool {
    true
}

fn default_snapshot_interval_secs() -> u64 {
    60
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for DaemonConfig {
    fn default() -> Self {
        Self {
            rpc_host: default_rpc_host(),
            rpc_port: default_rpc_port(),
            data_dir: default_data_dir(),
            snapshot_enabled: default_snapshot_enabled(),
            snapshot_interval_secs: default_snapshot_interval_secs(),
            log_level: default_log_level(),
            scoring: ScoringConfig::default(),
        }
    }
}

impl DaemonConfig {
    /// Load configuration from a TOML file at the given path.
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(expand_tilde(path))?;
        Self::parse(&contents)
    }

    /// Parse configuration from TOML text.
    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    pub fn rpc_config(&self) -> RpcConfig {
        RpcConfig {
            host: self.rpc_host.clone(),
            port: self.rpc_port,
        }
    }

    /// Location of the snapshot file, with `~` expanded.
    pub fn snapshot_path(&self) -> PathBuf {
        PathBuf::from(expand_tilde(&self.data_dir)).join("snapshot.json")
    }
}

/// Expand a leading `~/` to the user's home directory.
pub fn expand_tilde(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return format!("{}/{}", home.display(), rest);
        }
    }
    path.to_string()
}
