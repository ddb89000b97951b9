//! Replay Configuration

use car_state::BuilderConfig;
use config::builder::{ConfigBuilder, DefaultState};
use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Settings for the `cycle-replay` binary.
///
/// Read from an optional `replay.{toml,json,yaml}` in the working directory,
/// then `REPLAY_*` environment variables (nested keys use `__`, e.g.
/// `REPLAY_BUILDER__GAS_PRESSED_EPSILON`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplayConfig {
    /// Vehicle fingerprint
    pub model: String,
    pub vin: String,
    /// Newline-delimited JSON bus snapshots; stdin when unset
    pub input: Option<PathBuf>,
    pub log_level: String,
    pub builder: BuilderConfig,
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self {
            model: "HYUNDAI SANTA FE LIMITED 2019".to_string(),
            vin: String::new(),
            input: None,
            log_level: "info".to_string(),
            builder: BuilderConfig::default(),
        }
    }
}

impl ReplayConfig {
    /// Load from file and environment
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_builder(
            Config::builder()
                .add_source(File::with_name("replay").required(false))
                .add_source(
                    Environment::with_prefix("REPLAY")
                        .prefix_separator("_")
                        .separator("__"),
                ),
        )
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        builder.build()?.try_deserialize()
    }
}
