use std::path::{Path, PathBuf};
use std::time::Duration;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Optional configuration file, looked up in the working directory.
pub const CONFIG_FILE: &str = "RkvVoting.toml";

/// Prefix for environment overrides, e.g. `RKV_SUBMISSION_DELAY_MS=0`.
pub const ENV_PREFIX: &str = "RKV_";

/// Application configuration, derived from built-in defaults, `RkvVoting.toml`
/// and `RKV_*` environment variables, in increasing order of precedence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    seed_path: Option<PathBuf>,
    submission_delay_ms: u64,
    log_config: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed_path: None,
            submission_delay_ms: 1500,
            log_config: PathBuf::from("log4rs.yaml"),
        }
    }
}

impl Config {
    /// The layered configuration sources.
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(CONFIG_FILE))
            .merge(Env::prefixed(ENV_PREFIX))
    }

    pub fn load() -> Result<Self> {
        Self::from_figment(&Self::figment())
    }

    pub fn from_figment(figment: &Figment) -> Result<Self> {
        Ok(figment.extract()?)
    }

    /// Alternative seed file replacing the embedded seed data.
    /// Configured via `RKV_SEED_PATH`.
    pub fn seed_path(&self) -> Option<&Path> {
        self.seed_path.as_deref()
    }

    /// Artificial delay applied to simulated form submissions.
    /// Configured via `RKV_SUBMISSION_DELAY_MS`.
    pub fn submission_delay(&self) -> Duration {
        Duration::from_millis(self.submission_delay_ms)
    }

    /// log4rs YAML configuration file.
    /// Configured via `RKV_LOG_CONFIG`.
    pub fn log_config(&self) -> &Path {
        &self.log_config
    }
}
