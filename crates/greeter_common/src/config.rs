//! Configuration management for greeter.
//!
//! Every field defaults to the built-in literal, so running without a config
//! file prints the stock sequence. Lookup order:
//! 1. `--config PATH` (must exist)
//! 2. `$GREETER_CONFIG`
//! 3. `$XDG_CONFIG_HOME/greeter/config.toml`

use crate::error::{GreeterError, Result};
use crate::hostname::HostnameFailure;
use crate::person::Person;
use crate::trig::DEFAULT_SINE_INPUT;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Environment override for the config path
pub const CONFIG_ENV: &str = "GREETER_CONFIG";

pub const DEFAULT_MESSAGE: &str = "Hello, world!";
pub const DEFAULT_COUNT_FROM: i64 = 1;
pub const DEFAULT_COUNT_TO: i64 = 10;

/// Most counter lines a config may ask for
pub const MAX_COUNT_LINES: i64 = 10_000;

/// Hostname step configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostnameConfig {
    /// Behavior when gethostname(2) fails
    pub failure: HostnameFailure,

    /// Report this name instead of querying the system ("" = empty)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GreeterConfig {
    #[serde(default = "default_message")]
    pub message: String,

    #[serde(default = "default_count_from")]
    pub count_from: i64,

    #[serde(default = "default_count_to")]
    pub count_to: i64,

    #[serde(default = "default_sine_input")]
    pub sine_input: f64,

    #[serde(default)]
    pub person: Person,

    #[serde(default)]
    pub hostname: HostnameConfig,
}

fn default_message() -> String {
    DEFAULT_MESSAGE.to_string()
}

fn default_count_from() -> i64 {
    DEFAULT_COUNT_FROM
}

fn default_count_to() -> i64 {
    DEFAULT_COUNT_TO
}

fn default_sine_input() -> f64 {
    DEFAULT_SINE_INPUT
}

impl Default for GreeterConfig {
    fn default() -> Self {
        Self {
            message: default_message(),
            count_from: default_count_from(),
            count_to: default_count_to(),
            sine_input: default_sine_input(),
            person: Person::default(),
            hostname: HostnameConfig::default(),
        }
    }
}

impl GreeterConfig {
    /// Resolve and load the config, falling back to defaults when no
    /// implicit file exists. An explicit path that cannot be read is an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from_path(path);
        }

        match Self::implicit_path() {
            Some(path) if path.exists() => Self::load_from_path(&path),
            Some(path) => {
                debug!("No config at {}, using defaults", path.display());
                Ok(Self::default())
            }
            None => Ok(Self::default()),
        }
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            GreeterError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        let config = Self::from_toml(&content)?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: GreeterConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.count_from > self.count_to {
            return Err(GreeterError::Config(format!(
                "count_from ({}) is greater than count_to ({})",
                self.count_from, self.count_to
            )));
        }
        let lines = i128::from(self.count_to) - i128::from(self.count_from) + 1;
        if lines > i128::from(MAX_COUNT_LINES) {
            return Err(GreeterError::Config(format!(
                "count range {}..={} spans {} lines, limit is {}",
                self.count_from, self.count_to, lines, MAX_COUNT_LINES
            )));
        }
        if !self.sine_input.is_finite() {
            return Err(GreeterError::Config(format!(
                "sine_input must be finite, got {}",
                self.sine_input
            )));
        }
        Ok(())
    }

    fn implicit_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }
        dirs::config_dir().map(|dir| dir.join("greeter/config.toml"))
    }
}
