//! Harness configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable that turns on long failure messages.
pub const LONG_MESSAGE_ENV: &str = "GOMILL_TEST_LONG_MESSAGE";

/// Default prefix selecting test functions.
pub const DEFAULT_PREFIX: &str = "test_";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid harness config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid value for {var}: '{value}'")]
    InvalidFlag { var: &'static str, value: String },
}

/// Options shared by every test case a harness builds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarnessConfig {
    /// When set, failure messages carry both the standard message and the
    /// caller's message. Otherwise the caller's message replaces the standard
    /// one.
    pub long_message: bool,
    /// Name prefix selecting test functions from a module.
    pub prefix: String,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            long_message: false,
            prefix: DEFAULT_PREFIX.to_string(),
        }
    }
}

impl HarnessConfig {
    /// Parse a JSON document. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Defaults, overridden by the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Defaults, overridden by whatever `lookup` returns for each variable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(value) = lookup(LONG_MESSAGE_ENV) {
            config.long_message = parse_flag(&value).ok_or(ConfigError::InvalidFlag {
                var: LONG_MESSAGE_ENV,
                value,
            })?;
        }
        Ok(config)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "" | "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
