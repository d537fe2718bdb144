// ABOUTME: Environment-driven configuration for the display extender
// ABOUTME: Summary word limit and the plugin id of the movable result block

use std::env;
use std::num::ParseIntError;
use thiserror::Error;

// Environment variable names
pub const VIZZINI_SUMMARY_WORDS: &str = "VIZZINI_SUMMARY_WORDS";
pub const VIZZINI_RESULT_PLUGIN: &str = "VIZZINI_RESULT_PLUGIN";
pub const VIZZINI_LOG: &str = "VIZZINI_LOG";

pub const DEFAULT_SUMMARY_WORDS: usize = 4;
pub const DEFAULT_RESULT_PLUGIN: &str = "result";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid summary word limit: {0}")]
    InvalidWordLimit(#[from] ParseIntError),
    #[error("Summary word limit {0} is out of range (must be at least 1)")]
    WordLimitOutOfRange(usize),
    #[error("Result plugin id cannot be empty")]
    EmptyResultPlugin,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtenderConfig {
    /// Words of the subtitle kept in the settings summary
    pub summary_words: usize,
    /// Header plugin id treated as the result block
    pub result_plugin: String,
}

impl Default for ExtenderConfig {
    fn default() -> Self {
        Self {
            summary_words: DEFAULT_SUMMARY_WORDS,
            result_plugin: DEFAULT_RESULT_PLUGIN.to_string(),
        }
    }
}

impl ExtenderConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; unset keys fall back to defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let summary_words = match lookup(VIZZINI_SUMMARY_WORDS) {
            Some(raw) => raw.trim().parse::<usize>()?,
            None => DEFAULT_SUMMARY_WORDS,
        };

        if summary_words == 0 {
            return Err(ConfigError::WordLimitOutOfRange(summary_words));
        }

        let result_plugin = match lookup(VIZZINI_RESULT_PLUGIN) {
            Some(raw) if raw.trim().is_empty() => return Err(ConfigError::EmptyResultPlugin),
            Some(raw) => raw.trim().to_string(),
            None => DEFAULT_RESULT_PLUGIN.to_string(),
        };

        Ok(Self {
            summary_words,
            result_plugin,
        })
    }
}
