//! Logger configuration.

use std::env;
use std::str::FromStr;

use chrono::format::{Item, StrftimeItems};
use colored::control::ShouldColorize;
use serde::{Deserialize, Serialize};

use crate::error::{LogError, Result};

pub const COLOR_ENV: &str = "RELAYLOG_COLOR";
pub const TIMESTAMP_FORMAT_ENV: &str = "RELAYLOG_TIMESTAMP_FORMAT";

/// Local wall-clock rendering, e.g. `Thu Nov 24 2016 10:00:00 GMT+0200`.
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%a %b %d %Y %H:%M:%S GMT%z";

/// When to emit ANSI color codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    Always,
    Never,
    /// Follow `colored`'s terminal detection and `NO_COLOR` / `CLICOLOR`.
    #[default]
    Auto,
}

impl ColorChoice {
    /// Resolve to a yes/no for one logger. `Auto` reads the environment and
    /// terminal state at the time of the call; no process-wide state is
    /// touched.
    pub fn enabled(self) -> bool {
        match self {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => ShouldColorize::from_env().should_colorize(),
        }
    }
}

impl FromStr for ColorChoice {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "always" => Ok(ColorChoice::Always),
            "never" => Ok(ColorChoice::Never),
            "auto" | "" => Ok(ColorChoice::Auto),
            other => Err(LogError::Config(format!(
                "unknown color choice {:?} (expected always, never or auto)",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub color: ColorChoice,
    /// chrono strftime pattern for the line timestamp.
    pub timestamp_format: String,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            color: ColorChoice::Auto,
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
        }
    }
}

impl LoggerConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(color) = lookup(COLOR_ENV) {
            config.color = color.parse()?;
        }
        if let Some(format) = lookup(TIMESTAMP_FORMAT_ENV) {
            config.timestamp_format = format;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        validate_timestamp_format(&self.timestamp_format)
    }
}

/// Reject timestamp patterns chrono cannot render.
pub fn validate_timestamp_format(format: &str) -> Result<()> {
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(LogError::Config(format!("invalid timestamp format {:?}", format)));
    }
    Ok(())
}
