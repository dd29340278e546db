//! Line formatting: `[<timestamp>] <message>`.

use std::fmt;

use chrono::{DateTime, Local, TimeZone};
use colored::Color;

use crate::context::{validate_timestamp_format, LoggerConfig, DEFAULT_TIMESTAMP_FORMAT};
use crate::error::Result;

use super::style::Styler;

/// Prepends a cyan timestamp to already-leveled messages.
#[derive(Debug, Clone)]
pub struct LineFormatter {
    timestamp_format: String,
    styler: Styler,
}

impl Default for LineFormatter {
    fn default() -> Self {
        Self {
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
            styler: Styler::plain(),
        }
    }
}

impl LineFormatter {
    /// Fails with [`LogError::Config`](crate::LogError::Config) when chrono
    /// cannot render `timestamp_format`.
    pub fn new(timestamp_format: &str, styler: Styler) -> Result<Self> {
        validate_timestamp_format(timestamp_format)?;
        Ok(Self {
            timestamp_format: timestamp_format.to_string(),
            styler,
        })
    }

    pub fn from_config(config: &LoggerConfig) -> Result<Self> {
        Self::new(&config.timestamp_format, Styler::from_choice(config.color))
    }

    pub fn styler(&self) -> Styler {
        self.styler
    }

    /// Format with the local time at the moment of the call.
    pub fn format(&self, message: &str) -> String {
        self.format_at(message, &Local::now())
    }

    pub fn format_at<Tz>(&self, message: &str, at: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        let timestamp = at.format(&self.timestamp_format).to_string();
        format!("[{}] {}", self.styler.paint(&timestamp, Color::Cyan), message)
    }
}
