//! Log levels: prefix text and message color.

use std::fmt;

use colored::Color;

use super::style::Styler;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    Success,
    Info,
    Warn,
    Error,
    Fatal,
    Log,
}

impl Level {
    pub const ALL: [Level; 6] = [
        Level::Success,
        Level::Info,
        Level::Warn,
        Level::Error,
        Level::Fatal,
        Level::Log,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Success => "success",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
            Level::Fatal => "fatal",
            Level::Log => "log",
        }
    }

    /// Text placed before the message. Errors carry their own description,
    /// plain log lines carry none.
    pub fn prefix(&self) -> &'static str {
        match self {
            Level::Success => "Success: ",
            Level::Info => "Info: ",
            Level::Warn => "Warn: ",
            Level::Fatal => "Fatal: ",
            Level::Error | Level::Log => "",
        }
    }

    pub fn color(&self) -> Option<Color> {
        match self {
            Level::Success => Some(Color::Green),
            Level::Info => Some(Color::Blue),
            Level::Warn => Some(Color::Yellow),
            Level::Error | Level::Fatal => Some(Color::Red),
            Level::Log => None,
        }
    }

    /// Prefix `message` and color the whole result.
    pub fn decorate(&self, message: &str, styler: Styler) -> String {
        let text = format!("{}{}", self.prefix(), message);
        match self.color() {
            Some(color) => styler.paint(&text, color),
            None => text,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
