//! Per-logger ANSI coloring.
//!
//! `colored`'s `Display` consults a process-wide switch, so two loggers
//! could not disagree about color through it. The styler writes the same
//! escape sequences from `colored::Color` codes, gated by its own flag.

use colored::Color;

use crate::context::ColorChoice;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Styler {
    enabled: bool,
}

impl Styler {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn ansi() -> Self {
        Self::new(true)
    }

    pub fn plain() -> Self {
        Self::new(false)
    }

    pub fn from_choice(choice: ColorChoice) -> Self {
        Self::new(choice.enabled())
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn paint(&self, text: &str, color: Color) -> String {
        if !self.enabled {
            return text.to_string();
        }
        format!("\x1b[{}m{}\x1b[0m", color.to_fg_str(), text)
    }
}
