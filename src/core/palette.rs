//! ANSI colorization
//!
//! Whether lines are colored is decided once, when the registry is built.
//! A disabled [`Palette`] returns text untouched.

use colored::Color;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::io::IsTerminal;

pub const TIMESTAMP_COLOR: Color = Color::BrightBlack;
pub const PID_COLOR: Color = Color::Magenta;
pub const NAME_COLOR: Color = Color::Cyan;

const RESET: &str = "\x1b[0m";

/// How the color decision is made
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Color only when both stdout and stderr are terminals
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn should_colorize(&self) -> bool {
        match self {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::io::stdout().is_terminal() && std::io::stderr().is_terminal(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    /// Palette that never colors
    pub const fn plain() -> Self {
        Self { enabled: false }
    }

    /// Palette that always emits ANSI escapes
    pub const fn ansi() -> Self {
        Self { enabled: true }
    }

    pub fn detect(mode: ColorMode) -> Self {
        Self {
            enabled: mode.should_colorize(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Wrap `text` in the escape sequence for `color`
    pub fn paint<'t>(&self, color: Color, text: &'t str) -> Cow<'t, str> {
        if self.enabled {
            Cow::Owned(format!("\x1b[{}m{}{}", color.to_fg_str(), text, RESET))
        } else {
            Cow::Borrowed(text)
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::plain()
    }
}
