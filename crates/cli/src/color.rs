// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal color handling.

use std::io::IsTerminal;

use termcolor::{Color, ColorChoice, ColorSpec};

/// `--color` flag value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolve to a concrete choice for stdout.
    ///
    /// `NO_COLOR` (any value) disables auto color, as does a non-terminal stdout.
    pub fn resolve(self) -> ColorChoice {
        match self {
            ColorMode::Always => resolve_color(true, false),
            ColorMode::Never => resolve_color(false, true),
            ColorMode::Auto => {
                let no_color = std::env::var_os("NO_COLOR").is_some();
                resolve_color(false, no_color || !std::io::stdout().is_terminal())
            }
        }
    }
}

/// Combine force/disable switches. Disabling wins.
pub fn resolve_color(force_color: bool, no_color: bool) -> ColorChoice {
    if no_color {
        ColorChoice::Never
    } else if force_color {
        ColorChoice::Always
    } else {
        ColorChoice::Auto
    }
}

/// Color scheme for text output.
pub mod scheme {
    use super::*;

    pub fn check_name() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_bold(true);
        spec
    }

    pub fn pass() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Green)).set_bold(true);
        spec
    }

    pub fn fail() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Red)).set_bold(true);
        spec
    }

    pub fn warn() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Yellow)).set_bold(true);
        spec
    }

    /// Observed identifier values.
    pub fn value() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Cyan));
        spec
    }

    /// Secondary detail under a violation.
    pub fn advice() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_dimmed(true);
        spec
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
