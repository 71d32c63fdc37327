// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Check output formatting.
//!
//! Formatters write to a [`WriteColor`] so the same code drives colored
//! terminals, plain pipes, and in-memory buffers in tests.

mod json;
mod text;

use std::io;

use termcolor::WriteColor;

use crate::check::CheckOutput;
use crate::platform::PlatformInfo;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Output format selected with `--output`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Formats check output and platform snapshots.
pub trait Formatter {
    fn write_checks(&self, out: &mut dyn WriteColor, output: &CheckOutput) -> io::Result<()>;

    /// `all` includes the full snapshot, not just the platform identifier.
    fn write_platform(
        &self,
        out: &mut dyn WriteColor,
        info: &PlatformInfo,
        all: bool,
    ) -> io::Result<()>;
}

/// Formatter for the given output format.
pub fn formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}
