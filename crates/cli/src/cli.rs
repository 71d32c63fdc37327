// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::color::ColorMode;
use crate::output::OutputFormat;
use crate::runner::NameFilter;

/// Detects the host platform identity and checks it against expectations
#[derive(Parser)]
#[command(name = "osprobe")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "OSPROBE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (overridden by OSPROBE_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Treat this raw OS name as the detected one
    #[arg(long, global = true, hide = true, env = "OSPROBE_OS", value_name = "NAME")]
    pub assume_os: Option<String>,

    /// Treat this raw architecture name as the detected one
    #[arg(long, global = true, hide = true, env = "OSPROBE_ARCH", value_name = "NAME")]
    pub assume_arch: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run platform identity checks
    Check(CheckArgs),
    /// Print the detected platform identifier
    Platform(PlatformArgs),
    /// Initialize osprobe configuration
    Init(InitArgs),
    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(clap::Args)]
pub struct CheckArgs {
    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Color output mode
    #[arg(long, default_value = "auto", value_name = "WHEN")]
    pub color: ColorMode,

    /// Disable color output (shorthand for --color=never)
    #[arg(long)]
    pub no_color: bool,

    /// Validate config and exit without running checks
    #[arg(long = "config-only")]
    pub config_only: bool,

    // Check enable flags (run only these checks)
    /// Run only the platform check
    #[arg(long)]
    pub platform: bool,

    /// Run only the arch check
    #[arg(long)]
    pub arch: bool,

    // Check disable flags (skip these checks)
    /// Skip the platform check
    #[arg(long)]
    pub no_platform: bool,

    /// Skip the arch check
    #[arg(long)]
    pub no_arch: bool,
}

impl CheckArgs {
    /// Get list of explicitly enabled checks.
    pub fn enabled_checks(&self) -> Vec<String> {
        [("platform", self.platform), ("arch", self.arch)]
            .into_iter()
            .filter_map(|(name, on)| on.then(|| name.to_string()))
            .collect()
    }

    /// Get list of explicitly disabled checks.
    pub fn disabled_checks(&self) -> Vec<String> {
        [("platform", self.no_platform), ("arch", self.no_arch)]
            .into_iter()
            .filter_map(|(name, off)| off.then(|| name.to_string()))
            .collect()
    }

    pub fn filter(&self) -> NameFilter {
        NameFilter { enabled: self.enabled_checks(), disabled: self.disabled_checks() }
    }

    /// Effective color mode after `--no-color`.
    pub fn color_mode(&self) -> ColorMode {
        if self.no_color { ColorMode::Never } else { self.color }
    }
}

#[derive(clap::Args)]
pub struct PlatformArgs {
    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Print architecture, family, and raw names too
    #[arg(long)]
    pub all: bool,
}

#[derive(clap::Args)]
pub struct InitArgs {
    /// Overwrite existing config
    #[arg(long)]
    pub force: bool,

    /// Restrict allowed platform and arch to the current ones
    #[arg(long)]
    pub pin: bool,
}

#[derive(clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
