// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `osprobe check` command implementation.

use std::path::PathBuf;

use anyhow::Context;
use termcolor::StandardStream;

use osprobe::check::CheckOutput;
use osprobe::checks;
use osprobe::cli::{CheckArgs, Cli};
use osprobe::config::{self, Config};
use osprobe::discovery;
use osprobe::error::ExitCode;
use osprobe::output::{self, OutputFormat};
use osprobe::platform::PlatformInfo;
use osprobe::runner::CheckRunner;

/// Run the check command.
pub fn run(cli: &Cli, args: &CheckArgs) -> anyhow::Result<ExitCode> {
    let (config, config_path) = load_config(cli)?;
    match &config_path {
        Some(path) => tracing::debug!(path = %path.display(), "using config"),
        None => tracing::debug!("using default config"),
    }

    if args.config_only {
        return Ok(ExitCode::Success);
    }

    let info = PlatformInfo::resolve(cli.assume_os.as_deref(), cli.assume_arch.as_deref());
    let selected = CheckRunner::select(checks::all_checks(), &args.filter());
    tracing::debug!(count = selected.len(), "running checks");

    let results = CheckRunner::new(&info, &config).run(selected);
    let output = CheckOutput::new(info, results);

    // JSON is never colored
    let choice = match args.output {
        OutputFormat::Json => termcolor::ColorChoice::Never,
        OutputFormat::Text => args.color_mode().resolve(),
    };
    let mut stdout = StandardStream::stdout(choice);
    output::formatter(args.output).write_checks(&mut stdout, &output)?;

    Ok(if output.passed { ExitCode::Success } else { ExitCode::CheckFailed })
}

/// Load config from `-C` or discovery, falling back to defaults.
fn load_config(cli: &Cli) -> anyhow::Result<(Config, Option<PathBuf>)> {
    let path = match &cli.config {
        Some(path) => Some(path.clone()),
        None => {
            let cwd = std::env::current_dir().context("failed to read working directory")?;
            discovery::find_config(&cwd)
        }
    };

    match path {
        Some(path) => Ok((config::load(&path)?, Some(path))),
        None => Ok((Config::default(), None)),
    }
}
