// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::IsTerminal;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use osprobe::cli::{Cli, Command};
use osprobe::error::{ExitCode, exit_code_for};

mod cmd_check;
mod cmd_init;
mod cmd_platform;

fn init_tracing(verbose: bool) {
    let default = if verbose { "osprobe=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env("OSPROBE_LOG").unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    match &cli.command {
        Some(Command::Check(args)) => cmd_check::run(cli, args),
        Some(Command::Platform(args)) => cmd_platform::run(cli, args),
        Some(Command::Init(args)) => cmd_init::run(cli, args),
        Some(Command::Completions(args)) => {
            let mut cmd = Cli::command();
            clap_complete::generate(args.shell, &mut cmd, "osprobe", &mut std::io::stdout());
            Ok(ExitCode::Success)
        }
        None => {
            Cli::command().print_help()?;
            Ok(ExitCode::Success)
        }
    }
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(code) => code.into(),
        Err(err) => {
            eprintln!("osprobe: {err:#}");
            exit_code_for(&err).into()
        }
    }
}
