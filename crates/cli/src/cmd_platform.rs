// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `osprobe platform` command implementation.

use termcolor::{ColorChoice, StandardStream};

use osprobe::cli::{Cli, PlatformArgs};
use osprobe::error::ExitCode;
use osprobe::output;
use osprobe::platform::PlatformInfo;

/// Print the platform identifier. Always succeeds; `unknown` is printed
/// as-is and left for `osprobe check` to judge.
pub fn run(cli: &Cli, args: &PlatformArgs) -> anyhow::Result<ExitCode> {
    let info = PlatformInfo::resolve(cli.assume_os.as_deref(), cli.assume_arch.as_deref());

    let mut stdout = StandardStream::stdout(ColorChoice::Never);
    output::formatter(args.output).write_platform(&mut stdout, &info, args.all)?;
    Ok(ExitCode::Success)
}
