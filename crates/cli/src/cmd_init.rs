// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `osprobe init` command implementation.

use osprobe::cli::{Cli, InitArgs};
use osprobe::config::defaults::{CONFIG_FILE, render_template};
use osprobe::error::{Error, ExitCode};
use osprobe::platform::PlatformInfo;

/// Write a default osprobe.toml in the working directory.
pub fn run(cli: &Cli, args: &InitArgs) -> anyhow::Result<ExitCode> {
    let path = std::env::current_dir()?.join(CONFIG_FILE);
    if path.exists() && !args.force {
        return Err(Error::Argument(format!(
            "{} already exists (use --force to overwrite)",
            CONFIG_FILE
        ))
        .into());
    }

    let content = if args.pin {
        let info = PlatformInfo::resolve(cli.assume_os.as_deref(), cli.assume_arch.as_deref());
        if info.platform.is_unknown() || info.arch.is_unknown() {
            return Err(Error::Argument(format!(
                "cannot pin undetected platform ({}/{})",
                info.raw_os, info.raw_arch
            ))
            .into());
        }
        render_template(&[info.platform.as_str()], &[info.arch.as_str()])
    } else {
        render_template(&[], &[])
    };

    std::fs::write(&path, content).map_err(|source| Error::Io { path: path.clone(), source })?;
    println!("Created {}", CONFIG_FILE);
    Ok(ExitCode::Success)
}
