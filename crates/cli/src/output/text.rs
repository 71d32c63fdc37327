// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text format output.

use std::io::{self, Write};

use termcolor::{ColorSpec, WriteColor};

use crate::check::{CheckOutput, CheckResult};
use crate::color::scheme;
use crate::platform::PlatformInfo;

use super::Formatter;

/// Human-readable, optionally colored output.
pub struct TextFormatter;

fn write_colored(out: &mut dyn WriteColor, spec: &ColorSpec, text: &str) -> io::Result<()> {
    out.set_color(spec)?;
    write!(out, "{text}")?;
    out.reset()
}

fn status(result: &CheckResult) -> (&'static str, ColorSpec) {
    if result.skipped {
        ("SKIP", scheme::fail())
    } else if !result.passed {
        ("FAIL", scheme::fail())
    } else if result.is_warning() {
        ("WARN", scheme::warn())
    } else {
        ("PASS", scheme::pass())
    }
}

fn write_result(out: &mut dyn WriteColor, result: &CheckResult) -> io::Result<()> {
    let (label, spec) = status(result);
    write_colored(out, &scheme::check_name(), &result.name)?;
    write!(out, ": ")?;
    write_colored(out, &spec, label)?;
    if let Some(summary) = &result.summary {
        write!(out, " ")?;
        write_colored(out, &scheme::value(), summary)?;
    }
    writeln!(out)?;

    if let Some(error) = &result.error {
        writeln!(out, "  {error}")?;
    }
    for violation in &result.violations {
        writeln!(out, "  {} (got: {})", violation.message, violation.actual)?;
        if let Some(expected) = &violation.expected {
            out.set_color(&scheme::advice())?;
            writeln!(out, "    expected: {expected}")?;
            out.reset()?;
        }
    }
    Ok(())
}

impl Formatter for TextFormatter {
    fn write_checks(&self, out: &mut dyn WriteColor, output: &CheckOutput) -> io::Result<()> {
        for result in &output.checks {
            write_result(out, result)?;
        }

        let total = output.checks.len();
        let noun = if total == 1 { "check" } else { "checks" };
        if output.passed {
            write_colored(out, &scheme::pass(), "PASS")?;
            writeln!(out, ": {total} {noun} passed")?;
        } else {
            write_colored(out, &scheme::fail(), "FAIL")?;
            writeln!(out, ": {} of {total} {noun} failed", output.failed_count())?;
        }
        Ok(())
    }

    fn write_platform(
        &self,
        out: &mut dyn WriteColor,
        info: &PlatformInfo,
        all: bool,
    ) -> io::Result<()> {
        if !all {
            return writeln!(out, "{}", info.platform);
        }
        writeln!(out, "platform: {}", info.platform)?;
        writeln!(out, "arch: {}", info.arch)?;
        writeln!(out, "family: {}", info.family)?;
        writeln!(out, "raw_os: {}", info.raw_os)?;
        writeln!(out, "raw_arch: {}", info.raw_arch)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
