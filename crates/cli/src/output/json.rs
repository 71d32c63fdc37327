// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON format output.

use std::io::{self, Write};

use serde_json::json;
use termcolor::WriteColor;

use crate::check::CheckOutput;
use crate::platform::PlatformInfo;

use super::Formatter;

/// Pretty-printed JSON, one document per invocation.
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn write_checks(&self, out: &mut dyn WriteColor, output: &CheckOutput) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut *out, output)?;
        writeln!(out)
    }

    fn write_platform(
        &self,
        out: &mut dyn WriteColor,
        info: &PlatformInfo,
        all: bool,
    ) -> io::Result<()> {
        if all {
            serde_json::to_writer_pretty(&mut *out, info)?;
        } else {
            serde_json::to_writer_pretty(&mut *out, &json!({ "platform": info.platform }))?;
        }
        writeln!(out)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
