// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Architecture identifier check.

use serde_json::json;

use crate::check::{Check, CheckContext, CheckResult};
use crate::config::CheckLevel;

use super::identity;

pub struct ArchCheck;

impl Check for ArchCheck {
    fn name(&self) -> &'static str {
        "arch"
    }

    fn description(&self) -> &'static str {
        "CPU architecture identifier is detected"
    }

    fn run(&self, ctx: &CheckContext) -> CheckResult {
        let config = &ctx.config.check.arch;
        if config.check == CheckLevel::Off {
            return CheckResult::passed(self.name());
        }

        let info = ctx.platform;
        let id = info.arch.as_str();
        tracing::info!(arch = id, raw = %info.raw_arch, "arch");

        let allowed: Vec<&str> = config.allowed.iter().map(|a| a.as_str()).collect();
        let violations = identity::verify(self.name(), id, &info.raw_arch, &allowed);

        identity::into_result(self.name(), config.check, violations)
            .with_summary(id)
            .with_metrics(json!({ "arch": id, "raw": info.raw_arch }))
    }
}

#[cfg(test)]
#[path = "arch_tests.rs"]
mod tests;
