// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Platform identifier check.
//!
//! Fails when the detected platform is not a usable identifier, is the
//! `unknown` sentinel, or falls outside the configured allow-list.

use serde_json::json;

use crate::check::{Check, CheckContext, CheckResult};
use crate::config::CheckLevel;

use super::identity;

pub struct PlatformCheck;

impl Check for PlatformCheck {
    fn name(&self) -> &'static str {
        "platform"
    }

    fn description(&self) -> &'static str {
        "Platform identifier is detected"
    }

    fn run(&self, ctx: &CheckContext) -> CheckResult {
        let config = &ctx.config.check.platform;

        // Skip if disabled
        if config.check == CheckLevel::Off {
            return CheckResult::passed(self.name());
        }

        let info = ctx.platform;
        let id = info.platform.as_str();
        tracing::info!(platform = id, raw = %info.raw_os, "platform");

        let allowed: Vec<&str> = config.allowed.iter().map(|p| p.as_str()).collect();
        let violations = identity::verify(self.name(), id, &info.raw_os, &allowed);

        identity::into_result(self.name(), config.check, violations)
            .with_summary(format!("{} ({})", id, info.family))
            .with_metrics(json!({
                "platform": id,
                "family": info.family,
                "raw": info.raw_os,
            }))
    }
}

#[cfg(test)]
#[path = "platform_tests.rs"]
mod tests;
