// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Parallel check runner with error recovery.
//!
//! Runs checks in parallel using rayon, isolating panics so one
//! broken check doesn't prevent other checks from reporting.

use std::sync::Arc;

use rayon::prelude::*;

use crate::check::{Check, CheckContext, CheckResult};
use crate::checks::CHECK_NAMES;
use crate::config::Config;
use crate::platform::PlatformInfo;

/// Decides which checks run.
pub trait CheckFilter {
    fn should_include(&self, name: &str) -> bool;
}

/// Filter built from explicit enable/disable lists.
///
/// A non-empty enable list wins: only those checks run.
#[derive(Debug, Default, Clone)]
pub struct NameFilter {
    pub enabled: Vec<String>,
    pub disabled: Vec<String>,
}

impl CheckFilter for NameFilter {
    fn should_include(&self, name: &str) -> bool {
        if !self.enabled.is_empty() {
            return self.enabled.iter().any(|n| n == name);
        }
        !self.disabled.iter().any(|n| n == name)
    }
}

/// The check runner executes checks in parallel.
pub struct CheckRunner<'a> {
    platform: &'a PlatformInfo,
    config: &'a Config,
}

impl<'a> CheckRunner<'a> {
    pub fn new(platform: &'a PlatformInfo, config: &'a Config) -> Self {
        Self { platform, config }
    }

    /// Select the checks to run from `checks`.
    pub fn select(checks: Vec<Arc<dyn Check>>, filter: &dyn CheckFilter) -> Vec<Arc<dyn Check>> {
        checks
            .into_iter()
            .filter(|c| c.default_enabled() && filter.should_include(c.name()))
            .collect()
    }

    /// Run all provided checks and return results in canonical order.
    pub fn run(&self, checks: Vec<Arc<dyn Check>>) -> Vec<CheckResult> {
        let mut results: Vec<CheckResult> = checks
            .into_par_iter()
            .map(|check| {
                let ctx = CheckContext { platform: self.platform, config: self.config };

                // Catch panics to ensure error isolation
                match std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| check.run(&ctx))) {
                    Ok(result) => result,
                    Err(_) => {
                        tracing::error!(check = check.name(), "check panicked");
                        CheckResult::skipped(
                            check.name(),
                            "Internal error: check panicked".to_string(),
                        )
                    }
                }
            })
            .collect();

        results.sort_by_key(|r| {
            CHECK_NAMES.iter().position(|&n| n == r.name).unwrap_or(usize::MAX)
        });
        results
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
