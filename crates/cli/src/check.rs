// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Check abstraction and result types.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::config::Config;
use crate::platform::PlatformInfo;

/// Context passed to every check.
pub struct CheckContext<'a> {
    /// Platform snapshot under test.
    pub platform: &'a PlatformInfo,
    pub config: &'a Config,
}

/// A named check over the platform snapshot.
pub trait Check: Send + Sync {
    /// Unique, stable name (used in flags, config tables, and output).
    fn name(&self) -> &'static str;

    /// One-line description for help output.
    fn description(&self) -> &'static str;

    fn run(&self, ctx: &CheckContext) -> CheckResult;

    fn default_enabled(&self) -> bool {
        true
    }
}

/// A single failed predicate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub message: String,

    /// Value that was checked.
    pub actual: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<String>,
}

impl Violation {
    pub fn new(message: impl Into<String>, actual: impl Into<String>) -> Self {
        Self { message: message.into(), actual: actual.into(), expected: None }
    }

    pub fn with_expected(mut self, expected: impl Into<String>) -> Self {
        self.expected = Some(expected.into());
        self
    }
}

/// Outcome of a single check.
#[derive(Debug, Clone, Serialize)]
pub struct CheckResult {
    pub name: String,
    pub passed: bool,

    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub skipped: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Short human-readable description of what was observed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub violations: Vec<Violation>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<serde_json::Value>,
}

impl CheckResult {
    fn new(name: &str, passed: bool) -> Self {
        Self {
            name: name.to_string(),
            passed,
            skipped: false,
            error: None,
            summary: None,
            violations: Vec::new(),
            metrics: None,
        }
    }

    pub fn passed(name: &str) -> Self {
        Self::new(name, true)
    }

    pub fn failed(name: &str, violations: Vec<Violation>) -> Self {
        Self { violations, ..Self::new(name, false) }
    }

    /// Violations reported at warn level: recorded, but the check passes.
    pub fn warned(name: &str, violations: Vec<Violation>) -> Self {
        Self { violations, ..Self::new(name, true) }
    }

    /// A check that could not run. Skipped checks count as failures.
    pub fn skipped(name: &str, error: String) -> Self {
        Self { skipped: true, error: Some(error), ..Self::new(name, false) }
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    pub fn with_metrics(mut self, metrics: serde_json::Value) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Passed, but with violations reported at warn level.
    pub fn is_warning(&self) -> bool {
        self.passed && !self.violations.is_empty()
    }
}

/// Aggregated output of a run.
#[derive(Debug, Clone, Serialize)]
pub struct CheckOutput {
    pub timestamp: DateTime<Utc>,
    pub platform: PlatformInfo,
    pub passed: bool,
    pub checks: Vec<CheckResult>,
}

impl CheckOutput {
    pub fn new(platform: PlatformInfo, checks: Vec<CheckResult>) -> Self {
        let passed = checks.iter().all(|c| c.passed);
        Self { timestamp: Utc::now(), platform, passed, checks }
    }

    pub fn failed_count(&self) -> usize {
        self.checks.iter().filter(|c| !c.passed).count()
    }
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
