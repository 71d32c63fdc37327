// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Predicates shared by the identifier checks.
//!
//! An identifier passes when it is a lowercase token, is not the
//! `unknown` sentinel, and (when an allow-list is configured) is listed.

use crate::check::{CheckResult, Violation};
use crate::config::CheckLevel;
use crate::platform::UNKNOWN;

/// True for a non-empty lowercase token: `[a-z][a-z0-9_]*`.
pub fn is_identifier(value: &str) -> bool {
    let mut chars = value.chars();
    chars.next().is_some_and(|c| c.is_ascii_lowercase())
        && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}

/// Evaluate the identifier predicates for `label` (e.g. "platform").
///
/// `raw` is the name the identifier was mapped from, reported when the
/// value is the sentinel so the detection gap is visible.
pub fn verify(label: &str, value: &str, raw: &str, allowed: &[&str]) -> Vec<Violation> {
    let mut violations = Vec::new();

    if !is_identifier(value) {
        violations.push(Violation::new(format!("{label} should be a non-empty identifier"), value));
        return violations;
    }

    if value == UNKNOWN {
        let mut v = Violation::new(format!("{label} should not be \"{UNKNOWN}\""), value);
        if !raw.is_empty() && raw != value {
            v = v.with_expected(format!("a known {label} (detected \"{raw}\")"));
        }
        violations.push(v);
        return violations;
    }

    if !allowed.is_empty() && !allowed.contains(&value) {
        violations.push(
            Violation::new(format!("{label} is not in the allowed list"), value)
                .with_expected(allowed.join(", ")),
        );
    }

    violations
}

/// Turn violations into a result according to the configured level.
pub fn into_result(name: &str, level: CheckLevel, violations: Vec<Violation>) -> CheckResult {
    match level {
        _ if violations.is_empty() => CheckResult::passed(name),
        CheckLevel::Error => CheckResult::failed(name, violations),
        CheckLevel::Warn => CheckResult::warned(name, violations),
        CheckLevel::Off => CheckResult::passed(name),
    }
}

#[cfg(test)]
#[path = "identity_tests.rs"]
mod tests;
