// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for config validation.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

// =============================================================================
// CONFIG VALIDATION SPECS
// =============================================================================

/// > Unknown keys are errors
#[test]
fn unknown_config_key_fails() {
    let temp = Project::with_config("version = 1\nunknown_key = true\n");

    temp.cmd()
        .arg("check")
        .assert()
        .code(2)
        .stderr(predicates::str::contains("unknown field"));
}

/// > Unknown nested keys are errors
#[test]
fn unknown_nested_config_key_fails() {
    let temp = Project::with_config(&format!("{MINIMAL_CONFIG}[check.kernel]\nminimum = 5\n"));

    temp.cmd()
        .arg("check")
        .assert()
        .code(2)
        .stderr(predicates::str::contains("unknown field"));
}

/// > Valid config produces no errors
#[test]
fn valid_config_no_errors() {
    let temp = Project::with_config(MINIMAL_CONFIG);

    temp.cmd().arg("check").assert().success().stderr(predicates::str::is_empty());
}

/// > Unsupported versions are errors
#[test]
fn unsupported_version_fails() {
    let temp = Project::with_config("version = 7\n");

    temp.cmd()
        .arg("check")
        .assert()
        .code(2)
        .stderr(predicates::str::contains("unsupported version 7"));
}

/// > The sentinel can't be allowed
#[test]
fn allowing_unknown_fails() {
    let temp = Project::with_config("version = 1\n[check.platform]\nallowed = [\"unknown\"]\n");

    temp.cmd().arg("check").assert().code(2);
}

/// > --config-only validates without running checks
#[test]
fn config_only_skips_checks() {
    let temp = Project::with_config(MINIMAL_CONFIG);

    temp.cmd()
        .args(["check", "--config-only"])
        .env("OSPROBE_OS", "plan9")
        .assert()
        .success()
        .stdout(predicates::str::is_empty());
}

/// > --config-only still reports invalid config
#[test]
fn config_only_reports_invalid_config() {
    let temp = Project::with_config("version = 1\nbogus = 1\n");

    temp.cmd().args(["check", "--config-only"]).assert().code(2);
}

/// > Config is discovered from a subdirectory
#[test]
fn config_discovered_from_subdirectory() {
    let temp = Project::with_config("version = 1\n[check.platform]\ncheck = \"off\"\n");
    let nested = temp.path().join("a/b");
    std::fs::create_dir_all(&nested).unwrap();

    osprobe_cmd()
        .arg("check")
        .current_dir(&nested)
        .env("OSPROBE_OS", "plan9")
        .assert()
        .success();
}
