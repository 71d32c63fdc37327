// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for environment variables and explicit config paths.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

/// > -C selects a config outside the discovery path
#[test]
fn explicit_config_flag() {
    let temp = Project::empty();
    let other = Project::with_config("version = 1\n[check.platform]\ncheck = \"warn\"\n");

    temp.cmd()
        .args(["check", "--no-color", "-C"])
        .arg(other.path().join("osprobe.toml"))
        .env("OSPROBE_OS", "plan9")
        .assert()
        .success()
        .stdout(predicates::str::contains("platform: WARN"));
}

/// > OSPROBE_CONFIG is equivalent to -C
#[test]
fn config_env_var() {
    let temp = Project::empty();
    let other = Project::with_config("version = 1\nbroken = true\n");

    temp.cmd()
        .arg("check")
        .env("OSPROBE_CONFIG", other.path().join("osprobe.toml"))
        .assert()
        .code(2);
}

/// > A missing explicit config is a config error, reported once
#[test]
fn missing_explicit_config_fails() {
    let temp = Project::empty();

    temp.cmd()
        .args(["check", "-C", "nope.toml"])
        .assert()
        .code(2)
        .stdout(predicates::str::is_empty())
        .stderr("osprobe: invalid config nope.toml: file not found\n");
}

/// > OSPROBE_LOG enables diagnostic logging on stderr
#[test]
fn log_env_emits_platform_diagnostics() {
    let temp = Project::empty();

    temp.cmd()
        .arg("check")
        .env("OSPROBE_LOG", "info")
        .env("OSPROBE_OS", "linux")
        .env("OSPROBE_ARCH", "x86_64")
        .assert()
        .success()
        .stderr(
            predicates::str::contains("platform=\"linux\"")
                .or(predicates::str::contains("platform=linux")),
        );
}
