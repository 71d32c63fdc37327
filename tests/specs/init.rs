// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for `osprobe init`.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

/// > init writes a config that check accepts
#[test]
fn init_creates_valid_config() {
    let temp = Project::empty();

    temp.cmd()
        .arg("init")
        .assert()
        .success()
        .stdout(predicates::str::contains("Created osprobe.toml"));

    assert!(temp.read("osprobe.toml").contains("[check.platform]"));
    temp.cmd().args(["check", "--config-only"]).assert().success();
}

/// > init refuses to overwrite without --force
#[test]
fn init_refuses_overwrite() {
    let temp = Project::with_config("version = 1\n# mine\n");

    temp.cmd()
        .arg("init")
        .assert()
        .code(2)
        .stderr(predicates::str::contains("already exists"));
    assert!(temp.read("osprobe.toml").contains("# mine"));
}

/// > --force overwrites
#[test]
fn init_force_overwrites() {
    let temp = Project::with_config("version = 1\n# mine\n");

    temp.cmd().args(["init", "--force"]).assert().success();
    assert!(!temp.read("osprobe.toml").contains("# mine"));
}

/// > --pin restricts the allow-lists to the current platform
#[test]
fn init_pin_restricts_allow_lists() {
    let temp = Project::empty();

    temp.cmd()
        .args(["init", "--pin"])
        .env("OSPROBE_OS", "linux")
        .env("OSPROBE_ARCH", "aarch64")
        .assert()
        .success();

    let config = temp.read("osprobe.toml");
    assert!(config.contains("allowed = [\"linux\"]"), "{config}");
    assert!(config.contains("allowed = [\"aarch64\"]"), "{config}");

    temp.cmd()
        .arg("check")
        .env("OSPROBE_OS", "windows")
        .env("OSPROBE_ARCH", "aarch64")
        .assert()
        .code(1);
}

/// > --pin refuses an undetected platform
#[test]
fn init_pin_rejects_unknown() {
    let temp = Project::empty();

    temp.cmd()
        .args(["init", "--pin"])
        .env("OSPROBE_OS", "plan9")
        .assert()
        .code(2)
        .stderr(predicates::str::contains("cannot pin undetected platform"));
}
