// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test helpers for behavioral specifications.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;
use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

/// Minimal valid config.
pub const MINIMAL_CONFIG: &str = "version = 1\n";

/// Returns a Command configured to run the osprobe binary.
///
/// Environment overrides are cleared so host settings can't leak in, and
/// the working directory is a fresh temp dir unless changed.
pub fn osprobe_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("osprobe"));
    for var in ["OSPROBE_CONFIG", "OSPROBE_OS", "OSPROBE_ARCH", "OSPROBE_LOG", "NO_COLOR"] {
        cmd.env_remove(var);
    }
    cmd
}

/// A scratch project directory.
///
/// Contains an empty `.git` directory so config discovery stops here.
pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn empty() -> Self {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join(".git")).unwrap();
        Self { dir }
    }

    pub fn with_config(content: &str) -> Self {
        let project = Self::empty();
        project.config(content);
        project
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write osprobe.toml.
    pub fn config(&self, content: &str) {
        std::fs::write(self.path().join("osprobe.toml"), content).unwrap();
    }

    pub fn read(&self, name: &str) -> String {
        std::fs::read_to_string(self.path().join(name)).unwrap()
    }

    /// osprobe command running inside this project.
    pub fn cmd(&self) -> Command {
        let mut cmd = osprobe_cmd();
        cmd.current_dir(self.path());
        cmd
    }
}

/// Parse stdout of a finished command as JSON.
pub fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}
