// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared unit test utilities.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use crate::config::Config;
use crate::platform::PlatformInfo;

/// Creates a temp directory with a minimal osprobe.toml.
pub fn temp_project() -> TempDir {
    temp_project_with_config("version = 1\n")
}

/// Creates a temp directory with custom config content.
pub fn temp_project_with_config(config: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("osprobe.toml"), config).unwrap();
    dir
}

/// Creates a directory tree from a list of (path, content) pairs.
///
/// Parent directories are created automatically.
pub fn create_tree(root: &Path, files: &[(&str, &str)]) {
    for (path, content) in files {
        let full_path = root.join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full_path, content).unwrap();
    }
}

/// Parses config content, panicking on error.
pub fn config_from(content: &str) -> Config {
    crate::config::parse(content, Path::new("osprobe.toml")).unwrap()
}

/// A linux/x86_64 snapshot independent of the host.
pub fn linux_x86_64() -> PlatformInfo {
    PlatformInfo::from_raw("linux", "x86_64")
}

/// A snapshot whose OS could not be mapped.
pub fn undetected_os() -> PlatformInfo {
    PlatformInfo::from_raw("plan9", "x86_64")
}
