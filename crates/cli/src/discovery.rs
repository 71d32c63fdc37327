// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Config file discovery.
//!
//! Walks from the current directory up to the git root looking for osprobe.toml.

use std::path::{Path, PathBuf};

use crate::config::defaults::CONFIG_FILE;

/// Find osprobe.toml starting from `start_dir` and walking up to git root.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    start_dir.ancestors().find_map(|dir| {
        let candidate = dir.join(CONFIG_FILE);
        if candidate.is_file() {
            return Some(Some(candidate));
        }
        // Stop at git root
        dir.join(".git").exists().then_some(None)
    })?
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
