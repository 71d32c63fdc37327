// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration parsing and validation.
//!
//! Reads `osprobe.toml`. Unknown keys are rejected so typos surface as
//! errors instead of silently falling back to defaults.

pub mod defaults;

use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::platform::{Arch, Platform};

/// Root configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Config schema version (must be 1).
    pub version: u32,

    #[serde(default)]
    pub check: ChecksConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self { version: defaults::VERSION, check: ChecksConfig::default() }
    }
}

/// Per-check configuration tables.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChecksConfig {
    pub platform: PlatformCheckConfig,
    pub arch: ArchCheckConfig,
}

/// Check level: error (fail), warn (report only), off (skip).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckLevel {
    #[default]
    Error,
    Warn,
    Off,
}

/// `[check.platform]` table.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlatformCheckConfig {
    pub check: CheckLevel,

    /// Platforms the check accepts. Empty accepts any known platform.
    pub allowed: Vec<Platform>,
}

/// `[check.arch]` table.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ArchCheckConfig {
    pub check: CheckLevel,

    /// Architectures the check accepts. Empty accepts any known arch.
    pub allowed: Vec<Arch>,
}

/// Load and validate a config file.
pub fn load(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            Error::Config { path: path.to_path_buf(), message: "file not found".to_string() }
        } else {
            Error::Io { path: path.to_path_buf(), source }
        }
    })?;
    parse(&content, path)
}

/// Parse and validate config content. `path` is used for error messages.
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    let config: Config = toml::from_str(content).map_err(|e| Error::Config {
        path: path.to_path_buf(),
        message: e.message().to_string(),
    })?;
    validate(&config).map_err(|message| Error::Config { path: path.to_path_buf(), message })?;
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(config)
}

fn validate(config: &Config) -> std::result::Result<(), String> {
    if config.version != defaults::VERSION {
        return Err(format!(
            "unsupported version {} (expected {})",
            config.version,
            defaults::VERSION
        ));
    }
    if config.check.platform.allowed.iter().any(|p| p.is_unknown()) {
        return Err("check.platform.allowed must not contain \"unknown\"".to_string());
    }
    if config.check.arch.allowed.iter().any(|a| a.is_unknown()) {
        return Err("check.arch.allowed must not contain \"unknown\"".to_string());
    }
    Ok(())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
