// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Platform identity detection and checks.
//!
//! [`platform`] maps the compilation target onto stable identifiers;
//! [`checks`] verifies those identifiers are usable (not the `unknown`
//! sentinel, optionally within an allow-list); [`runner`] and [`output`]
//! drive and report a run.

pub mod check;
pub mod checks;
pub mod cli;
pub mod color;
pub mod config;
pub mod discovery;
pub mod error;
pub mod output;
pub mod platform;
pub mod runner;

#[cfg(test)]
mod test_utils;

pub use error::{Error, ExitCode, Result};
pub use platform::{Arch, Family, Platform, PlatformInfo};
