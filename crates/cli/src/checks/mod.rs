// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Check registry.

pub mod arch;
pub mod identity;
pub mod platform;

use std::sync::Arc;

use crate::check::Check;

/// Canonical check order for output.
pub const CHECK_NAMES: &[&str] = &["platform", "arch"];

/// Every registered check, in canonical order.
pub fn all_checks() -> Vec<Arc<dyn Check>> {
    vec![Arc::new(platform::PlatformCheck), Arc::new(arch::ArchCheck)]
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
