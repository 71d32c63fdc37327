// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized default values for configuration.

/// Supported config schema version.
pub const VERSION: u32 = 1;

/// Config file name searched for during discovery.
pub const CONFIG_FILE: &str = "osprobe.toml";

/// Template written by `osprobe init`. `{platform_allowed}` and
/// `{arch_allowed}` are replaced with TOML arrays.
const TEMPLATE: &str = r#"version = 1

# Platform identifier check.
# check: "error" fails the run, "warn" reports only, "off" skips.
# allowed: accepted identifiers; empty accepts any known platform.
[check.platform]
check = "error"
allowed = {platform_allowed}

# Architecture identifier check.
[check.arch]
check = "error"
allowed = {arch_allowed}
"#;

/// Render the init template with the given allow-lists.
pub fn render_template(platforms: &[&str], arches: &[&str]) -> String {
    TEMPLATE
        .replace("{platform_allowed}", &toml_array(platforms))
        .replace("{arch_allowed}", &toml_array(arches))
}

fn toml_array(items: &[&str]) -> String {
    let quoted: Vec<String> = items.iter().map(|s| format!("\"{s}\"")).collect();
    format!("[{}]", quoted.join(", "))
}
