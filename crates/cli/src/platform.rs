// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Platform identity detection.
//!
//! Maps the raw OS and architecture names of the compilation target onto a
//! closed set of lowercase identifiers. Names that cannot be mapped become
//! the `unknown` sentinel rather than an error, so callers decide whether a
//! detection gap is fatal.

use std::fmt;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

/// Sentinel identifier for a name detection could not map.
pub const UNKNOWN: &str = "unknown";

/// Operating system identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Linux,
    MacOs,
    Windows,
    FreeBsd,
    NetBsd,
    OpenBsd,
    DragonFly,
    Android,
    Ios,
    Solaris,
    Illumos,
    Unknown,
}

impl Platform {
    /// Every known identifier, sentinel excluded.
    pub const KNOWN: [Platform; 11] = [
        Platform::Linux,
        Platform::MacOs,
        Platform::Windows,
        Platform::FreeBsd,
        Platform::NetBsd,
        Platform::OpenBsd,
        Platform::DragonFly,
        Platform::Android,
        Platform::Ios,
        Platform::Solaris,
        Platform::Illumos,
    ];

    /// Map a raw OS name (as reported by `std::env::consts::OS` or a user
    /// override) onto an identifier. Unmapped names yield `Unknown`.
    pub fn from_os_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "linux" => Platform::Linux,
            "macos" | "darwin" => Platform::MacOs,
            "windows" => Platform::Windows,
            "freebsd" => Platform::FreeBsd,
            "netbsd" => Platform::NetBsd,
            "openbsd" => Platform::OpenBsd,
            "dragonfly" => Platform::DragonFly,
            "android" => Platform::Android,
            "ios" => Platform::Ios,
            "solaris" => Platform::Solaris,
            "illumos" => Platform::Illumos,
            _ => Platform::Unknown,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Linux => "linux",
            Platform::MacOs => "macos",
            Platform::Windows => "windows",
            Platform::FreeBsd => "freebsd",
            Platform::NetBsd => "netbsd",
            Platform::OpenBsd => "openbsd",
            Platform::DragonFly => "dragonfly",
            Platform::Android => "android",
            Platform::Ios => "ios",
            Platform::Solaris => "solaris",
            Platform::Illumos => "illumos",
            Platform::Unknown => UNKNOWN,
        }
    }

    pub fn is_unknown(self) -> bool {
        self == Platform::Unknown
    }

    /// OS family this platform belongs to.
    pub fn family(self) -> Family {
        match self {
            Platform::Windows => Family::Windows,
            Platform::Unknown => Family::Unknown,
            _ => Family::Unix,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// CPU architecture identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Arch {
    X86,
    X86_64,
    Arm,
    Aarch64,
    Riscv64,
    Powerpc64,
    S390x,
    Wasm32,
    Unknown,
}

impl Arch {
    pub const KNOWN: [Arch; 8] = [
        Arch::X86,
        Arch::X86_64,
        Arch::Arm,
        Arch::Aarch64,
        Arch::Riscv64,
        Arch::Powerpc64,
        Arch::S390x,
        Arch::Wasm32,
    ];

    /// Map a raw architecture name onto an identifier.
    pub fn from_arch_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "x86" | "i386" | "i686" => Arch::X86,
            "x86_64" | "amd64" => Arch::X86_64,
            "arm" => Arch::Arm,
            "aarch64" | "arm64" => Arch::Aarch64,
            "riscv64" => Arch::Riscv64,
            "powerpc64" => Arch::Powerpc64,
            "s390x" => Arch::S390x,
            "wasm32" => Arch::Wasm32,
            _ => Arch::Unknown,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Arch::X86 => "x86",
            Arch::X86_64 => "x86_64",
            Arch::Arm => "arm",
            Arch::Aarch64 => "aarch64",
            Arch::Riscv64 => "riscv64",
            Arch::Powerpc64 => "powerpc64",
            Arch::S390x => "s390x",
            Arch::Wasm32 => "wasm32",
            Arch::Unknown => UNKNOWN,
        }
    }

    pub fn is_unknown(self) -> bool {
        self == Arch::Unknown
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// OS family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Family {
    Unix,
    Windows,
    Unknown,
}

impl Family {
    pub fn as_str(self) -> &'static str {
        match self {
            Family::Unix => "unix",
            Family::Windows => "windows",
            Family::Unknown => UNKNOWN,
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot of the platform identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlatformInfo {
    pub platform: Platform,
    pub arch: Arch,
    pub family: Family,
    /// Name the platform was mapped from.
    pub raw_os: String,
    /// Name the arch was mapped from.
    pub raw_arch: String,
}

impl PlatformInfo {
    /// Build a snapshot from raw OS and architecture names.
    pub fn from_raw(os: &str, arch: &str) -> Self {
        let platform = Platform::from_os_name(os);
        Self {
            platform,
            arch: Arch::from_arch_name(arch),
            family: platform.family(),
            raw_os: os.to_string(),
            raw_arch: arch.to_string(),
        }
    }

    /// Platform of the running process, detected once from the target.
    pub fn current() -> &'static PlatformInfo {
        static CURRENT: OnceLock<PlatformInfo> = OnceLock::new();
        CURRENT.get_or_init(|| {
            let info = PlatformInfo::from_raw(std::env::consts::OS, std::env::consts::ARCH);
            tracing::debug!(
                platform = %info.platform,
                arch = %info.arch,
                "detected platform from target"
            );
            info
        })
    }

    /// Current snapshot with optional raw-name overrides applied.
    pub fn resolve(os_override: Option<&str>, arch_override: Option<&str>) -> PlatformInfo {
        let current = Self::current();
        if os_override.is_none() && arch_override.is_none() {
            return current.clone();
        }
        let os = os_override.unwrap_or(&current.raw_os);
        let arch = arch_override.unwrap_or(&current.raw_arch);
        tracing::debug!(os, arch, "using overridden platform names");
        Self::from_raw(os, arch)
    }
}

/// The platform identifier of the running process.
pub fn platform() -> Platform {
    PlatformInfo::current().platform
}

/// The architecture identifier of the running process.
pub fn arch() -> Arch {
    PlatformInfo::current().arch
}

#[cfg(test)]
#[path = "platform_tests.rs"]
mod tests;
