// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types and exit codes.

use std::path::PathBuf;

/// Library error type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid config {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    #[error("{}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Argument(String),
}

impl Error {
    /// Exit code this error maps to when it reaches the binary.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Error::Config { .. } | Error::Argument(_) => ExitCode::ConfigError,
            Error::Io { .. } => ExitCode::InternalError,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,
    CheckFailed = 1,
    ConfigError = 2,
    InternalError = 3,
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code as u8)
    }
}

/// Exit code for an error surfaced at the binary boundary.
pub fn exit_code_for(err: &anyhow::Error) -> ExitCode {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<Error>())
        .map(Error::exit_code)
        .unwrap_or(ExitCode::InternalError)
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
