// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

/// Affirm error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration file not found or invalid
    #[error("config error: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    /// File I/O error
    #[error("io error: {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Internal error (bug)
    #[error("internal error: {0}")]
    Internal(String),

    /// No git repository could be opened.
    #[error("not a git repository: {} ({message})", .path.display())]
    RepositoryUnavailable { path: PathBuf, message: String },

    /// The base ref does not resolve to a tree.
    #[error("unknown ref: {reference}")]
    UnknownRef { reference: String },

    /// Any other libgit2 failure.
    #[error("git error: {0}")]
    Git(String),

    /// A diff record uses rename syntax that does not parse.
    #[error("malformed rename path `{path}`: {reason}")]
    MalformedRenamePath { path: String, reason: String },

    /// A diff record carries impossible line counts.
    #[error("invalid diff record `{path}`: {reason}")]
    InvalidRecord { path: String, reason: String },

    /// sfdx-project.json missing, unreadable, or lacking a required entry.
    #[error("project error: {message}")]
    Project {
        message: String,
        path: Option<PathBuf>,
    },

    /// Test suite name or manifest problem.
    #[error("suite error: {0}")]
    Suite(String),

    /// Test suite name exceeds the maximum length.
    #[error("suite name `{name}` is too long ({} characters, max: {max})", .name.chars().count())]
    NameTooLong { name: String, max: usize },
}

impl From<git2::Error> for Error {
    fn from(err: git2::Error) -> Self {
        Error::Git(err.message().to_string())
    }
}

/// Result type using affirm Error
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Command completed
    Success = 0,
    /// The requested operation could not be carried out
    Failed = 1,
    /// Configuration or argument error
    ConfigError = 2,
    /// Internal or repository error
    InternalError = 3,
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::Config { .. } => ExitCode::ConfigError,
            Error::Project { .. } => ExitCode::ConfigError,
            Error::MalformedRenamePath { .. } | Error::InvalidRecord { .. } => ExitCode::Failed,
            Error::Suite(_) | Error::NameTooLong { .. } => ExitCode::Failed,
            Error::UnknownRef { .. } => ExitCode::Failed,
            Error::RepositoryUnavailable { .. } | Error::Git(_) => ExitCode::InternalError,
            Error::Io { .. } | Error::Internal(_) => ExitCode::InternalError,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
