//! Change classification and test suite tooling for Salesforce DX projects.

pub mod cli;
pub mod color;
pub mod config;
pub mod diff;
pub mod discovery;
pub mod error;
pub mod git;
pub mod output;
pub mod project;
pub mod suite;

pub use cli::{ChangesArgs, Cli, Command, ProjectArgs, ProjectCommand, SuiteArgs};
pub use config::Config;
pub use diff::{ChangeRecord, ClassificationResult, DiffClassifier, DiffProvider};
pub use error::{Error, ExitCode, Result};
pub use git::GitDiffProvider;
pub use output::CategoryFilter;
pub use project::SfdxProject;

#[cfg(test)]
pub mod test_utils;
