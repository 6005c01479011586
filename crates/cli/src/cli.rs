// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::output::CategoryFilter;

/// Classify branch changes and manage Apex test suites for Salesforce DX projects
#[derive(Parser)]
#[command(name = "affirm")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "AFFIRM_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List files changed, inserted, and destroyed since a base ref
    Changes(ChangesArgs),
    /// Create or update an Apex test suite
    Suite(SuiteArgs),
    /// Inspect or edit sfdx-project.json
    Project(ProjectArgs),
}

#[derive(clap::Args, Default)]
pub struct ChangesArgs {
    /// Base ref to compare the working tree against [default: remotes/origin/master]
    #[arg(short, long, value_name = "REF")]
    pub branch: Option<String>,

    /// Only report paths under this directory [default: force-app]
    #[arg(short = 'n', long = "inputdir", value_name = "DIR")]
    pub inputdir: Option<String>,

    /// Show changed files
    #[arg(short = 'c', long = "showchanged")]
    pub show_changed: bool,

    /// Show inserted files
    #[arg(short = 'i', long = "showinsertion")]
    pub show_insertion: bool,

    /// Show destroyed files
    #[arg(short = 'd', long = "showdestructive")]
    pub show_destructive: bool,

    /// Do not print the summary
    #[arg(short, long)]
    pub silent: bool,

    /// Write the summary as JSON to this file
    #[arg(short = 'o', long = "outfilename", value_name = "FILE")]
    pub outfilename: Option<PathBuf>,
}

impl ChangesArgs {
    /// Categories to print.
    pub fn filter(&self) -> CategoryFilter {
        CategoryFilter {
            changed: self.show_changed,
            inserted: self.show_insertion,
            destroyed: self.show_destructive,
        }
    }
}

#[derive(clap::Args, Default)]
pub struct SuiteArgs {
    /// Comma-separated Apex test class names
    #[arg(short, long, value_name = "LIST", default_value = "")]
    pub tests: String,

    /// Suite name [default: current branch name]
    #[arg(short, long)]
    pub name: Option<String>,

    /// Directory the suite file is written to
    #[arg(short, long = "outputdir", value_name = "DIR")]
    pub outputdir: Option<PathBuf>,

    /// Add the tests to an existing suite
    #[arg(short, long = "addtotests")]
    pub add_to_tests: bool,

    /// Replace an existing suite
    #[arg(long)]
    pub overwrite: bool,
}

#[derive(clap::Args)]
pub struct ProjectArgs {
    #[command(subcommand)]
    pub command: ProjectCommand,
}

#[derive(Subcommand, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectCommand {
    /// Print the default package directory
    DefaultPath,
    /// Add the release artifacts directory to packageDirectories
    AddReleasePath,
    /// Remove the release artifacts directory from packageDirectories
    RemoveReleasePath,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
