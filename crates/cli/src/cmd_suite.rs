// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Implementation of the `affirm suite` command.

use std::path::{Path, PathBuf};

use anyhow::Result;

use affirm::cli::{Cli, SuiteArgs};
use affirm::config::Config;
use affirm::error::ExitCode;
use affirm::project::SfdxProject;
use affirm::suite::{self, WriteMode};
use affirm::{config, discovery, git};

/// Directory under a package path holding test suites.
const SUITE_SUBDIR: &str = "main/default/testSuites";

/// Run the `suite` command.
pub fn run(cli: &Cli, args: &SuiteArgs) -> Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    let config_path = discovery::resolve_config(cli.config.as_deref(), &cwd)?;
    let config = config::load_or_default(config_path.as_deref())?;

    let name = match &args.name {
        Some(name) => name.trim().to_string(),
        None => {
            let branch = git::current_branch(&cwd)?;
            suite::short_branch_name(&branch, suite::BRANCH_NAME_LENGTH)
        }
    };
    suite::validate_name(&name)?;

    let tests = suite::clean_test_names(&args.tests);
    let dir = output_dir(args, &config, config_path.as_deref(), &cwd)?;

    let existing = suite::find_existing(&dir, &name);
    if let Some(path) = &existing {
        println!("Found existing suite at {}", path.display());
    }
    let mode = WriteMode::select(existing.is_some(), args.add_to_tests, args.overwrite);
    tracing::debug!("writing suite {} with {:?}", name, mode);

    match suite::write_suite(&dir, &name, &tests, mode)? {
        Some(path) => println!("Test suite written to {}", path.display()),
        None => println!(
            "Keeping existing test suite {}. Use --addtotests or --overwrite to change it.",
            name
        ),
    }
    Ok(ExitCode::Success)
}

/// Where the suite file goes.
///
/// `--outputdir` is relative to the working directory and `suite.output_dir`
/// to the config file. Otherwise the default package directory is used.
fn output_dir(
    args: &SuiteArgs,
    config: &Config,
    config_path: Option<&Path>,
    cwd: &Path,
) -> Result<PathBuf> {
    if let Some(dir) = &args.outputdir {
        return Ok(cwd.join(dir));
    }
    if let Some(dir) = &config.suite.output_dir {
        let base = config_path.and_then(Path::parent).unwrap_or(cwd);
        return Ok(base.join(dir));
    }
    let project = SfdxProject::discover(cwd)?;
    Ok(project.root().join(project.default_path()?).join(SUITE_SUBDIR))
}
