// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Implementation of the `affirm project` command.

use anyhow::Result;

use affirm::cli::{ProjectArgs, ProjectCommand};
use affirm::error::ExitCode;
use affirm::project::{RELEASE_PATH, SfdxProject};

/// Run the `project` command.
pub fn run(args: &ProjectArgs) -> Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    let mut project = SfdxProject::discover(&cwd)?;

    match args.command {
        ProjectCommand::DefaultPath => {
            println!("{}", project.default_path()?);
        }
        ProjectCommand::AddReleasePath => {
            if project.add_release_path()? {
                println!("Added {} to {}", RELEASE_PATH, project.path().display());
            } else {
                println!("{} already lists {}", project.path().display(), RELEASE_PATH);
            }
        }
        ProjectCommand::RemoveReleasePath => {
            let removed = project.remove_release_path()?;
            println!(
                "Removed {} release path entr{} from {}",
                removed,
                if removed == 1 { "y" } else { "ies" },
                project.path().display()
            );
        }
    }
    Ok(ExitCode::Success)
}
