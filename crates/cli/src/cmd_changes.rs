// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Implementation of the `affirm changes` command.

use anyhow::Result;

use affirm::cli::{ChangesArgs, Cli};
use affirm::color::resolve_color;
use affirm::diff::DiffClassifier;
use affirm::error::ExitCode;
use affirm::git::GitDiffProvider;
use affirm::output::json::write_json;
use affirm::output::text::TextFormatter;
use affirm::{config, discovery};

/// Run the `changes` command.
pub fn run(cli: &Cli, args: &ChangesArgs) -> Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    let config_path = discovery::resolve_config(cli.config.as_deref(), &cwd)?;
    let config = config::load_or_default(config_path.as_deref())?;

    let base = args.branch.as_deref().unwrap_or(&config.changes.base);
    let directory = args
        .inputdir
        .as_deref()
        .unwrap_or(&config.changes.directory);
    tracing::debug!("comparing {} against {} under {:?}", cwd.display(), base, directory);

    let classifier = DiffClassifier::new(directory, config.changes.ignore_list());
    let provider = GitDiffProvider::new(&cwd);
    let result = classifier.summarize(&provider, base)?;

    if !args.silent {
        let mut formatter = TextFormatter::new(resolve_color(), args.filter());
        formatter.write_result(&result)?;
    }

    if let Some(path) = &args.outfilename {
        write_json(path, &result)?;
    }

    Ok(ExitCode::Success)
}
