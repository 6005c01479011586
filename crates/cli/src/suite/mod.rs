// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Apex test suite manifests.
//!
//! A suite lives at `<dir>/<name>.testSuite-meta.xml`. Tests given on the
//! command line either replace the suite's list or are merged into it.

mod xml;

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
pub use xml::TestSuite;

/// Longest accepted suite name.
pub const MAX_NAME_LENGTH: usize = 35;

/// Length a branch name is cut to when used as the default suite name.
pub const BRANCH_NAME_LENGTH: usize = 25;

/// File suffix of a suite manifest.
pub const SUITE_SUFFIX: &str = ".testSuite-meta.xml";

/// How a suite file is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Replace the suite with the given tests.
    Overwrite,
    /// Append the given tests to the existing suite.
    Update,
    /// Leave an existing suite untouched.
    Keep,
}

impl WriteMode {
    /// Pick the mode from whether a suite exists and the user's flags.
    pub fn select(existing: bool, add_to_tests: bool, overwrite: bool) -> Self {
        match (existing, add_to_tests, overwrite) {
            (false, _, _) => WriteMode::Overwrite,
            (true, true, _) => WriteMode::Update,
            (true, false, true) => WriteMode::Overwrite,
            (true, false, false) => WriteMode::Keep,
        }
    }
}

/// Derive a suite name from a branch name.
///
/// Uses the last path segment, with runs of non-alphanumerics collapsed to a
/// single underscore, trimmed of underscores, and cut to `max` characters.
pub fn short_branch_name(branch: &str, max: usize) -> String {
    let last = branch.rsplit('/').next().unwrap_or(branch);

    let mut name = String::with_capacity(last.len());
    for c in last.chars() {
        if c.is_ascii_alphanumeric() {
            name.push(c);
        } else if !name.ends_with('_') {
            name.push('_');
        }
    }

    let name: String = name.trim_matches('_').chars().take(max).collect();
    name.trim_end_matches('_').to_string()
}

/// Split a comma-separated test list into class names.
///
/// Whitespace and a trailing `.cls` are stripped; blanks and repeats are dropped.
pub fn clean_test_names(raw: &str) -> Vec<String> {
    let mut tests: Vec<String> = Vec::new();
    for part in raw.split(',') {
        let compact: String = part.chars().filter(|c| !c.is_whitespace()).collect();
        let name = compact.strip_suffix(".cls").unwrap_or(&compact);
        if !name.is_empty() && !tests.iter().any(|t| t == name) {
            tests.push(name.to_string());
        }
    }
    tests
}

/// Check a suite name against Salesforce developer-name rules.
pub fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::Suite("suite name is empty".to_string()));
    }
    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(Error::NameTooLong {
            name: name.to_string(),
            max: MAX_NAME_LENGTH,
        });
    }
    if !name.starts_with(|c: char| c.is_ascii_alphabetic()) {
        return Err(invalid_name(name, "must begin with a letter"));
    }
    if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(invalid_name(
            name,
            "may contain only letters, digits, and underscores",
        ));
    }
    if name.contains("__") {
        return Err(invalid_name(name, "may not contain consecutive underscores"));
    }
    if name.ends_with('_') {
        return Err(invalid_name(name, "may not end with an underscore"));
    }
    Ok(())
}

fn invalid_name(name: &str, rule: &str) -> Error {
    Error::Suite(format!("invalid suite name `{}`: {}", name, rule))
}

/// Location of the suite file `name` in `dir`.
pub fn suite_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{}{}", name, SUITE_SUFFIX))
}

/// The suite file, if it already exists.
pub fn find_existing(dir: &Path, name: &str) -> Option<PathBuf> {
    let path = suite_path(dir, name);
    path.is_file().then_some(path)
}

/// Read a suite file.
pub fn read_suite(path: &Path) -> Result<TestSuite> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    TestSuite::parse(&content)
        .map_err(|e| Error::Suite(format!("{}: {}", path.display(), e)))
}

/// Write the suite `name` in `dir` according to `mode`.
///
/// Returns the written path, or `None` for [`WriteMode::Keep`].
pub fn write_suite(
    dir: &Path,
    name: &str,
    tests: &[String],
    mode: WriteMode,
) -> Result<Option<PathBuf>> {
    let path = suite_path(dir, name);

    let suite = match mode {
        WriteMode::Keep => return Ok(None),
        WriteMode::Overwrite => {
            if tests.is_empty() {
                return Err(Error::Suite("no tests provided".to_string()));
            }
            TestSuite::new(tests.iter().cloned())
        }
        WriteMode::Update => {
            let mut suite = if path.is_file() {
                read_suite(&path)?
            } else {
                TestSuite::default()
            };
            let added = suite.merge(tests.iter().cloned());
            tracing::debug!("added {} tests to {}", added, path.display());
            suite
        }
    };

    std::fs::create_dir_all(dir).map_err(|e| Error::Io {
        path: dir.to_path_buf(),
        source: e,
    })?;
    std::fs::write(&path, suite.to_xml()).map_err(|e| Error::Io {
        path: path.clone(),
        source: e,
    })?;
    Ok(Some(path))
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
