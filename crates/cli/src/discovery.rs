// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Config and project file discovery.
//!
//! Walks from the current directory up to the git root looking for a file.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Name of the affirm config file.
pub const CONFIG_FILE_NAME: &str = "affirm.toml";

/// Name of the Salesforce DX project file.
pub const PROJECT_FILE_NAME: &str = "sfdx-project.json";

/// Find `file_name` starting from `start_dir` and walking up to git root.
pub fn find_upward(start_dir: &Path, file_name: &str) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let candidate = current.join(file_name);
        if candidate.exists() {
            return Some(candidate);
        }

        // Stop at git root
        if current.join(".git").exists() {
            return None;
        }

        match current.parent() {
            Some(parent) => current = parent.to_path_buf(),
            None => return None,
        }
    }
}

/// Find affirm.toml starting from `start_dir`.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    find_upward(start_dir, CONFIG_FILE_NAME)
}

/// Find sfdx-project.json starting from `start_dir`.
pub fn find_project_file(start_dir: &Path) -> Option<PathBuf> {
    find_upward(start_dir, PROJECT_FILE_NAME)
}

/// Resolve config path from CLI arg, env var, or discovery.
///
/// Priority:
/// 1. CLI flag `-C`/`--config` (handled by clap with env = "AFFIRM_CONFIG")
/// 2. Discovery from current directory up to git root
/// 3. None (use defaults)
pub fn resolve_config(explicit: Option<&Path>, cwd: &Path) -> Result<Option<PathBuf>> {
    match explicit {
        Some(path) => {
            if path.exists() {
                Ok(Some(path.to_path_buf()))
            } else {
                Err(Error::Config {
                    message: format!("config file not found: {}", path.display()),
                    path: Some(path.to_path_buf()),
                })
            }
        }
        None => Ok(find_config(cwd)),
    }
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
