// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration parsing and validation.
//!
//! Handles affirm.toml parsing with version validation and unknown key warnings.

mod parse;

use std::collections::BTreeSet;
use std::path::Path;

use serde::Deserialize;

use crate::diff::{DEFAULT_IGNORE_PATTERNS, IgnoreList};
use crate::error::{Error, Result};
use parse::{parse_changes_config, parse_suite_config, warn_unknown_key};

/// Config with flexible parsing that captures unknown keys.
#[derive(Deserialize)]
struct FlexibleConfig {
    version: i64,

    #[serde(default)]
    changes: Option<toml::Value>,

    #[serde(default)]
    suite: Option<toml::Value>,

    #[serde(flatten)]
    unknown: std::collections::BTreeMap<String, toml::Value>,
}

/// Full configuration.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Config file version (must be 1).
    pub version: i64,

    /// Change classification settings.
    #[serde(default)]
    pub changes: ChangesConfig,

    /// Test suite settings.
    #[serde(default)]
    pub suite: SuiteConfig,
}

/// Settings for `affirm changes`.
#[derive(Debug, Clone, Deserialize)]
pub struct ChangesConfig {
    /// Reference the working tree is compared against.
    #[serde(default = "ChangesConfig::default_base")]
    pub base: String,

    /// Only paths starting with this prefix are classified.
    #[serde(default = "ChangesConfig::default_directory")]
    pub directory: String,

    /// Ignore patterns (replaces the defaults when set).
    #[serde(default = "ChangesConfig::default_ignore")]
    pub ignore: Vec<String>,
}

impl Default for ChangesConfig {
    fn default() -> Self {
        Self {
            base: Self::default_base(),
            directory: Self::default_directory(),
            ignore: Self::default_ignore(),
        }
    }
}

impl ChangesConfig {
    pub(crate) fn default_base() -> String {
        "remotes/origin/master".to_string()
    }

    pub(crate) fn default_directory() -> String {
        "force-app".to_string()
    }

    pub(crate) fn default_ignore() -> Vec<String> {
        DEFAULT_IGNORE_PATTERNS.iter().map(|p| p.to_string()).collect()
    }

    /// Build the ignore list for the classifier.
    pub fn ignore_list(&self) -> IgnoreList {
        IgnoreList::new(self.ignore.iter().cloned())
    }
}

/// Settings for `affirm suite`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SuiteConfig {
    /// Directory test suites are written to (default: under the default package path).
    #[serde(default)]
    pub output_dir: Option<String>,
}

/// Currently supported config version.
pub const SUPPORTED_VERSION: i64 = 1;

/// Known top-level keys in the config.
const KNOWN_KEYS: &[&str] = &["version", "changes", "suite"];

/// Load config with warnings for unknown keys.
pub fn load_with_warnings(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse_with_warnings(&content, path)
}

/// Parse config, warning on unknown keys.
pub fn parse_with_warnings(content: &str, path: &Path) -> Result<Config> {
    let flexible: FlexibleConfig = toml::from_str(content).map_err(|e| Error::Config {
        message: e.to_string(),
        path: Some(path.to_path_buf()),
    })?;

    if flexible.version != SUPPORTED_VERSION {
        return Err(Error::Config {
            message: format!(
                "unsupported config version {} (supported: {})",
                flexible.version, SUPPORTED_VERSION
            ),
            path: Some(path.to_path_buf()),
        });
    }

    let unknown_keys: BTreeSet<&String> = flexible
        .unknown
        .keys()
        .filter(|key| !KNOWN_KEYS.contains(&key.as_str()))
        .collect();
    for key in unknown_keys {
        warn_unknown_key(path, key);
    }

    Ok(Config {
        version: flexible.version,
        changes: parse_changes_config(flexible.changes.as_ref(), path),
        suite: parse_suite_config(flexible.suite.as_ref(), path),
    })
}

/// Load the config at `path`, or defaults when there is none.
pub fn load_or_default(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            load_with_warnings(path)
        }
        None => Ok(Config {
            version: SUPPORTED_VERSION,
            ..Config::default()
        }),
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
