// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Parse helper functions for configuration.

use std::path::Path;

use super::{ChangesConfig, SuiteConfig};

/// Parse a TOML array of strings into a Vec<String>.
pub(super) fn parse_string_array(value: Option<&toml::Value>) -> Option<Vec<String>> {
    value?.as_array().map(|arr| {
        arr.iter()
            .filter_map(|v| v.as_str().map(String::from))
            .collect()
    })
}

/// Parse a TOML string value with a default function.
fn parse_string_or_else<F>(value: Option<&toml::Value>, default: F) -> String
where
    F: FnOnce() -> String,
{
    value
        .and_then(|v| v.as_str())
        .map(String::from)
        .unwrap_or_else(default)
}

/// Parse a TOML string value as Option<String>.
pub(super) fn parse_string_option(value: Option<&toml::Value>) -> Option<String> {
    value.and_then(|v| v.as_str()).map(String::from)
}

/// Warn about an unrecognized config key.
pub(super) fn warn_unknown_key(path: &Path, key: &str) {
    eprintln!(
        "affirm: warning: {}: unrecognized field `{}` (ignored)",
        path.display(),
        key
    );
}

/// Warn about every key of `table` not in `known`, prefixed with `section`.
fn warn_unknown_fields(path: &Path, section: &str, table: &toml::Table, known: &[&str]) {
    for key in table.keys() {
        if !known.contains(&key.as_str()) {
            warn_unknown_key(path, &format!("{}.{}", section, key));
        }
    }
}

/// Parse `[changes]`.
pub(super) fn parse_changes_config(value: Option<&toml::Value>, path: &Path) -> ChangesConfig {
    let Some(toml::Value::Table(t)) = value else {
        return ChangesConfig::default();
    };
    warn_unknown_fields(path, "changes", t, &["base", "directory", "ignore"]);

    ChangesConfig {
        base: parse_string_or_else(t.get("base"), ChangesConfig::default_base),
        directory: parse_string_or_else(t.get("directory"), ChangesConfig::default_directory),
        ignore: parse_string_array(t.get("ignore")).unwrap_or_else(ChangesConfig::default_ignore),
    }
}

/// Parse `[suite]`.
pub(super) fn parse_suite_config(value: Option<&toml::Value>, path: &Path) -> SuiteConfig {
    let Some(toml::Value::Table(t)) = value else {
        return SuiteConfig::default();
    };
    warn_unknown_fields(path, "suite", t, &["output_dir"]);

    SuiteConfig {
        output_dir: parse_string_option(t.get("output_dir")),
    }
}
