// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Paths excluded from classification.

use globset::{Glob, GlobBuilder, GlobSet, GlobSetBuilder};

/// Patterns ignored when no configuration overrides them.
pub const DEFAULT_IGNORE_PATTERNS: &[&str] = &["**/jsconfig.json", "**/.eslintrc.json"];

/// An immutable set of ignore patterns.
///
/// A path is ignored when it equals a pattern, when `**/<file name>` equals a
/// pattern, or when it matches a pattern compiled as a glob.
#[derive(Debug, Clone)]
pub struct IgnoreList {
    patterns: Vec<String>,
    globs: GlobSet,
}

impl IgnoreList {
    /// Build an ignore list from pattern strings.
    ///
    /// Invalid globs are logged and only take part in literal matching.
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let patterns: Vec<String> = patterns.into_iter().map(Into::into).collect();
        let mut builder = GlobSetBuilder::new();
        for pattern in &patterns {
            match compile(pattern) {
                Ok(glob) => {
                    builder.add(glob);
                }
                Err(e) => {
                    tracing::warn!("invalid ignore pattern '{}': {}", pattern, e);
                }
            }
        }
        let globs = builder.build().unwrap_or_else(|_| GlobSet::empty());
        Self { patterns, globs }
    }

    /// An ignore list that matches nothing.
    pub fn empty() -> Self {
        Self::new(Vec::<String>::new())
    }

    /// Configured patterns, in the order given.
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// Check whether a diff-summary path is ignored.
    pub fn is_ignored(&self, path: &str) -> bool {
        if self.patterns.iter().any(|p| p == path) {
            return true;
        }
        let file_name = path.rsplit('/').next().unwrap_or(path);
        let by_name = format!("**/{}", file_name);
        if self.patterns.iter().any(|p| *p == by_name) {
            return true;
        }
        self.globs.is_match(path)
    }
}

impl Default for IgnoreList {
    fn default() -> Self {
        Self::new(DEFAULT_IGNORE_PATTERNS.iter().copied())
    }
}

fn compile(pattern: &str) -> Result<Glob, globset::Error> {
    GlobBuilder::new(pattern).literal_separator(true).build()
}

#[cfg(test)]
#[path = "ignore_tests.rs"]
mod tests;
