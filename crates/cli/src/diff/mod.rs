// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diff classification.
//!
//! Partitions diff-summary records into three categories:
//! - changed: content edits to an existing path
//! - inserted: new paths, including the new side of a rename
//! - destroyed: removed paths, including the old side of a rename
//!
//! ## Passes
//!
//! The primary pass classifies every delta except deletions. Line counts
//! cannot tell a wholly deleted file apart from a heavy edit, so deletions
//! come from a second query that asks the provider for deleted paths only.

pub mod ignore;
pub mod provider;
pub mod rename;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
pub use ignore::{DEFAULT_IGNORE_PATTERNS, IgnoreList};
pub use provider::{DiffMode, DiffProvider, DiffQuery};
pub use rename::{Rename, format_rename, parse_rename};

/// One entry of a diff summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeRecord {
    /// Path, possibly in rename form (`prefix{old => new}suffix`).
    pub path: String,
    /// Added lines.
    pub insertions: i64,
    /// Removed lines.
    pub deletions: i64,
}

impl ChangeRecord {
    pub fn new(path: impl Into<String>, insertions: i64, deletions: i64) -> Self {
        Self {
            path: path.into(),
            insertions,
            deletions,
        }
    }

    /// Total changed lines.
    pub fn changes(&self) -> i64 {
        self.insertions + self.deletions
    }

    fn validate(&self) -> Result<()> {
        if self.insertions < 0 || self.deletions < 0 {
            return Err(Error::InvalidRecord {
                path: self.path.clone(),
                reason: format!(
                    "negative line count (insertions: {}, deletions: {})",
                    self.insertions, self.deletions
                ),
            });
        }
        Ok(())
    }

    /// Every changed line is an addition.
    fn is_pure_insertion(&self) -> bool {
        self.changes() == self.insertions && self.deletions == 0
    }
}

/// Classified paths.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub changed: BTreeSet<String>,
    #[serde(rename = "insertion")]
    pub inserted: BTreeSet<String>,
    #[serde(rename = "destructive")]
    pub destroyed: BTreeSet<String>,
}

impl ClassificationResult {
    pub fn is_empty(&self) -> bool {
        self.changed.is_empty() && self.inserted.is_empty() && self.destroyed.is_empty()
    }
}

/// Classifies diff-summary records under one directory, skipping ignored paths.
#[derive(Debug, Clone)]
pub struct DiffClassifier {
    directory: String,
    ignore: IgnoreList,
}

impl DiffClassifier {
    /// Create a classifier. An empty directory filter matches every path.
    pub fn new(directory: impl Into<String>, ignore: IgnoreList) -> Self {
        Self {
            directory: directory.into(),
            ignore,
        }
    }

    pub fn directory(&self) -> &str {
        &self.directory
    }

    /// Whether a record takes part in classification at all.
    fn in_scope(&self, path: &str) -> bool {
        path.starts_with(&self.directory) && !self.ignore.is_ignored(path)
    }

    /// Classify records from an all-except-deletions query.
    pub fn classify(&self, records: &[ChangeRecord]) -> Result<ClassificationResult> {
        let mut result = ClassificationResult::default();

        for record in records {
            record.validate()?;
            if !self.in_scope(&record.path) {
                tracing::trace!("skipping {}", record.path);
                continue;
            }

            if let Some(Rename { old, new }) = parse_rename(&record.path)? {
                tracing::trace!("rename {} -> {}", old, new);
                result.destroyed.insert(old);
                result.inserted.insert(new);
            } else if record.is_pure_insertion() {
                result.inserted.insert(record.path.clone());
            } else {
                result.changed.insert(record.path.clone());
            }
        }

        Ok(result)
    }

    /// Add records from a deletions-only query to `destroyed`.
    pub fn classify_pure_deletions(
        &self,
        result: &mut ClassificationResult,
        records: &[ChangeRecord],
    ) -> Result<()> {
        for record in records {
            record.validate()?;
            if !self.in_scope(&record.path) {
                continue;
            }
            if rename::has_rename_syntax(&record.path) {
                return Err(Error::MalformedRenamePath {
                    path: record.path.clone(),
                    reason: "rename syntax in a deletion record".to_string(),
                });
            }
            result.destroyed.insert(record.path.clone());
        }
        Ok(())
    }

    /// Query the provider for both passes and merge them.
    ///
    /// The two queries are independent and run concurrently.
    pub fn summarize<P>(&self, provider: &P, base: &str) -> Result<ClassificationResult>
    where
        P: DiffProvider + ?Sized,
    {
        let primary = DiffQuery::new(base, DiffMode::AllExceptDeletions);
        let deletions = DiffQuery::new(base, DiffMode::DeletionsOnly);

        let (primary, deletions) = rayon::join(
            || provider.diff_summary(&primary),
            || provider.diff_summary(&deletions),
        );
        let (primary, deletions) = (primary?, deletions?);
        tracing::debug!(
            "diff summary against {}: {} records, {} deletions",
            base,
            primary.len(),
            deletions.len()
        );

        let mut result = self.classify(&primary)?;
        self.classify_pure_deletions(&mut result, &deletions)?;
        Ok(result)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
