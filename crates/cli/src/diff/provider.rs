// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The version-control collaborator that produces diff summaries.

use super::ChangeRecord;
use crate::error::Result;

/// Which deltas a diff-summary query returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffMode {
    /// Every change except deletions (`--diff-filter=d`).
    AllExceptDeletions,
    /// Deletions only (`--diff-filter=D`).
    DeletionsOnly,
}

/// A diff-summary request against the working tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffQuery {
    /// Reference the working tree is compared against.
    pub base: String,
    pub mode: DiffMode,
    /// Path prefixes narrowing the query (empty = whole tree).
    pub pathspec: Vec<String>,
}

impl DiffQuery {
    pub fn new(base: impl Into<String>, mode: DiffMode) -> Self {
        Self {
            base: base.into(),
            mode,
            pathspec: Vec::new(),
        }
    }

    /// Narrow the query to the given path prefixes.
    pub fn with_pathspec<I, S>(mut self, pathspec: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.pathspec = pathspec.into_iter().map(Into::into).collect();
        self
    }
}

/// Source of diff-summary records.
///
/// Implementations must be shareable across threads: the primary and
/// deletion queries are issued concurrently.
pub trait DiffProvider: Sync {
    fn diff_summary(&self, query: &DiffQuery) -> Result<Vec<ChangeRecord>>;
}

impl<F> DiffProvider for F
where
    F: Fn(&DiffQuery) -> Result<Vec<ChangeRecord>> + Sync,
{
    fn diff_summary(&self, query: &DiffQuery) -> Result<Vec<ChangeRecord>> {
        self(query)
    }
}
