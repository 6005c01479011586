// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Git utilities for change detection.
//!
//! Uses git2 (libgit2) for all git operations to avoid subprocess overhead.
//!
//! ## Diff Summary
//!
//! The base tree is compared with the working tree (through the index), the
//! same target `git diff <base>` uses. Rename detection runs before the mode
//! filter, so a renamed file is never reported as a deletion.
//! - Added, modified files: path from `new_file()`
//! - Renamed, copied files: `prefix{old => new}suffix` from both sides
//! - Deleted files: path from `old_file()` (since `new_file()` is empty)

use std::path::{Path, PathBuf};

use git2::{Delta, DiffDelta, DiffFindOptions, DiffOptions, Repository};

use crate::diff::{ChangeRecord, DiffMode, DiffProvider, DiffQuery, format_rename};
use crate::error::{Error, Result};

/// Open the repository containing `root`.
fn open(root: &Path) -> Result<Repository> {
    Repository::discover(root).map_err(|e| Error::RepositoryUnavailable {
        path: root.to_path_buf(),
        message: e.message().to_string(),
    })
}

/// Check if a path is in a git repository.
pub fn is_git_repo(root: &Path) -> bool {
    Repository::discover(root).is_ok()
}

/// Short name of the checked-out branch.
pub fn current_branch(root: &Path) -> Result<String> {
    let repo = open(root)?;
    let head = repo.head()?;
    if !head.is_branch() {
        return Err(Error::Git("HEAD is not on a branch".to_string()));
    }
    head.shorthand()
        .map(str::to_string)
        .ok_or_else(|| Error::Git("branch name is not valid UTF-8".to_string()))
}

/// Path of a non-renamed delta.
///
/// For deleted files, `new_file().path()` is `None`, so fall back to `old_file()`.
fn delta_path(delta: &DiffDelta<'_>) -> Option<String> {
    delta
        .new_file()
        .path()
        .or_else(|| delta.old_file().path())
        .map(|p| p.to_string_lossy().into_owned())
}

/// Summary path of a delta, in rename form when it moved.
fn summary_path(delta: &DiffDelta<'_>) -> Option<String> {
    match delta.status() {
        Delta::Renamed | Delta::Copied => {
            let old = delta.old_file().path()?.to_string_lossy();
            let new = delta.new_file().path()?.to_string_lossy();
            Some(format_rename(&old, &new))
        }
        _ => delta_path(delta),
    }
}

fn wanted(status: Delta, mode: DiffMode) -> bool {
    match status {
        Delta::Unmodified | Delta::Ignored | Delta::Untracked | Delta::Unreadable => false,
        Delta::Deleted => mode == DiffMode::DeletionsOnly,
        _ => mode == DiffMode::AllExceptDeletions,
    }
}

/// Diff summaries read from a git working tree.
#[derive(Debug, Clone)]
pub struct GitDiffProvider {
    root: PathBuf,
}

impl GitDiffProvider {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl DiffProvider for GitDiffProvider {
    fn diff_summary(&self, query: &DiffQuery) -> Result<Vec<ChangeRecord>> {
        let repo = open(&self.root)?;

        let base_tree = repo
            .revparse_single(&query.base)
            .and_then(|obj| obj.peel_to_tree())
            .map_err(|_| Error::UnknownRef {
                reference: query.base.clone(),
            })?;

        let mut opts = DiffOptions::new();
        for spec in &query.pathspec {
            opts.pathspec(spec);
        }
        let mut diff = repo.diff_tree_to_workdir_with_index(Some(&base_tree), Some(&mut opts))?;

        let mut find = DiffFindOptions::new();
        find.renames(true);
        diff.find_similar(Some(&mut find))?;

        let mut records = Vec::new();
        for (idx, delta) in diff.deltas().enumerate() {
            if !wanted(delta.status(), query.mode) {
                continue;
            }
            let Some(path) = summary_path(&delta) else {
                tracing::warn!("skipping delta without a path ({:?})", delta.status());
                continue;
            };

            // Binary files have no line stats and report 0/0.
            let (insertions, deletions) = match git2::Patch::from_diff(&diff, idx)? {
                Some(patch) => {
                    let (_, added, removed) = patch.line_stats()?;
                    (added, removed)
                }
                None => (0, 0),
            };

            records.push(ChangeRecord::new(
                path,
                count(insertions)?,
                count(deletions)?,
            ));
        }

        tracing::debug!(
            "{:?} against {}: {} records",
            query.mode,
            query.base,
            records.len()
        );
        Ok(records)
    }
}

fn count(lines: usize) -> Result<i64> {
    i64::try_from(lines).map_err(|_| Error::Internal(format!("line count overflow: {}", lines)))
}

#[cfg(test)]
#[path = "git_tests.rs"]
mod tests;
