// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for classification results.

pub mod json;
pub mod text;

use std::collections::BTreeSet;

use crate::diff::ClassificationResult;

/// One category of a classification result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Changed,
    Inserted,
    Destroyed,
}

impl Category {
    /// Categories in display order.
    pub const ALL: [Category; 3] = [Category::Changed, Category::Inserted, Category::Destroyed];

    /// Label printed before the category's paths.
    pub fn label(self) -> &'static str {
        match self {
            Category::Changed => "CHANGED",
            Category::Inserted => "INSERTION",
            Category::Destroyed => "DESTRUCTIVE",
        }
    }

    /// The category's paths in `result`.
    pub fn paths(self, result: &ClassificationResult) -> &BTreeSet<String> {
        match self {
            Category::Changed => &result.changed,
            Category::Inserted => &result.inserted,
            Category::Destroyed => &result.destroyed,
        }
    }
}

/// Which categories to display.
///
/// If any category is explicitly enabled, only those are shown.
/// Otherwise all categories are shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryFilter {
    pub changed: bool,
    pub inserted: bool,
    pub destroyed: bool,
}

impl CategoryFilter {
    /// Show every category.
    pub fn all() -> Self {
        Self::default()
    }

    fn any_enabled(&self) -> bool {
        self.changed || self.inserted || self.destroyed
    }

    pub fn should_include(&self, category: Category) -> bool {
        if !self.any_enabled() {
            return true;
        }
        match category {
            Category::Changed => self.changed,
            Category::Inserted => self.inserted,
            Category::Destroyed => self.destroyed,
        }
    }

    /// Shown categories in display order.
    pub fn categories(self) -> impl Iterator<Item = Category> {
        Category::ALL
            .into_iter()
            .filter(move |c| self.should_include(*c))
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
