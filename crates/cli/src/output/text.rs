// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text output formatter.
//!
//! One line per shown category:
//! ```text
//! CHANGED: force-app/A.cls force-app/B.cls
//! INSERTION: None Found
//! DESTRUCTIVE: force-app/C.cls
//! ```

use termcolor::{ColorChoice, StandardStream, WriteColor};

use super::{Category, CategoryFilter};
use crate::color::scheme;
use crate::diff::ClassificationResult;

/// Placeholder for a category without paths.
pub const NONE_FOUND: &str = "None Found";

/// Text output formatter with color support.
pub struct TextFormatter<W = StandardStream> {
    out: W,
    filter: CategoryFilter,
}

impl TextFormatter<StandardStream> {
    /// Create a formatter writing to stdout.
    pub fn new(color_choice: ColorChoice, filter: CategoryFilter) -> Self {
        Self::with_writer(StandardStream::stdout(color_choice), filter)
    }
}

impl<W: WriteColor> TextFormatter<W> {
    pub fn with_writer(out: W, filter: CategoryFilter) -> Self {
        Self { out, filter }
    }

    /// Write every shown category of `result`.
    pub fn write_result(&mut self, result: &ClassificationResult) -> std::io::Result<()> {
        for category in self.filter.categories() {
            self.write_category(category, category.paths(result).iter())?;
        }
        self.out.flush()
    }

    fn write_category<'a>(
        &mut self,
        category: Category,
        paths: impl ExactSizeIterator<Item = &'a String>,
    ) -> std::io::Result<()> {
        self.out.set_color(&scheme::label())?;
        write!(self.out, "{}", category.label())?;
        self.out.reset()?;
        write!(self.out, ":")?;

        if paths.len() == 0 {
            write!(self.out, " ")?;
            self.out.set_color(&scheme::none_found())?;
            write!(self.out, "{}", NONE_FOUND)?;
            self.out.reset()?;
        } else {
            for path in paths {
                write!(self.out, " ")?;
                self.out.set_color(&scheme::path())?;
                write!(self.out, "{}", path)?;
                self.out.reset()?;
            }
        }
        writeln!(self.out)
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
