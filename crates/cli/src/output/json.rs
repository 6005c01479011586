// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON output.
//!
//! The whole result is written regardless of the category filter.

use std::io::Write;
use std::path::Path;

use crate::diff::ClassificationResult;
use crate::error::{Error, Result};

/// JSON output formatter.
pub struct JsonFormatter<W: Write> {
    writer: W,
}

impl<W: Write> JsonFormatter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write the result as pretty JSON.
    pub fn write(&mut self, result: &ClassificationResult) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(result).map_err(std::io::Error::other)?;
        writeln!(self.writer, "{}", json)
    }
}

/// Write `result` to the file at `path`, creating parent directories.
pub fn write_json(path: &Path, result: &ClassificationResult) -> Result<()> {
    let io_err = |source| Error::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| Error::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let file = std::fs::File::create(path).map_err(io_err)?;
    let mut writer = std::io::BufWriter::new(file);
    JsonFormatter::new(&mut writer).write(result).map_err(io_err)?;
    writer.flush().map_err(io_err)?;
    tracing::debug!("wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
