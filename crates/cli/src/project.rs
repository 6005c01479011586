// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Salesforce DX project file handling.
//!
//! Only `packageDirectories[].path` and `packageDirectories[].default` are
//! interpreted; every other field is carried through unchanged on save.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::discovery;
use crate::error::{Error, Result};

/// Temporary package directory used while assembling a release.
pub const RELEASE_PATH: &str = ".releaseArtifacts/tempParcel/force-app";

/// Same entry as written on Windows.
const RELEASE_PATH_WINDOWS: &str = ".releaseArtifacts\\tempParcel\\force-app";

/// One `packageDirectories` entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageDirectory {
    pub path: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<bool>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PackageDirectory {
    fn is_default(&self) -> bool {
        self.default == Some(true)
    }

    fn is_release_path(&self) -> bool {
        self.path == RELEASE_PATH || self.path == RELEASE_PATH_WINDOWS
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProjectJson {
    #[serde(default)]
    package_directories: Vec<PackageDirectory>,

    #[serde(flatten)]
    extra: Map<String, Value>,
}

/// A loaded sfdx-project.json.
#[derive(Debug, Clone)]
pub struct SfdxProject {
    path: PathBuf,
    json: ProjectJson,
}

impl SfdxProject {
    /// Load a project file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let json = serde_json::from_str(&content).map_err(|e| Error::Project {
            message: format!("invalid {}: {}", discovery::PROJECT_FILE_NAME, e),
            path: Some(path.to_path_buf()),
        })?;
        Ok(Self {
            path: path.to_path_buf(),
            json,
        })
    }

    /// Find and load the project file governing `start_dir`.
    pub fn discover(start_dir: &Path) -> Result<Self> {
        let path = discovery::find_project_file(start_dir).ok_or_else(|| Error::Project {
            message: format!(
                "{} not found in {} or its parents",
                discovery::PROJECT_FILE_NAME,
                start_dir.display()
            ),
            path: None,
        })?;
        tracing::debug!("loading project from {}", path.display());
        Self::load(&path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory containing the project file.
    pub fn root(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new("."))
    }

    pub fn package_directories(&self) -> &[PackageDirectory] {
        &self.json.package_directories
    }

    /// Path of the default package directory.
    pub fn default_path(&self) -> Result<&str> {
        self.json
            .package_directories
            .iter()
            .find(|dir| dir.is_default())
            .map(|dir| dir.path.as_str())
            .ok_or_else(|| Error::Project {
                message: "no default package directory".to_string(),
                path: Some(self.path.clone()),
            })
    }

    /// Whether `path` is one of the project's package directories.
    pub fn is_package_path(&self, path: &str) -> bool {
        self.json.package_directories.iter().any(|dir| dir.path == path)
    }

    /// Fail unless `path` is one of the project's package directories.
    pub fn ensure_package_path(&self, path: &str) -> Result<()> {
        if self.is_package_path(path) {
            Ok(())
        } else {
            Err(Error::Project {
                message: format!("{} is not a package directory of this project", path),
                path: Some(self.path.clone()),
            })
        }
    }

    pub fn has_release_path(&self) -> bool {
        self.json
            .package_directories
            .iter()
            .any(PackageDirectory::is_release_path)
    }

    /// Add the temporary release package directory and save.
    ///
    /// Returns false (and leaves the file untouched) when it is already present.
    pub fn add_release_path(&mut self) -> Result<bool> {
        if self.has_release_path() {
            return Ok(false);
        }
        self.json.package_directories.push(PackageDirectory {
            path: RELEASE_PATH.to_string(),
            default: Some(false),
            extra: Map::new(),
        });
        self.save()?;
        Ok(true)
    }

    /// Remove every temporary release package directory and save.
    ///
    /// Returns the number of entries removed.
    pub fn remove_release_path(&mut self) -> Result<usize> {
        let before = self.json.package_directories.len();
        self.json
            .package_directories
            .retain(|dir| !dir.is_release_path());
        let removed = before - self.json.package_directories.len();
        if removed > 0 {
            self.save()?;
        }
        Ok(removed)
    }

    /// Write the project file back to disk.
    pub fn save(&self) -> Result<()> {
        let mut content = serde_json::to_string_pretty(&self.json)
            .map_err(|e| Error::Internal(format!("failed to serialize project: {}", e)))?;
        content.push('\n');
        std::fs::write(&self.path, content).map_err(|e| Error::Io {
            path: self.path.clone(),
            source: e,
        })
    }
}

#[cfg(test)]
#[path = "project_tests.rs"]
mod tests;
