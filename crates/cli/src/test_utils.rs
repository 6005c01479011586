//! Shared unit test utilities.
//!
//! Provides common helpers for unit tests in the cli crate.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// A project file with a default package directory, a second one, and
/// fields affirm does not interpret.
pub const SAMPLE_PROJECT: &str = r#"{
  "packageDirectories": [
    { "path": "force-app", "default": true, "package": "Core" },
    { "path": "unpackaged" }
  ],
  "namespace": "",
  "sourceApiVersion": "58.0"
}
"#;

/// Creates a temp directory marked as a git root with the given sfdx-project.json.
pub fn temp_sfdx_project(content: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join(".git")).unwrap();
    fs::write(dir.path().join("sfdx-project.json"), content).unwrap();
    dir
}

/// Creates a directory tree from a list of (path, content) pairs.
///
/// Parent directories are created automatically.
pub fn create_tree(root: &Path, files: &[(&str, &str)]) {
    for (path, content) in files {
        let full_path = root.join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full_path, content).unwrap();
    }
}
