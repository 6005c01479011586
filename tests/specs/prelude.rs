//! Test helpers for behavioral specifications.
//!
//! Provides a small DSL for testing affirm CLI behavior.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::{Predicate, PredicateBooleanExt};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Trait for converting into a string predicate.
/// Allows passing `&str` (as contains) or any `Predicate<str>`.
pub trait IntoStrPredicate<P: Predicate<str>> {
    fn into_predicate(self) -> P;
}

impl IntoStrPredicate<predicates::str::ContainsPredicate> for &str {
    fn into_predicate(self) -> predicates::str::ContainsPredicate {
        predicates::str::contains(self)
    }
}

impl<P: Predicate<str>> IntoStrPredicate<P> for P {
    fn into_predicate(self) -> P {
        self
    }
}

/// Returns a Command configured to run the affirm binary
pub fn affirm_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("affirm"));
    cmd.env_remove("AFFIRM_CONFIG")
        .env_remove("AFFIRM_LOG")
        .env_remove("COLOR")
        .env_remove("NO_COLOR");
    cmd
}

/// Create a builder for `affirm <subcommand>`
pub fn affirm(subcommand: &str) -> CmdBuilder {
    CmdBuilder {
        args: vec![subcommand.to_string()],
        dir: None,
        envs: Vec::new(),
    }
}

/// Command builder for fluent test assertions
pub struct CmdBuilder {
    args: Vec<String>,
    dir: Option<PathBuf>,
    envs: Vec<(String, String)>,
}

#[allow(dead_code)]
impl CmdBuilder {
    /// Set working directory
    pub fn pwd(mut self, path: impl Into<PathBuf>) -> Self {
        self.dir = Some(path.into());
        self
    }

    /// Add CLI arguments
    pub fn args(mut self, args: &[&str]) -> Self {
        self.args.extend(args.iter().map(|s| s.to_string()));
        self
    }

    /// Set environment variable
    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.envs.push((key.to_string(), value.to_string()));
        self
    }

    pub fn passes(self) -> RunAssert {
        run_exits(self.command(), 0)
    }

    pub fn exits(self, code: i32) -> RunAssert {
        run_exits(self.command(), code)
    }

    fn command(self) -> Command {
        let mut cmd = affirm_cmd();
        cmd.args(&self.args);
        if let Some(dir) = self.dir {
            cmd.current_dir(dir);
        }
        for (key, value) in &self.envs {
            cmd.env(key, value);
        }
        cmd
    }
}

fn run_exits(mut cmd: Command, code: i32) -> RunAssert {
    let output = cmd.output().expect("command should run");
    assert_eq!(
        output.status.code(),
        Some(code),
        "expected exit code {}\nstdout:\n{}\nstderr:\n{}",
        code,
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    RunAssert { output }
}

/// Result of a run for chaining assertions
pub struct RunAssert {
    output: std::process::Output,
}

#[allow(dead_code)]
impl RunAssert {
    /// Get stdout as string
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    /// Get stderr as string
    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    /// Assert stdout equals expected (with diff on failure)
    pub fn stdout_eq(self, expected: &str) -> Self {
        let stdout = String::from_utf8_lossy(&self.output.stdout);
        similar_asserts::assert_eq!(stdout, expected);
        self
    }

    /// Assert stdout matches predicate.
    /// Prefer `stdout_eq` for strict matching.
    pub fn stdout_has<I, P>(self, predicate: I) -> Self
    where
        I: IntoStrPredicate<P>,
        P: Predicate<str>,
    {
        let stdout = String::from_utf8_lossy(&self.output.stdout);
        assert!(
            predicate.into_predicate().eval(&stdout),
            "stdout predicate failed:\n{}",
            stdout
        );
        self
    }

    /// Assert stdout does not match predicate.
    pub fn stdout_lacks<I, P>(self, predicate: I) -> Self
    where
        I: IntoStrPredicate<P>,
        P: Predicate<str>,
    {
        let stdout = String::from_utf8_lossy(&self.output.stdout);
        assert!(
            !predicate.into_predicate().eval(&stdout),
            "stdout should NOT match predicate:\n{}",
            stdout
        );
        self
    }

    /// Assert stderr matches predicate.
    pub fn stderr_has<I, P>(self, predicate: I) -> Self
    where
        I: IntoStrPredicate<P>,
        P: Predicate<str>,
    {
        let stderr = String::from_utf8_lossy(&self.output.stderr);
        assert!(
            predicate.into_predicate().eval(&stderr),
            "stderr predicate failed:\n{}",
            stderr
        );
        self
    }

    /// Assert stderr does not match predicate.
    pub fn stderr_lacks<I, P>(self, predicate: I) -> Self
    where
        I: IntoStrPredicate<P>,
        P: Predicate<str>,
    {
        let stderr = String::from_utf8_lossy(&self.output.stderr);
        assert!(
            !predicate.into_predicate().eval(&stderr),
            "stderr should NOT match predicate:\n{}",
            stderr
        );
        self
    }
}

// =============================================================================
// Project
// =============================================================================

/// A project file with `force-app` as the default package directory.
pub const SFDX_PROJECT: &str = r#"{
  "packageDirectories": [
    { "path": "force-app", "default": true }
  ],
  "namespace": "",
  "sourceApiVersion": "58.0"
}
"#;

/// Temporary Salesforce DX project directory with helper methods.
///
/// ```ignore
/// let temp = Project::sfdx();
/// temp.config("[changes]\ndirectory = \"src\"");
/// affirm("changes").pwd(temp.path()).passes();
/// ```
pub struct Project {
    dir: tempfile::TempDir,
}

#[allow(dead_code)]
impl Project {
    /// Create an empty project with no files
    pub fn empty() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    /// Create a project with an sfdx-project.json
    pub fn sfdx() -> Self {
        let temp = Self::empty();
        temp.file("sfdx-project.json", SFDX_PROJECT);
        temp
    }

    /// Get the project path
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write affirm.toml (auto-prefixes with `version = 1` if not present)
    pub fn config(&self, content: &str) {
        let content = if content.contains("version") {
            content.to_string()
        } else {
            format!("version = 1\n{}", content)
        };
        std::fs::write(self.dir.path().join("affirm.toml"), content).unwrap();
    }

    /// Write a file at the given path (parent directories created automatically)
    pub fn file(&self, path: impl AsRef<Path>, content: &str) {
        let full_path = self.dir.path().join(path.as_ref());
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(full_path, content).unwrap();
    }

    /// Read a file relative to the project root
    pub fn read(&self, path: impl AsRef<Path>) -> String {
        std::fs::read_to_string(self.dir.path().join(path.as_ref())).unwrap()
    }

    /// Parse sfdx-project.json
    pub fn project_json(&self) -> serde_json::Value {
        serde_json::from_str(&self.read("sfdx-project.json")).unwrap()
    }
}

// =============================================================================
// GIT TEST HELPERS
// =============================================================================

/// Run git in the project, asserting success
pub fn git(project: &Project, args: &[&str]) {
    let output = std::process::Command::new("git")
        .args(args)
        .current_dir(project.path())
        .output()
        .expect("git should run");
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
}

/// Initialize a git repo with minimal config
pub fn git_init(project: &Project) {
    git(project, &["init", "-b", "main"]);
    git(project, &["config", "user.email", "test@example.com"]);
    git(project, &["config", "user.name", "Test User"]);
}

/// Stage everything and commit
pub fn git_commit_all(project: &Project, message: &str) {
    git(project, &["add", "-A"]);
    git(project, &["commit", "-m", message]);
}

/// Create and check out a branch
pub fn git_branch(project: &Project, name: &str) {
    git(project, &["checkout", "-b", name]);
}

const CLASS_BODY: &str = "public class Renamed {\n    public Integer a;\n    public Integer b;\n    public Integer c;\n}\n";

/// Project whose working tree differs from the `base` tag by one edit,
/// one rename, one deletion, and one new file under `force-app/`, plus
/// an edit outside it.
pub fn project_with_changes() -> Project {
    let temp = Project::sfdx();
    git_init(&temp);
    temp.file("force-app/A.cls", "one\ntwo\n");
    temp.file("force-app/B.cls", CLASS_BODY);
    temp.file("force-app/D.cls", "gone\n");
    temp.file("docs/README.md", "# Docs\n");
    git_commit_all(&temp, "feat: initial commit");
    git(&temp, &["tag", "base"]);

    temp.file("force-app/A.cls", "one\n2\n");
    git(&temp, &["mv", "force-app/B.cls", "force-app/C.cls"]);
    git(&temp, &["rm", "-q", "force-app/D.cls"]);
    temp.file("force-app/New.cls", "new\n");
    git(&temp, &["add", "force-app/New.cls"]);
    temp.file("docs/README.md", "# Docs\nmore\n");
    temp
}
