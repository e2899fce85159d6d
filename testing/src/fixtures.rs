use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

pub const CSPELL_REPO_URL: &str = "https://github.com/streetsidesoftware/cspell-cli";

/// A `.pre-commit-config.yaml` that enables the cspell hook.
pub fn precommit_with_cspell() -> String {
    format!(
        "repos:\n  - repo: {CSPELL_REPO_URL}\n    rev: v6.2.2\n    hooks:\n      - id: cspell\n"
    )
}

/// A `.pre-commit-config.yaml` without spell checking.
pub fn precommit_without_cspell() -> String {
    "repos:\n  - repo: https://github.com/psf/black\n    rev: 22.3.0\n    hooks:\n      - id: black\n"
        .to_string()
}

pub struct TestRepo {
    dir: TempDir
}

impl TestRepo {
    pub fn new() -> Self {
        let dir = match TempDir::with_prefix("repoma-") {
            Ok(dir) => dir,
            Err(e) => panic!("Failed to create scratch repository: {e}")
        };
        tracing::debug!("Created scratch repository {}", dir.path().display());
        Self { dir }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.dir.path().join(relative)
    }

    /// Write a file, creating parent directories.
    pub fn write(&self, relative: &str, contents: &str) -> &Self {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                panic!("Failed to create {}: {e}", parent.display());
            }
        }
        if let Err(e) = fs::write(&path, contents) {
            panic!("Failed to write {}: {e}", path.display());
        }
        self
    }

    pub fn read(&self, relative: &str) -> String {
        match fs::read_to_string(self.path(relative)) {
            Ok(contents) => contents,
            Err(e) => panic!("Failed to read {relative}: {e}")
        }
    }

    pub fn read_json(&self, relative: &str) -> serde_json::Value {
        match serde_json::from_str(&self.read(relative)) {
            Ok(value) => value,
            Err(e) => panic!("{relative} is not valid JSON: {e}")
        }
    }

    pub fn exists(&self, relative: &str) -> bool {
        self.path(relative).exists()
    }
}

impl Default for TestRepo {
    fn default() -> Self {
        Self::new()
    }
}
