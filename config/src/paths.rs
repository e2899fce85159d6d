//! # Managed Paths
//!
//! Every file the checks read or write, resolved against one repository root.
//!
//! Reports always cite the repository-relative name (e.g. `.cspell.json`),
//! never the absolute path.

use std::path::{Path, PathBuf};

/// A configuration file the checks know about.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr, strum::EnumIter,
)]
pub enum ConfigFile {
    #[strum(serialize = ".cspell.json")]
    Cspell,

    /// Pre-dotfile name of the cspell configuration
    #[strum(serialize = "cspell.json")]
    LegacyCspell,

    #[strum(serialize = ".editorconfig")]
    EditorConfig,

    #[strum(serialize = ".pre-commit-config.yaml")]
    Precommit,

    #[strum(serialize = ".prettierignore")]
    PrettierIgnore,

    #[strum(serialize = "README.md")]
    Readme,

    #[strum(serialize = "setup.cfg")]
    SetupCfg,

    #[strum(serialize = "tox.ini")]
    Tox,

    #[strum(serialize = ".flake8")]
    Flake8,

    #[strum(serialize = ".pydocstyle")]
    Pydocstyle,

    #[strum(serialize = "pytest.ini")]
    Pytest,

    #[strum(serialize = ".vscode/extensions.json")]
    VscodeExtensions
}

impl ConfigFile {
    /// Repository-relative name of the file.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// Resolves [`ConfigFile`]s against a repository checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigPaths {
    root: PathBuf
}

impl ConfigPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn path(&self, file: ConfigFile) -> PathBuf {
        self.root.join(file.as_str())
    }

    #[must_use]
    pub fn exists(&self, file: ConfigFile) -> bool {
        self.path(file).exists()
    }
}

impl Default for ConfigPaths {
    fn default() -> Self {
        Self::new(".")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_display_matches_relative_name() {
        assert_eq!(ConfigFile::Cspell.to_string(), ".cspell.json");
        assert_eq!(ConfigFile::Precommit.as_str(), ".pre-commit-config.yaml");
        assert_eq!(
            ConfigFile::VscodeExtensions.to_string(),
            ".vscode/extensions.json"
        );
    }

    #[test]
    fn test_names_are_unique() {
        let names: std::collections::HashSet<_> = ConfigFile::iter().map(ConfigFile::as_str).collect();
        assert_eq!(names.len(), ConfigFile::iter().count());
    }

    #[test]
    fn test_path_is_rooted() {
        let paths = ConfigPaths::new("/repo");
        assert_eq!(paths.path(ConfigFile::Tox), PathBuf::from("/repo/tox.ini"));
        assert_eq!(paths.root(), Path::new("/repo"));
    }

    #[test]
    fn test_exists() {
        let dir = tempfile::tempdir().unwrap();
        let paths = ConfigPaths::new(dir.path());
        assert!(!paths.exists(ConfigFile::SetupCfg));
        std::fs::write(dir.path().join("setup.cfg"), "[metadata]\n").unwrap();
        assert!(paths.exists(ConfigFile::SetupCfg));
    }
}
