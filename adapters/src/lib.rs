//! # Artifact Adapters
//!
//! Readers and writers for every file format the checks touch. Each adapter
//! exposes the file as an in-memory state; accessors implementing
//! [`mk_core::ArtifactAccessor`] plug into [`mk_core::sync_artifact`].
//!
//! | Module | Artifact |
//! |--------|----------|
//! | [`json`] | `.cspell.json`, `.vscode/extensions.json` |
//! | [`ini`] | `setup.cfg`, `tox.ini`, `.editorconfig`, `.flake8`, ... |
//! | [`lines`] | `.prettierignore` |
//! | [`precommit`] | `.pre-commit-config.yaml` |
//! | [`readme`] | `README.md` badges |
//! | [`vscode`] | extension recommendations |
//! | [`notebook`] | Jupyter notebooks |
//!
//! All writes go through [`fs::write_atomic`].

pub mod fs;
pub mod ini;
pub mod json;
pub mod lines;
pub mod notebook;
pub mod precommit;
pub mod readme;
pub mod vscode;

pub use ini::{IniAccessor, IniDocument, IniSection};
pub use json::JsonAccessor;
pub use lines::LinesAccessor;
pub use notebook::{Notebook, NotebookAccessor};
pub use precommit::{Hook, PrecommitConfig, Repo};

use errors::Defect;
use regex::Regex;

/// Compile a regular expression, reporting a bad pattern as a defect.
pub fn compile_pattern(pattern: &str) -> Result<Regex, Defect> {
    Regex::new(pattern).map_err(|e| Defect::Pattern {
        pattern: pattern.to_string(),
        reason: e.to_string()
    })
}
