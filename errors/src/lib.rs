//! # Repoma Errors
//!
//! Error vocabulary shared by every conformance check.
//!
//! Two tiers:
//! - [`NonConformant`]: a check rewrote an artifact (or needs the user to do
//!   so). Expected, fixed by re-staging and re-running.
//! - [`Defect`]: the tool or a repository file is broken. Never folded into a
//!   report; it aborts the run.

use std::path::Path;

use thiserror::Error;

/// Conformance signal raised at the check boundary.
///
/// The message is human readable and may span several lines.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct NonConformant {
    message: String
}

impl NonConformant {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into()
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn into_message(self) -> String {
        self.message
    }
}

/// Unrecoverable problems that abort the whole run
#[derive(Debug, Error)]
pub enum Defect {
    #[error("Canonical template {path} is unusable: {reason}")]
    Template { path: String, reason: String },

    #[error("No implementation for section content of type {kind} (section: \"{section}\")")]
    UnsupportedSection { section: String, kind: String },

    #[error("Failed to parse {path}: {reason}")]
    Parse { path: String, reason: String },

    #[error("I/O on {path} failed: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error
    },

    #[error("Invalid pattern {pattern}: {reason}")]
    Pattern { pattern: String, reason: String },

    #[error("Invalid settings: {reason}")]
    Settings { reason: String }
}

impl Defect {
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        Defect::Io {
            path: path.display().to_string(),
            source
        }
    }

    pub fn parse(path: &Path, reason: impl ToString) -> Self {
        Defect::Parse {
            path: path.display().to_string(),
            reason: reason.to_string()
        }
    }

    pub fn template(path: impl Into<String>, reason: impl ToString) -> Self {
        Defect::Template {
            path: path.into(),
            reason: reason.to_string()
        }
    }
}

/// What a single check step can end with.
#[derive(Debug, Error)]
pub enum CheckError {
    #[error(transparent)]
    NonConformant(#[from] NonConformant),

    #[error(transparent)]
    Defect(#[from] Defect)
}

impl CheckError {
    /// Shorthand for raising the conformance signal.
    pub fn non_conformant(message: impl Into<String>) -> Self {
        CheckError::NonConformant(NonConformant::new(message))
    }
}

pub type CheckResult = Result<(), CheckError>;
