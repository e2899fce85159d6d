use errors::{CheckError, CheckResult};

/// Result of one check against one artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Unchanged,

    /// The artifact was rewritten (or needs a manual fix).
    Rewritten {
        changed_sections: Vec<String>,
        summary: String
    }
}

impl Outcome {
    pub fn rewritten(changed_sections: Vec<String>, summary: impl Into<String>) -> Self {
        Outcome::Rewritten {
            changed_sections,
            summary: summary.into()
        }
    }

    /// Outcome of a check that reports without naming sections.
    pub fn report(summary: impl Into<String>) -> Self {
        Self::rewritten(Vec::new(), summary)
    }

    #[must_use]
    pub fn is_rewritten(&self) -> bool {
        matches!(self, Outcome::Rewritten { .. })
    }

    /// Raise the conformance signal for a rewritten artifact.
    pub fn into_result(self) -> CheckResult {
        match self {
            Outcome::Unchanged => Ok(()),
            Outcome::Rewritten { summary, .. } => Err(CheckError::non_conformant(summary))
        }
    }
}
