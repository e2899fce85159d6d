//! # Executor
//!
//! Runs check steps without short-circuiting and merges their
//! non-conformance messages into one report.

use errors::{CheckError, CheckResult, Defect, NonConformant};

use crate::outcome::Outcome;

/// Separator between the messages of a merged report.
const MESSAGE_SEPARATOR: &str = "\n\n";

/// Collects [`NonConformant`] messages of the steps it runs.
///
/// Defects are not collected: [`Executor::run`] hands them straight back to
/// the caller, which is expected to propagate them with `?`.
///
/// ## Usage
/// ```rust
/// use errors::{CheckError, CheckResult};
/// use mk_core::Executor;
///
/// fn run() -> CheckResult {
///     let mut executor = Executor::new();
///     executor.run(|| Err(CheckError::non_conformant("first")))?;
///     executor.run(|| Ok(()))?;
///     executor.run(|| Err(CheckError::non_conformant("second")))?;
///     executor.finalize()
/// }
///
/// let err = run().unwrap_err();
/// assert_eq!(err.to_string(), "first\n\nsecond");
/// ```
#[derive(Debug, Default)]
pub struct Executor {
    error_messages: Vec<String>
}

impl Executor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run one step, capturing its conformance signal.
    pub fn run<F>(&mut self, step: F) -> Result<(), Defect>
    where
        F: FnOnce() -> CheckResult
    {
        match step() {
            Ok(()) => Ok(()),
            Err(CheckError::NonConformant(signal)) => {
                tracing::debug!("Captured non-conformance: {}", signal.message());
                self.error_messages.push(signal.into_message());
                Ok(())
            }
            Err(CheckError::Defect(defect)) => Err(defect)
        }
    }

    /// Run a step that reports through an [`Outcome`].
    pub fn run_check<F>(&mut self, check: F) -> Result<(), Defect>
    where
        F: FnOnce() -> Result<Outcome, Defect>
    {
        self.run(|| check()?.into_result())
    }

    #[must_use]
    pub fn error_messages(&self) -> &[String] {
        &self.error_messages
    }

    #[must_use]
    pub fn is_conformant(&self) -> bool {
        self.error_messages.is_empty()
    }

    /// All captured messages joined by blank lines, in step order.
    #[must_use]
    pub fn merge_messages(&self) -> String {
        self.error_messages
            .iter()
            .map(|message| message.trim_end_matches('\n'))
            .collect::<Vec<_>>()
            .join(MESSAGE_SEPARATOR)
    }

    /// Raise one combined report if any step was non-conformant.
    pub fn finalize(self) -> CheckResult {
        if self.is_conformant() {
            return Ok(());
        }
        Err(NonConformant::new(self.merge_messages()).into())
    }

    /// Run every step in order and raise the combined report.
    pub fn run_all<'a, I>(steps: I) -> CheckResult
    where
        I: IntoIterator<Item = Box<dyn FnOnce() -> CheckResult + 'a>>
    {
        let mut executor = Self::new();
        for step in steps {
            executor.run(step)?;
        }
        executor.finalize()
    }
}
