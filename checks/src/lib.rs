//! # Conformance Drivers
//!
//! One module per artifact family. Every driver wires accessors, checks and
//! an [`Executor`] together and returns a [`CheckResult`]:
//! - `Ok(())`: the repository was already conformant
//! - `Err(CheckError::NonConformant)`: files were rewritten, or need a manual
//!   fix; the message says which
//! - `Err(CheckError::Defect)`: the run was aborted
//!
//! [`check_dev_files`] runs the drivers the way the pre-commit hook does.
//!
//! [`CheckError::NonConformant`]: errors::CheckError::NonConformant
//! [`CheckError::Defect`]: errors::CheckError::Defect

pub mod badge;
pub mod cspell;
pub mod editorconfig;
pub mod notebook;
pub mod prettier;
pub mod setup_cfg;
pub mod tox;
pub mod vscode;

use config::{ConfigPaths, Settings, Template};
use errors::CheckResult;
use mk_core::Executor;

pub use notebook::{NotebookCellOptions, set_nb_cells};

/// Which drivers [`check_dev_files`] runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DevFileChecks {
    pub cspell: bool,
    pub setup_cfg: bool,
    pub tox: bool
}

impl Default for DevFileChecks {
    fn default() -> Self {
        Self {
            cspell: true,
            setup_cfg: true,
            tox: true
        }
    }
}

/// Run every selected driver and raise one combined report.
///
/// The cspell template is loaded once here and handed to the driver.
pub fn check_dev_files(paths: &ConfigPaths, settings: &Settings, selection: DevFileChecks) -> CheckResult {
    let mut executor = Executor::new();
    if selection.cspell {
        let template = Template::load(settings.cspell_template.as_deref())?;
        executor.run(|| cspell::main(paths, &template))?;
    }
    if selection.setup_cfg {
        executor.run(|| setup_cfg::main(paths, settings))?;
    }
    if selection.tox {
        executor.run(|| tox::main(paths))?;
    }
    executor.finalize()
}
