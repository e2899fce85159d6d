pub mod check_dev_files;
pub mod completion;
pub mod set_nb_cells;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use errors::{CheckError, CheckResult};

use crate::output;

#[derive(Parser)]
#[command(
    name = "repoma",
    author,
    version,
    about = "Keep development-tooling configuration in canonical form",
    long_about = "Pre-commit hooks that rewrite configuration files into canonical form.\n\nExit \
                  code 0 means everything was conformant, 1 means files were rewritten (stage \
                  them and commit again) and 2 means the run was aborted."
)]
pub struct Cli {
    /// Repository root the managed files are resolved against
    #[arg(long, global = true, default_value = ".", env = "REPOMA_ROOT")]
    pub root: PathBuf,

    #[command(subcommand)]
    pub command: Commands
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Check and fix cSpell, setup.cfg and tox.ini configuration")]
    CheckDevFiles(check_dev_files::CheckDevFilesArgs),

    #[command(about = "Add or update standard cells in Jupyter notebooks")]
    SetNbCells(set_nb_cells::SetNbCellsArgs),

    #[command(about = "Generate shell completions")]
    Completion(completion::CompletionArgs)
}

/// Turn the outcome of a conformance run into an exit code.
///
/// Defects are handed back as errors so that `main` can print the cause
/// chain.
pub fn exit_code(result: CheckResult) -> Result<ExitCode> {
    match result {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(CheckError::NonConformant(signal)) => {
            output::non_conformant(signal.message());
            Ok(ExitCode::FAILURE)
        }
        Err(CheckError::Defect(defect)) => Err(defect.into())
    }
}
