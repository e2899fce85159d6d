//! set-nb-cells command
//!
//! Notebook servers like Google Colaboratory do not install the package
//! automatically, so an install cell is needed that stays hidden on the
//! documentation pages. Notebooks opt out with a `<!-- no-set-nb-cells -->`
//! comment in a Markdown cell.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Result;
use checks::NotebookCellOptions;
use clap::Args;
use config::ConfigPaths;

#[derive(Args)]
pub struct SetNbCellsArgs {
    /// Notebooks to check
    #[arg(value_name = "FILES")]
    pub files: Vec<PathBuf>,

    /// Add notebook cell with pip install statement
    #[arg(long)]
    pub add_install_cell: bool,

    /// Comma-separated list of optional dependencies, e.g. doc,viz
    #[arg(long, value_name = "EXTRAS")]
    pub extras_require: Option<String>,

    /// Comma-separated list of packages that should be installed with pip
    #[arg(long, value_name = "PACKAGES", value_delimiter = ',')]
    pub additional_packages: Vec<String>,

    /// Do not add a cell with an autolink-concat directive
    #[arg(long)]
    pub no_autolink_concat: bool,

    /// Do not add the configuration cell
    #[arg(long)]
    pub no_config_cell: bool
}

impl SetNbCellsArgs {
    fn options(&self) -> NotebookCellOptions {
        NotebookCellOptions {
            add_install_cell: self.add_install_cell,
            extras_require: self.extras_require.clone(),
            additional_packages: self.additional_packages.clone(),
            no_autolink_concat: self.no_autolink_concat,
            no_config_cell: self.no_config_cell
        }
    }
}

pub fn run(root: &Path, args: SetNbCellsArgs) -> Result<ExitCode> {
    if args.files.is_empty() {
        tracing::debug!("No notebooks given");
        return Ok(ExitCode::SUCCESS);
    }
    let paths = ConfigPaths::new(root);
    super::exit_code(checks::set_nb_cells(&paths, &args.files, &args.options()))
}
