//! check-dev-files command
//!
//! Runs the cSpell, setup.cfg and tox.ini drivers against one repository and
//! reports everything they rewrote in one message.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use checks::DevFileChecks;
use clap::Args;
use config::{AuthorOverlay, ConfigPaths, SettingsOverlay};

use crate::output;

#[derive(Args)]
pub struct CheckDevFilesArgs {
    /// Do not enforce author info in setup.cfg
    #[arg(long)]
    pub ignore_author: bool,

    /// Skip the cSpell checks
    #[arg(long)]
    pub no_cspell: bool,

    /// Skip the setup.cfg checks
    #[arg(long)]
    pub no_setup_cfg: bool,

    /// Skip the tox.ini checks
    #[arg(long)]
    pub no_tox: bool,

    /// Settings file to use instead of .repoma.toml / .repoma.yaml
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Author name enforced in setup.cfg
    #[arg(long)]
    pub author_name: Option<String>,

    /// Author email enforced in setup.cfg
    #[arg(long)]
    pub author_email: Option<String>,

    /// Alternative canonical .cspell.json
    #[arg(long, value_name = "FILE")]
    pub cspell_template: Option<PathBuf>
}

impl CheckDevFilesArgs {
    fn selection(&self) -> DevFileChecks {
        DevFileChecks {
            cspell: !self.no_cspell,
            setup_cfg: !self.no_setup_cfg,
            tox: !self.no_tox
        }
    }

    fn overlay(&self) -> SettingsOverlay {
        SettingsOverlay {
            author: AuthorOverlay {
                name: self.author_name.clone(),
                email: self.author_email.clone()
            },
            cspell_template: self.cspell_template.clone(),
            ignore_author: self.ignore_author.then_some(true)
        }
    }
}

pub fn run(root: &Path, args: CheckDevFilesArgs) -> Result<ExitCode> {
    let selection = args.selection();
    if selection == (DevFileChecks {
        cspell: false,
        setup_cfg: false,
        tox: false
    }) {
        output::warn("All checks are disabled, nothing to do");
        return Ok(ExitCode::SUCCESS);
    }

    let settings = config::load_settings(root, args.config.as_deref(), args.overlay())
        .context("Failed to load settings")?;
    tracing::debug!(?settings, "Resolved settings");

    let paths = ConfigPaths::new(root);
    super::exit_code(checks::check_dev_files(&paths, &settings, selection))
}
