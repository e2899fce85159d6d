//! VS Code extension recommendations.

use adapters::JsonAccessor;
use adapters::vscode::{add_recommendation, remove_recommendation};
use config::{ConfigFile, ConfigPaths};
use errors::Defect;
use mk_core::{Outcome, sync_artifact};

/// VS Code writes its settings files with two-space indentation.
const VSCODE_INDENT: usize = 2;

pub fn add_extension_recommendation(paths: &ConfigPaths, extension: &str) -> Result<Outcome, Defect> {
    let file = ConfigFile::VscodeExtensions;
    let accessor = JsonAccessor::new(VSCODE_INDENT);
    let added = sync_artifact(&accessor, &paths.path(file), |config| {
        add_recommendation(config, extension)
    })?;
    Ok(match added {
        Some(_) => Outcome::report(format!(
            "Added VS Code extension recommendation \"{extension}\" to {file}"
        )),
        None => Outcome::Unchanged
    })
}

pub fn remove_extension_recommendation(
    paths: &ConfigPaths,
    extension: &str
) -> Result<Outcome, Defect> {
    let file = ConfigFile::VscodeExtensions;
    let accessor = JsonAccessor::new(VSCODE_INDENT);
    let removed = sync_artifact(&accessor, &paths.path(file), |config| {
        remove_recommendation(config, extension)
    })?;
    Ok(match removed {
        Some(_) => Outcome::report(format!(
            "Removed VS Code extension recommendation \"{extension}\" from {file}"
        )),
        None => Outcome::Unchanged
    })
}
