//! Entries in `.prettierignore`.

use adapters::LinesAccessor;
use adapters::lines::{ensure_line, remove_line};
use config::{ConfigFile, ConfigPaths};
use errors::Defect;
use mk_core::{Outcome, sync_artifact};

/// Make sure `entry` is listed. A missing ignore file is created.
pub fn add_ignore_entry(paths: &ConfigPaths, entry: ConfigFile) -> Result<Outcome, Defect> {
    let ignore_file = ConfigFile::PrettierIgnore;
    let added = sync_artifact(&LinesAccessor, &paths.path(ignore_file), |lines| {
        Ok(ensure_line(lines, entry.as_str()))
    })?;
    Ok(match added {
        Some(_) => Outcome::report(format!("Added \"{entry}\" to {ignore_file}")),
        None => Outcome::Unchanged
    })
}

/// Drop `entry` from the ignore file, if listed.
pub fn remove_ignore_entry(paths: &ConfigPaths, entry: ConfigFile) -> Result<Outcome, Defect> {
    let ignore_file = ConfigFile::PrettierIgnore;
    let removed = sync_artifact(&LinesAccessor, &paths.path(ignore_file), |lines| {
        Ok(remove_line(lines, entry.as_str()))
    })?;
    Ok(match removed {
        Some(_) => Outcome::report(format!(
            "\"{entry}\" in {ignore_file} is no longer required and has been removed"
        )),
        None => Outcome::Unchanged
    })
}
