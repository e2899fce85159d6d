//! Documentation badges in `README.md`.

use adapters::fs::{read_optional, write_atomic};
use adapters::readme;
use config::{ConfigFile, ConfigPaths};
use errors::Defect;
use mk_core::Outcome;

/// Insert `badge` below the title. A repository without README is skipped.
pub fn add_badge(paths: &ConfigPaths, badge: &str) -> Result<Outcome, Defect> {
    let file = ConfigFile::Readme;
    let path = paths.path(file);
    let Some(text) = read_optional(&path)? else {
        tracing::warn!("No {file} found, cannot add badge");
        return Ok(Outcome::Unchanged);
    };
    let Some(updated) = readme::insert_badge(&text, badge) else {
        return Ok(Outcome::Unchanged);
    };
    write_atomic(&path, &updated)?;
    Ok(Outcome::report(format!("Inserted badge into {file}:\n  {badge}")))
}

/// Remove every badge matching `pattern`.
pub fn remove_badge(paths: &ConfigPaths, pattern: &str) -> Result<Outcome, Defect> {
    let file = ConfigFile::Readme;
    let path = paths.path(file);
    let Some(text) = read_optional(&path)? else {
        tracing::debug!("No {file} found, no badge to remove");
        return Ok(Outcome::Unchanged);
    };
    let Some(updated) = readme::remove_badge(&text, pattern)? else {
        return Ok(Outcome::Unchanged);
    };
    write_atomic(&path, &updated)?;
    Ok(Outcome::report(format!("Removed badge from {file}")))
}
