//! Move tool configuration out of `tox.ini` into dedicated files.

use adapters::IniAccessor;
use config::{ConfigFile, ConfigPaths};
use errors::{CheckResult, Defect};
use mk_core::{ArtifactAccessor, Executor, Outcome};
use utils::express_list_of_sections;

/// Destination file for each group of `tox.ini` sections.
const EXTRACTIONS: [(ConfigFile, &[&str]); 3] = [
    (ConfigFile::Flake8, &["flake8"]),
    (ConfigFile::Pydocstyle, &["pydocstyle"]),
    (ConfigFile::Pytest, &["coverage:run", "pytest"]),
];

pub fn main(paths: &ConfigPaths) -> CheckResult {
    if !paths.exists(ConfigFile::Tox) {
        tracing::debug!("No {}, skipping", ConfigFile::Tox);
        return Ok(());
    }
    let steps = EXTRACTIONS.into_iter().map(|(destination, sections)| {
        Box::new(move || extract_sections(paths, ConfigFile::Tox, destination, sections)?.into_result())
            as Box<dyn FnOnce() -> CheckResult + '_>
    });
    Executor::run_all(steps)
}

/// Move `sections` from `source` to `destination`.
///
/// Moved sections replace same-named sections in the destination. The
/// destination is written before the source, so a failure in between leaves
/// the configuration duplicated rather than lost.
pub fn extract_sections(
    paths: &ConfigPaths,
    source: ConfigFile,
    destination: ConfigFile,
    sections: &[&str]
) -> Result<Outcome, Defect> {
    let accessor = IniAccessor::new();
    let source_path = paths.path(source);
    let mut from = accessor.read(&source_path)?;

    let moved: Vec<_> = sections
        .iter()
        .filter_map(|section| from.remove_section(section))
        .collect();
    if moved.is_empty() {
        return Ok(Outcome::Unchanged);
    }

    let destination_path = paths.path(destination);
    let mut to = accessor.read(&destination_path)?;
    let names: Vec<String> = moved
        .iter()
        .map(|section| format!("[{}]", section.name()))
        .collect();
    for section in moved {
        to.upsert_section(section);
    }
    accessor.write(&destination_path, &to)?;
    accessor.write(&source_path, &from)?;
    tracing::info!("Moved {} from {source} to {destination}", names.join(", "));

    let verb = if names.len() == 1 { "has" } else { "have" };
    Ok(Outcome::rewritten(
        names.clone(),
        format!(
            "{} of {source} {verb} been moved to {destination}",
            express_list_of_sections(&names)
        )
    ))
}
