//! Standards for `setup.cfg`.

use adapters::{IniAccessor, IniDocument};
use config::{ConfigFile, ConfigPaths, Settings};
use errors::{CheckResult, Defect};
use mk_core::{ArtifactAccessor, Executor, Outcome, sync_artifact};

use crate::editorconfig::indent;

/// Options every package has to declare, per section.
const REQUIRED_OPTIONS: [(&str, &[&str]); 2] = [
    ("metadata", &["name", "description", "license", "classifiers"]),
    ("options", &["python_requires"]),
];

/// Runs nothing when the repository has no `setup.cfg`.
pub fn main(paths: &ConfigPaths, settings: &Settings) -> CheckResult {
    if !paths.exists(ConfigFile::SetupCfg) {
        tracing::debug!("No {}, skipping", ConfigFile::SetupCfg);
        return Ok(());
    }
    let mut executor = Executor::new();
    executor.run_check(|| check_required_options(paths))?;
    if !settings.ignore_author {
        executor.run_check(|| update_author_data(paths, settings))?;
    }
    executor.run_check(|| fix_long_description(paths))?;
    executor.finalize()
}

fn display_path() -> String {
    format!("./{}", ConfigFile::SetupCfg)
}

/// Report options that are missing. Nothing is written.
pub fn check_required_options(paths: &ConfigPaths) -> Result<Outcome, Defect> {
    let document = IniAccessor::new().read(&paths.path(ConfigFile::SetupCfg))?;
    let missing = missing_options(&document);
    if missing.is_empty() {
        return Ok(Outcome::Unchanged);
    }
    let mut summary = String::from("\n");
    for (section, options) in &missing {
        summary.push_str(&format!("[{section}]\n...\n"));
        for option in options {
            summary.push_str(&format!("{option} = ...\n"));
        }
        summary.push_str("...\n");
    }
    Ok(Outcome::report(format!(
        "{} is missing the following options:\n{}",
        display_path(),
        indent(&summary, "  ")
    )))
}

fn missing_options(document: &IniDocument) -> Vec<(&'static str, Vec<&'static str>)> {
    REQUIRED_OPTIONS
        .iter()
        .filter_map(|(section, options)| {
            let missing: Vec<&str> = options
                .iter()
                .copied()
                .filter(|option| !document.has_option(section, option))
                .collect();
            (!missing.is_empty()).then_some((*section, missing))
        })
        .collect()
}

pub fn update_author_data(paths: &ConfigPaths, settings: &Settings) -> Result<Outcome, Defect> {
    let updated = sync_artifact(&IniAccessor::new(), &paths.path(ConfigFile::SetupCfg), |cfg| {
        cfg.set("metadata", "author", settings.author.name.as_str());
        cfg.set("metadata", "author_email", settings.author.email.as_str());
        Ok(())
    })?;
    Ok(match updated {
        Some(()) => Outcome::report(format!("Updated author info in {}", display_path())),
        None => Outcome::Unchanged
    })
}

/// Use the README as long description, if there is one.
pub fn fix_long_description(paths: &ConfigPaths) -> Result<Outcome, Defect> {
    if !paths.exists(ConfigFile::Readme) {
        return Ok(Outcome::Unchanged);
    }
    let updated = sync_artifact(&IniAccessor::new(), &paths.path(ConfigFile::SetupCfg), |cfg| {
        cfg.set(
            "metadata",
            "long_description",
            format!("file: {}", ConfigFile::Readme)
        );
        cfg.set("metadata", "long_description_content_type", "text/markdown");
        Ok(())
    })?;
    Ok(match updated {
        Some(()) => Outcome::report(format!("Updated long_description in {}", display_path())),
        None => Outcome::Unchanged
    })
}

/// The `[metadata] name` of the package, if declared.
pub fn package_name(paths: &ConfigPaths) -> Result<Option<String>, Defect> {
    let path = paths.path(ConfigFile::SetupCfg);
    if !path.exists() {
        return Ok(None);
    }
    let document = IniAccessor::new().read(&path)?;
    Ok(document.get("metadata", "name").map(str::to_string))
}
