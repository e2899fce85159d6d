//! # cSpell Driver
//!
//! Keeps `.cspell.json` and everything around it in line with the canonical
//! template. Whether cSpell is in use is decided once per run from
//! `.pre-commit-config.yaml`:
//!
//! - **configured**: hook shape, config content, sorting, `.editorconfig`,
//!   `.prettierignore`, README badge and VS Code recommendation are checked
//! - **unconfigured**: the config file, the ignore entry, the badge and the
//!   recommendation are cleaned up
//!
//! A legacy `cspell.json` is renamed first. A hook pointing at the old mirror
//! repository is migrated next, and that step ends the run because the
//! decision above depends on it.

use adapters::JsonAccessor;
use adapters::fs::{remove_file, rename_file, write_atomic};
use adapters::precommit::{PrecommitConfig, Repo};
use config::{ConfigFile, ConfigPaths, Template};
use errors::{CheckError, CheckResult, Defect};
use mk_core::{Executor, Outcome, merge_with_template, sort_list_sections, sync_artifact};
use utils::{express_list_of_sections, quote};

use crate::{badge, editorconfig, prettier, vscode};

pub const REPO_URL: &str = "https://github.com/streetsidesoftware/cspell-cli";
pub const VSCODE_EXTENSION: &str = "streetsidesoftware.code-spell-checker";
pub const BADGE: &str = "[![Spelling checked](https://img.shields.io/badge/cspell-checked-brightgreen.svg)](https://github.com/streetsidesoftware/cspell/tree/master/packages/cspell)";
pub const BADGE_PATTERN: &str = r"\[\!\[[Ss]pelling.*\]\(.*cspell.*\)\]\(.*cspell.*\)\n?";

/// Sections that collect project-specific entries and are never overwritten.
pub const ACCUMULATOR_SECTIONS: [&str; 2] = ["words", "ignoreWords"];

/// Repo URLs the hook used to be published under.
const OLD_REPO_PATTERNS: [&str; 1] = [r".*/mirrors-cspell(.git)?$"];

const CSPELL_JSON_INDENT: usize = 4;

pub fn main(paths: &ConfigPaths, template: &Template) -> CheckResult {
    let mut executor = Executor::new();
    executor.run_check(|| rename_legacy_config(paths))?;
    if let Err(signal) = update_repo_url(paths) {
        executor.run(|| Err(signal))?;
        return executor.finalize();
    }

    let precommit = PrecommitConfig::load(&paths.path(ConfigFile::Precommit))?;
    match precommit.find_repo(REPO_URL)? {
        None => {
            tracing::debug!("cSpell is not configured, cleaning up");
            executor.run_check(|| remove_config_file(paths))?;
            executor.run_check(|| prettier::remove_ignore_entry(paths, ConfigFile::Cspell))?;
            executor.run_check(|| badge::remove_badge(paths, BADGE_PATTERN))?;
            executor.run_check(|| vscode::remove_extension_recommendation(paths, VSCODE_EXTENSION))?;
        }
        Some(repo) => {
            tracing::debug!("cSpell is configured through {}", repo.url);
            executor.run_check(|| Ok(check_hook_options(repo)))?;
            executor.run_check(|| fix_config_content(paths, template))?;
            executor.run_check(|| sort_config_entries(paths))?;
            executor.run_check(|| {
                editorconfig::check_section(
                    paths,
                    ConfigFile::Cspell.as_str(),
                    &[("indent_size", "4")]
                )
            })?;
            executor.run_check(|| prettier::add_ignore_entry(paths, ConfigFile::Cspell))?;
            executor.run_check(|| badge::add_badge(paths, BADGE))?;
            executor.run_check(|| vscode::add_extension_recommendation(paths, VSCODE_EXTENSION))?;
        }
    }
    executor.finalize()
}

/// Move `cspell.json` to `.cspell.json`, never over an existing file.
pub fn rename_legacy_config(paths: &ConfigPaths) -> Result<Outcome, Defect> {
    let (legacy, file) = (ConfigFile::LegacyCspell, ConfigFile::Cspell);
    if paths.exists(legacy) && paths.exists(file) {
        return Ok(Outcome::report(format!(
            "Both {legacy} and {file} exist. Merge {legacy} into {file} and remove it"
        )));
    }
    if !rename_file(&paths.path(legacy), &paths.path(file))? {
        return Ok(Outcome::Unchanged);
    }
    Ok(Outcome::report(format!("File {legacy} has been renamed to {file}")))
}

/// Point hooks using an old mirror at the current repository.
pub fn update_repo_url(paths: &ConfigPaths) -> CheckResult {
    let file = ConfigFile::Precommit;
    let path = paths.path(file);
    let precommit = PrecommitConfig::load(&path)?;
    for pattern in OLD_REPO_PATTERNS {
        let Some(index) = precommit.get_repo_index(pattern)? else {
            continue;
        };
        let Some(updated) = precommit.with_repo_url(index, REPO_URL)? else {
            return Err(Defect::parse(&path, format!("cannot locate the repo line of repos[{index}]")).into());
        };
        write_atomic(&path, &updated)?;
        return Err(CheckError::non_conformant(format!(
            "Updated cSpell pre-commit repo URL to {REPO_URL} in {file}"
        )));
    }
    Ok(())
}

/// The hook entry should name the repo, a rev and a bare `cspell` hook.
pub fn check_hook_options(repo: &Repo) -> Outcome {
    let expected_keys = ["repo", "rev", "hooks"];
    let keys_match = repo.keys().iter().map(String::as_str).eq(expected_keys);
    let hooks_match = matches!(
        repo.hooks.as_slice(),
        [hook] if hook.id == "cspell" && hook.is_bare()
    );
    if keys_match && hooks_match {
        return Outcome::Unchanged;
    }
    Outcome::report(format!(
        "cSpell pre-commit hook should have the following form:\n\n  - repo: {REPO_URL}\n    rev: ...\n    hooks:\n      - id: cspell\n"
    ))
}

/// Merge the template into `.cspell.json`, creating the file if needed.
pub fn fix_config_content(paths: &ConfigPaths, template: &Template) -> Result<Outcome, Defect> {
    let file = ConfigFile::Cspell;
    tracing::debug!("Comparing {file} with {}", template.source());
    let fixed = sync_artifact(&accessor(), &paths.path(file), |config| {
        merge_with_template(config, template.sections(), &ACCUMULATOR_SECTIONS)
    })?;
    Ok(report_sections(fixed, |sections| {
        format!("{sections} in {file} has been updated.")
    }))
}

/// Sort every list section of `.cspell.json`.
pub fn sort_config_entries(paths: &ConfigPaths) -> Result<Outcome, Defect> {
    let file = ConfigFile::Cspell;
    let sorted = sync_artifact(&accessor(), &paths.path(file), sort_list_sections)?;
    Ok(report_sections(sorted, |sections| {
        format!("{sections} in {file} has been sorted alphabetically.")
    }))
}

fn remove_config_file(paths: &ConfigPaths) -> Result<Outcome, Defect> {
    let file = ConfigFile::Cspell;
    if !remove_file(&paths.path(file))? {
        return Ok(Outcome::Unchanged);
    }
    Ok(Outcome::report(format!(
        "\"{file}\" is no longer required and has been removed"
    )))
}

fn accessor() -> JsonAccessor {
    JsonAccessor::new(CSPELL_JSON_INDENT)
}

fn report_sections<F>(changed: Option<Vec<String>>, message: F) -> Outcome
where
    F: FnOnce(&str) -> String
{
    match changed {
        Some(sections) if !sections.is_empty() => {
            let quoted: Vec<String> = sections.iter().map(|section| quote(section)).collect();
            let summary = message(&express_list_of_sections(&quoted));
            Outcome::rewritten(quoted, summary)
        }
        _ => Outcome::Unchanged
    }
}
