//! Read-only checks on `.editorconfig`.

use std::collections::BTreeMap;

use adapters::IniAccessor;
use config::{ConfigFile, ConfigPaths};
use errors::Defect;
use mk_core::{ArtifactAccessor, Outcome};

/// Compare the `[section]` block against `expected` as a dictionary.
///
/// Never writes: a mismatch is reported with the block to paste in. A
/// repository without `.editorconfig` passes.
pub fn check_section(
    paths: &ConfigPaths,
    section: &str,
    expected: &[(&str, &str)]
) -> Result<Outcome, Defect> {
    let file = ConfigFile::EditorConfig;
    if !paths.exists(file) {
        tracing::debug!("No {file}, skipping check of section [{section}]");
        return Ok(Outcome::Unchanged);
    }
    let document = IniAccessor::with_preamble().read(&paths.path(file))?;
    let Some(found) = document.section(section) else {
        return Ok(Outcome::report(format!(
            "{file} has no section \"[{section}]\""
        )));
    };

    let expected_options: BTreeMap<&str, &str> = expected.iter().copied().collect();
    if found.option_map() == expected_options {
        return Ok(Outcome::Unchanged);
    }
    let mut block = format!("[{section}]\n");
    for (key, value) in expected {
        block.push_str(&format!("{key} = {value}\n"));
    }
    Ok(Outcome::report(format!(
        "{file} should have the following section:\n\n{}",
        indent(&block, "  ")
    )))
}

/// Prefix every non-empty line.
pub(crate) fn indent(text: &str, prefix: &str) -> String {
    text.split_inclusive('\n')
        .map(|line| {
            if line.trim().is_empty() {
                line.to_string()
            } else {
                format!("{prefix}{line}")
            }
        })
        .collect()
}
