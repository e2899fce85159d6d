//! # Section Algorithms
//!
//! Deterministic rules deciding the canonical content of a mapping-shaped
//! artifact (e.g. `.cspell.json`):
//! - [`merge_with_template`]: default-merge-or-replace against a template
//! - [`sort_list_sections`]: case-insensitive sort of every list section
//!
//! Both mutate an in-memory state and return the names of the sections they
//! changed, in encounter order. Writing the state back is up to the caller.

use errors::Defect;
use serde_json::{Map, Value};
use utils::{is_sorted_section, json_kind, sort_section};

/// Canonical value of a template section.
///
/// Strings are taken as they are; lists of strings are sorted
/// case-insensitively. Anything else is unsupported.
pub fn expected_section_content(section: &str, template_value: &Value) -> Result<Value, Defect> {
    match template_value {
        Value::String(_) => Ok(template_value.clone()),
        Value::Array(entries) => {
            let entries = string_entries(section, entries)?;
            Ok(Value::from(sort_section(entries)))
        }
        other => Err(Defect::UnsupportedSection {
            section: section.to_string(),
            kind: json_kind(other).to_string()
        })
    }
}

/// Bring every template section of `state` into canonical form.
///
/// Sections listed in `accumulators` are only initialized to an empty list
/// when absent, never overwritten. Sections of `state` unknown to the
/// template are left alone.
pub fn merge_with_template(
    state: &mut Map<String, Value>,
    template: &Map<String, Value>,
    accumulators: &[&str]
) -> Result<Vec<String>, Defect> {
    let mut fixed_sections = Vec::new();
    for (section, template_value) in template {
        if accumulators.contains(&section.as_str()) {
            if !state.contains_key(section) {
                state.insert(section.clone(), Value::Array(Vec::new()));
                fixed_sections.push(section.clone());
            }
            continue;
        }
        let expected = expected_section_content(section, template_value)?;
        if state.get(section) == Some(&expected) {
            continue;
        }
        state.insert(section.clone(), expected);
        fixed_sections.push(section.clone());
    }
    Ok(fixed_sections)
}

/// Sort every list section of `state` case-insensitively.
pub fn sort_list_sections(state: &mut Map<String, Value>) -> Result<Vec<String>, Defect> {
    let mut sorted_sections = Vec::new();
    for (section, content) in state.iter_mut() {
        let Value::Array(entries) = content else {
            continue;
        };
        let current = string_entries(section, entries)?;
        if is_sorted_section(&current) {
            continue;
        }
        let sorted = sort_section(current);
        *content = Value::from(sorted);
        sorted_sections.push(section.clone());
    }
    Ok(sorted_sections)
}

fn string_entries<'a>(section: &str, entries: &'a [Value]) -> Result<Vec<&'a str>, Defect> {
    entries
        .iter()
        .map(|entry| {
            entry.as_str().ok_or_else(|| Defect::UnsupportedSection {
                section: section.to_string(),
                kind: format!("list of {}", json_kind(entry))
            })
        })
        .collect()
}
