//! Extension recommendations in `.vscode/extensions.json`.

use errors::Defect;
use serde_json::{Map, Value};
use utils::{json_kind, sort_section};

const RECOMMENDATIONS: &str = "recommendations";

fn recommendations(config: &Map<String, Value>) -> Result<Vec<String>, Defect> {
    let unsupported = |kind: &str| Defect::UnsupportedSection {
        section: RECOMMENDATIONS.to_string(),
        kind: kind.to_string()
    };
    match config.get(RECOMMENDATIONS) {
        None => Ok(Vec::new()),
        Some(Value::Array(entries)) => entries
            .iter()
            .map(|entry| {
                entry
                    .as_str()
                    .map(str::to_string)
                    .ok_or_else(|| unsupported(&format!("list of {}", json_kind(entry))))
            })
            .collect(),
        Some(other) => Err(unsupported(json_kind(other)))
    }
}

/// Add `extension` and keep the list sorted. Returns whether it was added.
pub fn add_recommendation(config: &mut Map<String, Value>, extension: &str) -> Result<bool, Defect> {
    let mut entries = recommendations(config)?;
    if entries.iter().any(|entry| entry == extension) {
        return Ok(false);
    }
    entries.push(extension.to_string());
    config.insert(RECOMMENDATIONS.to_string(), Value::from(sort_section(entries)));
    Ok(true)
}

/// Remove `extension`. Returns whether it was listed.
pub fn remove_recommendation(
    config: &mut Map<String, Value>,
    extension: &str
) -> Result<bool, Defect> {
    let mut entries = recommendations(config)?;
    let before = entries.len();
    entries.retain(|entry| entry != extension);
    if entries.len() == before {
        return Ok(false);
    }
    config.insert(RECOMMENDATIONS.to_string(), Value::from(entries));
    Ok(true)
}
