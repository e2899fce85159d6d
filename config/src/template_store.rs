//! # Canonical Template Store
//!
//! Loads the reference configuration a check compares an artifact against.
//! A template is loaded once per invocation and handed to the drivers; it is
//! never mutated afterwards.

use std::path::Path;

use errors::Defect;
use serde_json::{Map, Value};

const BUNDLED_CSPELL: &str = include_str!("../templates/.cspell.json");
const BUNDLED_CSPELL_NAME: &str = "<bundled>/.cspell.json";

/// Ordered mapping from section name to the expected section content.
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    source: String,
    sections: Map<String, Value>
}

impl Template {
    /// The cspell template compiled into the binary.
    pub fn bundled_cspell() -> Result<Self, Defect> {
        Self::parse(BUNDLED_CSPELL_NAME, BUNDLED_CSPELL)
    }

    /// Load a template from disk. A missing or malformed file is a defect.
    pub fn from_file(path: &Path) -> Result<Self, Defect> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| Defect::template(path.display().to_string(), e))?;
        Self::parse(&path.display().to_string(), &contents)
    }

    /// Load the configured template, falling back to the bundled one.
    pub fn load(override_path: Option<&Path>) -> Result<Self, Defect> {
        let template = match override_path {
            Some(path) => Self::from_file(path)?,
            None => Self::bundled_cspell()?
        };
        tracing::debug!(
            "Loaded canonical template {} with {} sections",
            template.source,
            template.sections.len()
        );
        Ok(template)
    }

    pub fn parse(source: &str, contents: &str) -> Result<Self, Defect> {
        let value: Value =
            serde_json::from_str(contents).map_err(|e| Defect::template(source, e))?;
        match value {
            Value::Object(sections) => Ok(Self {
                source: source.to_string(),
                sections
            }),
            other => Err(Defect::template(
                source,
                format!(
                    "expected a JSON object at the top level, found {}",
                    utils::json_kind(&other)
                )
            ))
        }
    }

    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    #[must_use]
    pub fn sections(&self) -> &Map<String, Value> {
        &self.sections
    }
}
