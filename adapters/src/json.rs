//! JSON mapping artifacts such as `.cspell.json`.

use std::path::Path;

use errors::Defect;
use mk_core::ArtifactAccessor;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};

use crate::fs::{read_optional, write_atomic};

/// Accessor for files whose top level is a JSON object.
///
/// A missing file reads as an empty object. Key order is kept as found;
/// output uses `indent` spaces and ends with a newline.
#[derive(Debug, Clone, Copy)]
pub struct JsonAccessor {
    indent: usize
}

impl JsonAccessor {
    pub fn new(indent: usize) -> Self {
        Self { indent }
    }
}

impl Default for JsonAccessor {
    fn default() -> Self {
        Self::new(4)
    }
}

impl ArtifactAccessor for JsonAccessor {
    type State = Map<String, Value>;

    fn read(&self, path: &Path) -> Result<Self::State, Defect> {
        let Some(contents) = read_optional(path)? else {
            return Ok(Map::new());
        };
        if contents.trim().is_empty() {
            return Ok(Map::new());
        }
        match serde_json::from_str(&contents).map_err(|e| Defect::parse(path, e))? {
            Value::Object(map) => Ok(map),
            other => Err(Defect::parse(
                path,
                format!("expected a JSON object, found {}", utils::json_kind(&other))
            ))
        }
    }

    fn write(&self, path: &Path, state: &Self::State) -> Result<(), Defect> {
        let contents = to_string_pretty(state, self.indent).map_err(|e| Defect::parse(path, e))?;
        write_atomic(path, &contents)
    }
}

/// Pretty-print `value` with a custom indent and a trailing newline.
pub fn to_string_pretty<T: Serialize>(value: &T, indent: usize) -> serde_json::Result<String> {
    let indent = " ".repeat(indent);
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    value.serialize(&mut serializer)?;
    buffer.push(b'\n');
    // serde_json only emits valid UTF-8
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}
