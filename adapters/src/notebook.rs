//! # Jupyter Notebooks
//!
//! Minimal nbformat-4 view: a list of cells, each with a type, a source and
//! metadata. Everything else in the document is carried along untouched.
//!
//! Notebooks are written the way Jupyter writes them: sorted keys, one-space
//! indent, multi-line sources split into a list of lines.

use std::path::Path;

use errors::Defect;
use mk_core::ArtifactAccessor;
use serde_json::{Map, Value, json};

use crate::fs::write_atomic;
use crate::json::to_string_pretty;

const NOTEBOOK_INDENT: usize = 1;

#[derive(Debug, Clone, PartialEq)]
pub struct Notebook {
    document: Map<String, Value>
}

impl Notebook {
    pub fn from_value(value: Value) -> Result<Self, String> {
        let Value::Object(document) = value else {
            return Err(format!(
                "expected a JSON object, found {}",
                utils::json_kind(&value)
            ));
        };
        match document.get("cells") {
            Some(Value::Array(_)) => Ok(Self { document }),
            Some(other) => Err(format!(
                "\"cells\" should be a list, found {}",
                utils::json_kind(other)
            )),
            None => Err("missing \"cells\"".to_string())
        }
    }

    #[must_use]
    pub fn cells(&self) -> &[Value] {
        match self.document.get("cells") {
            Some(Value::Array(cells)) => cells,
            _ => &[]
        }
    }

    fn cells_mut(&mut self) -> Option<&mut Vec<Value>> {
        self.document.get_mut("cells").and_then(Value::as_array_mut)
    }

    /// Put `cell` at `index`: a code cell there is replaced, any other cell
    /// is pushed down. Past the end, the cell is appended.
    pub fn set_code_cell(&mut self, index: usize, cell: Value) {
        let Some(cells) = self.cells_mut() else {
            return;
        };
        let is_code = cells
            .get(index)
            .map(|existing| cell_type(existing) == Some("code"));
        match is_code {
            Some(true) => cells[index] = cell,
            Some(false) => cells.insert(index, cell),
            None => cells.push(cell)
        }
    }

    pub fn insert_cell(&mut self, index: usize, cell: Value) {
        let Some(cells) = self.cells_mut() else {
            return;
        };
        let index = index.min(cells.len());
        cells.insert(index, cell);
    }

    /// Sources of all Markdown cells, in order.
    pub fn markdown_sources(&self) -> impl Iterator<Item = String> + '_ {
        self.cells()
            .iter()
            .filter(|cell| cell_type(cell) == Some("markdown"))
            .map(cell_source)
    }

    /// Whether any Markdown cell carries `statement` (case-insensitive).
    #[must_use]
    pub fn has_markdown_statement(&self, statement: &str) -> bool {
        let statement = statement.to_lowercase();
        self.markdown_sources()
            .any(|source| source.to_lowercase().contains(&statement))
    }

    /// Index of the first Markdown cell.
    #[must_use]
    pub fn first_markdown_index(&self) -> Option<usize> {
        self.cells()
            .iter()
            .position(|cell| cell_type(cell) == Some("markdown"))
    }

    #[must_use]
    pub fn to_value(&self) -> Value {
        Value::Object(self.document.clone())
    }
}

#[must_use]
pub fn cell_type(cell: &Value) -> Option<&str> {
    cell.get("cell_type").and_then(Value::as_str)
}

/// Cell source as one string, whether stored as a string or a list of lines.
#[must_use]
pub fn cell_source(cell: &Value) -> String {
    match cell.get("source") {
        Some(Value::String(source)) => source.clone(),
        Some(Value::Array(lines)) => lines.iter().filter_map(Value::as_str).collect(),
        _ => String::new()
    }
}

/// Split a source into lines that keep their terminators.
fn split_source(source: &str) -> Value {
    Value::from(
        source
            .split_inclusive('\n')
            .map(str::to_string)
            .collect::<Vec<_>>()
    )
}

/// A code cell without an `id`, following nbformat 4.4.
#[must_use]
pub fn new_code_cell(source: &str, metadata: Value) -> Value {
    json!({
        "cell_type": "code",
        "execution_count": null,
        "metadata": metadata,
        "outputs": [],
        "source": split_source(source)
    })
}

#[must_use]
pub fn new_markdown_cell(source: &str) -> Value {
    json!({
        "cell_type": "markdown",
        "metadata": {},
        "source": split_source(source)
    })
}

/// Rebuild every object with its keys in lexicographic order.
fn sort_keys(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();
            Value::Object(
                keys.into_iter()
                    .map(|key| (key.clone(), sort_keys(&map[key])))
                    .collect()
            )
        }
        Value::Array(items) => Value::Array(items.iter().map(sort_keys).collect()),
        other => other.clone()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NotebookAccessor;

impl ArtifactAccessor for NotebookAccessor {
    type State = Notebook;

    /// Notebooks are never created from nothing, so a missing file is a
    /// defect.
    fn read(&self, path: &Path) -> Result<Self::State, Defect> {
        let contents = std::fs::read_to_string(path).map_err(|e| Defect::io(path, e))?;
        let value: Value = serde_json::from_str(&contents).map_err(|e| Defect::parse(path, e))?;
        Notebook::from_value(value).map_err(|reason| Defect::parse(path, reason))
    }

    fn write(&self, path: &Path, state: &Self::State) -> Result<(), Defect> {
        let contents = to_string_pretty(&sort_keys(&state.to_value()), NOTEBOOK_INDENT)
            .map_err(|e| Defect::parse(path, e))?;
        write_atomic(path, &contents)
    }
}
