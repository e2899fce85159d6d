//! Line-list artifacts such as `.prettierignore`.

use std::path::Path;

use errors::Defect;
use mk_core::ArtifactAccessor;

use crate::fs::{read_optional, write_atomic};

/// Exposes a text file as its lines, without terminators.
///
/// A missing file reads as no lines. Writing joins with `\n` and ends with a
/// newline unless there are no lines at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinesAccessor;

impl ArtifactAccessor for LinesAccessor {
    type State = Vec<String>;

    fn read(&self, path: &Path) -> Result<Self::State, Defect> {
        Ok(read_optional(path)?
            .map(|contents| contents.lines().map(str::to_string).collect())
            .unwrap_or_default())
    }

    fn write(&self, path: &Path, state: &Self::State) -> Result<(), Defect> {
        let mut contents = state.join("\n");
        if !contents.is_empty() {
            contents.push('\n');
        }
        write_atomic(path, &contents)
    }
}

/// Append `line` unless it is already present. Returns whether it was added.
pub fn ensure_line(lines: &mut Vec<String>, line: &str) -> bool {
    if lines.iter().any(|existing| existing == line) {
        return false;
    }
    lines.push(line.to_string());
    true
}

/// Drop every occurrence of `line`. Returns whether anything was removed.
pub fn remove_line(lines: &mut Vec<String>, line: &str) -> bool {
    let before = lines.len();
    lines.retain(|existing| existing != line);
    lines.len() != before
}
