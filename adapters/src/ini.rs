//! # INI Documents
//!
//! Order-preserving model of the INI dialect used by `setup.cfg`, `tox.ini`,
//! `.flake8` and `.editorconfig`:
//! - `key = value` and `key: value`, keys case-folded to lowercase
//! - indented continuation lines extend the previous value, also across
//!   blank lines and full-line comments
//! - `#` and `;` comment lines stay with the option or header below them
//! - options before the first header form an unnamed preamble, accepted only
//!   when the accessor allows it (`.editorconfig` has `root = true` there)
//!
//! Rendering is deterministic, so a parse/render cycle normalizes layout.
//! Equality is semantic: comments, blank lines and option order are ignored.

use std::collections::BTreeMap;
use std::path::Path;

use errors::Defect;
use mk_core::ArtifactAccessor;
use thiserror::Error;

use crate::fs::{read_optional, write_atomic};

const CONTINUATION_INDENT: &str = "    ";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {reason}")]
pub struct IniParseError {
    pub line: usize,
    pub reason: String
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum IniItem {
    Option { key: String, value: String },
    Comment(String)
}

/// One `[name]` block.
#[derive(Debug, Clone, Eq)]
pub struct IniSection {
    name: String,
    /// Comment lines directly above the header.
    leading_comments: Vec<String>,
    items: Vec<IniItem>
}

impl IniSection {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            leading_comments: Vec::new(),
            items: Vec::new()
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        let key = key.to_lowercase();
        self.items.iter().find_map(|item| match item {
            IniItem::Option { key: k, value } if *k == key => Some(value.as_str()),
            _ => None
        })
    }

    #[must_use]
    pub fn has_option(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Set an option in place, or append it when new.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let key = key.to_lowercase();
        let value = value.into();
        for item in &mut self.items {
            if let IniItem::Option { key: k, value: v } = item {
                if *k == key {
                    *v = value;
                    return;
                }
            }
        }
        self.items.push(IniItem::Option { key, value });
    }

    /// Options in file order.
    pub fn options(&self) -> impl Iterator<Item = (&str, &str)> {
        self.items.iter().filter_map(|item| match item {
            IniItem::Option { key, value } => Some((key.as_str(), value.as_str())),
            IniItem::Comment(_) => None
        })
    }

    /// Options as a dictionary, for order-insensitive comparison.
    #[must_use]
    pub fn option_map(&self) -> BTreeMap<&str, &str> {
        self.options().collect()
    }

    fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn render_items(&self, out: &mut String) {
        for item in &self.items {
            match item {
                IniItem::Comment(text) => {
                    out.push_str(text);
                    out.push('\n');
                }
                IniItem::Option { key, value } => render_option(out, key, value)
            }
        }
    }
}

impl PartialEq for IniSection {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.option_map() == other.option_map()
    }
}

fn render_option(out: &mut String, key: &str, value: &str) {
    let mut lines = value.split('\n');
    let first = lines.next().unwrap_or_default();
    out.push_str(key);
    out.push_str(" =");
    if !first.is_empty() {
        out.push(' ');
        out.push_str(first);
    }
    out.push('\n');
    for line in lines {
        if !line.is_empty() {
            out.push_str(CONTINUATION_INDENT);
            out.push_str(line);
        }
        out.push('\n');
    }
}

/// A whole INI file.
#[derive(Debug, Clone, Default, Eq)]
pub struct IniDocument {
    preamble: IniSection,
    sections: Vec<IniSection>
}

impl PartialEq for IniDocument {
    fn eq(&self, other: &Self) -> bool {
        self.preamble == other.preamble && self.sections == other.sections
    }
}

impl Default for IniSection {
    fn default() -> Self {
        Self::new("")
    }
}

impl IniDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a document that must start every option under a header.
    pub fn parse(text: &str) -> Result<Self, IniParseError> {
        Self::parse_inner(text, false)
    }

    /// Parse a document whose leading options belong to no section.
    pub fn parse_with_preamble(text: &str) -> Result<Self, IniParseError> {
        Self::parse_inner(text, true)
    }

    fn parse_inner(text: &str, allow_preamble: bool) -> Result<Self, IniParseError> {
        let mut document = Self::new();
        let mut current: Option<IniSection> = None;
        // continuation lines are only legal while an option value is open
        let mut value_open = false;
        let mut blank_lines = 0;
        let mut comments: Vec<String> = Vec::new();

        for (index, raw) in text.lines().enumerate() {
            let line_number = index + 1;
            let trimmed = raw.trim();

            if trimmed.is_empty() {
                if value_open {
                    blank_lines += 1;
                }
                continue;
            }
            if trimmed.starts_with('#') || trimmed.starts_with(';') {
                comments.push(trimmed.to_string());
                continue;
            }

            let indented = raw.starts_with([' ', '\t']);
            if indented && value_open {
                let section = current.as_mut().unwrap_or(&mut document.preamble);
                if let Some(IniItem::Option { value, .. }) = section.items.last_mut() {
                    for _ in 0..blank_lines {
                        value.push('\n');
                    }
                    value.push('\n');
                    value.push_str(trimmed);
                }
                if !comments.is_empty() {
                    tracing::debug!("Dropped {} comment lines inside a value", comments.len());
                    comments.clear();
                }
                blank_lines = 0;
                continue;
            }
            value_open = false;
            blank_lines = 0;

            if trimmed.starts_with('[') && trimmed.ends_with(']') {
                let name = trimmed[1..trimmed.len() - 1].trim();
                if let Some(section) = current.take() {
                    document.sections.push(section);
                }
                if document.has_section(name) {
                    return Err(IniParseError {
                        line: line_number,
                        reason: format!("duplicate section [{name}]")
                    });
                }
                let mut section = IniSection::new(name);
                section.leading_comments = std::mem::take(&mut comments);
                current = Some(section);
                continue;
            }

            let Some(split) = trimmed.find(['=', ':']) else {
                return Err(IniParseError {
                    line: line_number,
                    reason: format!("expected `key = value`, found {trimmed:?}")
                });
            };
            let key = trimmed[..split].trim().to_lowercase();
            let value = trimmed[split + 1..].trim().to_string();
            let section = match current.as_mut() {
                Some(section) => section,
                None if allow_preamble => &mut document.preamble,
                None => {
                    return Err(IniParseError {
                        line: line_number,
                        reason: format!("option {key:?} outside of a section")
                    });
                }
            };
            section.items.extend(comments.drain(..).map(IniItem::Comment));
            section.items.push(IniItem::Option { key, value });
            value_open = true;
        }

        let section = current.as_mut().unwrap_or(&mut document.preamble);
        section.items.extend(comments.drain(..).map(IniItem::Comment));
        if let Some(section) = current {
            document.sections.push(section);
        }
        Ok(document)
    }

    pub fn sections(&self) -> impl Iterator<Item = &IniSection> {
        self.sections.iter()
    }

    pub fn section(&self, name: &str) -> Option<&IniSection> {
        self.sections.iter().find(|section| section.name == name)
    }

    pub fn section_mut(&mut self, name: &str) -> Option<&mut IniSection> {
        self.sections.iter_mut().find(|section| section.name == name)
    }

    #[must_use]
    pub fn has_section(&self, name: &str) -> bool {
        self.section(name).is_some()
    }

    #[must_use]
    pub fn has_option(&self, section: &str, key: &str) -> bool {
        self.get(section, key).is_some()
    }

    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.section(section)?.get(key)
    }

    /// Set an option, appending the section when it does not exist yet.
    pub fn set(&mut self, section: &str, key: &str, value: impl Into<String>) {
        if !self.has_section(section) {
            self.sections.push(IniSection::new(section));
        }
        if let Some(target) = self.section_mut(section) {
            target.set(key, value);
        }
    }

    pub fn remove_section(&mut self, name: &str) -> Option<IniSection> {
        let index = self.sections.iter().position(|section| section.name == name)?;
        Some(self.sections.remove(index))
    }

    /// Replace the same-named section in place, or append `section`.
    pub fn upsert_section(&mut self, section: IniSection) {
        match self.section_mut(&section.name) {
            Some(existing) => *existing = section,
            None => self.sections.push(section)
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.preamble.is_empty() && self.sections.is_empty()
    }

    /// Serialize with one blank line between sections.
    #[must_use]
    pub fn render(&self) -> String {
        let mut blocks = Vec::new();
        if !self.preamble.is_empty() {
            let mut block = String::new();
            self.preamble.render_items(&mut block);
            blocks.push(block);
        }
        for section in &self.sections {
            let mut block = String::new();
            for comment in &section.leading_comments {
                block.push_str(comment);
                block.push('\n');
            }
            block.push_str(&format!("[{}]\n", section.name));
            section.render_items(&mut block);
            blocks.push(block);
        }
        blocks.join("\n")
    }
}

/// Accessor reading and writing [`IniDocument`]s.
///
/// A missing file reads as an empty document.
#[derive(Debug, Clone, Copy, Default)]
pub struct IniAccessor {
    allow_preamble: bool
}

impl IniAccessor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accessor for files with sectionless leading options.
    pub fn with_preamble() -> Self {
        Self {
            allow_preamble: true
        }
    }
}

impl ArtifactAccessor for IniAccessor {
    type State = IniDocument;

    fn read(&self, path: &Path) -> Result<Self::State, Defect> {
        let Some(contents) = read_optional(path)? else {
            return Ok(IniDocument::new());
        };
        let parsed = if self.allow_preamble {
            IniDocument::parse_with_preamble(&contents)
        } else {
            IniDocument::parse(&contents)
        };
        parsed.map_err(|e| Defect::parse(path, e))
    }

    fn write(&self, path: &Path, state: &Self::State) -> Result<(), Defect> {
        write_atomic(path, &state.render())
    }
}
