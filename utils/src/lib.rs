//! # Repoma Utilities
//!
//! Small deterministic helpers every check relies on:
//! - case-insensitive, stable sorting of list sections
//! - natural-language enumeration of changed sections
//! - JSON type names for diagnostics

#[cfg(test)]
mod proptests;

/// Sort entries case-insensitively, keeping the relative order of entries
/// that only differ in case.
///
/// # Examples
///
/// ```
/// use utils::sort_section;
///
/// let sorted = sort_section(["one", "Two", "three"]);
/// assert_eq!(sorted, vec!["one", "three", "Two"]);
/// ```
#[must_use]
pub fn sort_section<I, S>(content: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>
{
    let mut entries: Vec<String> = content.into_iter().map(Into::into).collect();
    entries.sort_by_cached_key(|entry| entry.to_lowercase());
    entries
}

/// Whether `content` is already in the order [`sort_section`] produces.
#[must_use]
pub fn is_sorted_section<S: AsRef<str>>(content: &[S]) -> bool {
    content
        .windows(2)
        .all(|pair| pair[0].as_ref().to_lowercase() <= pair[1].as_ref().to_lowercase())
}

/// Convert a list of section names into natural language.
///
/// # Examples
///
/// ```
/// use utils::express_list_of_sections;
///
/// assert_eq!(express_list_of_sections::<&str>(&[]), "");
/// assert_eq!(express_list_of_sections(&["one"]), "Section one");
/// assert_eq!(express_list_of_sections(&["one", "two"]), "Sections one and two");
/// assert_eq!(
///     express_list_of_sections(&["one", "two", "three"]),
///     "Sections one, two, and three"
/// );
/// ```
#[must_use]
pub fn express_list_of_sections<S: AsRef<str>>(sections: &[S]) -> String {
    let Some((last, rest)) = sections.split_last() else {
        return String::new();
    };
    if rest.is_empty() {
        return format!("Section {}", last.as_ref());
    }
    let mut sentence = String::from("Sections ");
    sentence.push_str(
        &rest
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(", ")
    );
    if rest.len() > 1 {
        sentence.push(',');
    }
    sentence.push_str(" and ");
    sentence.push_str(last.as_ref());
    sentence
}

/// Wrap a section name in double quotes, the way reports cite JSON keys.
#[must_use]
pub fn quote(name: &str) -> String {
    format!("\"{name}\"")
}

/// JSON type name used in diagnostics.
#[must_use]
pub fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "list",
        serde_json::Value::Object(_) => "object"
    }
}
