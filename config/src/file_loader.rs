//! # Settings File Loading
//!
//! Loads a [`SettingsOverlay`] from TOML or YAML files.
//!
//! Supports automatic format detection based on file extension.

use std::path::{Path, PathBuf};

use crate::settings::SettingsOverlay;

/// File names probed in the repository root, in order.
pub const SETTINGS_FILE_NAMES: [&str; 3] = [".repoma.toml", ".repoma.yaml", ".repoma.yml"];

/// Why a settings file could not be turned into an overlay.
#[derive(Debug, thiserror::Error)]
pub enum ConfigFileError {
    #[error("cannot read {path}: {source}")]
    Unreadable {
        path: String,
        #[source]
        source: std::io::Error
    },

    #[error("{path} is not valid TOML: {reason}")]
    Toml { path: String, reason: String },

    #[error("{path} is not valid YAML: {reason}")]
    Yaml { path: String, reason: String },

    #[error("{path} has no extension to detect the format from")]
    NoExtension { path: String },

    #[error("{path}: unsupported settings format \"{extension}\"")]
    UnsupportedFormat { path: String, extension: String }
}

fn read_settings_file(path: &Path) -> Result<String, ConfigFileError> {
    std::fs::read_to_string(path).map_err(|source| ConfigFileError::Unreadable {
        path: path.display().to_string(),
        source
    })
}

/// Load settings from a TOML file.
///
/// ## Usage
/// ```rust,no_run
/// use config::load_from_toml;
/// use std::path::Path;
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let overlay = load_from_toml(Path::new(".repoma.toml"))?;
///     println!("Author: {:?}", overlay.author.name);
///     Ok(())
/// }
/// ```
pub fn load_from_toml(path: &Path) -> Result<SettingsOverlay, ConfigFileError> {
    let contents = read_settings_file(path)?;
    toml::from_str(&contents).map_err(|e| ConfigFileError::Toml {
        path: path.display().to_string(),
        reason: e.to_string()
    })
}

/// Load settings from a YAML file.
pub fn load_from_yaml(path: &Path) -> Result<SettingsOverlay, ConfigFileError> {
    let contents = read_settings_file(path)?;

    // An empty YAML document means "nothing configured".
    if contents.trim().is_empty() {
        return Ok(SettingsOverlay::default());
    }
    serde_yaml::from_str(&contents).map_err(|e| ConfigFileError::Yaml {
        path: path.display().to_string(),
        reason: e.to_string()
    })
}

/// Load settings from file with auto-detection.
///
/// ## Supported Formats
/// - `.toml`: TOML format
/// - `.yaml`: YAML format
/// - `.yml`: YAML format
pub fn load_from_file(path: &Path) -> Result<SettingsOverlay, ConfigFileError> {
    let extension = path
        .extension()
        .and_then(|s| s.to_str())
        .ok_or_else(|| ConfigFileError::NoExtension {
            path: path.display().to_string()
        })?;

    match extension.to_lowercase().as_str() {
        "toml" => load_from_toml(path),
        "yaml" | "yml" => load_from_yaml(path),
        other => Err(ConfigFileError::UnsupportedFormat {
            path: path.display().to_string(),
            extension: other.to_string()
        })
    }
}

/// First settings file present in `root`, if any.
#[must_use]
pub fn find_settings_file(root: &Path) -> Option<PathBuf> {
    SETTINGS_FILE_NAMES
        .iter()
        .map(|name| root.join(name))
        .find(|path| path.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_load_from_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".repoma.toml");

        let toml_content = r#"
ignore_author = true
cspell_template = "templates/.cspell.json"

[author]
name = "Jane Doe"
email = "jane@example.com"
"#;
        fs::write(&path, toml_content).unwrap();

        let overlay = load_from_toml(&path).unwrap();
        assert_eq!(overlay.ignore_author, Some(true));
        assert_eq!(overlay.author.name.as_deref(), Some("Jane Doe"));
        assert_eq!(overlay.author.email.as_deref(), Some("jane@example.com"));
        assert_eq!(
            overlay.cspell_template,
            Some(PathBuf::from("templates/.cspell.json"))
        );
    }

    #[test]
    fn test_load_from_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".repoma.yaml");

        let yaml_content = r#"
author:
  name: Jane Doe
"#;
        fs::write(&path, yaml_content).unwrap();

        let overlay = load_from_yaml(&path).unwrap();
        assert_eq!(overlay.author.name.as_deref(), Some("Jane Doe"));
        assert!(overlay.author.email.is_none());
        assert!(overlay.ignore_author.is_none());
    }

    #[test]
    fn test_load_from_empty_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".repoma.yml");
        fs::write(&path, "\n").unwrap();

        let overlay = load_from_file(&path).unwrap();
        assert!(overlay.is_empty());
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".repoma.toml");
        fs::write(&path, "ignore_autor = true\n").unwrap();

        let result = load_from_toml(&path);
        assert!(matches!(result, Err(ConfigFileError::Toml { .. })));
    }

    #[test]
    fn test_load_from_file_unsupported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".repoma.json");
        fs::write(&path, "{}").unwrap();

        let result = load_from_file(&path);
        assert!(matches!(result, Err(ConfigFileError::UnsupportedFormat { .. })));
    }

    #[test]
    fn test_load_from_file_no_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("repoma");
        fs::write(&path, "").unwrap();

        let result = load_from_file(&path);
        assert!(matches!(result, Err(ConfigFileError::NoExtension { .. })));
    }

    #[test]
    fn test_load_from_yaml_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".repoma.yaml");
        fs::write(&path, "author: [unmatched\n").unwrap();

        let result = load_from_yaml(&path);
        assert!(matches!(result, Err(ConfigFileError::Yaml { .. })));
    }

    #[test]
    fn test_load_from_toml_not_found() {
        let result = load_from_toml(Path::new("/nonexistent/path/.repoma.toml"));
        assert!(matches!(result, Err(ConfigFileError::Unreadable { .. })));
    }

    #[test]
    fn test_find_settings_file_prefers_toml() {
        let dir = tempfile::tempdir().unwrap();
        assert!(find_settings_file(dir.path()).is_none());

        fs::write(dir.path().join(".repoma.yaml"), "").unwrap();
        fs::write(dir.path().join(".repoma.toml"), "").unwrap();
        assert_eq!(
            find_settings_file(dir.path()),
            Some(dir.path().join(".repoma.toml"))
        );
    }
}
