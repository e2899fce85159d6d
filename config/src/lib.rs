//! # Configuration System
//!
//! Everything the checks need to know before touching a file:
//! - where the managed files live ([`ConfigPaths`])
//! - what canonical content looks like ([`Template`])
//! - user settings loaded from file and environment ([`Settings`])
//!
//! # Precedence
//!
//! CLI > environment > `.repoma.toml` / `.repoma.yaml` > defaults. See
//! [`load_settings`].

pub mod file_loader;
pub mod loader;
pub mod paths;
pub mod precedence;
pub mod settings;
pub mod template_store;
pub mod validation;

use std::path::Path;

use errors::Defect;

pub use file_loader::{
    ConfigFileError, find_settings_file, load_from_file, load_from_toml, load_from_yaml,
};
pub use loader::load_from_env;
pub use paths::{ConfigFile, ConfigPaths};
pub use precedence::merge_settings;
pub use settings::{AuthorOverlay, AuthorSettings, Settings, SettingsOverlay};
pub use template_store::Template;

/// Resolve settings for a repository.
///
/// `settings_file` overrides the probe for `.repoma.*` in `root`. Relative
/// template paths are resolved against `root`.
pub fn load_settings(
    root: &Path,
    settings_file: Option<&Path>,
    cli: SettingsOverlay
) -> Result<Settings, Defect> {
    let mut layers = Vec::new();

    let file = settings_file
        .map(Path::to_path_buf)
        .or_else(|| find_settings_file(root));
    if let Some(path) = file {
        let overlay = load_from_file(&path).map_err(|e| Defect::Settings {
            reason: e.to_string()
        })?;
        tracing::debug!("Loaded settings file {}", path.display());
        layers.push(("file", overlay));
    }
    layers.push(("env", load_from_env()?));
    layers.push(("cli", cli));

    let mut settings = merge_settings(Settings::default(), layers);
    settings.cspell_template = settings.cspell_template.take().map(|template| {
        if template.is_relative() {
            root.join(template)
        } else {
            template
        }
    });
    validation::validate(&settings)?;
    Ok(settings)
}
