//! # Settings Precedence
//!
//! Merges settings from multiple sources with precedence rules.
//!
//! # Precedence Order
//! 1. CLI arguments (highest priority)
//! 2. Environment variables
//! 3. Settings file
//! 4. Default values (lowest priority)

use crate::settings::{Settings, SettingsOverlay};

/// Apply overlays on top of `defaults`, lowest precedence first.
///
/// Every overridden field is logged together with the name of the source
/// that set it.
///
/// ## Usage
/// ```rust
/// use config::{Settings, SettingsOverlay, merge_settings};
///
/// let cli = SettingsOverlay {
///     ignore_author: Some(true),
///     ..SettingsOverlay::default()
/// };
/// let settings = merge_settings(Settings::default(), vec![("cli", cli)]);
/// assert!(settings.ignore_author);
/// ```
pub fn merge_settings(defaults: Settings, layers: Vec<(&str, SettingsOverlay)>) -> Settings {
    layers
        .into_iter()
        .fold(defaults, |base, (source, overlay)| {
            merge_with_logging(base, overlay, source)
        })
}

fn merge_with_logging(mut base: Settings, overlay: SettingsOverlay, source_name: &str) -> Settings {
    let mut changes = Vec::new();

    if let Some(name) = overlay.author.name {
        if name != base.author.name {
            changes.push(format!("author.name = {name}"));
            base.author.name = name;
        }
    }
    if let Some(email) = overlay.author.email {
        if email != base.author.email {
            changes.push(format!("author.email = {email}"));
            base.author.email = email;
        }
    }
    if let Some(template) = overlay.cspell_template {
        if base.cspell_template.as_ref() != Some(&template) {
            changes.push(format!("cspell_template = {}", template.display()));
            base.cspell_template = Some(template);
        }
    }
    if let Some(ignore_author) = overlay.ignore_author {
        if ignore_author != base.ignore_author {
            changes.push(format!("ignore_author = {ignore_author}"));
            base.ignore_author = ignore_author;
        }
    }

    if !changes.is_empty() {
        tracing::debug!("Settings from {}: {:?}", source_name, changes);
    }

    base
}
