//! # Settings
//!
//! User-tunable knobs of the checks.
//!
//! Settings are assembled from several sources (see [`crate::precedence`]):
//! every source except the defaults produces a [`SettingsOverlay`] in which
//! unset fields are `None`.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use validator::Validate;

pub const DEFAULT_AUTHOR_NAME: &str = "Common Partial Wave Analysis";
pub const DEFAULT_AUTHOR_EMAIL: &str = "compwa-admin@ep1.rub.de";

/// Fully resolved settings.
///
/// ## Fields
/// - `author`: author metadata enforced in `setup.cfg`
/// - `cspell_template`: alternative canonical `.cspell.json` template
/// - `ignore_author`: skip the author check in `setup.cfg`
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct Settings {
    #[serde(default)]
    #[validate(nested)]
    pub author: AuthorSettings,

    #[serde(default)]
    pub cspell_template: Option<PathBuf>,

    #[serde(default)]
    pub ignore_author: bool
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            author: AuthorSettings::default(),
            cspell_template: None,
            ignore_author: false
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct AuthorSettings {
    #[serde(default = "default_author_name")]
    #[validate(length(min = 1, max = 255))]
    pub name: String,

    #[serde(default = "default_author_email")]
    #[validate(email)]
    pub email: String
}

impl Default for AuthorSettings {
    fn default() -> Self {
        Self {
            name: default_author_name(),
            email: default_author_email()
        }
    }
}

fn default_author_name() -> String {
    DEFAULT_AUTHOR_NAME.to_string()
}

fn default_author_email() -> String {
    DEFAULT_AUTHOR_EMAIL.to_string()
}

/// Partial settings from one source.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SettingsOverlay {
    pub author: AuthorOverlay,
    pub cspell_template: Option<PathBuf>,
    pub ignore_author: Option<bool>
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct AuthorOverlay {
    pub name: Option<String>,
    pub email: Option<String>
}

impl SettingsOverlay {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
