//! # Environment Variable Loader
//!
//! Loads settings overrides from environment variables.
//!
//! # Variables
//! - `REPOMA_AUTHOR_NAME`: author written to `setup.cfg`
//! - `REPOMA_AUTHOR_EMAIL`: author e-mail written to `setup.cfg`
//! - `REPOMA_CSPELL_TEMPLATE`: path to an alternative `.cspell.json` template
//! - `REPOMA_IGNORE_AUTHOR`: skip the author check (true/false)

use std::env;
use std::path::PathBuf;

use errors::Defect;

use crate::settings::{AuthorOverlay, SettingsOverlay};

pub const ENV_AUTHOR_NAME: &str = "REPOMA_AUTHOR_NAME";
pub const ENV_AUTHOR_EMAIL: &str = "REPOMA_AUTHOR_EMAIL";
pub const ENV_CSPELL_TEMPLATE: &str = "REPOMA_CSPELL_TEMPLATE";
pub const ENV_IGNORE_AUTHOR: &str = "REPOMA_IGNORE_AUTHOR";

/// Load settings overrides from environment variables.
///
/// Unset variables leave the corresponding field `None`; a variable that is
/// set but cannot be parsed is reported as a defect.
pub fn load_from_env() -> Result<SettingsOverlay, Defect> {
    Ok(SettingsOverlay {
        author: AuthorOverlay {
            name: env::var(ENV_AUTHOR_NAME).ok(),
            email: env::var(ENV_AUTHOR_EMAIL).ok()
        },
        cspell_template: env::var(ENV_CSPELL_TEMPLATE).ok().map(PathBuf::from),
        ignore_author: parse_env(ENV_IGNORE_AUTHOR)?
    })
}

fn parse_env<T>(key: &str) -> Result<Option<T>, Defect>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display
{
    match env::var(key) {
        Ok(s) => s.trim().parse::<T>().map(Some).map_err(|e| Defect::Settings {
            reason: format!("{key}={s:?}: {e}")
        }),
        Err(_) => Ok(None)
    }
}
