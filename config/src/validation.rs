//! # Settings Validation
//!
//! Provides validation for [`Settings`] using the `validator` crate.

use errors::Defect;
use validator::Validate;

use crate::settings::Settings;

/// Validate resolved settings.
///
/// ## Validation Rules
/// - `author.name`: 1-255 characters
/// - `author.email`: a syntactically valid e-mail address
pub fn validate(settings: &Settings) -> Result<(), Defect> {
    settings.validate().map_err(|errors| Defect::Settings {
        reason: errors.to_string()
    })
}
