//! Top-level error type

use thiserror::Error;

use crate::settings::SettingsError;
use crate::template::TemplateError;

/// Errors surfaced to callers that want them
///
/// The dialog view itself never fails; these come from loading settings and
/// from rendering templates directly.
#[derive(Debug, Error)]
pub enum Error {
    /// Error loading settings
    #[error("settings error: {0}")]
    Settings(#[from] SettingsError),

    /// Error resolving or rendering a template
    #[error("template error: {0}")]
    Template(#[from] TemplateError),

    /// Error reading input or writing output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_error_display() {
        let err = Error::from(TemplateError::NotFound {
            name: "lightbox".to_string(),
        });
        assert_eq!(err.to_string(), "template error: template not found: lightbox");
    }

    #[test]
    fn test_settings_error_from_toml() {
        let err = Error::from(crate::settings::Settings::from_str("x = {").unwrap_err());
        assert!(matches!(err, Error::Settings(SettingsError::ParseError(_))));
    }
}
