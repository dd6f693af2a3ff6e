//! Settings file support
//!
//! A settings file configures where templates are looked up, which template
//! variables every dialog sees, and default dialog arguments:
//!
//! ```toml
//! [templates]
//! namespace = "dialogs"
//! theme_dirs = ["theme"]
//!
//! [globals]
//! site_name = "Example Events"
//!
//! [args]
//! title = "Heads up"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::dialog::{DialogArgs, DialogView};
use crate::store::{Scope, VariableMap};
use crate::template::{TemplateEngine, TemplateResolver, DEFAULT_NAMESPACE};

/// Errors that can occur when loading or parsing settings
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to read settings file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse settings TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Template lookup settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TemplateSettings {
    /// Subdirectory of each theme directory holding overrides
    pub namespace: String,
    /// Theme directories, highest priority first
    pub theme_dirs: Vec<PathBuf>,
}

impl Default for TemplateSettings {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            theme_dirs: Vec::new(),
        }
    }
}

/// Everything a settings file can configure
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub templates: TemplateSettings,
    /// Persistent template variables
    pub globals: VariableMap,
    /// Default arguments applied under the caller's own
    pub args: DialogArgs,
}

impl Settings {
    /// Load settings from a TOML file
    ///
    /// Relative theme directories are resolved against the file's directory.
    pub fn from_file(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path)?;
        let mut settings = Self::from_str(&content)?;
        if let Some(base) = path.parent() {
            settings.templates.theme_dirs = settings
                .templates
                .theme_dirs
                .into_iter()
                .map(|dir| if dir.is_relative() { base.join(dir) } else { dir })
                .collect();
        }
        Ok(settings)
    }

    /// Load settings from a TOML string
    pub fn from_str(content: &str) -> Result<Self, SettingsError> {
        Ok(toml::from_str(content)?)
    }

    /// Add a theme directory with lower priority than the configured ones
    pub fn with_theme_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.templates.theme_dirs.push(dir.into());
        self
    }

    /// Template resolver for these settings
    pub fn resolver(&self) -> TemplateResolver {
        TemplateResolver::new()
            .with_namespace(self.templates.namespace.clone())
            .with_theme_dirs(self.templates.theme_dirs.iter().cloned())
    }

    /// A dialog view with these settings' templates and global variables
    pub fn build_view(&self) -> DialogView {
        let mut view = DialogView::new(TemplateEngine::new(self.resolver()));
        view.store_mut()
            .set_values(self.globals.clone(), Scope::Persistent);
        view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_settings() {
        let settings = Settings::from_str("").unwrap();
        assert_eq!(settings.templates.namespace, DEFAULT_NAMESPACE);
        assert!(settings.templates.theme_dirs.is_empty());
        assert!(settings.globals.is_empty());
        assert_eq!(settings.args, DialogArgs::default());
    }

    #[test]
    fn test_parse_full_settings() {
        let toml_str = r#"
[templates]
namespace = "overlays"
theme_dirs = ["/srv/theme"]

[globals]
site_name = "Example Events"
year = 2024

[args]
title = "Heads up"
body_lock = true
data_source = "settings"
"#;
        let settings = Settings::from_str(toml_str).expect("Should parse");
        assert_eq!(settings.templates.namespace, "overlays");
        assert_eq!(settings.templates.theme_dirs, vec![PathBuf::from("/srv/theme")]);
        assert_eq!(settings.globals.get("year"), Some(&json!(2024)));
        assert_eq!(settings.args.title.as_deref(), Some("Heads up"));
        assert_eq!(settings.args.body_lock, Some(true));
        assert_eq!(settings.args.extra.get("data_source"), Some(&json!("settings")));
    }

    #[test]
    fn test_build_view_sets_globals() {
        let settings = Settings::from_str("[globals]\nsite_name = \"x\"").unwrap();
        let view = settings.build_view();
        assert_eq!(view.store().persistent().get("site_name"), Some(&json!("x")));
    }

    #[test]
    fn test_invalid_toml_error() {
        let result = Settings::from_str("this is not valid toml {{{{");
        assert!(matches!(result, Err(SettingsError::ParseError(_))));
    }
}
