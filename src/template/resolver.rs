//! Template resolution - theme directories first, then built-in markup

use std::path::{Path, PathBuf};

use super::builtin::builtin_source;
use super::TemplateError;

/// Subdirectory of each theme directory that holds dialog overrides
pub const DEFAULT_NAMESPACE: &str = "dialogs";

/// File extension for template files in theme directories
const TEMPLATE_EXTENSION: &str = "html";

/// Where a resolved template came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateOrigin {
    /// An override file found in a theme directory
    Theme(PathBuf),
    /// Markup compiled into the crate
    Builtin,
}

/// A resolved template and its origin
#[derive(Debug, Clone)]
pub struct TemplateSource {
    pub origin: TemplateOrigin,
    pub source: String,
}

/// Finds template sources by name
#[derive(Debug, Clone)]
pub struct TemplateResolver {
    namespace: String,
    theme_dirs: Vec<PathBuf>,
}

impl Default for TemplateResolver {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            theme_dirs: Vec::new(),
        }
    }
}

impl TemplateResolver {
    /// Create a resolver that only knows the built-in templates
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the namespace subdirectory searched inside theme directories
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Add a theme directory; earlier directories take precedence
    pub fn with_theme_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.theme_dirs.push(dir.into());
        self
    }

    /// Add several theme directories in priority order
    pub fn with_theme_dirs<I, P>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.theme_dirs.extend(dirs.into_iter().map(Into::into));
        self
    }

    /// The namespace subdirectory
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Theme directories in search order
    pub fn theme_dirs(&self) -> &[PathBuf] {
        &self.theme_dirs
    }

    /// Path a theme would use to override `name` inside `dir`
    pub fn override_path(&self, dir: &Path, name: &str) -> PathBuf {
        dir.join(&self.namespace)
            .join(format!("{}.{}", name, TEMPLATE_EXTENSION))
    }

    /// Resolve a template by name
    ///
    /// Returns `Ok(None)` when nothing provides the template.
    pub fn resolve(&self, name: &str) -> Result<Option<TemplateSource>, TemplateError> {
        if !is_safe_name(name) {
            tracing::debug!(template = name, "rejecting template name");
            return Ok(None);
        }

        for dir in &self.theme_dirs {
            let path = self.override_path(dir, name);
            if !path.is_file() {
                continue;
            }
            let source =
                std::fs::read_to_string(&path).map_err(|e| TemplateError::FileReadError {
                    path: path.clone(),
                    message: e.to_string(),
                })?;
            tracing::debug!(template = name, path = %path.display(), "using theme override");
            return Ok(Some(TemplateSource {
                origin: TemplateOrigin::Theme(path),
                source,
            }));
        }

        Ok(builtin_source(name).map(|source| {
            tracing::debug!(template = name, "using built-in template");
            TemplateSource {
                origin: TemplateOrigin::Builtin,
                source: source.to_string(),
            }
        }))
    }
}

/// Template names map onto file names, so keep them to a single path segment
fn is_safe_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_builtin() {
        let resolver = TemplateResolver::new();
        let found = resolver.resolve("dialog").unwrap().unwrap();
        assert_eq!(found.origin, TemplateOrigin::Builtin);
        assert!(!found.source.is_empty());
    }

    #[test]
    fn test_resolve_unknown_is_none() {
        let resolver = TemplateResolver::new();
        assert!(resolver.resolve("lightbox").unwrap().is_none());
    }

    #[test]
    fn test_resolve_rejects_path_traversal() {
        let resolver = TemplateResolver::new().with_theme_dir("/tmp");
        assert!(resolver.resolve("../etc/passwd").unwrap().is_none());
        assert!(resolver.resolve("").unwrap().is_none());
    }

    #[test]
    fn test_override_path_uses_namespace() {
        let resolver = TemplateResolver::new().with_namespace("modals");
        let path = resolver.override_path(Path::new("theme"), "alert");
        assert_eq!(path, PathBuf::from("theme/modals/alert.html"));
    }
}
