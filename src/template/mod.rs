//! Template system for dialog markup
//!
//! The view builder only knows the [`Renderable`] capability: give it a
//! template name and a set of variables, get HTML back. [`TemplateEngine`] is
//! the stock implementation, backed by minijinja and a [`TemplateResolver`]
//! that checks theme directories before falling back to the built-in markup.
//!
//! # Example
//!
//! ```rust
//! use dialog_view::template::{Renderable, TemplateEngine};
//! use dialog_view::VariableMap;
//!
//! let engine = TemplateEngine::default();
//! let mut vars = VariableMap::new();
//! vars.insert("id".into(), "abc".into());
//! vars.insert("content".into(), "<p>Hi</p>".into());
//!
//! let html = engine.render("dialog", &vars).unwrap();
//! assert!(html.contains("<p>Hi</p>"));
//! ```

mod builtin;
mod engine;
mod resolver;

use std::path::PathBuf;

use thiserror::Error;

use crate::store::VariableMap;

pub use builtin::BUILTIN_TEMPLATES;
pub use engine::TemplateEngine;
pub use resolver::{TemplateOrigin, TemplateResolver, TemplateSource, DEFAULT_NAMESPACE};

/// Errors that can occur while resolving or rendering a template
#[derive(Debug, Error)]
pub enum TemplateError {
    /// No theme directory or built-in provides the template
    #[error("template not found: {name}")]
    NotFound { name: String },

    /// Error reading a template file from a theme directory
    #[error("error reading template file {path}: {message}")]
    FileReadError { path: PathBuf, message: String },

    /// Template failed to compile or render
    #[error("template {name} failed to render: {source}")]
    Render {
        name: String,
        #[source]
        source: minijinja::Error,
    },
}

/// Something that can turn a template name plus variables into HTML
pub trait Renderable {
    /// Render the named template with `vars` as its context
    fn render(&self, name: &str, vars: &VariableMap) -> Result<String, TemplateError>;
}
