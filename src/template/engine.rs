//! minijinja-backed [`Renderable`]

use std::sync::Arc;

use minijinja::{AutoEscape, Environment, Error, ErrorKind, Value};

use super::resolver::TemplateResolver;
use super::{Renderable, TemplateError};
use crate::store::VariableMap;

/// Renders templates found by a [`TemplateResolver`]
///
/// Output is HTML-escaped by default; templates mark pre-rendered markup such
/// as the dialog content with `|safe`.
pub struct TemplateEngine {
    env: Environment<'static>,
    resolver: Arc<TemplateResolver>,
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new(TemplateResolver::default())
    }
}

impl TemplateEngine {
    /// Create an engine that loads templates through `resolver`
    pub fn new(resolver: TemplateResolver) -> Self {
        let resolver = Arc::new(resolver);
        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::Html);

        let loader = Arc::clone(&resolver);
        env.set_loader(move |name| {
            loader
                .resolve(name)
                .map(|found| found.map(|t| t.source))
                .map_err(|e| {
                    Error::new(ErrorKind::InvalidOperation, "failed to load template")
                        .with_source(e)
                })
        });

        Self { env, resolver }
    }

    /// The resolver backing this engine
    pub fn resolver(&self) -> &TemplateResolver {
        &self.resolver
    }
}

impl Renderable for TemplateEngine {
    fn render(&self, name: &str, vars: &VariableMap) -> Result<String, TemplateError> {
        let template = self.env.get_template(name).map_err(|source| {
            if source.kind() == ErrorKind::TemplateNotFound {
                TemplateError::NotFound {
                    name: name.to_string(),
                }
            } else {
                TemplateError::Render {
                    name: name.to_string(),
                    source,
                }
            }
        })?;

        template
            .render(Value::from_serialize(vars))
            .map_err(|source| TemplateError::Render {
                name: name.to_string(),
                source,
            })
    }
}
