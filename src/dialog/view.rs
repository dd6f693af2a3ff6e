//! The dialog view builder

use std::io::{self, Write};

use crate::store::{Scope, VariableStore};
use crate::template::{Renderable, TemplateEngine};

use super::args::{DialogArgs, DialogConfig};
use super::hooks::DialogHooks;
use super::id::unique_id;
use super::preset::Preset;

/// What to do with the rendered HTML
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Output {
    /// Write to the view's output sink and return nothing
    #[default]
    Echo,
    /// Hand the HTML back to the caller
    Return,
}

/// Builds dialog, modal, confirm and alert markup
///
/// The view owns a [`VariableStore`]: persistent values set on it are visible
/// to every dialog, while each render replaces the scoped tier with that
/// dialog's merged configuration.
///
/// # Example
///
/// ```rust
/// use dialog_view::{DialogArgs, DialogView, Output};
///
/// let mut view: DialogView = DialogView::default();
/// let html = view
///     .render_confirm("Delete this event?", DialogArgs::new(), Some("del"), Output::Return)
///     .unwrap();
/// assert!(html.contains("tribe-confirm__content"));
/// ```
pub struct DialogView<R = TemplateEngine> {
    renderer: R,
    hooks: DialogHooks,
    store: VariableStore,
    output: Box<dyn Write>,
}

impl Default for DialogView<TemplateEngine> {
    fn default() -> Self {
        Self::new(TemplateEngine::default())
    }
}

impl<R: Renderable> DialogView<R> {
    /// Create a view that renders through `renderer` and echoes to stdout
    pub fn new(renderer: R) -> Self {
        Self {
            renderer,
            hooks: DialogHooks::default(),
            store: VariableStore::new(),
            output: Box::new(io::stdout()),
        }
    }

    /// Send echoed output somewhere other than stdout
    pub fn with_output(mut self, output: impl Write + 'static) -> Self {
        self.output = Box::new(output);
        self
    }

    /// Register a callback that rewrites the merged record
    pub fn on_args<F>(mut self, filter: F) -> Self
    where
        F: Fn(DialogConfig, &str) -> DialogConfig + 'static,
    {
        self.hooks.args.add(filter);
        self
    }

    /// Register a callback that picks the template name
    pub fn on_template<F>(mut self, filter: F) -> Self
    where
        F: Fn(String, &DialogConfig) -> String + 'static,
    {
        self.hooks.template.add(filter);
        self
    }

    /// Register a callback that rewrites the rendered HTML
    pub fn on_html<F>(mut self, filter: F) -> Self
    where
        F: Fn(String, &DialogConfig) -> String + 'static,
    {
        self.hooks.html.add(filter);
        self
    }

    /// The extension points, for registering callbacks after construction
    pub fn hooks_mut(&mut self) -> &mut DialogHooks {
        &mut self.hooks
    }

    /// The rendering collaborator
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Template variables shared by every render
    pub fn store(&self) -> &VariableStore {
        &self.store
    }

    /// Mutable access to the template variables, e.g. to set persistent globals
    pub fn store_mut(&mut self) -> &mut VariableStore {
        &mut self.store
    }

    /// Render a dialog
    ///
    /// Empty `content` renders nothing and returns `Some("")` in either
    /// output mode. Otherwise [`Output::Echo`] writes the HTML to the output
    /// sink and returns `None`, and [`Output::Return`] returns it.
    pub fn render_dialog(
        &mut self,
        content: &str,
        args: DialogArgs,
        id: Option<&str>,
        output: Output,
    ) -> Option<String> {
        if content.is_empty() {
            return Some(String::new());
        }

        let id = match id {
            Some(id) => id.to_string(),
            None => unique_id(),
        };

        let html = self.build_dialog(content, &id, args);

        match output {
            Output::Return => Some(html),
            Output::Echo => {
                if let Err(e) = self.echo(&html) {
                    tracing::warn!(id = %id, error = %e, "failed to write dialog output");
                }
                None
            }
        }
    }

    /// Render a modal: body lock, fade in, overlay click closes
    pub fn render_modal(
        &mut self,
        content: &str,
        args: DialogArgs,
        id: Option<&str>,
        output: Output,
    ) -> Option<String> {
        self.render_preset(Preset::Modal, content, args, id, output)
    }

    /// Render a confirmation dialog with Cancel/Confirm buttons
    pub fn render_confirm(
        &mut self,
        content: &str,
        args: DialogArgs,
        id: Option<&str>,
        output: Output,
    ) -> Option<String> {
        self.render_preset(Preset::Confirm, content, args, id, output)
    }

    /// Render an alert with a single OK button
    pub fn render_alert(
        &mut self,
        content: &str,
        args: DialogArgs,
        id: Option<&str>,
        output: Output,
    ) -> Option<String> {
        self.render_preset(Preset::Alert, content, args, id, output)
    }

    /// Render any preset; caller `args` win over the preset's defaults
    pub fn render_preset(
        &mut self,
        preset: Preset,
        content: &str,
        args: DialogArgs,
        id: Option<&str>,
        output: Output,
    ) -> Option<String> {
        let args = args.over(preset.defaults());
        self.render_dialog(content, args, id, output)
    }

    /// Merge the configuration that a render with these inputs would use,
    /// including the args hooks, without rendering anything
    pub fn resolve_config(&self, content: &str, id: &str, args: DialogArgs) -> DialogConfig {
        let mut config = DialogConfig::from_args(args);
        config.content = content.to_string();
        config.id = id.to_string();
        self.hooks.args.apply(config, content)
    }

    fn build_dialog(&mut self, content: &str, id: &str, args: DialogArgs) -> String {
        let config = self.resolve_config(content, id, args);
        let template = self.hooks.template.apply(config.template.clone(), &config);

        self.store.clear_scoped();
        self.store.set_values(config.to_variables(), Scope::Scoped);

        let html = match self.renderer.render(&template, &self.store.merged()) {
            Ok(html) => html,
            Err(e) => {
                tracing::warn!(template = %template, id = %id, error = %e, "dialog template failed to render");
                String::new()
            }
        };

        self.hooks.html.apply(html, &config)
    }

    fn echo(&mut self, html: &str) -> io::Result<()> {
        self.output.write_all(html.as_bytes())?;
        self.output.flush()
    }
}
