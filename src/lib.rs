//! Dialog View - configurable dialog, modal, confirm and alert markup
//!
//! This library merges layered dialog configuration (base defaults, preset
//! defaults, caller overrides) and renders it through a template engine into
//! an HTML fragment, ready for the front-end dialog script.
//!
//! # Example
//!
//! ```rust
//! use dialog_view::render;
//!
//! let html = render("<p>Are you sure?</p>");
//! assert!(html.contains("<p>Are you sure?</p>"));
//! assert!(html.contains("tribe-dialog"));
//! ```

pub mod dialog;
pub mod error;
pub mod photo;
pub mod settings;
pub mod store;
pub mod template;

pub use dialog::{DialogArgs, DialogConfig, DialogView, Effect, Output, Preset};
pub use error::Error;
pub use settings::{Settings, SettingsError};
pub use store::{Scope, VariableMap, VariableStore};
pub use template::{Renderable, TemplateEngine, TemplateError, TemplateResolver};

/// Render a plain dialog with default configuration
///
/// Returns an empty string for empty content.
pub fn render(content: &str) -> String {
    render_preset(Preset::Dialog, content, DialogArgs::default())
}

/// Render a preset with the built-in templates
///
/// # Example
///
/// ```rust
/// use dialog_view::{render_preset, DialogArgs, Preset};
///
/// let html = render_preset(
///     Preset::Confirm,
///     "Discard changes?",
///     DialogArgs::new().with_cancel_button_text("Keep editing"),
/// );
///
/// assert!(html.contains("Keep editing"));
/// assert!(html.contains("Confirm"));
/// ```
pub fn render_preset(preset: Preset, content: &str, args: DialogArgs) -> String {
    let mut view: DialogView = DialogView::default();
    view.render_preset(preset, content, args, None, Output::Return)
        .unwrap_or_default()
}
