//! Dialog view builder
//!
//! Renders dismissible overlays (dialogs, modals, confirmations, alerts) from
//! HTML content and a layered configuration: built-in base defaults, then the
//! preset's defaults, then the caller's overrides. The merged record is handed
//! to a [`Renderable`](crate::template::Renderable) as template variables.

mod args;
mod hooks;
mod id;
mod preset;
mod view;

pub use args::{DialogArgs, DialogConfig, Effect};
pub use hooks::{DialogHooks, FilterChain};
pub use id::unique_id;
pub use preset::Preset;
pub use view::{DialogView, Output};
