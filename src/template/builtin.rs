//! Markup shipped with the crate

/// Built-in templates, by name
pub const BUILTIN_TEMPLATES: &[(&str, &str)] = &[
    ("dialog", include_str!("../../templates/dialog.html")),
    ("modal", include_str!("../../templates/modal.html")),
    ("confirm", include_str!("../../templates/confirm.html")),
    ("alert", include_str!("../../templates/alert.html")),
    ("button", include_str!("../../templates/button.html")),
];

pub(crate) fn builtin_source(name: &str) -> Option<&'static str> {
    BUILTIN_TEMPLATES
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, src)| *src)
}
