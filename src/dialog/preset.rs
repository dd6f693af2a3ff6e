//! Preset default tables for the dialog variants

use std::fmt;
use std::str::FromStr;

use super::args::{DialogArgs, Effect};

/// The dialog variants the view knows how to build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Preset {
    #[default]
    Dialog,
    Modal,
    Confirm,
    Alert,
}

impl Preset {
    /// Every preset, in declaration order
    pub const ALL: [Preset; 4] = [Preset::Dialog, Preset::Modal, Preset::Confirm, Preset::Alert];

    /// Template name this preset renders with
    pub fn template_name(self) -> &'static str {
        match self {
            Preset::Dialog => "dialog",
            Preset::Modal => "modal",
            Preset::Confirm => "confirm",
            Preset::Alert => "alert",
        }
    }

    /// Default overrides layered between the base defaults and the caller
    pub fn defaults(self) -> DialogArgs {
        match self {
            Preset::Dialog => DialogArgs::default(),
            Preset::Modal => DialogArgs {
                append_target: Some("body".into()),
                body_lock: Some(true),
                button_text: Some("Open the modal window".into()),
                close_button_aria_label: Some("Close this modal window".into()),
                close_button_classes: Some(
                    "tribe-dialog__close-button tribe-modal__close-button".into(),
                ),
                content_classes: Some("tribe-dialog__content tribe-modal__content".into()),
                content_wrapper_classes: Some("tribe-dialog__wrapper tribe-modal__wrapper".into()),
                effect: Some(Effect::Fade),
                effect_speed: Some(300),
                overlay_classes: Some("tribe-dialog__overlay tribe-modal__overlay".into()),
                overlay_click_closes: Some(true),
                template: Some("modal".into()),
                ..DialogArgs::default()
            },
            Preset::Confirm => DialogArgs {
                body_lock: Some(true),
                cancel_button_text: Some("Cancel".into()),
                continue_button_text: Some("Confirm".into()),
                close_button_aria_label: Some(String::new()),
                close_button_classes: Some("tribe-dialog__close-button--hidden".into()),
                content_classes: Some("tribe-dialog__content tribe-confirm__content".into()),
                content_wrapper_classes: Some(
                    "tribe-dialog__wrapper tribe-confirm__wrapper".into(),
                ),
                overlay_classes: Some("tribe-dialog__overlay tribe-confirm__overlay".into()),
                template: Some("confirm".into()),
                ..DialogArgs::default()
            },
            Preset::Alert => DialogArgs {
                alert_button_text: Some("OK".into()),
                body_lock: Some(true),
                close_button_aria_label: Some(String::new()),
                close_button_classes: Some("tribe-dialog__close-button--hidden".into()),
                content_classes: Some("tribe-dialog__content tribe-alert__content".into()),
                content_wrapper_classes: Some("tribe-dialog__wrapper tribe-alert__wrapper".into()),
                overlay_classes: Some("tribe-dialog__overlay tribe-alert__overlay".into()),
                template: Some("alert".into()),
                ..DialogArgs::default()
            },
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.template_name())
    }
}

impl FromStr for Preset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preset::ALL
            .into_iter()
            .find(|p| p.template_name() == s)
            .ok_or_else(|| format!("unknown preset '{}'", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialog::DialogConfig;

    #[test]
    fn test_preset_template_matches_defaults() {
        for preset in Preset::ALL {
            let config = DialogConfig::from_args(preset.defaults());
            assert_eq!(config.template, preset.template_name());
        }
    }

    #[test]
    fn test_modal_defaults() {
        let config = DialogConfig::from_args(Preset::Modal.defaults());
        assert!(config.body_lock);
        assert!(config.overlay_click_closes);
        assert_eq!(config.effect, Effect::Fade);
        assert_eq!(config.effect_speed, 300);
        assert_eq!(config.append_target, "body");
    }

    #[test]
    fn test_alert_keeps_base_fields() {
        let config = DialogConfig::from_args(Preset::Alert.defaults());
        assert_eq!(config.alert_button_text.as_deref(), Some("OK"));
        assert_eq!(config.effect, Effect::None);
        assert_eq!(config.wrapper_classes, "tribe-dialog");
        assert_eq!(config.close_button_aria_label, "");
    }

    #[test]
    fn test_from_str_round_trip() {
        assert_eq!("confirm".parse::<Preset>(), Ok(Preset::Confirm));
        assert!("lightbox".parse::<Preset>().is_err());
    }
}
