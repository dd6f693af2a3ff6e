//! Dialog configuration: override layers and the merged record

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::store::VariableMap;

/// CSS effect applied when the dialog opens
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Effect {
    #[default]
    None,
    Fade,
    /// Any other effect name, passed to the script untouched
    Other(String),
}

impl From<String> for Effect {
    fn from(s: String) -> Self {
        match s.as_str() {
            "none" => Effect::None,
            "fade" => Effect::Fade,
            _ => Effect::Other(s),
        }
    }
}

impl From<&str> for Effect {
    fn from(s: &str) -> Self {
        Effect::from(s.to_string())
    }
}

impl From<Effect> for String {
    fn from(effect: Effect) -> Self {
        effect.to_string()
    }
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Effect::None => f.write_str("none"),
            Effect::Fade => f.write_str("fade"),
            Effect::Other(s) => f.write_str(s),
        }
    }
}

/// One layer of dialog overrides
///
/// Every field is optional; unset fields fall through to the layer below.
/// Keys the crate does not know about go in `extra` and reach the template
/// unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DialogArgs {
    pub button_id: Option<String>,
    pub button_name: Option<String>,
    pub button_text: Option<String>,
    pub button_type: Option<String>,
    pub button_value: Option<String>,
    pub content_classes: Option<String>,
    /// Additional data exposed to the template as `context`
    pub context: Option<Value>,
    pub template: Option<String>,
    pub title: Option<String>,
    pub trigger_classes: Option<String>,

    /// Selector the dialog is appended to instead of following the button
    pub append_target: Option<String>,
    pub body_lock: Option<bool>,
    pub close_button_aria_label: Option<String>,
    pub close_button_classes: Option<String>,
    pub content_wrapper_classes: Option<String>,
    pub effect: Option<Effect>,
    /// Milliseconds
    pub effect_speed: Option<u32>,
    pub effect_easing: Option<String>,
    pub overlay_classes: Option<String>,
    pub overlay_click_closes: Option<bool>,
    pub wrapper_classes: Option<String>,

    pub cancel_button_text: Option<String>,
    pub continue_button_text: Option<String>,
    pub alert_button_text: Option<String>,

    #[serde(flatten)]
    pub extra: VariableMap,
}

impl DialogArgs {
    /// Create an empty layer
    pub fn new() -> Self {
        Self::default()
    }

    /// Layer `self` on top of `lower`: fields set here win, everything else
    /// comes from `lower`
    ///
    /// Both layers are passed through [`DialogArgs::fold_extra`] first, so a
    /// known field given as an `extra` key keeps its layer's precedence.
    pub fn over(self, lower: DialogArgs) -> DialogArgs {
        self.fold_extra().merge(lower.fold_extra())
    }

    /// Move `extra` entries named after known fields into those fields
    ///
    /// String values are also tried as JSON, so `"true"` or `"300"` from the
    /// command line land in `body_lock` or `effect_speed`. A value of the
    /// wrong type is logged and stays in `extra`. Within one layer the
    /// `extra` entry wins over the typed field.
    pub fn fold_extra(mut self) -> Self {
        let keys: Vec<String> = self.extra.keys().cloned().collect();
        for key in keys {
            let Some(value) = self.extra.remove(&key) else {
                continue;
            };
            match Self::field_layer(&key, &value) {
                Ok(Some(layer)) => self = layer.merge(self),
                Ok(None) => {
                    self.extra.insert(key, value);
                }
                Err(e) => {
                    tracing::warn!(key = %key, error = %e, "override has the wrong type, passing it through untouched");
                    self.extra.insert(key, value);
                }
            }
        }
        self
    }

    /// A layer holding only `key`, or `None` if `key` is not a known field
    fn field_layer(key: &str, value: &Value) -> Result<Option<DialogArgs>, serde_json::Error> {
        let parse = |value: Value| -> Result<DialogArgs, serde_json::Error> {
            let mut map = serde_json::Map::new();
            map.insert(key.to_string(), value);
            serde_json::from_value(Value::Object(map))
        };

        match parse(value.clone()) {
            Ok(layer) if layer.extra.is_empty() => Ok(Some(layer)),
            Ok(_) => Ok(None),
            Err(e) => {
                let reparsed = value
                    .as_str()
                    .and_then(|s| serde_json::from_str::<Value>(s).ok());
                match reparsed.map(parse) {
                    Some(Ok(layer)) if layer.extra.is_empty() => Ok(Some(layer)),
                    _ => Err(e),
                }
            }
        }
    }

    fn merge(self, lower: DialogArgs) -> DialogArgs {
        let mut extra = lower.extra;
        extra.extend(self.extra);

        DialogArgs {
            button_id: self.button_id.or(lower.button_id),
            button_name: self.button_name.or(lower.button_name),
            button_text: self.button_text.or(lower.button_text),
            button_type: self.button_type.or(lower.button_type),
            button_value: self.button_value.or(lower.button_value),
            content_classes: self.content_classes.or(lower.content_classes),
            context: self.context.or(lower.context),
            template: self.template.or(lower.template),
            title: self.title.or(lower.title),
            trigger_classes: self.trigger_classes.or(lower.trigger_classes),
            append_target: self.append_target.or(lower.append_target),
            body_lock: self.body_lock.or(lower.body_lock),
            close_button_aria_label: self
                .close_button_aria_label
                .or(lower.close_button_aria_label),
            close_button_classes: self.close_button_classes.or(lower.close_button_classes),
            content_wrapper_classes: self
                .content_wrapper_classes
                .or(lower.content_wrapper_classes),
            effect: self.effect.or(lower.effect),
            effect_speed: self.effect_speed.or(lower.effect_speed),
            effect_easing: self.effect_easing.or(lower.effect_easing),
            overlay_classes: self.overlay_classes.or(lower.overlay_classes),
            overlay_click_closes: self.overlay_click_closes.or(lower.overlay_click_closes),
            wrapper_classes: self.wrapper_classes.or(lower.wrapper_classes),
            cancel_button_text: self.cancel_button_text.or(lower.cancel_button_text),
            continue_button_text: self.continue_button_text.or(lower.continue_button_text),
            alert_button_text: self.alert_button_text.or(lower.alert_button_text),
            extra,
        }
    }

    /// Set the dialog title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the trigger button label
    pub fn with_button_text(mut self, text: impl Into<String>) -> Self {
        self.button_text = Some(text.into());
        self
    }

    /// Set the template name
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }

    /// Set the "Cancel" button label (confirm dialogs)
    pub fn with_cancel_button_text(mut self, text: impl Into<String>) -> Self {
        self.cancel_button_text = Some(text.into());
        self
    }

    /// Set the "Confirm" button label (confirm dialogs)
    pub fn with_continue_button_text(mut self, text: impl Into<String>) -> Self {
        self.continue_button_text = Some(text.into());
        self
    }

    /// Set the open effect and its duration in milliseconds
    pub fn with_effect(mut self, effect: Effect, speed_ms: u32) -> Self {
        self.effect = Some(effect);
        self.effect_speed = Some(speed_ms);
        self
    }

    /// Set an arbitrary key passed through to the template
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// The fully merged record handed to the template
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DialogConfig {
    pub button_id: String,
    pub button_name: String,
    pub button_text: String,
    pub button_type: String,
    pub button_value: String,
    pub content_classes: String,
    pub context: Value,
    pub template: String,
    pub title: String,
    pub trigger_classes: String,

    pub append_target: String,
    pub body_lock: bool,
    pub close_button_aria_label: String,
    pub close_button_classes: String,
    pub content_wrapper_classes: String,
    pub effect: Effect,
    pub effect_speed: u32,
    pub effect_easing: String,
    pub overlay_classes: String,
    pub overlay_click_closes: bool,
    pub wrapper_classes: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancel_button_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub continue_button_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert_button_text: Option<String>,

    /// Dialog body, as HTML
    pub content: String,
    /// Unique id used in the dialog's data attributes
    pub id: String,

    /// Pass-through keys; see [`DialogConfig::to_variables`]
    #[serde(skip)]
    pub extra: VariableMap,
}

impl Default for DialogConfig {
    fn default() -> Self {
        Self {
            button_id: String::new(),
            button_name: String::new(),
            button_text: "Open the dialog window".to_string(),
            button_type: String::new(),
            button_value: String::new(),
            content_classes: "tribe-dialog__content".to_string(),
            context: Value::Null,
            template: "dialog".to_string(),
            title: String::new(),
            trigger_classes: "tribe_dialog_trigger".to_string(),
            append_target: String::new(),
            body_lock: false,
            close_button_aria_label: "Close this dialog window".to_string(),
            close_button_classes: "tribe-dialog__close-button".to_string(),
            content_wrapper_classes: "tribe-dialog__wrapper".to_string(),
            effect: Effect::None,
            effect_speed: 0,
            effect_easing: "ease-in-out".to_string(),
            overlay_classes: "tribe-dialog__overlay".to_string(),
            overlay_click_closes: false,
            wrapper_classes: "tribe-dialog".to_string(),
            cancel_button_text: None,
            continue_button_text: None,
            alert_button_text: None,
            content: String::new(),
            id: String::new(),
            extra: VariableMap::new(),
        }
    }
}

impl DialogConfig {
    /// Base defaults with `args` applied on top
    pub fn from_args(args: DialogArgs) -> Self {
        let mut config = Self::default();
        config.apply(args);
        config
    }

    /// Overwrite every field `args` sets
    pub fn apply(&mut self, args: DialogArgs) {
        let args = args.fold_extra();

        fn set<T>(slot: &mut T, value: Option<T>) {
            if let Some(v) = value {
                *slot = v;
            }
        }

        set(&mut self.button_id, args.button_id);
        set(&mut self.button_name, args.button_name);
        set(&mut self.button_text, args.button_text);
        set(&mut self.button_type, args.button_type);
        set(&mut self.button_value, args.button_value);
        set(&mut self.content_classes, args.content_classes);
        set(&mut self.context, args.context);
        set(&mut self.template, args.template);
        set(&mut self.title, args.title);
        set(&mut self.trigger_classes, args.trigger_classes);
        set(&mut self.append_target, args.append_target);
        set(&mut self.body_lock, args.body_lock);
        set(&mut self.close_button_aria_label, args.close_button_aria_label);
        set(&mut self.close_button_classes, args.close_button_classes);
        set(&mut self.content_wrapper_classes, args.content_wrapper_classes);
        set(&mut self.effect, args.effect);
        set(&mut self.effect_speed, args.effect_speed);
        set(&mut self.effect_easing, args.effect_easing);
        set(&mut self.overlay_classes, args.overlay_classes);
        set(&mut self.overlay_click_closes, args.overlay_click_closes);
        set(&mut self.wrapper_classes, args.wrapper_classes);

        if args.cancel_button_text.is_some() {
            self.cancel_button_text = args.cancel_button_text;
        }
        if args.continue_button_text.is_some() {
            self.continue_button_text = args.continue_button_text;
        }
        if args.alert_button_text.is_some() {
            self.alert_button_text = args.alert_button_text;
        }

        self.extra.extend(args.extra);
    }

    /// Flatten the record into template variables
    ///
    /// Unknown keys from `extra` sit alongside the known fields. `content`
    /// and `id` belong to the render and are never replaced by them.
    pub fn to_variables(&self) -> VariableMap {
        let mut vars: VariableMap = match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map.into_iter().collect(),
            Ok(_) => VariableMap::new(),
            Err(e) => {
                tracing::warn!(error = %e, "failed to convert dialog config to variables");
                VariableMap::new()
            }
        };
        for (key, value) in &self.extra {
            vars.entry(key.clone()).or_insert_with(|| value.clone());
        }
        vars
    }
}
