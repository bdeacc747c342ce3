//! Field definitions: what a field is, before it is mounted
//!
//! The widget-kind table is closed. Adding a kind means adding a variant here,
//! a widget in `tui::widgets`, and an entry in `WidgetKind::from_label`.

use super::error::FormError;
use super::value::{checked_from_event, value_from_event, FieldValue, ValueExtractor};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::rc::Rc;

/// Error message produced by the built-in required validator
pub const REQUIRED_MESSAGE: &str = "Required";

/// Number of placeholder options a select gets when none are configured
const FALLBACK_OPTION_COUNT: usize = 15;

/// Input widget used to render a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WidgetKind {
    Text,
    Number,
    Select,
    Checkbox,
}

impl WidgetKind {
    /// Every kind, in the order the control panel offers them
    pub const ALL: [WidgetKind; 4] = [
        WidgetKind::Text,
        WidgetKind::Number,
        WidgetKind::Select,
        WidgetKind::Checkbox,
    ];

    /// Resolve a label from the closed label table
    pub fn from_label(label: &str) -> Result<Self, FormError> {
        match label {
            "Text" => Ok(WidgetKind::Text),
            "Number" => Ok(WidgetKind::Number),
            "Select" => Ok(WidgetKind::Select),
            "Checkbox" => Ok(WidgetKind::Checkbox),
            other => Err(FormError::UnknownWidgetKind(other.to_string())),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            WidgetKind::Text => "Text",
            WidgetKind::Number => "Number",
            WidgetKind::Select => "Select",
            WidgetKind::Checkbox => "Checkbox",
        }
    }

    /// Value a freshly mounted field starts with
    pub fn default_value(self) -> FieldValue {
        match self {
            WidgetKind::Checkbox => FieldValue::Flag(false),
            WidgetKind::Text | WidgetKind::Number | WidgetKind::Select => FieldValue::default(),
        }
    }

    /// How this widget's change events map to values
    pub fn value_extractor(self) -> ValueExtractor {
        match self {
            // Checkbox state lives in `checked`, not `value`
            WidgetKind::Checkbox => checked_from_event,
            WidgetKind::Text | WidgetKind::Number | WidgetKind::Select => value_from_event,
        }
    }
}

impl fmt::Display for WidgetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Field validation function: `None` when valid, otherwise the error message
#[derive(Clone)]
pub struct Validator(Rc<dyn Fn(&FieldValue) -> Option<String>>);

impl Validator {
    pub fn new(check: impl Fn(&FieldValue) -> Option<String> + 'static) -> Self {
        Self(Rc::new(check))
    }

    /// Non-empty string required. Checkbox flags always pass.
    pub fn required() -> Self {
        Self::new(|value| value.is_blank().then(|| REQUIRED_MESSAGE.to_string()))
    }

    pub fn check(&self, value: &FieldValue) -> Option<String> {
        (self.0)(value)
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Validator(..)")
    }
}

/// Widget-specific extras
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtraProps {
    /// Select options (select only)
    pub options: Option<Vec<String>>,
    /// Text shown next to the box (checkbox only)
    pub checkbox_text: Option<String>,
}

impl ExtraProps {
    /// Configured options, or `Value #0` .. `Value #14`
    pub fn select_options(&self) -> Vec<String> {
        match &self.options {
            Some(options) => options.clone(),
            None => (0..FALLBACK_OPTION_COUNT)
                .map(|i| format!("Value #{}", i))
                .collect(),
        }
    }

    pub fn checkbox_text(&self) -> &str {
        self.checkbox_text.as_deref().unwrap_or("Checkbox")
    }
}

/// One entry in the Field Configuration List
#[derive(Debug, Clone)]
pub struct FieldDefinition {
    /// Unique key
    pub name: String,
    pub kind: WidgetKind,
    pub label: Option<String>,
    pub validator: Option<Validator>,
    pub props: ExtraProps,
}

impl FieldDefinition {
    pub fn new(name: impl Into<String>, kind: WidgetKind) -> Self {
        Self {
            name: name.into(),
            kind,
            label: None,
            validator: None,
            props: ExtraProps::default(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.validator = Some(validator);
        self
    }

    pub fn required(self) -> Self {
        self.with_validator(Validator::required())
    }

    pub fn with_options(mut self, options: Vec<String>) -> Self {
        self.props.options = Some(options);
        self
    }

    pub fn with_checkbox_text(mut self, text: impl Into<String>) -> Self {
        self.props.checkbox_text = Some(text.into());
        self
    }

    /// Label if set, otherwise the name
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.name)
    }
}

/// The form shown when nothing else is configured
pub fn default_fields() -> Vec<FieldDefinition> {
    vec![
        FieldDefinition::new("Text 1", WidgetKind::Text).required(),
        FieldDefinition::new("Number 1", WidgetKind::Number).required(),
        FieldDefinition::new("Select 1", WidgetKind::Select).required(),
        FieldDefinition::new("Checkbox 1", WidgetKind::Checkbox).with_checkbox_text("Checkbox"),
    ]
}
