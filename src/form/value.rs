//! Field values and the change notifications widgets emit
//!
//! A widget never writes a `FieldValue` directly. It produces a `ChangeEvent`
//! (shaped like a DOM change target: a `value` string and a `checked` flag)
//! and the field's `ValueExtractor` decides which half to read.

use serde::Serialize;
use std::fmt;

/// Value held by a single field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)] // Dumps as a bare JSON string or bool
pub enum FieldValue {
    /// Text, number and select widgets (number keeps its raw input text)
    Text(String),
    /// Checkbox widgets
    Flag(bool),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    /// True for an empty text value. Flags are never blank.
    pub fn is_blank(&self) -> bool {
        matches!(self, FieldValue::Text(s) if s.is_empty())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            FieldValue::Flag(_) => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            FieldValue::Flag(b) => Some(*b),
            FieldValue::Text(_) => None,
        }
    }
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Flag(b) => write!(f, "{}", b),
        }
    }
}

/// A change notification from an input widget
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeEvent {
    /// The control's text value
    pub value: String,
    /// The control's checked state (checkboxes only)
    pub checked: bool,
}

impl ChangeEvent {
    /// Change event carrying a new text value
    pub fn value(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            checked: false,
        }
    }

    /// Change event carrying a new checked state
    pub fn checked(checked: bool) -> Self {
        Self {
            value: String::new(),
            checked,
        }
    }
}

/// Pulls a field value out of a change event
pub type ValueExtractor = fn(&ChangeEvent) -> FieldValue;

/// Default extractor: reads the event's `value`
pub fn value_from_event(event: &ChangeEvent) -> FieldValue {
    FieldValue::Text(event.value.clone())
}

/// Checkbox extractor: reads the event's `checked` flag
pub fn checked_from_event(event: &ChangeEvent) -> FieldValue {
    FieldValue::Flag(event.checked)
}
