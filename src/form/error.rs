//! Form engine errors

use std::fmt;

/// Errors raised by the form configuration reducer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// A widget-kind label outside the closed `Text | Number | Select | Checkbox` table
    UnknownWidgetKind(String),
    /// A field name that is already configured
    DuplicateName(String),
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::UnknownWidgetKind(label) => {
                write!(f, "Unknown field type '{}' (expected Text, Number, Select or Checkbox)", label)
            }
            FormError::DuplicateName(name) => write!(f, "Duplicate field name '{}'", name),
        }
    }
}

impl std::error::Error for FormError {}
