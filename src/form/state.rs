//! Per-field value/validity state and the form-wide map of it

use super::value::FieldValue;
use serde::Serialize;
use std::collections::BTreeMap;

/// Value, dirtiness and validity of one field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldValueState {
    pub value: FieldValue,
    /// Touched by the user or forced by a validation trigger
    pub dirty: bool,
    /// `None` until the first validation pass
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl FieldValueState {
    pub fn new(value: FieldValue) -> Self {
        Self {
            value,
            dirty: false,
            valid: None,
            error_message: None,
        }
    }

    pub fn is_invalid(&self) -> bool {
        self.valid == Some(false)
    }

    /// Errors are only surfaced once the field is dirty
    pub fn shows_error(&self) -> bool {
        self.dirty && self.is_invalid()
    }
}

/// Field name -> latest reported state
pub type FieldStateMap = BTreeMap<String, FieldValueState>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_hidden_until_dirty() {
        let mut state = FieldValueState::new(FieldValue::text(""));
        state.valid = Some(false);
        state.error_message = Some("Required".to_string());
        assert!(!state.shows_error());

        state.dirty = true;
        assert!(state.shows_error());
    }

    #[test]
    fn dump_omits_unset_validity() {
        let state = FieldValueState::new(FieldValue::Flag(false));
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json, serde_json::json!({"value": false, "dirty": false}));
    }
}
