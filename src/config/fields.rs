//! `[[fields]]` entries: the initial Field Configuration List

use crate::form::{default_fields, FieldDefinition, FormError, WidgetKind};
use serde::Deserialize;
use std::collections::HashSet;

/// One configured field, as written in the config file
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: String,
    /// Widget label: Text, Number, Select or Checkbox
    pub kind: String,
    pub label: Option<String>,
    /// Attach the non-empty validator
    #[serde(default)]
    pub required: bool,
    /// Select options
    pub options: Option<Vec<String>>,
    /// Checkbox caption
    pub checkbox_text: Option<String>,
}

impl FieldSpec {
    pub fn to_definition(&self) -> Result<FieldDefinition, FormError> {
        let kind = WidgetKind::from_label(&self.kind)?;
        let mut def = FieldDefinition::new(self.name.clone(), kind);
        if let Some(label) = &self.label {
            def = def.with_label(label.clone());
        }
        if let Some(options) = &self.options {
            def = def.with_options(options.clone());
        }
        if let Some(text) = &self.checkbox_text {
            def = def.with_checkbox_text(text.clone());
        }
        if self.required {
            def = def.required();
        }
        Ok(def)
    }

    /// Config entry for a definition (validators other than `required` are not representable)
    pub fn from_definition(def: &FieldDefinition) -> Self {
        Self {
            name: def.name.clone(),
            kind: def.kind.label().to_string(),
            label: def.label.clone(),
            required: def.validator.is_some(),
            options: def.props.options.clone(),
            checkbox_text: def.props.checkbox_text.clone(),
        }
    }
}

impl super::Config {
    /// Field definitions the form starts with
    pub fn form_fields(&self) -> Result<Vec<FieldDefinition>, FormError> {
        if self.fields.is_empty() {
            return Ok(default_fields());
        }
        let mut seen = HashSet::new();
        self.fields
            .iter()
            .map(|spec| {
                if !seen.insert(spec.name.as_str()) {
                    return Err(FormError::DuplicateName(spec.name.clone()));
                }
                spec.to_definition()
            })
            .collect()
    }
}
