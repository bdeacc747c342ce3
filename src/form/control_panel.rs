//! Control panel - adds fields to the form at runtime
//!
//! The panel's own inputs (field name, field type) are regular field
//! controllers reporting to an external sink, so they never show up in the
//! form's state map or validation registry.

use super::controller::{FieldController, FieldOptions, StateSink};
use super::coordinator::FormCoordinator;
use super::definition::WidgetKind;
use super::error::FormError;
use super::state::FieldValueState;
use super::value::FieldValue;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Name of the panel's field-name input
pub const NAME_INPUT: &str = "name";
/// Name of the panel's field-type input
pub const TYPE_INPUT: &str = "type";

/// Why an add was refused
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlPanelError {
    /// A field with this name already exists
    DuplicateName(String),
    /// Name or type not filled in
    MissingInput,
    /// The form rejected the definition
    Form(FormError),
}

impl fmt::Display for ControlPanelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControlPanelError::DuplicateName(_) => f.write_str("Name already in use"),
            ControlPanelError::MissingInput => f.write_str("Name and type required"),
            ControlPanelError::Form(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ControlPanelError {}

impl From<FormError> for ControlPanelError {
    fn from(e: FormError) -> Self {
        ControlPanelError::Form(e)
    }
}

/// Latest values reported by the panel inputs (empty text = unset)
#[derive(Debug, Clone, Default)]
struct Draft {
    name: Option<String>,
    kind: Option<String>,
}

pub struct ControlPanel {
    name_input: FieldController,
    type_input: FieldController,
    draft: Rc<RefCell<Draft>>,
    error: Option<ControlPanelError>,
}

impl ControlPanel {
    pub fn new() -> Self {
        let draft = Rc::new(RefCell::new(Draft::default()));

        let name_input = FieldController::mount(
            FieldOptions::new(NAME_INPUT, Self::draft_sink(&draft))
                .with_default(FieldValue::text("")),
        );
        let type_input = FieldController::mount(
            FieldOptions::new(TYPE_INPUT, Self::draft_sink(&draft))
                .with_default(FieldValue::text("")),
        );

        Self {
            name_input,
            type_input,
            draft,
            error: None,
        }
    }

    fn draft_sink(draft: &Rc<RefCell<Draft>>) -> StateSink {
        let draft = Rc::clone(draft);
        StateSink::External(Box::new(move |name: &str, state: &FieldValueState| {
            let text = state
                .value
                .as_text()
                .filter(|s| !s.is_empty())
                .map(str::to_string);
            let mut draft = draft.borrow_mut();
            match name {
                NAME_INPUT => draft.name = text,
                TYPE_INPUT => draft.kind = text,
                _ => {}
            }
        }))
    }

    /// Choices offered by the type input
    pub fn type_options() -> Vec<String> {
        WidgetKind::ALL
            .iter()
            .map(|kind| kind.label().to_string())
            .collect()
    }

    pub fn name_input(&self) -> &FieldController {
        &self.name_input
    }

    pub fn type_input(&self) -> &FieldController {
        &self.type_input
    }

    #[allow(dead_code)] // Used by tests
    pub fn draft_name(&self) -> Option<String> {
        self.draft.borrow().name.clone()
    }

    #[allow(dead_code)] // Used by tests
    pub fn draft_kind(&self) -> Option<String> {
        self.draft.borrow().kind.clone()
    }

    /// Error from the last add attempt, if it failed
    pub fn error(&self) -> Option<&ControlPanelError> {
        self.error.as_ref()
    }

    /// Validate the draft and append it to the form
    pub fn add_field(&mut self, form: &mut FormCoordinator) -> Result<(), ControlPanelError> {
        let result = self.try_add(form);
        match &result {
            Ok(()) => self.error = None,
            Err(e) => {
                tracing::warn!("Add field rejected: {}", e);
                self.error = Some(e.clone());
            }
        }
        result
    }

    fn try_add(&self, form: &mut FormCoordinator) -> Result<(), ControlPanelError> {
        let draft = self.draft.borrow().clone();

        if let Some(name) = &draft.name {
            if form.contains(name) {
                return Err(ControlPanelError::DuplicateName(name.clone()));
            }
        }

        let (Some(name), Some(kind)) = (draft.name, draft.kind) else {
            return Err(ControlPanelError::MissingInput);
        };

        form.add_field(name.as_str(), &kind)?;
        tracing::info!(field = %name, kind = %kind, "Field added");
        Ok(())
    }

    /// Pretty JSON of the form's whole state map
    pub fn state_dump(form: &FormCoordinator) -> String {
        serde_json::to_string_pretty(form.states())
            .unwrap_or_else(|e| format!("<state not serializable: {}>", e))
    }
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self::new()
    }
}
