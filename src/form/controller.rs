//! Generic field controller - local state, validation and reporting for one field
//!
//! A controller owns its field's `FieldValueState`. Every change is reported
//! to exactly one sink, chosen at construction:
//! - `StateSink::Form`: queued onto the form's update queue (lands on `settle()`)
//!   and the field's trigger is registered in the form's validation registry
//! - `StateSink::External`: handed synchronously to a callback; the form is
//!   never told about the field
//!
//! Mounting registers the trigger; dropping the controller unregisters it.

use super::coordinator::{FormHandle, FormStateAction};
use super::definition::{FieldDefinition, Validator};
use super::registry::RegistrationToken;
use super::state::FieldValueState;
use super::value::{value_from_event, ChangeEvent, FieldValue, ValueExtractor};
use std::cell::RefCell;
use std::rc::Rc;

/// Callback receiving `(name, state)` on every change
pub type StateCallback = Box<dyn Fn(&str, &FieldValueState)>;

/// Where a field reports its state
pub enum StateSink {
    /// Report into the form's Field State Map
    Form(FormHandle),
    /// Report to a caller-supplied callback instead
    External(StateCallback),
}

/// Construction inputs for a field controller
pub struct FieldOptions {
    pub name: String,
    pub default_value: Option<FieldValue>,
    pub sink: StateSink,
    pub validator: Option<Validator>,
    pub value_from_event: Option<ValueExtractor>,
}

impl FieldOptions {
    pub fn new(name: impl Into<String>, sink: StateSink) -> Self {
        Self {
            name: name.into(),
            default_value: None,
            sink,
            validator: None,
            value_from_event: None,
        }
    }

    /// Options for a field rendered from the configuration list
    pub fn for_definition(def: &FieldDefinition, handle: FormHandle) -> Self {
        Self {
            name: def.name.clone(),
            default_value: Some(def.kind.default_value()),
            sink: StateSink::Form(handle),
            validator: def.validator.clone(),
            value_from_event: Some(def.kind.value_extractor()),
        }
    }

    pub fn with_default(mut self, value: FieldValue) -> Self {
        self.default_value = Some(value);
        self
    }

    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.validator = Some(validator);
        self
    }

    pub fn with_extractor(mut self, extractor: ValueExtractor) -> Self {
        self.value_from_event = Some(extractor);
        self
    }
}

/// State shared between the controller and its registered trigger
struct FieldCell {
    name: String,
    state: RefCell<FieldValueState>,
    validator: Option<Validator>,
    sink: StateSink,
}

impl FieldCell {
    fn mark_dirty(&self) {
        self.state.borrow_mut().dirty = true;
    }

    fn validate(&self) {
        // Validator panics propagate: a throwing validator is a bug
        let error_message = {
            let state = self.state.borrow();
            self.validator
                .as_ref()
                .and_then(|validator| validator.check(&state.value))
        };
        {
            let mut state = self.state.borrow_mut();
            state.valid = Some(error_message.is_none());
            state.error_message = error_message;
        }
        self.report();
    }

    fn report(&self) {
        let snapshot = self.state.borrow().clone();
        match &self.sink {
            StateSink::External(callback) => callback(&self.name, &snapshot),
            StateSink::Form(handle) => handle.report(FormStateAction::SetFieldState {
                name: self.name.clone(),
                state: snapshot,
            }),
        }
    }
}

/// A mounted field
pub struct FieldController {
    cell: Rc<FieldCell>,
    extractor: ValueExtractor,
    registration: Option<(FormHandle, RegistrationToken)>,
}

impl FieldController {
    /// Mount a field: initial validation pass, then trigger registration
    pub fn mount(options: FieldOptions) -> Self {
        let FieldOptions {
            name,
            default_value,
            sink,
            validator,
            value_from_event: extractor,
        } = options;

        let cell = Rc::new(FieldCell {
            name,
            state: RefCell::new(FieldValueState::new(default_value.unwrap_or_default())),
            validator,
            sink,
        });

        // `valid` is unknown until this first pass; `dirty` stays false
        cell.validate();

        let registration = match &cell.sink {
            StateSink::Form(handle) => {
                let weak = Rc::downgrade(&cell);
                let token = handle.register(
                    &cell.name,
                    Rc::new(move || {
                        if let Some(cell) = weak.upgrade() {
                            cell.mark_dirty();
                            cell.validate();
                        }
                    }),
                );
                Some((handle.clone(), token))
            }
            StateSink::External(_) => None,
        };

        Self {
            cell,
            extractor: extractor.unwrap_or(value_from_event),
            registration,
        }
    }

    pub fn name(&self) -> &str {
        &self.cell.name
    }

    /// Snapshot of the local state
    #[allow(dead_code)] // Used by tests
    pub fn state(&self) -> FieldValueState {
        self.cell.state.borrow().clone()
    }

    pub fn value(&self) -> FieldValue {
        self.cell.state.borrow().value.clone()
    }

    /// Whether this controller currently owns a registry entry
    pub fn is_registered(&self) -> bool {
        match &self.registration {
            Some((handle, _)) => handle.is_registered(self.name()),
            None => false,
        }
    }

    /// User changed the control: take the new value, mark dirty, revalidate
    pub fn on_change(&self, event: &ChangeEvent) {
        let value = (self.extractor)(event);
        {
            let mut state = self.cell.state.borrow_mut();
            state.value = value;
            state.dirty = true;
        }
        self.cell.validate();
    }

    /// User left the control: mark dirty, revalidate
    pub fn on_blur(&self) {
        self.cell.mark_dirty();
        self.cell.validate();
    }

    #[allow(dead_code)] // Used by tests
    pub fn validate(&self) {
        self.cell.validate();
    }

    /// What the registered trigger does: mark dirty, revalidate
    #[allow(dead_code)] // Reserved for forcing one field without trigger_all
    pub fn trigger(&self) {
        self.cell.mark_dirty();
        self.cell.validate();
    }
}

impl Drop for FieldController {
    fn drop(&mut self) {
        if let Some((handle, token)) = self.registration.take() {
            handle.release(&self.cell.name, token);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::coordinator::FormCoordinator;
    use crate::form::definition::{WidgetKind, REQUIRED_MESSAGE};
    use crate::form::value::checked_from_event;

    fn text_form() -> FormCoordinator {
        FormCoordinator::new(vec![
            FieldDefinition::new("name", WidgetKind::Text).required(),
            FieldDefinition::new("notes", WidgetKind::Text),
            FieldDefinition::new("agree", WidgetKind::Checkbox),
        ])
    }

    fn mount(form: &FormCoordinator, name: &str) -> FieldController {
        let def = form.field(name).unwrap().clone();
        FieldController::mount(FieldOptions::for_definition(&def, form.handle()))
    }

    #[test]
    fn mount_validates_without_dirtying() {
        let form = text_form();
        let field = mount(&form, "name");

        let state = field.state();
        assert!(!state.dirty);
        assert_eq!(state.valid, Some(false));
        assert_eq!(state.error_message.as_deref(), Some(REQUIRED_MESSAGE));
        assert!(field.is_registered());
    }

    #[test]
    fn validator_rejects_empty_value() {
        let form = text_form();
        let field = mount(&form, "name");
        field.validate();
        assert_eq!(field.state().valid, Some(false));
        assert!(field.state().error_message.is_some());
    }

    #[test]
    fn missing_validator_accepts_anything() {
        let form = text_form();
        let field = mount(&form, "notes");
        for value in ["", "x", "   "] {
            field.on_change(&ChangeEvent::value(value));
            assert_eq!(field.state().valid, Some(true));
            assert_eq!(field.state().error_message, None);
        }
    }

    #[test]
    fn change_sets_value_dirty_and_revalidates() {
        let form = text_form();
        let field = mount(&form, "name");

        field.on_change(&ChangeEvent::value("Ada"));
        let state = field.state();
        assert_eq!(state.value, FieldValue::text("Ada"));
        assert!(state.dirty);
        assert_eq!(state.valid, Some(true));

        field.on_change(&ChangeEvent::value(""));
        assert_eq!(field.state().valid, Some(false));
    }

    #[test]
    fn blur_marks_dirty() {
        let form = text_form();
        let field = mount(&form, "name");
        field.on_blur();
        assert!(field.state().shows_error());
    }

    #[test]
    fn checkbox_reads_checked_flag() {
        let form = text_form();
        let field = mount(&form, "agree");
        assert_eq!(field.value(), FieldValue::Flag(false));

        // A value string on a checkbox event is ignored
        field.on_change(&ChangeEvent {
            value: "on".to_string(),
            checked: true,
        });
        assert_eq!(field.value(), FieldValue::Flag(true));

        field.on_change(&ChangeEvent::checked(false));
        assert_eq!(field.value(), FieldValue::Flag(false));
    }

    #[test]
    fn form_sink_reports_on_settle() {
        let mut form = text_form();
        let field = mount(&form, "name");
        assert!(form.field_state("name").is_none());

        form.settle();
        assert_eq!(form.field_state("name").unwrap().valid, Some(false));

        field.on_change(&ChangeEvent::value("Ada"));
        // Still the mount-time snapshot until the next turn
        assert_eq!(form.field_state("name").unwrap().valid, Some(false));
        form.settle();
        assert_eq!(form.field_state("name").unwrap().value, FieldValue::text("Ada"));
    }

    #[test]
    fn registered_trigger_dirties_and_validates() {
        let mut form = text_form();
        let field = mount(&form, "name");

        form.trigger_all();
        assert!(field.state().dirty);
        form.settle();
        assert!(form.field_state("name").unwrap().shows_error());
    }

    #[test]
    fn drop_unregisters() {
        let form = text_form();
        let field = mount(&form, "name");
        assert_eq!(form.registered(), vec!["name".to_string()]);
        drop(field);
        assert!(form.registered().is_empty());
    }

    #[test]
    fn dropping_replaced_controller_keeps_newer_registration() {
        let form = text_form();
        let first = mount(&form, "name");
        let second = mount(&form, "name");
        drop(first);

        assert!(second.is_registered());
        assert_eq!(form.trigger_all(), 1);
        assert!(second.state().dirty);
    }

    #[test]
    fn external_sink_is_synchronous_and_bypasses_form() {
        let mut form = text_form();
        let seen: Rc<RefCell<Vec<(String, FieldValue)>>> = Rc::new(RefCell::new(Vec::new()));
        let log = Rc::clone(&seen);

        let field = FieldController::mount(
            FieldOptions::new(
                "name",
                StateSink::External(Box::new(move |name: &str, state: &FieldValueState| {
                    log.borrow_mut().push((name.to_string(), state.value.clone()));
                })),
            )
            .with_default(FieldValue::text("")),
        );
        field.on_change(&ChangeEvent::value("x"));

        assert_eq!(seen.borrow().len(), 2); // mount pass + change
        assert_eq!(seen.borrow()[1], ("name".to_string(), FieldValue::text("x")));
        assert!(!field.is_registered());
        assert!(form.registered().is_empty());
        assert_eq!(form.settle(), 0);
    }

    #[test]
    fn custom_extractor_is_used() {
        let form = text_form();
        let field = FieldController::mount(
            FieldOptions::new("agree", StateSink::Form(form.handle()))
                .with_default(FieldValue::Flag(false))
                .with_extractor(checked_from_event),
        );
        field.on_change(&ChangeEvent::checked(true));
        assert_eq!(field.value(), FieldValue::Flag(true));
    }

    #[test]
    #[should_panic(expected = "validator exploded")]
    fn validator_panic_propagates() {
        let form = text_form();
        let field = FieldController::mount(
            FieldOptions::new("notes", StateSink::Form(form.handle()))
                .with_validator(Validator::new(|v| {
                    if v.as_text() == Some("boom") {
                        panic!("validator exploded");
                    }
                    None
                })),
        );
        field.on_change(&ChangeEvent::value("boom"));
    }
}
