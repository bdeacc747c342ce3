//! Form coordinator - the two reducers plus the validation registry
//!
//! The coordinator owns:
//! - the Field Configuration List (which fields exist, in order)
//! - the Field State Map (latest reported state per field name)
//! - the validation registry, shared with mounted fields through `FormHandle`
//!
//! Field controllers never write the state map directly. They push
//! `FormStateAction`s onto an update queue through their handle, and
//! `settle()` applies whatever is queued. One `settle()` is one scheduling
//! turn: until it runs, the map shows the previous state.

use super::definition::{FieldDefinition, Validator, WidgetKind};
use super::error::FormError;
use super::registry::{RegistrationToken, Trigger, ValidationRegistry};
use super::state::{FieldStateMap, FieldValueState};
use std::cell::RefCell;
use std::rc::Rc;
use tokio::sync::mpsc;

/// Actions for the field configuration reducer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldConfigAction {
    /// Append a field; the kind is resolved from its label
    AddField { name: String, kind_label: String },
    /// Remove every definition with this name and clear its state
    DeleteField { name: String },
}

/// Actions for the field state reducer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormStateAction {
    /// Replace the entry for `name`
    SetFieldState { name: String, state: FieldValueState },
    /// Remove the entry for `name`
    ClearFieldState { name: String },
}

struct FormShared {
    registry: RefCell<ValidationRegistry>,
    updates: mpsc::UnboundedSender<FormStateAction>,
}

/// Cloneable handle to a form, passed down to every mounted field
#[derive(Clone)]
pub struct FormHandle {
    shared: Rc<FormShared>,
}

impl FormHandle {
    pub fn register(&self, name: &str, trigger: Trigger) -> RegistrationToken {
        tracing::trace!(field = name, "validation registered");
        self.shared.registry.borrow_mut().register(name, trigger)
    }

    pub fn unregister(&self, name: &str) -> bool {
        self.shared.registry.borrow_mut().unregister(name)
    }

    /// Token-guarded unregister used on unmount
    pub(crate) fn release(&self, name: &str, token: RegistrationToken) -> bool {
        let released = self.shared.registry.borrow_mut().release(name, token);
        if released {
            tracing::trace!(field = name, "validation unregistered");
        }
        released
    }

    /// Invoke every registered trigger in registration order
    ///
    /// Runs over a snapshot, so triggers are free to touch the registry.
    /// Returns how many triggers ran.
    pub fn trigger_all(&self) -> usize {
        let triggers = self.shared.registry.borrow().triggers();
        for trigger in &triggers {
            trigger();
        }
        triggers.len()
    }

    /// Queue a state update for the next `settle()`
    pub fn report(&self, action: FormStateAction) {
        if self.shared.updates.send(action).is_err() {
            // Coordinator is gone; nothing left to update
            tracing::debug!("Form dropped, discarding field state update");
        }
    }

    pub fn registered(&self) -> Vec<String> {
        self.shared.registry.borrow().names()
    }

    pub fn is_registered(&self, name: &str) -> bool {
        self.shared.registry.borrow().contains(name)
    }

    pub fn registered_count(&self) -> usize {
        self.shared.registry.borrow().len()
    }
}

/// Owner of a form's configuration and state
pub struct FormCoordinator {
    fields: Vec<FieldDefinition>,
    states: FieldStateMap,
    handle: FormHandle,
    updates: mpsc::UnboundedReceiver<FormStateAction>,
}

impl FormCoordinator {
    pub fn new(default_fields: Vec<FieldDefinition>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            fields: default_fields,
            states: FieldStateMap::new(),
            handle: FormHandle {
                shared: Rc::new(FormShared {
                    registry: RefCell::new(ValidationRegistry::new()),
                    updates: tx,
                }),
            },
            updates: rx,
        }
    }

    /// Handle for fields mounted into this form
    pub fn handle(&self) -> FormHandle {
        self.handle.clone()
    }

    // ─────────────────────────────────────────────────────────────────────
    // Field configuration reducer
    // ─────────────────────────────────────────────────────────────────────

    pub fn dispatch(&mut self, action: FieldConfigAction) -> Result<(), FormError> {
        match action {
            FieldConfigAction::AddField { name, kind_label } => {
                let kind = WidgetKind::from_label(&kind_label)?;
                tracing::debug!(field = %name, kind = %kind, "Adding field");
                self.fields
                    .push(FieldDefinition::new(name, kind).with_validator(Validator::required()));
            }
            FieldConfigAction::DeleteField { name } => {
                tracing::debug!(field = %name, "Deleting field");
                self.fields.retain(|f| f.name != name);
                // Same transaction: the state entry goes with the definition
                self.dispatch_state(FormStateAction::ClearFieldState { name });
            }
        }
        Ok(())
    }

    pub fn add_field(&mut self, name: impl Into<String>, kind_label: &str) -> Result<(), FormError> {
        self.dispatch(FieldConfigAction::AddField {
            name: name.into(),
            kind_label: kind_label.to_string(),
        })
    }

    pub fn delete_field(&mut self, name: &str) {
        // DeleteField never fails
        let _ = self.dispatch(FieldConfigAction::DeleteField {
            name: name.to_string(),
        });
    }

    // ─────────────────────────────────────────────────────────────────────
    // Field state reducer
    // ─────────────────────────────────────────────────────────────────────

    /// Apply a state action. Returns false if it was discarded.
    ///
    /// State entries only exist for configured names; a late update for a
    /// deleted field is dropped instead of resurrecting its entry.
    pub fn dispatch_state(&mut self, action: FormStateAction) -> bool {
        match action {
            FormStateAction::SetFieldState { name, state } => {
                if !self.contains(&name) {
                    tracing::debug!(field = %name, "Discarding state for unknown field");
                    return false;
                }
                self.states.insert(name, state);
                true
            }
            FormStateAction::ClearFieldState { name } => {
                self.states.remove(&name);
                true
            }
        }
    }

    #[allow(dead_code)] // Fields report through the update queue instead
    pub fn set_field_state(&mut self, name: impl Into<String>, state: FieldValueState) -> bool {
        self.dispatch_state(FormStateAction::SetFieldState {
            name: name.into(),
            state,
        })
    }

    #[allow(dead_code)] // Deletion clears state inside the DeleteField action
    pub fn clear_field_state(&mut self, name: &str) {
        self.dispatch_state(FormStateAction::ClearFieldState {
            name: name.to_string(),
        });
    }

    /// Apply every queued state update. Returns how many landed.
    pub fn settle(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(action) = self.updates.try_recv() {
            if self.dispatch_state(action) {
                applied += 1;
            }
        }
        applied
    }

    // ─────────────────────────────────────────────────────────────────────
    // Validation registry
    // ─────────────────────────────────────────────────────────────────────

    #[allow(dead_code)] // Mounted fields register through their FormHandle
    pub fn register(&self, name: &str, trigger: impl Fn() + 'static) -> RegistrationToken {
        self.handle.register(name, Rc::new(trigger))
    }

    #[allow(dead_code)] // Unmounting releases by token instead
    pub fn unregister(&self, name: &str) -> bool {
        self.handle.unregister(name)
    }

    /// Force validation of every mounted field. Results land on `settle()`.
    pub fn trigger_all(&self) -> usize {
        let count = self.handle.trigger_all();
        tracing::debug!(count, "Triggered validation");
        count
    }

    pub fn registered(&self) -> Vec<String> {
        self.handle.registered()
    }

    pub fn registered_count(&self) -> usize {
        self.handle.registered_count()
    }

    // ─────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────

    pub fn fields(&self) -> &[FieldDefinition] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldDefinition> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.iter().any(|f| f.name == name)
    }

    pub fn states(&self) -> &FieldStateMap {
        &self.states
    }

    pub fn field_state(&self, name: &str) -> Option<&FieldValueState> {
        self.states.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::value::FieldValue;
    use std::cell::Cell;

    fn form() -> FormCoordinator {
        FormCoordinator::new(vec![
            FieldDefinition::new("a", WidgetKind::Text).required(),
            FieldDefinition::new("b", WidgetKind::Checkbox),
        ])
    }

    fn state(value: &str) -> FieldValueState {
        FieldValueState::new(FieldValue::text(value))
    }

    #[test]
    fn add_field_resolves_kind_and_requires_value() {
        let mut form = form();
        form.add_field("Email", "Text").unwrap();

        let added = form.field("Email").unwrap();
        assert_eq!(added.kind, WidgetKind::Text);
        let validator = added.validator.as_ref().unwrap();
        assert_eq!(validator.check(&FieldValue::text("")), Some("Required".to_string()));
        assert_eq!(validator.check(&FieldValue::text("x")), None);
    }

    #[test]
    fn add_field_rejects_unknown_kind() {
        let mut form = form();
        let err = form.add_field("x", "Date").unwrap_err();
        assert_eq!(err, FormError::UnknownWidgetKind("Date".to_string()));
        assert_eq!(form.fields().len(), 2);
    }

    #[test]
    fn add_field_does_not_check_uniqueness() {
        let mut form = form();
        form.add_field("a", "Number").unwrap();
        assert_eq!(form.fields().iter().filter(|f| f.name == "a").count(), 2);
    }

    #[test]
    fn delete_clears_definition_and_state() {
        let mut form = form();
        assert!(form.set_field_state("a", state("hi")));
        form.delete_field("a");

        assert!(!form.contains("a"));
        assert!(form.field_state("a").is_none());
        assert_eq!(form.fields().len(), 1);
    }

    #[test]
    fn set_replaces_whole_entry() {
        let mut form = form();
        let mut first = state("one");
        first.error_message = Some("bad".to_string());
        form.set_field_state("a", first);
        form.set_field_state("a", state("two"));

        assert_eq!(form.field_state("a"), Some(&state("two")));
    }

    #[test]
    fn set_for_unknown_field_is_discarded() {
        let mut form = form();
        assert!(!form.set_field_state("zzz", state("x")));
        assert!(form.states().is_empty());
    }

    #[test]
    fn queued_updates_are_invisible_until_settle() {
        let mut form = form();
        form.handle().report(FormStateAction::SetFieldState {
            name: "a".to_string(),
            state: state("queued"),
        });

        assert!(form.field_state("a").is_none());
        assert_eq!(form.settle(), 1);
        assert_eq!(form.field_state("a"), Some(&state("queued")));
        assert_eq!(form.settle(), 0);
    }

    #[test]
    fn settle_drops_updates_for_deleted_fields() {
        let mut form = form();
        form.handle().report(FormStateAction::SetFieldState {
            name: "a".to_string(),
            state: state("late"),
        });
        form.delete_field("a");

        assert_eq!(form.settle(), 0);
        assert!(form.field_state("a").is_none());
    }

    #[test]
    fn trigger_all_runs_in_registration_order() {
        let form = form();
        let order = Rc::new(RefCell::new(Vec::new()));
        for name in ["b", "a"] {
            let order = Rc::clone(&order);
            form.register(name, move || order.borrow_mut().push(name));
        }

        assert_eq!(form.trigger_all(), 2);
        assert_eq!(*order.borrow(), vec!["b", "a"]);
    }

    #[test]
    fn handle_reports_registration_membership() {
        let form = form();
        let handle = form.handle();
        form.register("a", || {});
        form.register("b", || {});
        form.register("a", || {});

        assert!(handle.is_registered("a"));
        assert!(!handle.is_registered("zzz"));
        assert_eq!(form.registered_count(), 2);
    }

    #[test]
    fn unregistered_trigger_is_not_invoked() {
        let form = form();
        let fired = Rc::new(Cell::new(false));
        let flag = Rc::clone(&fired);
        form.register("a", move || flag.set(true));
        form.unregister("a");

        assert_eq!(form.trigger_all(), 0);
        assert!(!fired.get());
    }

    #[test]
    fn trigger_may_unregister_itself() {
        let form = form();
        // A trigger stored in the registry must not own the registry
        let weak = Rc::downgrade(&form.handle.shared);
        form.register("a", move || {
            if let Some(shared) = weak.upgrade() {
                FormHandle { shared }.unregister("a");
            }
        });
        assert_eq!(Rc::strong_count(&form.handle.shared), 1);

        assert_eq!(form.trigger_all(), 1);
        assert!(form.registered().is_empty());
        assert_eq!(Rc::strong_count(&form.handle.shared), 1);
    }

    #[test]
    fn registered_trigger_does_not_keep_form_alive() {
        let form = form();
        let weak = Rc::downgrade(&form.handle.shared);
        form.register("a", {
            let weak = weak.clone();
            move || {
                let _ = weak.upgrade();
            }
        });

        drop(form);
        assert!(weak.upgrade().is_none());
    }
}
