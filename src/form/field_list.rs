//! Field list - live controllers for the configuration list, plus submit
//!
//! `sync()` is the reconciliation step: one mounted controller per
//! configured field, keyed by name. Controllers whose definition is gone are
//! dropped, which unregisters their validation trigger.

use super::controller::{FieldController, FieldOptions};
use super::coordinator::FormCoordinator;

/// Result of a submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Every field valid; one `name: value` line per field, in form order
    Submitted { summary: Vec<String> },
    /// At least one field is not known to be valid
    Blocked { invalid: Vec<String> },
}

#[derive(Default)]
pub struct FieldList {
    controllers: Vec<FieldController>,
}

impl FieldList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mount controllers for new definitions and drop those for removed ones
    pub fn sync(&mut self, form: &FormCoordinator) {
        let mut existing = std::mem::take(&mut self.controllers);

        for def in form.fields() {
            match existing.iter().position(|c| c.name() == def.name) {
                Some(pos) => self.controllers.push(existing.swap_remove(pos)),
                None => {
                    tracing::debug!(field = %def.name, kind = %def.kind, "Mounting field");
                    self.controllers.push(FieldController::mount(FieldOptions::for_definition(
                        def,
                        form.handle(),
                    )));
                }
            }
        }

        for stale in &existing {
            tracing::debug!(field = stale.name(), "Unmounting field");
        }
        // `existing` drops here, unregistering the leftovers
    }

    pub fn controller(&self, name: &str) -> Option<&FieldController> {
        self.controllers.iter().find(|c| c.name() == name)
    }

    pub fn controllers(&self) -> &[FieldController] {
        &self.controllers
    }

    pub fn names(&self) -> Vec<&str> {
        self.controllers.iter().map(|c| c.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.controllers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controllers.is_empty()
    }

    /// Force validation of every field, then submit if nothing is invalid
    ///
    /// The triggered validations are settled before the map is read, so the
    /// verdict reflects this submit rather than the previous turn.
    pub fn submit(&self, form: &mut FormCoordinator) -> SubmitOutcome {
        form.trigger_all();
        form.settle();

        let invalid: Vec<String> = form
            .fields()
            .iter()
            .filter(|def| form.field_state(&def.name).and_then(|s| s.valid) != Some(true))
            .map(|def| def.name.clone())
            .collect();

        if !invalid.is_empty() {
            tracing::warn!(invalid = ?invalid, "Submit blocked");
            return SubmitOutcome::Blocked { invalid };
        }

        let summary: Vec<String> = form
            .fields()
            .iter()
            .filter_map(|def| {
                form.field_state(&def.name)
                    .map(|state| format!("{}: {}", def.name, state.value))
            })
            .collect();

        tracing::info!(fields = summary.len(), "Form submitted");
        SubmitOutcome::Submitted { summary }
    }

    /// Delete a field from the form and unmount it
    pub fn delete(&mut self, form: &mut FormCoordinator, name: &str) {
        form.delete_field(name);
        self.sync(form);
        tracing::info!(field = name, "Field deleted");
    }
}
