//! Form engine - UI-independent form state
//!
//! ```text
//!   FieldDefinition ──► FormCoordinator ◄── settle() ── update queue
//!                         │    ▲                            ▲
//!               fields()  │    │ register / trigger_all     │ report
//!                         ▼    │                            │
//!                      FieldList ──mount──► FieldController ┘
//!
//!   ControlPanel ── add_field ──► FormCoordinator
//!        └── name/type inputs: FieldController with an external sink
//! ```
//!
//! Nothing here knows about terminals; `tui` drives it with key events.

mod control_panel;
mod controller;
mod coordinator;
mod definition;
mod error;
mod field_list;
mod registry;
mod state;
mod value;

pub use control_panel::ControlPanel;
pub use controller::FieldController;
pub use coordinator::FormCoordinator;
pub use definition::{default_fields, FieldDefinition, WidgetKind};
pub use error::FormError;
pub use field_list::{FieldList, SubmitOutcome};
pub use value::{ChangeEvent, FieldValue};

#[cfg(test)]
pub use controller::{FieldOptions, StateSink};
#[cfg(test)]
pub use definition::REQUIRED_MESSAGE;
#[cfg(test)]
pub use state::FieldValueState;
#[cfg(test)]
pub use value::checked_from_event;
