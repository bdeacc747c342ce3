// App state - the TUI's view of one form session
//
// Owns the form engine (coordinator, live field controllers, control panel)
// plus the purely visual state: focus, modal, toast, theme.

use super::components::toast::Toast;
use super::input::KeyGate;
use super::modal::Modal;
use super::traits::{Handled, Interactive};
use super::widgets::{select_choices, FieldInput};
use crate::config::Config;
use crate::form::{
    ControlPanel, FieldDefinition, FieldList, FormCoordinator, SubmitOutcome, WidgetKind,
};
use crate::logging::LogBuffer;
use crate::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Instant;

/// What currently receives key input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Form field by position in the field list
    Field(usize),
    Submit,
    PanelName,
    PanelType,
    PanelAdd,
}

pub struct App {
    pub title: String,
    pub form: FormCoordinator,
    pub field_list: FieldList,
    pub control_panel: ControlPanel,
    pub focus: Focus,
    pub modal: Option<Modal>,
    pub toast: Option<Toast>,
    pub theme: Theme,
    pub log_buffer: LogBuffer,
    pub should_quit: bool,
    start_time: Instant,
    keys: KeyGate,
}

impl App {
    pub fn new(config: &Config, fields: Vec<FieldDefinition>, log_buffer: LogBuffer) -> Self {
        let form = FormCoordinator::new(fields);
        let mut field_list = FieldList::new();
        field_list.sync(&form);

        let focus = if field_list.is_empty() {
            Focus::Submit
        } else {
            Focus::Field(0)
        };

        Self {
            title: config.title.clone(),
            form,
            field_list,
            control_panel: ControlPanel::new(),
            focus,
            modal: None,
            toast: None,
            theme: Theme::by_name(&config.theme),
            log_buffer,
            should_quit: false,
            start_time: Instant::now(),
            keys: KeyGate::default(),
        }
    }

    pub fn uptime(&self) -> String {
        let secs = self.start_time.elapsed().as_secs();
        format!("{:02}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60)
    }

    // ─── Input ───────────────────────────────────────────────

    pub fn handle_key_press(&mut self, key: KeyCode) -> bool {
        self.keys.press(key)
    }

    pub fn handle_key_release(&mut self, key: KeyCode) {
        self.keys.release(key);
    }

    /// Input widget for the focused element, if it edits a value
    pub fn focused_input(&self) -> Option<FieldInput<'_>> {
        match self.focus {
            Focus::Field(idx) => {
                let controller = self.field_list.controllers().get(idx)?;
                let def = self.form.field(controller.name())?;
                Some(FieldInput::for_definition(def, controller))
            }
            Focus::PanelName => Some(FieldInput::new(
                WidgetKind::Text,
                Vec::new(),
                self.control_panel.name_input(),
            )),
            Focus::PanelType => Some(FieldInput::new(
                WidgetKind::Select,
                select_choices(ControlPanel::type_options()),
                self.control_panel.type_input(),
            )),
            Focus::Submit | Focus::PanelAdd => None,
        }
    }

    pub fn dispatch_to_focused(&mut self, key: KeyEvent) -> Handled {
        match self.focused_input() {
            Some(mut input) => input.handle_key(key),
            None => Handled::No,
        }
    }

    pub fn focus_hint(&self) -> &'static str {
        match self.focus {
            Focus::Submit => "Enter:submit",
            Focus::PanelAdd => "Enter:add field",
            _ => self
                .focused_input()
                .and_then(|input| input.focus_hint())
                .unwrap_or(""),
        }
    }

    /// Enter: let the focused widget use it, otherwise act on the focus
    pub fn activate(&mut self) {
        let enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        if self.dispatch_to_focused(enter) == Handled::Yes {
            return;
        }
        match self.focus {
            Focus::Submit => self.submit(),
            Focus::PanelAdd => self.add_field(),
            _ => self.focus_next(),
        }
    }

    // ─── Focus ───────────────────────────────────────────────

    fn focus_order(&self) -> Vec<Focus> {
        (0..self.field_list.len())
            .map(Focus::Field)
            .chain([
                Focus::Submit,
                Focus::PanelName,
                Focus::PanelType,
                Focus::PanelAdd,
            ])
            .collect()
    }

    pub fn focus_next(&mut self) {
        self.move_focus(true);
    }

    pub fn focus_prev(&mut self) {
        self.move_focus(false);
    }

    fn move_focus(&mut self, forward: bool) {
        self.blur_focused();

        let order = self.focus_order();
        let len = order.len();
        let pos = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        let next = if forward {
            (pos + 1) % len
        } else {
            (pos + len - 1) % len
        };
        self.focus = order[next];
    }

    /// Leaving a form field counts as a blur
    fn blur_focused(&self) {
        if let Focus::Field(idx) = self.focus {
            if let Some(controller) = self.field_list.controllers().get(idx) {
                controller.on_blur();
            }
        }
    }

    // ─── Form actions ────────────────────────────────────────

    pub fn submit(&mut self) {
        match self.field_list.submit(&mut self.form) {
            SubmitOutcome::Submitted { summary } => {
                self.modal = Some(Modal::submitted(summary));
            }
            SubmitOutcome::Blocked { invalid } => {
                self.show_toast(Toast::failure(format!("Invalid: {}", invalid.join(", "))));
            }
        }
    }

    /// Add the control panel's draft to the form
    ///
    /// Failures are shown inline by the control panel.
    pub fn add_field(&mut self) {
        if self.control_panel.add_field(&mut self.form).is_ok() {
            self.field_list.sync(&self.form);
            self.show_toast(Toast::success("Field added"));
        }
    }

    pub fn delete_focused(&mut self) {
        let Focus::Field(idx) = self.focus else {
            return;
        };
        let Some(name) = self
            .field_list
            .controllers()
            .get(idx)
            .map(|c| c.name().to_string())
        else {
            return;
        };

        self.field_list.delete(&mut self.form, &name);
        self.show_toast(Toast::success(format!("Deleted {}", name)));

        self.focus = match self.field_list.len() {
            0 => Focus::Submit,
            len => Focus::Field(idx.min(len - 1)),
        };
    }

    // ─── Toast ───────────────────────────────────────────────

    pub fn show_toast(&mut self, toast: Toast) {
        self.toast = Some(toast);
    }

    pub fn clear_expired_toast(&mut self) {
        if self.toast.as_ref().is_some_and(|t| t.is_expired()) {
            self.toast = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{default_fields, FieldValue};

    fn app() -> App {
        let mut app = App::new(&Config::default(), default_fields(), LogBuffer::new());
        app.form.settle();
        app
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.dispatch_to_focused(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
    }

    #[test]
    fn starts_focused_on_first_field_without_errors() {
        let app = app();
        assert_eq!(app.focus, Focus::Field(0));
        assert_eq!(app.field_list.len(), 4);
        assert!(app.form.states().values().all(|s| !s.shows_error()));
    }

    #[test]
    fn typing_reaches_the_map_after_settle() {
        let mut app = app();
        type_text(&mut app, "abc");

        assert_eq!(
            app.form.field_state("Text 1").map(|s| s.value.clone()),
            Some(FieldValue::text(""))
        );
        app.form.settle();
        assert_eq!(
            app.form.field_state("Text 1").map(|s| s.value.clone()),
            Some(FieldValue::text("abc"))
        );
    }

    #[test]
    fn leaving_a_field_blurs_it() {
        let mut app = app();
        app.focus_next();
        app.form.settle();

        assert_eq!(app.focus, Focus::Field(1));
        let state = app.form.field_state("Text 1").cloned().expect("state for Text 1");
        assert!(state.shows_error());
        assert_eq!(state.error_message.as_deref(), Some("Required"));
    }

    #[test]
    fn focus_wraps_both_ways() {
        let mut app = app();
        app.focus_prev();
        assert_eq!(app.focus, Focus::PanelAdd);
        app.focus_next();
        assert_eq!(app.focus, Focus::Field(0));
    }

    #[test]
    fn blocked_submit_shows_toast() {
        let mut app = app();
        app.submit();

        assert!(app.modal.is_none());
        assert_eq!(
            app.toast.as_ref().map(|t| t.kind),
            Some(crate::tui::components::toast::ToastKind::Failure)
        );
        let toast = app.toast.as_ref().map(|t| t.message.clone()).unwrap_or_default();
        assert!(toast.contains("Text 1"));
        assert!(!toast.contains("Checkbox 1"));
    }

    #[test]
    fn valid_submit_opens_summary() {
        let mut app = app();
        type_text(&mut app, "hello");
        app.focus = Focus::Field(1);
        type_text(&mut app, "42");
        app.focus = Focus::Field(2);
        app.dispatch_to_focused(KeyEvent::new(KeyCode::Right, KeyModifiers::NONE));
        app.form.settle();

        app.submit();

        match &app.modal {
            Some(Modal::Submitted(summary)) => {
                assert_eq!(summary[0], "Text 1: hello");
                assert_eq!(summary[1], "Number 1: 42");
                assert_eq!(summary[2], "Select 1: Value #0");
                assert_eq!(summary[3], "Checkbox 1: false");
            }
            other => panic!("expected summary modal, got {:?}", other),
        }
    }

    #[test]
    fn control_panel_adds_field_to_list() {
        let mut app = app();
        app.focus = Focus::PanelName;
        type_text(&mut app, "Email");
        app.focus = Focus::PanelType;
        app.dispatch_to_focused(KeyEvent::new(KeyCode::Right, KeyModifiers::NONE));
        app.focus = Focus::PanelAdd;
        app.activate();
        app.form.settle();

        assert_eq!(app.field_list.len(), 5);
        assert!(app.form.contains("Email"));
        assert!(app.form.field_state("Email").is_some());
        assert!(app.control_panel.error().is_none());
    }

    #[test]
    fn add_without_type_reports_inline() {
        let mut app = app();
        app.focus = Focus::PanelName;
        type_text(&mut app, "Email");
        app.add_field();

        assert_eq!(app.field_list.len(), 4);
        assert_eq!(
            app.control_panel.error().map(|e| e.to_string()).as_deref(),
            Some("Name and type required")
        );
    }

    #[test]
    fn delete_focused_field_keeps_focus_in_range() {
        let mut app = app();
        app.focus = Focus::Field(3);
        app.delete_focused();
        app.form.settle();

        assert_eq!(app.field_list.len(), 3);
        assert!(!app.form.contains("Checkbox 1"));
        assert!(app.form.field_state("Checkbox 1").is_none());
        assert!(!app.form.registered().contains(&"Checkbox 1".to_string()));
        assert_eq!(app.focus, Focus::Field(2));
    }

    #[test]
    fn enter_on_checkbox_toggles_instead_of_moving() {
        let mut app = app();
        app.focus = Focus::Field(3);
        app.activate();

        assert_eq!(app.focus, Focus::Field(3));
        let value = app.field_list.controller("Checkbox 1").map(|c| c.value());
        assert_eq!(value, Some(FieldValue::Flag(true)));
    }
}
