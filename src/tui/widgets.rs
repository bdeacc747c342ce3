//! Terminal input widgets for form fields
//!
//! A `FieldInput` translates key presses into change events for one
//! `FieldController`, the way a browser input turns keystrokes into
//! `change` events. It holds no state of its own: the controller's local
//! state is the source of truth for what the widget displays.

use super::traits::{Handled, Interactive};
use crate::form::{ChangeEvent, FieldController, FieldDefinition, FieldValue, WidgetKind};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Select choices with the leading empty entry ("nothing chosen")
pub fn select_choices(options: Vec<String>) -> Vec<String> {
    std::iter::once(String::new()).chain(options).collect()
}

pub struct FieldInput<'a> {
    kind: WidgetKind,
    /// Select choices (empty for other kinds)
    choices: Vec<String>,
    checkbox_text: String,
    controller: &'a FieldController,
}

impl<'a> FieldInput<'a> {
    pub fn new(kind: WidgetKind, choices: Vec<String>, controller: &'a FieldController) -> Self {
        Self {
            kind,
            choices,
            checkbox_text: String::new(),
            controller,
        }
    }

    pub fn for_definition(def: &FieldDefinition, controller: &'a FieldController) -> Self {
        let choices = match def.kind {
            WidgetKind::Select => select_choices(def.props.select_options()),
            _ => Vec::new(),
        };
        Self {
            kind: def.kind,
            choices,
            checkbox_text: def.props.checkbox_text().to_string(),
            controller,
        }
    }

    /// One-line rendering of the control
    pub fn display(&self) -> String {
        let value = self.controller.value();
        match self.kind {
            WidgetKind::Text | WidgetKind::Number => format!("[{}]", value),
            WidgetKind::Select => {
                let text = value.as_text().unwrap_or_default();
                if text.is_empty() {
                    "< -- >".to_string()
                } else {
                    format!("< {} >", text)
                }
            }
            WidgetKind::Checkbox => {
                let mark = if value.as_flag().unwrap_or(false) { 'x' } else { ' ' };
                format!("[{}] {}", mark, self.checkbox_text)
            }
        }
    }

    fn current_text(&self) -> String {
        match self.controller.value() {
            FieldValue::Text(text) => text,
            FieldValue::Flag(_) => String::new(),
        }
    }

    fn edit_text(&self, key: KeyEvent) -> Handled {
        let mut text = self.current_text();
        match key.code {
            KeyCode::Char(c) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
                if self.kind == WidgetKind::Number && !(c.is_ascii_digit() || c == '.' || c == '-') {
                    return Handled::No;
                }
                text.push(c);
            }
            KeyCode::Backspace => {
                if text.pop().is_none() {
                    return Handled::Yes;
                }
            }
            _ => return Handled::No,
        }
        self.controller.on_change(&ChangeEvent::value(text));
        Handled::Yes
    }

    fn cycle_select(&self, forward: bool) -> Handled {
        if self.choices.is_empty() {
            return Handled::No;
        }
        let current = self.current_text();
        let len = self.choices.len();
        let pos = self.choices.iter().position(|c| *c == current).unwrap_or(0);
        let next = if forward { (pos + 1) % len } else { (pos + len - 1) % len };
        self.controller
            .on_change(&ChangeEvent::value(self.choices[next].clone()));
        Handled::Yes
    }

    fn toggle(&self) -> Handled {
        let checked = self.controller.value().as_flag().unwrap_or(false);
        self.controller.on_change(&ChangeEvent::checked(!checked));
        Handled::Yes
    }
}

impl Interactive for FieldInput<'_> {
    fn handle_key(&mut self, key: KeyEvent) -> Handled {
        match self.kind {
            WidgetKind::Text | WidgetKind::Number => self.edit_text(key),
            WidgetKind::Select => match key.code {
                KeyCode::Right | KeyCode::Char(' ') => self.cycle_select(true),
                KeyCode::Left => self.cycle_select(false),
                _ => Handled::No,
            },
            WidgetKind::Checkbox => match key.code {
                KeyCode::Char(' ') | KeyCode::Enter => self.toggle(),
                _ => Handled::No,
            },
        }
    }

    fn focus_hint(&self) -> Option<&'static str> {
        Some(match self.kind {
            WidgetKind::Text => "type to edit  Backspace:erase",
            WidgetKind::Number => "0-9 . -  Backspace:erase",
            WidgetKind::Select => "←→/Space:choose",
            WidgetKind::Checkbox => "Space:toggle",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{checked_from_event, FieldOptions, FieldValueState, StateSink};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn text_controller() -> FieldController {
        FieldController::mount(FieldOptions::new(
            "field",
            StateSink::External(Box::new(|_: &str, _: &FieldValueState| {})),
        ))
    }

    #[test]
    fn text_input_types_and_erases() {
        let controller = text_controller();
        let mut input = FieldInput::new(WidgetKind::Text, Vec::new(), &controller);

        for c in "hi!".chars() {
            assert_eq!(input.handle_key(key(KeyCode::Char(c))), Handled::Yes);
        }
        input.handle_key(key(KeyCode::Backspace));

        assert_eq!(controller.value(), FieldValue::text("hi"));
        assert!(controller.state().dirty);
        assert_eq!(input.display(), "[hi]");
    }

    #[test]
    fn number_input_rejects_letters() {
        let controller = text_controller();
        let mut input = FieldInput::new(WidgetKind::Number, Vec::new(), &controller);

        for c in "-1a.5".chars() {
            input.handle_key(key(KeyCode::Char(c)));
        }

        assert_eq!(controller.value(), FieldValue::text("-1.5"));
        assert_eq!(input.handle_key(key(KeyCode::Char('x'))), Handled::No);
    }

    #[test]
    fn control_chords_are_not_typed() {
        let controller = text_controller();
        let mut input = FieldInput::new(WidgetKind::Text, Vec::new(), &controller);

        let chord = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(input.handle_key(chord), Handled::No);
        assert_eq!(controller.value(), FieldValue::text(""));
    }

    #[test]
    fn select_cycles_through_empty_entry() {
        let controller = text_controller();
        let choices = select_choices(vec!["a".to_string(), "b".to_string()]);
        let mut input = FieldInput::new(WidgetKind::Select, choices, &controller);

        assert_eq!(input.display(), "< -- >");
        input.handle_key(key(KeyCode::Right));
        assert_eq!(controller.value(), FieldValue::text("a"));
        input.handle_key(key(KeyCode::Char(' ')));
        assert_eq!(input.display(), "< b >");
        input.handle_key(key(KeyCode::Right));
        assert_eq!(controller.value(), FieldValue::text(""));
        input.handle_key(key(KeyCode::Left));
        assert_eq!(controller.value(), FieldValue::text("b"));
    }

    #[test]
    fn checkbox_toggles_checked_state() {
        let controller = FieldController::mount(
            FieldOptions::new("agree", StateSink::External(Box::new(|_: &str, _: &FieldValueState| {})))
                .with_default(FieldValue::Flag(false))
                .with_extractor(checked_from_event),
        );
        let def = FieldDefinition::new("agree", WidgetKind::Checkbox).with_checkbox_text("I agree");
        let mut input = FieldInput::for_definition(&def, &controller);

        assert_eq!(input.display(), "[ ] I agree");
        input.handle_key(key(KeyCode::Char(' ')));
        assert_eq!(controller.value(), FieldValue::Flag(true));
        input.handle_key(key(KeyCode::Enter));
        assert_eq!(input.display(), "[ ] I agree");
    }

    #[test]
    fn select_definition_gets_fallback_choices() {
        let controller = text_controller();
        let def = FieldDefinition::new("pick", WidgetKind::Select);
        let mut input = FieldInput::for_definition(&def, &controller);

        input.handle_key(key(KeyCode::Left));
        assert_eq!(controller.value(), FieldValue::text("Value #14"));
    }
}
