// Modal system for TUI overlays
//
// Self-contained modal dialogs that handle their own input and return actions.
// App just holds Option<Modal>, input routing acts on returned ModalAction.

use crossterm::event::KeyCode;

/// Actions returned by modal input handling
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalAction {
    /// Input consumed, no state change needed
    None,
    /// Close the modal
    Close,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    /// Keyboard shortcuts
    Help,
    /// Successful submit, one `name: value` line per field
    Submitted(Vec<String>),
}

impl Modal {
    pub fn help() -> Self {
        Modal::Help
    }

    pub fn submitted(summary: Vec<String>) -> Self {
        Modal::Submitted(summary)
    }

    /// Handle keyboard input, return action for caller to execute
    pub fn handle_input(&mut self, key: KeyCode) -> ModalAction {
        match self {
            Modal::Help => match key {
                KeyCode::Esc | KeyCode::F(1) | KeyCode::Enter => ModalAction::Close,
                _ => ModalAction::None,
            },
            Modal::Submitted(_) => match key {
                KeyCode::Esc | KeyCode::Enter => ModalAction::Close,
                _ => ModalAction::None,
            },
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Modal::Help => " Help ",
            Modal::Submitted(_) => " Submitted ",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_closes_on_escape_and_f1() {
        assert_eq!(Modal::help().handle_input(KeyCode::Esc), ModalAction::Close);
        assert_eq!(Modal::help().handle_input(KeyCode::F(1)), ModalAction::Close);
        assert_eq!(Modal::help().handle_input(KeyCode::Char('x')), ModalAction::None);
    }

    #[test]
    fn submitted_closes_on_enter() {
        let mut modal = Modal::submitted(vec!["Text 1: a".to_string()]);
        assert_eq!(modal.handle_input(KeyCode::Enter), ModalAction::Close);
        assert_eq!(modal.handle_input(KeyCode::Tab), ModalAction::None);
    }
}
