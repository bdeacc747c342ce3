//! Contracts for focusable TUI elements
//!
//! The App routes keys to whatever holds focus. The element decides whether
//! it consumed the key or whether the App should fall back to its own
//! handling (focus movement, submit, add).

use crossterm::event::KeyEvent;

/// Result of handling a key event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handled {
    /// Event was consumed
    Yes,
    /// Event was not handled, should bubble up
    No,
}

impl From<bool> for Handled {
    fn from(handled: bool) -> Self {
        if handled {
            Self::Yes
        } else {
            Self::No
        }
    }
}

/// Anything that takes keyboard input while focused
pub trait Interactive {
    fn handle_key(&mut self, key: KeyEvent) -> Handled;

    /// Keybind hint shown in the status bar while focused
    fn focus_hint(&self) -> Option<&'static str> {
        None
    }
}
