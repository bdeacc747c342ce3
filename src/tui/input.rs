// Key gate - debounce for action keys
//
// Many terminals never send Release events, so a held Enter or Tab arrives
// as a stream of presses. Action keys fire once per press and are then
// ignored until released or until the debounce window passes. Typed
// characters and editing keys always pass: swallowing a repeated letter
// would drop user input.

use crossterm::event::KeyCode;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Default window for repeated action keys without a Release
const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(150);

pub struct KeyGate {
    /// Action keys currently held, with the time they last fired
    held: HashMap<KeyCode, Instant>,
    debounce: Duration,
}

impl KeyGate {
    pub fn new(debounce: Duration) -> Self {
        Self {
            held: HashMap::new(),
            debounce,
        }
    }

    /// Keys that trigger an action rather than edit a value
    fn is_action(key: KeyCode) -> bool {
        matches!(
            key,
            KeyCode::Enter | KeyCode::Tab | KeyCode::BackTab | KeyCode::Delete | KeyCode::Esc | KeyCode::F(_)
        )
    }

    /// Handle a key press. Returns true if the key should take effect.
    pub fn press(&mut self, key: KeyCode) -> bool {
        if !Self::is_action(key) {
            return true;
        }

        let now = Instant::now();
        match self.held.get(&key) {
            Some(last) if now.duration_since(*last) < self.debounce => false,
            _ => {
                self.held.insert(key, now);
                true
            }
        }
    }

    /// Handle a key release
    pub fn release(&mut self, key: KeyCode) {
        self.held.remove(&key);
    }
}

impl Default for KeyGate {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}
