//! Validation registry: field name -> on-demand validation trigger
//!
//! Entries are inserted when a field mounts and removed when it unmounts.
//! Ordering follows first registration; overwriting a name keeps its slot,
//! removing and re-adding moves it to the end.

use std::fmt;
use std::rc::Rc;

/// Zero-argument operation forcing a field to mark itself dirty and revalidate
pub type Trigger = Rc<dyn Fn()>;

/// Identifies one registration so a stale owner cannot remove a newer one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistrationToken(u64);

struct Registration {
    name: String,
    token: RegistrationToken,
    trigger: Trigger,
}

#[derive(Default)]
pub struct ValidationRegistry {
    entries: Vec<Registration>,
    next_token: u64,
}

impl ValidationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store or overwrite the trigger for `name`
    pub fn register(&mut self, name: &str, trigger: Trigger) -> RegistrationToken {
        let token = RegistrationToken(self.next_token);
        self.next_token += 1;

        match self.entries.iter_mut().find(|e| e.name == name) {
            Some(entry) => {
                entry.token = token;
                entry.trigger = trigger;
            }
            None => self.entries.push(Registration {
                name: name.to_string(),
                token,
                trigger,
            }),
        }
        token
    }

    /// Remove the trigger for `name`, whoever registered it
    pub fn unregister(&mut self, name: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.name != name);
        self.entries.len() != before
    }

    /// Remove the trigger for `name` only if `token` still owns it
    pub fn release(&mut self, name: &str, token: RegistrationToken) -> bool {
        let before = self.entries.len();
        self.entries
            .retain(|e| !(e.name == name && e.token == token));
        self.entries.len() != before
    }

    /// Snapshot of every trigger in registration order
    pub fn triggers(&self) -> Vec<Trigger> {
        self.entries.iter().map(|e| Rc::clone(&e.trigger)).collect()
    }

    pub fn names(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.name.clone()).collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|e| e.name == name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[allow(dead_code)] // Used by tests
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for ValidationRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.entries.iter().map(|e| &e.name)).finish()
    }
}
