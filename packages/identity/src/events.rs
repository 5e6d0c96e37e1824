//! Login/logout notifications.

use std::fmt;

/// What changed when the session cookie was re-read.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IdentityEvent {
    LoginDetected { login_id: String },
    LogoutDetected,
}

/// Handle returned by [`Listeners::subscribe`], used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Callback = Box<dyn FnMut(&IdentityEvent)>;

/// Registered identity listeners, called in subscription order.
#[derive(Default)]
pub struct Listeners {
    next_id: u64,
    callbacks: Vec<(ListenerId, Callback)>,
}

impl Listeners {
    pub fn subscribe(&mut self, callback: impl FnMut(&IdentityEvent) + 'static) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.callbacks.push((id, Box::new(callback)));
        id
    }

    /// Returns whether the listener was registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.callbacks.len();
        self.callbacks.retain(|(other, _)| *other != id);
        self.callbacks.len() != before
    }

    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }

    pub fn emit(&mut self, event: &IdentityEvent) {
        for (_, callback) in &mut self.callbacks {
            callback(event);
        }
    }
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("count", &self.callbacks.len())
            .finish()
    }
}
