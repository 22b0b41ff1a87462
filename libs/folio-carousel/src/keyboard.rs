//! Document-level keyboard listeners
//!
//! [`KeyboardHub`] stands in for the page's global key event target. A
//! listener is acquired with [`KeyboardHub::listen`] and lives exactly as
//! long as the returned [`KeyboardBinding`]: dropping (or releasing) the
//! binding removes the listener once, no matter how many times release is
//! attempted.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};
use tracing::trace;

/// Keys the page cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    /// Anything else; delivered but ignored by the carousel
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` name
    pub fn from_name(name: &str) -> Self {
        match name {
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowRight" => Key::ArrowRight,
            _ => Key::Other,
        }
    }
}

type Listener = Rc<RefCell<dyn FnMut(Key)>>;

#[derive(Default)]
struct HubInner {
    next_id: u64,
    listeners: BTreeMap<u64, Listener>,
}

/// Global key event target
#[derive(Clone, Default)]
pub struct KeyboardHub {
    inner: Rc<RefCell<HubInner>>,
}

impl std::fmt::Debug for KeyboardHub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyboardHub")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl KeyboardHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener for every dispatched key
    pub fn listen(&self, listener: impl FnMut(Key) + 'static) -> KeyboardBinding {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.listeners.insert(id, Rc::new(RefCell::new(listener)));
        trace!(id, "keyboard listener added");

        KeyboardBinding {
            hub: Rc::downgrade(&self.inner),
            id: Some(id),
        }
    }

    /// Deliver a key to every live listener in registration order. Returns
    /// how many listeners ran.
    pub fn dispatch(&self, key: Key) -> usize {
        // Snapshot so listeners may add or drop bindings while running
        let snapshot: Vec<(u64, Listener)> = self
            .inner
            .borrow()
            .listeners
            .iter()
            .map(|(id, l)| (*id, Rc::clone(l)))
            .collect();

        let mut delivered = 0;
        for (id, listener) in snapshot {
            if !self.inner.borrow().listeners.contains_key(&id) {
                continue;
            }
            // A listener that re-dispatches does not receive its own nested key
            if let Ok(mut f) = listener.try_borrow_mut() {
                (*f)(key);
                delivered += 1;
            }
        }
        delivered
    }

    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

/// Scoped ownership of one listener
#[derive(Debug)]
#[must_use = "dropping the binding removes the listener immediately"]
pub struct KeyboardBinding {
    hub: Weak<RefCell<HubInner>>,
    id: Option<u64>,
}

impl KeyboardBinding {
    /// Remove the listener now. Later calls (and the eventual drop) do nothing.
    pub fn release(&mut self) {
        let Some(id) = self.id.take() else {
            return;
        };
        if let Some(hub) = self.hub.upgrade() {
            hub.borrow_mut().listeners.remove(&id);
            trace!(id, "keyboard listener removed");
        }
    }

    pub fn is_active(&self) -> bool {
        self.id.is_some() && self.hub.strong_count() > 0
    }
}

impl Drop for KeyboardBinding {
    fn drop(&mut self) {
        self.release();
    }
}
