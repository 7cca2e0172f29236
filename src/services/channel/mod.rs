//! Single-threaded publish/subscribe channel.
//!
//! Used for the adapter's locale-change notifications and for the year
//! view's "month selected" event. Subscribers are called synchronously, in
//! subscription order, on the thread that emits.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

type Listener<T> = Rc<RefCell<dyn FnMut(&T)>>;

struct Registry<T> {
    next_id: u64,
    listeners: Vec<(u64, Listener<T>)>,
}

/// A cloneable handle to a list of listeners.
pub struct Channel<T> {
    registry: Rc<RefCell<Registry<T>>>,
}

impl<T> Clone for Channel<T> {
    fn clone(&self) -> Self {
        Self {
            registry: Rc::clone(&self.registry),
        }
    }
}

impl<T> Default for Channel<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for Channel<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Channel")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

impl<T> Channel<T> {
    pub fn new() -> Self {
        Self {
            registry: Rc::new(RefCell::new(Registry {
                next_id: 0,
                listeners: Vec::new(),
            })),
        }
    }

    /// Register a listener. It stays registered until the returned
    /// [`Subscription`] is unsubscribed or dropped.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: FnMut(&T) + 'static,
        T: 'static,
    {
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        let listener: Listener<T> = Rc::new(RefCell::new(listener));
        registry.listeners.push((id, listener));

        let weak: Weak<RefCell<Registry<T>>> = Rc::downgrade(&self.registry);
        Subscription {
            release: Some(Box::new(move || {
                if let Some(registry) = weak.upgrade() {
                    registry.borrow_mut().listeners.retain(|(lid, _)| *lid != id);
                }
            })),
        }
    }

    /// Deliver `value` to every current listener.
    ///
    /// Listeners may subscribe or unsubscribe while being notified; such
    /// changes take effect from the next emit.
    pub fn emit(&self, value: &T) {
        let listeners: Vec<Listener<T>> = self
            .registry
            .borrow()
            .listeners
            .iter()
            .map(|(_, l)| Rc::clone(l))
            .collect();

        for listener in listeners {
            match listener.try_borrow_mut() {
                Ok(mut call) => (&mut *call)(value),
                Err(_) => log::warn!("Skipping re-entrant channel listener"),
            }
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.registry.borrow().listeners.len()
    }
}

/// Handle that keeps a listener registered.
///
/// Dropping the handle releases the listener.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// A subscription that is not attached to any channel.
    pub fn empty() -> Self {
        Self { release: None }
    }

    pub fn is_active(&self) -> bool {
        self.release.is_some()
    }

    pub fn unsubscribe(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Default for Subscription {
    fn default() -> Self {
        Self::empty()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}
