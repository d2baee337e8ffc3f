//! Resize notification list
//!
//! Key principles:
//! - Observers are called in registration order
//! - Dispatch is synchronous, on the caller's thread, before the setter returns
//! - Every emit reaches every observer (no consumption, no deduplication)
//! - Observers cannot reach the window that owns the list, so re-entrant
//!   geometry changes from inside a callback are ruled out by the borrow checker

use std::fmt;

/// Handle returned by [`ResizeSignal::connect`], used to disconnect later
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

type ResizeObserver = Box<dyn FnMut((u32, u32))>;

/// Ordered list of resize observers
pub struct ResizeSignal {
    observers: Vec<(SubscriptionId, ResizeObserver)>,
    next_id: u64,
}

impl ResizeSignal {
    /// Create an empty signal
    pub fn new() -> Self {
        Self {
            observers: Vec::new(),
            next_id: 0,
        }
    }

    /// Register an observer; it receives the new client size `(width, height)`
    pub fn connect<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut((u32, u32)) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove an observer, returning whether it was still connected
    pub fn disconnect(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        // retain keeps relative order, which dispatch order depends on
        self.observers.retain(|(observer_id, _)| *observer_id != id);
        self.observers.len() != before
    }

    /// Call every observer with `size`, in registration order
    pub fn emit(&mut self, size: (u32, u32)) {
        log::trace!("resize {}x{} -> {} observers", size.0, size.1, self.observers.len());
        for (_, observer) in &mut self.observers {
            observer(size);
        }
    }

    /// Number of connected observers
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    /// Whether no observer is connected
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    /// Drop all observers
    pub fn clear(&mut self) {
        self.observers.clear();
    }
}

impl Default for ResizeSignal {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ResizeSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResizeSignal")
            .field("observers", &self.observers.len())
            .finish()
    }
}
