//! Change notification channel.
//!
//! A [`Signal`] fans a value out to every connected slot, synchronously, on
//! the thread that emits it. It is the plumbing behind
//! [`Store::subscribe`](crate::Store::subscribe) and
//! [`Selected::on_change`](crate::Selected::on_change).
//!
//! Emission works on a copy of the slot list. A slot may therefore connect,
//! disconnect, or update the store that owns the signal while it runs;
//! anything connected mid-emission is first called on the next emission.
//!
//! ```
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicBool, Ordering};
//! use horizon_grid_core::Signal;
//!
//! let loading = Arc::new(Signal::<bool>::new());
//! let seen = Arc::new(AtomicBool::new(false));
//!
//! let seen_clone = seen.clone();
//! let guard = loading.connect_scoped(move |value| seen_clone.store(*value, Ordering::SeqCst));
//! loading.emit(true);
//! drop(guard);
//!
//! assert!(seen.load(Ordering::SeqCst));
//! assert_eq!(loading.connection_count(), 0);
//! ```

use std::fmt;
use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use slotmap::{SlotMap, new_key_type};

use crate::logging::targets;

new_key_type! {
    /// Identifies one connected slot.
    pub struct ConnectionId;
}

type Slot<Args> = Arc<dyn Fn(&Args) + Send + Sync>;

/// A list of slots notified with `&Args` on every emission.
pub struct Signal<Args> {
    slots: Mutex<SlotMap<ConnectionId, Slot<Args>>>,
}

impl<Args: Send + 'static> Signal<Args> {
    pub fn new() -> Self {
        Self {
            slots: Mutex::new(SlotMap::with_key()),
        }
    }

    /// Connect `slot`. It stays connected until [`disconnect`](Self::disconnect).
    pub fn connect<F>(&self, slot: F) -> ConnectionId
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        let id = self.slots.lock().insert(Arc::new(slot));
        crate::grid_trace!(target: targets::SIGNAL, ?id, "slot connected");
        id
    }

    /// Connect `slot` for as long as the returned guard lives.
    ///
    /// The guard only holds a weak reference to the signal.
    pub fn connect_scoped<F>(self: &Arc<Self>, slot: F) -> ConnectionGuard<Args>
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        ConnectionGuard {
            id: self.connect(slot),
            signal: Arc::downgrade(self),
        }
    }

    /// Remove a slot. Returns `false` if it was already gone.
    pub fn disconnect(&self, id: ConnectionId) -> bool {
        self.slots.lock().remove(id).is_some()
    }

    pub fn connection_count(&self) -> usize {
        self.slots.lock().len()
    }

    /// Call every connected slot with `args`, in connection order.
    pub fn emit(&self, args: Args) {
        let snapshot: Vec<Slot<Args>> = {
            let slots = self.slots.lock();
            if slots.is_empty() {
                return;
            }
            slots.values().cloned().collect()
        };
        crate::grid_trace!(target: targets::SIGNAL, slots = snapshot.len(), "emit");
        snapshot.iter().for_each(|slot| slot(&args));
    }
}

impl<Args: Send + 'static> Default for Signal<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args> fmt::Debug for Signal<Args> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("connections", &self.slots.lock().len())
            .finish()
    }
}

/// Disconnects its slot when dropped.
///
/// Returned by [`Signal::connect_scoped`]. Dropping the guard after the
/// signal itself is gone does nothing.
#[must_use = "the slot is disconnected as soon as the guard is dropped"]
pub struct ConnectionGuard<Args: Send + 'static> {
    id: ConnectionId,
    signal: Weak<Signal<Args>>,
}

impl<Args: Send + 'static> ConnectionGuard<Args> {
    pub fn id(&self) -> ConnectionId {
        self.id
    }
}

impl<Args: Send + 'static> Drop for ConnectionGuard<Args> {
    fn drop(&mut self) {
        if let Some(signal) = self.signal.upgrade() {
            signal.disconnect(self.id);
        }
    }
}

impl<Args: Send + 'static> fmt::Debug for ConnectionGuard<Args> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionGuard")
            .field("id", &self.id)
            .field("connected", &(self.signal.strong_count() > 0))
            .finish()
    }
}

static_assertions::assert_impl_all!(Signal<Arc<String>>: Send, Sync);
static_assertions::assert_impl_all!(ConnectionGuard<Arc<String>>: Send, Sync);
