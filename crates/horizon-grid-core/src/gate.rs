//! Lifecycle gate: a two-state readiness flag.
//!
//! A [`LifecycleGate`] starts `unready`, flips to `ready` when the thing it
//! guards (typically a mounted widget instance) exists, and goes back to
//! `unready` on teardown. It never blocks a thread: callers either check
//! [`is_ready`](LifecycleGate::is_ready), defer work with
//! [`when_ready`](LifecycleGate::when_ready), or await
//! [`wait_ready`](LifecycleGate::wait_ready) from async code.
//!
//! Deferred callbacks run once, in registration order, on the next
//! `unready -> ready` transition. A callback registered while the gate is
//! already ready runs immediately on the caller's thread.

use std::collections::VecDeque;
use std::fmt;

use parking_lot::Mutex;
use tokio::sync::watch;

use crate::logging::targets;

type Deferred = Box<dyn FnOnce() + Send + 'static>;

/// Readiness state of a [`LifecycleGate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GateState {
    /// The guarded resource does not exist yet, or was torn down.
    Unready,
    /// The guarded resource is available.
    Ready,
}

/// A two-state condition flag with deferred callbacks.
pub struct LifecycleGate {
    ready: watch::Sender<bool>,
    // Held while transitioning so a callback cannot be queued after the
    // pending list was drained for the same transition.
    deferred: Mutex<VecDeque<Deferred>>,
}

impl LifecycleGate {
    /// Create a gate in the `unready` state.
    pub fn new() -> Self {
        let (ready, _) = watch::channel(false);
        Self {
            ready,
            deferred: Mutex::new(VecDeque::new()),
        }
    }

    /// Whether the gate is ready.
    pub fn is_ready(&self) -> bool {
        *self.ready.borrow()
    }

    /// The current state.
    pub fn state(&self) -> GateState {
        if self.is_ready() {
            GateState::Ready
        } else {
            GateState::Unready
        }
    }

    /// Transition to `ready`. Idempotent.
    ///
    /// On an actual transition, pending deferred callbacks run after the
    /// flag is set.
    pub fn set_ready(&self) {
        self.open().run();
    }

    /// Transition to `ready` without running the deferred callbacks.
    ///
    /// The callbacks released by the transition are returned instead, so a
    /// caller holding its own lock around the transition can run them once
    /// that lock is released. Empty if the gate was already ready.
    pub fn open(&self) -> ReadyCallbacks {
        let mut deferred = self.deferred.lock();
        if self.ready.send_replace(true) {
            return ReadyCallbacks(Vec::new());
        }
        let pending: Vec<Deferred> = deferred.drain(..).collect();
        crate::grid_debug!(target: targets::GATE, pending = pending.len(), "gate ready");
        ReadyCallbacks(pending)
    }

    /// Transition to `unready`. Idempotent.
    pub fn reset(&self) {
        let _deferred = self.deferred.lock();
        if self.ready.send_replace(false) {
            crate::grid_debug!(target: targets::GATE, "gate reset");
        }
    }

    /// Run `callback` once the gate is ready.
    ///
    /// Runs immediately if the gate is already ready.
    pub fn when_ready<F>(&self, callback: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let mut deferred = self.deferred.lock();
        if self.is_ready() {
            drop(deferred);
            callback();
        } else {
            deferred.push_back(Box::new(callback));
        }
    }

    /// Number of callbacks waiting for the next transition to `ready`.
    pub fn pending_count(&self) -> usize {
        self.deferred.lock().len()
    }

    /// Wait until the gate is ready.
    ///
    /// Resolves immediately if it already is.
    pub async fn wait_ready(&self) {
        let mut receiver = self.ready.subscribe();
        // The sender lives in `self`, so the channel cannot close while we wait.
        let _ = receiver.wait_for(|ready| *ready).await;
    }
}

/// Deferred callbacks released by [`LifecycleGate::open`].
#[must_use = "released callbacks only run when `run` is called"]
pub struct ReadyCallbacks(Vec<Deferred>);

impl ReadyCallbacks {
    /// Run the callbacks in registration order.
    pub fn run(self) {
        for callback in self.0 {
            callback();
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for ReadyCallbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ReadyCallbacks").field(&self.0.len()).finish()
    }
}

impl Default for LifecycleGate {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LifecycleGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LifecycleGate")
            .field("state", &self.state())
            .field("pending", &self.pending_count())
            .finish()
    }
}

static_assertions::assert_impl_all!(LifecycleGate: Send, Sync);
static_assertions::assert_impl_all!(ReadyCallbacks: Send);
