//! Reactive state store with shallow-merge updates.
//!
//! A [`Store<T>`] holds the current state behind an `Arc`. Every update
//! merges a partial value onto the previous state with the
//! [`ShallowMerge`] rule and swaps in a *new* `Arc`, so observers can detect
//! change by reference and a snapshot taken before an update is never
//! mutated underneath its holder.
//!
//! # Observing the Store
//!
//! - [`Store::subscribe`] connects a slot that receives every new state.
//! - [`Store::select`] derives a read-only [`Selected`] view from a pure
//!   selector. The view is recomputed on every update but only changes (and
//!   notifies) when the selector's output differs by value.
//! - [`StoreOptions::on_update`] is a single hook invoked synchronously after
//!   each swap, before subscribers run.
//!
//! # Example
//!
//! ```
//! use horizon_grid_core::{StateUpdate, Store};
//! use serde_json::{json, Map, Value};
//!
//! let initial = json!({ "gridOptions": { "border": true } });
//! let store = Store::new(initial.as_object().cloned().unwrap());
//!
//! let loading = store.select(|state: &Map<String, Value>| state["gridOptions"].get("loading").cloned());
//! assert_eq!(loading.get(), None);
//!
//! let patch = json!({ "gridOptions": { "loading": true } });
//! store.set_state(patch.as_object().cloned().unwrap());
//!
//! assert_eq!(loading.get(), Some(json!(true)));
//! assert_eq!(store.get_state()["gridOptions"]["border"], json!(true));
//!
//! store.set_state(StateUpdate::with(|_prev: &Map<String, Value>| {
//!     json!({ "gridOptions": { "loading": false } }).as_object().cloned().unwrap()
//! }));
//! assert_eq!(loading.get(), Some(json!(false)));
//! ```

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use parking_lot::{Mutex, ReentrantMutex, RwLock, RwLockUpgradableReadGuard};
use serde_json::{Map, Value};

use crate::logging::{span_names, targets};
use crate::merge::ShallowMerge;
use crate::property::Property;
use crate::signal::{ConnectionGuard, ConnectionId, Signal};

type UpdateHook<T> = Box<dyn Fn(&Arc<T>) + Send + Sync>;
type Updater<T, P> = Box<dyn FnOnce(&T) -> P + Send>;

/// An update applied through [`Store::set_state`].
pub enum StateUpdate<T: ShallowMerge> {
    /// A partial value merged onto the current state.
    Patch(T::Patch),
    /// A function of the previous state producing the partial value.
    With(Updater<T, T::Patch>),
}

impl<T: ShallowMerge> StateUpdate<T> {
    /// Build an updater from a closure over the previous state.
    pub fn with<F>(f: F) -> Self
    where
        F: FnOnce(&T) -> T::Patch + Send + 'static,
    {
        Self::With(Box::new(f))
    }

    fn resolve(self, previous: &T) -> T::Patch {
        match self {
            Self::Patch(patch) => patch,
            Self::With(f) => f(previous),
        }
    }
}

impl From<Map<String, Value>> for StateUpdate<Map<String, Value>> {
    fn from(patch: Map<String, Value>) -> Self {
        Self::Patch(patch)
    }
}

impl<T: ShallowMerge> fmt::Debug for StateUpdate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Patch(_) => f.write_str("StateUpdate::Patch(..)"),
            Self::With(_) => f.write_str("StateUpdate::With(..)"),
        }
    }
}

/// Construction options for a [`Store`].
pub struct StoreOptions<T> {
    on_update: Option<UpdateHook<T>>,
}

impl<T> StoreOptions<T> {
    /// Options with no hooks.
    pub fn new() -> Self {
        Self { on_update: None }
    }

    /// Run `hook` synchronously after every state swap.
    ///
    /// Hook calls are serialized. When concurrent updates race, the hook is
    /// not called for a state that was already replaced by the time its turn
    /// came, so the last state a hook sees is always the current one.
    pub fn on_update<F>(mut self, hook: F) -> Self
    where
        F: Fn(&Arc<T>) + Send + Sync + 'static,
    {
        self.on_update = Some(Box::new(hook));
        self
    }
}

impl<T> Default for StoreOptions<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// A shared, immutable snapshot of store state.
///
/// Equality is reference identity: two snapshots are equal only if they
/// point at the same state value. This is what lets a whole-state
/// [`Selected`] view notify on every update.
pub struct Snapshot<T>(Arc<T>);

impl<T> Snapshot<T> {
    /// Wrap a state reference.
    pub fn new(state: Arc<T>) -> Self {
        Self(state)
    }

    /// The underlying shared reference.
    pub fn as_arc(&self) -> &Arc<T> {
        &self.0
    }

    /// Unwrap into the shared reference.
    pub fn into_arc(self) -> Arc<T> {
        self.0
    }
}

impl<T> Clone for Snapshot<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<T> PartialEq for Snapshot<T> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Deref for Snapshot<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: fmt::Debug> fmt::Debug for Snapshot<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Snapshot").field(&*self.0).finish()
    }
}

/// A reactive store holding a state value.
///
/// Usually shared as `Arc<Store<T>>`. All methods take `&self`.
pub struct Store<T> {
    state: Arc<RwLock<Arc<T>>>,
    on_update: Option<UpdateHook<T>>,
    hook_order: ReentrantMutex<()>,
    changed: Arc<Signal<Arc<T>>>,
}

impl<T: Send + Sync + 'static> Store<T> {
    /// Create a store holding `initial` verbatim.
    pub fn new(initial: T) -> Self {
        Self::with_options(initial, StoreOptions::new())
    }

    /// Create a store with construction options.
    pub fn with_options(initial: T, options: StoreOptions<T>) -> Self {
        Self {
            state: Arc::new(RwLock::new(Arc::new(initial))),
            on_update: options.on_update,
            hook_order: ReentrantMutex::new(()),
            changed: Arc::new(Signal::new()),
        }
    }

    /// The current state reference.
    ///
    /// The returned value is never mutated; later updates swap in a new
    /// reference instead.
    pub fn get_state(&self) -> Arc<T> {
        Arc::clone(&self.state.read())
    }

    /// Replace the whole state without merging.
    pub fn replace_state(&self, value: T) {
        let next = Arc::new(value);
        *self.state.write() = Arc::clone(&next);
        crate::grid_debug!(target: targets::STORE, "store state replaced");
        self.notify(next);
    }

    /// Connect a slot receiving every new state.
    ///
    /// The slot stays connected until the returned guard is dropped.
    pub fn subscribe<F>(&self, slot: F) -> ConnectionGuard<Arc<T>>
    where
        F: Fn(&Arc<T>) + Send + Sync + 'static,
    {
        self.changed.connect_scoped(slot)
    }

    /// Number of live subscriptions, including selections.
    pub fn subscriber_count(&self) -> usize {
        self.changed.connection_count()
    }

    /// Derive a read-only view of the state.
    ///
    /// `selector` must be pure. The view is recomputed from the current state
    /// whenever the state reference changes and only updates when the result
    /// differs by value. A notification that arrives after a newer update
    /// (a subscriber that updates the store from its slot) cannot roll the
    /// view back.
    pub fn select<R, F>(&self, selector: F) -> Selected<T, R>
    where
        R: Clone + PartialEq + Send + Sync + 'static,
        F: Fn(&T) -> R + Send + Sync + 'static,
    {
        self.select_arc(move |state: &Arc<T>| selector(&**state))
    }

    /// A view of the whole state that changes on every update.
    pub fn select_all(&self) -> Selected<T, Snapshot<T>> {
        self.select_arc(|state: &Arc<T>| Snapshot::new(Arc::clone(state)))
    }

    fn select_arc<R, F>(&self, selector: F) -> Selected<T, R>
    where
        R: Clone + PartialEq + Send + Sync + 'static,
        F: Fn(&Arc<T>) -> R + Send + Sync + 'static,
    {
        let initial = selector(&self.get_state());
        let view = Arc::new(SelectedView {
            value: Property::new(initial),
            changed: Signal::new(),
            refresh: Mutex::new(()),
        });

        let weak = Arc::downgrade(&view);
        let cell = Arc::downgrade(&self.state);
        let guard = self.changed.connect_scoped(move |_: &Arc<T>| {
            let (Some(view), Some(cell)) = (weak.upgrade(), cell.upgrade()) else {
                return;
            };
            let changed = {
                // Read and store under one lock so the latest state wins.
                let _refresh = view.refresh.lock();
                let current = Arc::clone(&cell.read());
                let next = selector(&current);
                view.value.set(next.clone()).then_some(next)
            };
            if let Some(next) = changed {
                view.changed.emit(next);
            }
        });

        Selected {
            view,
            _subscription: guard,
        }
    }

    fn notify(&self, next: Arc<T>) {
        if let Some(hook) = &self.on_update {
            let _order = self.hook_order.lock();
            // Skip a state another thread has already replaced; its own
            // notification reports the newer one.
            let current = self.get_state();
            if Arc::ptr_eq(&next, &current) {
                hook(&next);
            }
        }
        self.changed.emit(next);
    }
}

impl<T: ShallowMerge + Send + Sync + 'static> Store<T> {
    /// Merge an update onto the current state.
    ///
    /// Accepts a patch or an updater closure (see [`StateUpdate`]). The merge
    /// produces a new state reference; `on_update` runs once, after the swap,
    /// followed by subscribers.
    pub fn set_state(&self, update: impl Into<StateUpdate<T>>) {
        let _span = tracing::trace_span!(target: targets::STORE, span_names::STORE).entered();
        let update = update.into();
        let next = {
            let current = self.state.upgradable_read();
            let patch = update.resolve(&current);
            let next = Arc::new(current.merge(patch));
            let mut current = RwLockUpgradableReadGuard::upgrade(current);
            *current = Arc::clone(&next);
            next
        };
        crate::grid_trace!(target: targets::STORE, "store state updated");
        self.notify(next);
    }
}

impl<T: fmt::Debug + Send + Sync + 'static> fmt::Debug for Store<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("state", &*self.state.read())
            .field("subscribers", &self.changed.connection_count())
            .finish()
    }
}

struct SelectedView<R> {
    value: Property<R>,
    changed: Signal<R>,
    refresh: Mutex<()>,
}

/// A read-only reactive view derived from a [`Store`].
///
/// Dropping the view disconnects it from the store.
pub struct Selected<T: Send + Sync + 'static, R> {
    view: Arc<SelectedView<R>>,
    _subscription: ConnectionGuard<Arc<T>>,
}

impl<T, R> Selected<T, R>
where
    T: Send + Sync + 'static,
    R: Clone + PartialEq + Send + Sync + 'static,
{
    /// The current selected value.
    pub fn get(&self) -> R {
        self.view.value.get()
    }

    /// Access the selected value without cloning.
    pub fn with<F, U>(&self, f: F) -> U
    where
        F: FnOnce(&R) -> U,
    {
        self.view.value.with(f)
    }

    /// Connect a slot invoked whenever the selected value changes.
    pub fn on_change<F>(&self, slot: F) -> ConnectionId
    where
        F: Fn(&R) + Send + Sync + 'static,
    {
        self.view.changed.connect(slot)
    }

    /// Disconnect a slot connected with [`on_change`](Self::on_change).
    pub fn disconnect(&self, id: ConnectionId) -> bool {
        self.view.changed.disconnect(id)
    }
}

impl<T, R> fmt::Debug for Selected<T, R>
where
    T: Send + Sync + 'static,
    R: Clone + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Selected")
            .field("value", &self.view.value.get())
            .finish()
    }
}

static_assertions::assert_impl_all!(Store<Map<String, Value>>: Send, Sync);
static_assertions::assert_impl_all!(Selected<Map<String, Value>, bool>: Send, Sync);
