//! The grid control facade.
//!
//! [`GridApi`] owns a configuration [`Store`] and a [`LifecycleGate`]. It is
//! usable as soon as it is constructed: configuration can be read and
//! mutated at any time. Data fetches ([`query`](GridApi::query) and
//! [`reload`](GridApi::reload)) only reach a widget once one has been
//! [mounted](GridApi::mount).
//!
//! # Lifecycle
//!
//! ```text
//! unready --mount(Some)--> ready
//! ready   --unmount()----> unready
//! unready --mount(None)--> unready   (ignored)
//! ready   --mount(..)----> ready     (ignored, already mounted)
//! ```
//!
//! Unmounting keeps the configuration and the last widget/form references.
//! Fetches issued while unready are skipped with a warning instead of
//! reaching a stale widget; a fetch already in flight when `unmount()` runs
//! still completes against the widget it started with.
//!
//! # Failure policy
//!
//! `query` and `reload` never fail from the caller's point of view: widget
//! errors are logged and swallowed so a failed refresh cannot take down the
//! calling code. Use [`commit_proxy`](GridApi::commit_proxy) to observe the
//! outcome directly.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use horizon_grid_core::logging::{span_names, targets};
use horizon_grid_core::{LifecycleGate, Property, Snapshot, StateUpdate, Store, StoreOptions};
use parking_lot::Mutex;
use serde_json::{Map, Value};
use tracing::Instrument;

use crate::error::{GridError, Result};
use crate::props::{GridProps, GridPropsPatch};
use crate::widget::{FormControl, GridInstance, ProxyMode};

#[derive(Default)]
struct Mounted {
    mounted: bool,
    grid: Option<Arc<dyn GridInstance>>,
    form: Option<Arc<dyn FormControl>>,
}

/// Imperative control over a grid widget.
pub struct GridApi {
    store: Arc<Store<GridProps>>,
    state: Arc<Property<Snapshot<GridProps>>>,
    gate: LifecycleGate,
    mounted: Mutex<Mounted>,
}

impl GridApi {
    /// Create a facade with `options` merged onto the default configuration.
    pub fn new(options: GridPropsPatch) -> Self {
        let initial = GridProps::from_patch(options);

        let state = Arc::new(Property::new(Snapshot::new(Arc::new(initial.clone()))));
        let cached = Arc::clone(&state);
        let store = Store::with_options(
            initial,
            StoreOptions::new().on_update(move |next: &Arc<GridProps>| {
                cached.set(Snapshot::new(Arc::clone(next)));
            }),
        );
        // Share the store's own reference from the start.
        state.set_silent(Snapshot::new(store.get_state()));

        Self {
            store: Arc::new(store),
            state,
            gate: LifecycleGate::new(),
            mounted: Mutex::new(Mounted::default()),
        }
    }

    /// Bind a live widget and its search form.
    ///
    /// Ignored (returns `false`) if `instance` is `None` or a widget is
    /// already mounted.
    ///
    /// The mounted flag and the gate flip together under the mount lock;
    /// callbacks deferred on the gate run after that lock is released.
    pub fn mount(&self, instance: Option<Arc<dyn GridInstance>>, form: Arc<dyn FormControl>) -> bool {
        let Some(instance) = instance else {
            return false;
        };

        let released = {
            let mut mounted = self.mounted.lock();
            if mounted.mounted {
                return false;
            }
            mounted.grid = Some(instance);
            mounted.form = Some(form);
            mounted.mounted = true;
            self.gate.open()
        };

        released.run();
        true
    }

    /// Return to the unready state.
    ///
    /// The widget and form references and the configuration are kept.
    pub fn unmount(&self) {
        let mut mounted = self.mounted.lock();
        mounted.mounted = false;
        self.gate.reset();
    }

    /// Whether a widget is currently mounted.
    pub fn is_mounted(&self) -> bool {
        self.mounted.lock().mounted
    }

    /// Whether the lifecycle gate is ready.
    pub fn is_ready(&self) -> bool {
        self.gate.is_ready()
    }

    /// The lifecycle gate, for deferring work until mount.
    pub fn gate(&self) -> &LifecycleGate {
        &self.gate
    }

    /// The most recently mounted widget, even after unmount.
    pub fn grid(&self) -> Option<Arc<dyn GridInstance>> {
        self.mounted.lock().grid.clone()
    }

    /// The most recently mounted search form, even after unmount.
    pub fn form_api(&self) -> Option<Arc<dyn FormControl>> {
        self.mounted.lock().form.clone()
    }

    /// The configuration store.
    pub fn store(&self) -> &Arc<Store<GridProps>> {
        &self.store
    }

    /// The current configuration snapshot.
    pub fn state(&self) -> Snapshot<GridProps> {
        self.state.get()
    }

    /// Run the widget's data fetch, returning its outcome.
    ///
    /// Fails with [`GridError::NotReady`] when no widget is mounted.
    pub async fn commit_proxy(&self, mode: ProxyMode, params: Map<String, Value>) -> Result<()> {
        if !self.gate.is_ready() {
            return Err(GridError::NotReady);
        }
        let grid = self.grid().ok_or(GridError::NotReady)?;
        grid.commit_proxy(mode, params).await?;
        Ok(())
    }

    /// Fetch data at the current paging position.
    ///
    /// Errors are logged and swallowed.
    pub async fn query(&self, params: Map<String, Value>) {
        self.proxy_logged(ProxyMode::Query, params).await;
    }

    /// Fetch data again from the first page.
    ///
    /// Errors are logged and swallowed.
    pub async fn reload(&self, params: Map<String, Value>) {
        self.proxy_logged(ProxyMode::Reload, params).await;
    }

    async fn proxy_logged(&self, mode: ProxyMode, params: Map<String, Value>) {
        let span = tracing::debug_span!(target: targets::API, span_names::PROXY, %mode);
        match self.commit_proxy(mode, params).instrument(span).await {
            Ok(()) => {}
            Err(GridError::NotReady) => {
                horizon_grid_core::grid_warn!(target: targets::API, %mode, "grid is not mounted, skipping request");
            }
            Err(err) => {
                horizon_grid_core::grid_error!(target: targets::API, %mode, error = %err, "Error occurred while running grid {mode}");
            }
        }
    }

    /// Merge `options` into the widget options.
    pub fn set_grid_options(&self, options: Map<String, Value>) {
        self.set_state(GridPropsPatch::new().grid_options(options));
    }

    /// Set the widget's `loading` option.
    pub fn set_loading(&self, loading: bool) {
        let mut options = Map::new();
        options.insert("loading".to_string(), Value::Bool(loading));
        self.set_grid_options(options);
    }

    /// Merge a patch, or the patch returned by an updater, into the
    /// configuration.
    pub fn set_state(&self, update: impl Into<StateUpdate<GridProps>>) {
        self.store.set_state(update);
    }

    /// Show or hide the search form, or flip it when `show` is `None`.
    ///
    /// Returns the new visibility.
    pub fn toggle_search_form(&self, show: Option<bool>) -> bool {
        let shown = Arc::new(AtomicBool::new(false));
        let result = Arc::clone(&shown);
        self.set_state(StateUpdate::with(move |prev: &GridProps| {
            let next = show.unwrap_or(!prev.show_search_form);
            result.store(next, Ordering::SeqCst);
            GridPropsPatch::new().show_search_form(next)
        }));
        shown.load(Ordering::SeqCst)
    }
}

impl Default for GridApi {
    fn default() -> Self {
        Self::new(GridPropsPatch::default())
    }
}

impl fmt::Debug for GridApi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GridApi")
            .field("mounted", &self.is_mounted())
            .field("gate", &self.gate)
            .field("state", &*self.state())
            .finish()
    }
}

static_assertions::assert_impl_all!(GridApi: Send, Sync);
