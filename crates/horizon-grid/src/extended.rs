//! Reactive selection on top of [`GridApi`].
//!
//! [`ExtendedGridApi`] wraps a base facade and adds hooks for deriving
//! read-only views of its configuration. Every base operation is still
//! available through `Deref`, and all clones share the same store and gate.

use std::ops::Deref;
use std::sync::Arc;

use horizon_grid_core::{Selected, Snapshot};

use crate::api::GridApi;
use crate::props::GridProps;

/// A [`GridApi`] with reactive selection.
#[derive(Debug, Clone)]
pub struct ExtendedGridApi {
    base: Arc<GridApi>,
}

impl ExtendedGridApi {
    /// Wrap a shared facade.
    pub fn new(base: Arc<GridApi>) -> Self {
        Self { base }
    }

    pub(crate) fn extend(base: GridApi) -> Self {
        Self::new(Arc::new(base))
    }

    /// A view of the whole configuration.
    ///
    /// Changes on every store update, even when the merged content is equal.
    pub fn use_store(&self) -> Selected<GridProps, Snapshot<GridProps>> {
        self.base.store().select_all()
    }

    /// A view of one derived value.
    ///
    /// Only changes when `selector`'s output differs by value.
    pub fn use_store_with<R, F>(&self, selector: F) -> Selected<GridProps, R>
    where
        R: Clone + PartialEq + Send + Sync + 'static,
        F: Fn(&GridProps) -> R + Send + Sync + 'static,
    {
        self.base.store().select(selector)
    }

    /// The shared base facade.
    pub fn base(&self) -> &Arc<GridApi> {
        &self.base
    }

    /// Whether two handles share the same facade.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.base, &other.base)
    }
}

impl Deref for ExtendedGridApi {
    type Target = GridApi;

    fn deref(&self) -> &GridApi {
        &self.base
    }
}

impl From<GridApi> for ExtendedGridApi {
    fn from(base: GridApi) -> Self {
        Self::extend(base)
    }
}

static_assertions::assert_impl_all!(ExtendedGridApi: Send, Sync, Clone);
