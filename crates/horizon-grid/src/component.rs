//! Binding a grid facade to a host component.
//!
//! [`use_grid`] creates the facade and a [`GridComponent`] that feeds the
//! host's props into it. The component is not a renderer: [`render`]
//! produces a [`GridRender`] description the host hands to its widget.
//!
//! ```
//! use horizon_grid::prelude::*;
//!
//! let (mut grid, api) = use_grid(GridPropsPatch::new().table_title("Users"));
//!
//! grid.setup(
//!     GridPropsPatch::new().show_search_form(false),
//!     GridPropsPatch::new().grid_class("compact"),
//! );
//! assert!(!api.state().show_search_form);
//! assert_eq!(api.state().table_title.as_deref(), Some("Users"));
//!
//! let rendered = grid.render();
//! assert!(rendered.api.ptr_eq(&api));
//! ```
//!
//! [`render`]: GridComponent::render

use horizon_grid_core::PerfSpan;
use horizon_grid_core::logging::targets;

use crate::api::GridApi;
use crate::extended::ExtendedGridApi;
use crate::props::GridPropsPatch;

/// Create a grid facade and the component bound to it.
///
/// Returns the component and the handle callers use to control the grid.
pub fn use_grid(options: GridPropsPatch) -> (GridComponent, ExtendedGridApi) {
    let api = ExtendedGridApi::extend(GridApi::new(options));
    let component = GridComponent {
        api: api.clone(),
        merged: GridPropsPatch::default(),
        unmounted: false,
    };
    (component, api)
}

/// What a [`GridComponent`] hands to the widget it renders.
#[derive(Debug, Clone)]
pub struct GridRender {
    /// The props and attributes merged during setup.
    pub props: GridPropsPatch,
    /// The facade the widget mounts itself onto.
    pub api: ExtendedGridApi,
}

/// A host component driving a grid facade.
///
/// Dropping the component unmounts the facade.
#[derive(Debug)]
pub struct GridComponent {
    api: ExtendedGridApi,
    merged: GridPropsPatch,
    unmounted: bool,
}

impl GridComponent {
    /// Component name registered with the host.
    pub const NAME: &'static str = "VbenVxeGrid";

    /// The component name.
    pub fn name(&self) -> &'static str {
        Self::NAME
    }

    /// Apply the host's props and attributes.
    ///
    /// Attributes override props key by key. The merged patch is applied to
    /// the facade and kept for [`render`](Self::render).
    pub fn setup(&mut self, props: GridPropsPatch, attrs: GridPropsPatch) {
        let _span = PerfSpan::new("grid_setup");

        let merged = props.overlay(attrs);
        horizon_grid_core::grid_debug!(target: targets::COMPONENT, empty = merged.is_empty(), "grid component setup");
        self.api.set_state(merged.clone());
        self.merged = merged;
    }

    /// Describe the widget to render.
    pub fn render(&self) -> GridRender {
        GridRender {
            props: self.merged.clone(),
            api: self.api.clone(),
        }
    }

    /// The facade handle.
    pub fn api(&self) -> &ExtendedGridApi {
        &self.api
    }

    /// Unmount the facade. Only the first call has an effect.
    pub fn before_unmount(&mut self) {
        if self.unmounted {
            return;
        }
        self.unmounted = true;
        horizon_grid_core::grid_debug!(target: targets::COMPONENT, "grid component unmounting");
        self.api.unmount();
    }
}

impl Drop for GridComponent {
    fn drop(&mut self) {
        self.before_unmount();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::{GridInstance, NoForm, ProxyMode};
    use crate::error::ProxyError;
    use futures_util::FutureExt;
    use futures_util::future::BoxFuture;
    use serde_json::{Map, Value};
    use std::sync::Arc;

    struct IdleGrid;

    impl GridInstance for IdleGrid {
        fn commit_proxy(
            &self,
            _mode: ProxyMode,
            _params: Map<String, Value>,
        ) -> BoxFuture<'_, Result<(), ProxyError>> {
            async { Ok(()) }.boxed()
        }
    }

    #[test]
    fn test_name() {
        let (grid, _api) = use_grid(GridPropsPatch::default());
        assert_eq!(grid.name(), "VbenVxeGrid");
    }

    #[test]
    fn test_setup_attrs_win_over_props() {
        let (mut grid, api) = use_grid(GridPropsPatch::new().table_title("Initial"));
        grid.setup(
            GridPropsPatch::new().table_title("From props").show_search_form(false),
            GridPropsPatch::new().table_title("From attrs"),
        );

        let state = api.state();
        assert_eq!(state.table_title.as_deref(), Some("From attrs"));
        assert!(!state.show_search_form);

        let rendered = grid.render();
        assert_eq!(rendered.props.table_title, Some(Some("From attrs".to_string())));
        assert_eq!(rendered.props.show_search_form, Some(false));
        assert!(rendered.api.ptr_eq(&api));
    }

    #[test]
    fn test_before_unmount_and_drop_unmount_api() {
        let (mut grid, api) = use_grid(GridPropsPatch::default());
        assert!(api.mount(Some(Arc::new(IdleGrid)), Arc::new(NoForm)));

        grid.before_unmount();
        assert!(!api.is_mounted());

        // A later mount is not undone by the second (drop) call.
        assert!(api.mount(Some(Arc::new(IdleGrid)), Arc::new(NoForm)));
        drop(grid);
        assert!(api.is_mounted());
    }

    #[test]
    fn test_drop_unmounts() {
        let (grid, api) = use_grid(GridPropsPatch::default());
        api.mount(Some(Arc::new(IdleGrid)), Arc::new(NoForm));
        drop(grid);
        assert!(!api.is_mounted());
        assert!(!api.is_ready());
    }
}
