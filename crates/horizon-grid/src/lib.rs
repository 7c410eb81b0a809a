//! Horizon Grid - a reactive control facade for data-grid widgets.
//!
//! A grid is configured through a [`GridApi`]: a shallow-merge configuration
//! store plus a lifecycle gate that opens once a live widget is mounted.
//! [`use_grid`] builds the facade together with a [`GridComponent`] that
//! binds it to a host, and hands back an [`ExtendedGridApi`] with reactive
//! selection on top.
//!
//! # Example
//!
//! ```
//! use horizon_grid::prelude::*;
//! use serde_json::{json, Map, Value};
//!
//! let (_grid, api) = use_grid(GridPropsPatch::new().show_search_form(false));
//!
//! let loading = api.use_store_with(|props| props.is_loading());
//! let mut options = Map::new();
//! options.insert("border".to_string(), Value::Bool(true));
//! api.set_grid_options(options);
//! api.set_loading(true);
//!
//! assert!(loading.get());
//! assert_eq!(Value::Object(api.state().grid_options.clone()), json!({ "border": true, "loading": true }));
//! assert!(!api.state().show_search_form);
//! ```

pub mod api;
pub mod component;
pub mod error;
pub mod extended;
pub mod prelude;
pub mod props;
pub mod widget;

pub use api::GridApi;
pub use component::{GridComponent, GridRender, use_grid};
pub use error::{GridError, ProxyError, Result};
pub use extended::ExtendedGridApi;
pub use props::{
    ClassValue, EventHandler, GridEvents, GridProps, GridPropsPatch, Separator, SeparatorOptions,
};
pub use widget::{FormControl, GridInstance, NoForm, ProxyMode};

/// Reactive primitives the grid is built on.
pub mod reactive {
    pub use horizon_grid_core::*;
}
