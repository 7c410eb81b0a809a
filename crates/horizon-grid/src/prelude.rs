//! Prelude module for Horizon Grid.
//!
//! ```ignore
//! use horizon_grid::prelude::*;
//! ```

// ============================================================================
// Facade
// ============================================================================

pub use crate::api::GridApi;
pub use crate::component::{GridComponent, GridRender, use_grid};
pub use crate::extended::ExtendedGridApi;

// ============================================================================
// Configuration
// ============================================================================

pub use crate::props::{ClassValue, GridEvents, GridProps, GridPropsPatch, Separator};

// ============================================================================
// Widget Contracts
// ============================================================================

pub use crate::error::{GridError, ProxyError};
pub use crate::widget::{FormControl, GridInstance, NoForm, ProxyMode};

// ============================================================================
// Reactive Primitives
// ============================================================================

pub use horizon_grid_core::{LifecycleGate, Selected, Snapshot, StateUpdate};
