//! Core systems for Horizon Grid.
//!
//! This crate provides the generic machinery underneath the grid control
//! facade in `horizon-grid`:
//!
//! - **Signal/Slot System**: synchronous change notification with RAII guards
//! - **Shallow Merge**: the depth-1 merge rule applied to every update
//! - **Store**: a reactive state container with merge-based updates,
//!   subscriptions and derived selections
//! - **Lifecycle Gate**: a non-blocking ready/unready flag with deferred
//!   callbacks
//! - **Property**: change-detecting value cells
//!
//! # Store Example
//!
//! ```
//! use horizon_grid_core::Store;
//! use serde_json::json;
//!
//! let store = Store::new(json!({ "gridOptions": { "a": 1, "b": 2 } }).as_object().cloned().unwrap());
//! store.set_state(json!({ "gridOptions": { "a": 9 } }).as_object().cloned().unwrap());
//!
//! assert_eq!(store.get_state()["gridOptions"], json!({ "a": 9, "b": 2 }));
//! ```
//!
//! # Gate Example
//!
//! ```
//! use horizon_grid_core::LifecycleGate;
//!
//! let gate = LifecycleGate::new();
//! gate.when_ready(|| println!("mounted"));
//! gate.set_ready();
//! assert!(gate.is_ready());
//! ```

#[doc(hidden)]
pub use tracing as __tracing;

pub mod gate;
pub mod logging;
pub mod merge;
pub mod property;
pub mod signal;
pub mod store;

pub use gate::{GateState, LifecycleGate, ReadyCallbacks};
pub use logging::PerfSpan;
pub use merge::{ShallowMerge, merge_maps, merge_value};
pub use property::Property;
pub use signal::{ConnectionGuard, ConnectionId, Signal};
pub use store::{Selected, Snapshot, StateUpdate, Store, StoreOptions};
