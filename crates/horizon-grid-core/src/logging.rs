//! Logging facilities for Horizon Grid.
//!
//! Horizon Grid uses the `tracing` crate for instrumentation. To see logs,
//! install a subscriber in your application:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("horizon_grid=debug,horizon_grid_core=trace")
//!     .init();
//! ```
//!
//! Store updates are logged at `trace`, gate transitions at `debug`, data
//! fetches attempted against an unmounted grid at `warn`, and widget failures
//! swallowed by the grid facade at `error`.

/// Span names used throughout Horizon Grid for tracing.
pub mod span_names {
    /// Data fetch through the grid proxy.
    pub const PROXY: &str = "horizon_grid::proxy";
    /// Store update span.
    pub const STORE: &str = "horizon_grid::store";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "horizon_grid_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "horizon_grid_core::signal";
    /// Store target.
    pub const STORE: &str = "horizon_grid_core::store";
    /// Lifecycle gate target.
    pub const GATE: &str = "horizon_grid_core::gate";
    /// Grid facade target.
    pub const API: &str = "horizon_grid::api";
    /// Component binding target.
    pub const COMPONENT: &str = "horizon_grid::component";
}

/// A guard that keeps a tracing span entered until dropped.
///
/// Only use this around synchronous work; async code should attach spans
/// with `tracing::Instrument` instead.
#[derive(Debug)]
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create and enter a new performance span.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::debug_span!(target: "horizon_grid::perf", "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}

/// Macros for common tracing patterns.
///
/// Without a `target:` they log to [`targets::CORE`]; subsystems pass their
/// own target from [`targets`].
#[macro_export]
macro_rules! grid_trace {
    (target: $target:expr, $($arg:tt)*) => {
        $crate::__tracing::trace!(target: $target, $($arg)*)
    };
    ($($arg:tt)*) => {
        $crate::__tracing::trace!(target: $crate::logging::targets::CORE, $($arg)*)
    };
}

#[macro_export]
macro_rules! grid_debug {
    (target: $target:expr, $($arg:tt)*) => {
        $crate::__tracing::debug!(target: $target, $($arg)*)
    };
    ($($arg:tt)*) => {
        $crate::__tracing::debug!(target: $crate::logging::targets::CORE, $($arg)*)
    };
}

#[macro_export]
macro_rules! grid_warn {
    (target: $target:expr, $($arg:tt)*) => {
        $crate::__tracing::warn!(target: $target, $($arg)*)
    };
    ($($arg:tt)*) => {
        $crate::__tracing::warn!(target: $crate::logging::targets::CORE, $($arg)*)
    };
}

#[macro_export]
macro_rules! grid_error {
    (target: $target:expr, $($arg:tt)*) => {
        $crate::__tracing::error!(target: $target, $($arg)*)
    };
    ($($arg:tt)*) => {
        $crate::__tracing::error!(target: $crate::logging::targets::CORE, $($arg)*)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_targets_are_namespaced() {
        for target in [targets::SIGNAL, targets::STORE, targets::GATE] {
            assert!(target.starts_with(targets::CORE));
        }
    }

    #[test]
    fn test_perf_span() {
        let _span = PerfSpan::new("test_operation");
        crate::grid_trace!("inside perf span");
        crate::grid_trace!(target: targets::STORE, "with explicit target");
    }
}
