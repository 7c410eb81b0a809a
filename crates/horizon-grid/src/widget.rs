//! Contracts for the collaborators a grid facade is mounted onto.
//!
//! The facade never renders anything itself. It proxies data fetches to a
//! live [`GridInstance`] and hands back an opaque [`FormControl`] for the
//! companion search form.

use std::any::Any;
use std::fmt;

use futures_util::future::BoxFuture;
use serde_json::{Map, Value};

use crate::error::ProxyError;

/// Data-fetch mode passed to [`GridInstance::commit_proxy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProxyMode {
    /// Fetch with the current paging position.
    Query,
    /// Fetch again from the first page.
    Reload,
}

impl ProxyMode {
    /// The widget-side name of this mode.
    pub fn as_str(self) -> &'static str {
        match self {
            ProxyMode::Query => "query",
            ProxyMode::Reload => "reload",
        }
    }
}

impl fmt::Display for ProxyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A live grid widget.
///
/// Implemented by the rendering layer. Request sequencing and cancellation
/// between overlapping fetches are the widget's responsibility.
pub trait GridInstance: Send + Sync {
    /// Run the widget's data fetch in `mode` with plain `params`.
    fn commit_proxy(
        &self,
        mode: ProxyMode,
        params: Map<String, Value>,
    ) -> BoxFuture<'_, Result<(), ProxyError>>;
}

/// The companion search form.
///
/// Stored by the facade and handed back to callers unmodified. Use
/// [`as_any`](Self::as_any) to get at the concrete form type.
pub trait FormControl: Send + Sync + 'static {
    /// Get this as Any for downcasting.
    fn as_any(&self) -> &dyn Any;
}

/// A form control for grids mounted without a search form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoForm;

impl FormControl for NoForm {
    fn as_any(&self) -> &dyn Any {
        self
    }
}
