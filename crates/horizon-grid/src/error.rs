//! Error types for the grid facade.

/// Result type alias for grid operations.
pub type Result<T> = std::result::Result<T, GridError>;

/// Errors raised by a grid widget's data-fetch proxy.
///
/// Widget implementations return these from
/// [`GridInstance::commit_proxy`](crate::GridInstance::commit_proxy).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProxyError {
    /// The widget's fetch failed.
    #[error("grid proxy request failed: {0}")]
    Failed(String),

    /// The request was superseded or cancelled by the widget.
    #[error("grid proxy request was cancelled")]
    Cancelled,
}

impl ProxyError {
    /// Create a failure error.
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed(message.into())
    }
}

/// Errors that can occur in grid facade operations.
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    /// No grid instance is mounted.
    #[error("grid is not mounted")]
    NotReady,

    /// The widget's data-fetch proxy failed.
    #[error(transparent)]
    Proxy(#[from] ProxyError),

    /// Configuration text could not be parsed.
    #[error("invalid grid configuration: {0}")]
    Config(String),
}

impl From<serde_json::Error> for GridError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<toml::de::Error> for GridError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(err.to_string())
    }
}
