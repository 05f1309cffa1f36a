//! Error types for the host service seams.
//!
//! Host-facing traits return this error type so the routing layer can tell
//! a missing entity apart from a genuine host failure.

/// Error surfaced by a host service.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    /// The referenced entity does not exist on the host.
    #[error("Item not found: {0}")]
    NotFound(String),

    /// Any other failure inside the host. Handlers do not interpret these;
    /// they surface as internal server errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl HostError {
    /// Create a new NotFound error.
    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create an opaque host failure from a message.
    pub fn internal<S: Into<String>>(msg: S) -> Self {
        let msg: String = msg.into();
        Self::Other(anyhow::anyhow!(msg))
    }
}

/// Result type alias using [`HostError`].
pub type Result<T> = std::result::Result<T, HostError>;
