//! Error types for the desktop shell
//!
//! Window-manager operations are total and never fail. The fallible
//! surface is limited to parsing (window catalog ids, configuration) and
//! serializing the render snapshot.

/// Errors that can occur in desktop shell operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DesktopError {
    /// The string does not name a window in the catalog
    UnknownWindow(String),

    /// A configuration value was rejected
    InvalidConfig {
        /// The offending field
        field: &'static str,
        /// Why the value was rejected
        reason: &'static str,
    },

    /// JSON serialization or deserialization failed
    SerializationError(String),
}

impl std::fmt::Display for DesktopError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownWindow(id) => write!(f, "unknown window: {}", id),
            Self::InvalidConfig { field, reason } => {
                write!(f, "invalid config '{}': {}", field, reason)
            }
            Self::SerializationError(msg) => write!(f, "serialization error: {}", msg),
        }
    }
}

impl std::error::Error for DesktopError {}

impl From<serde_json::Error> for DesktopError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

/// Result type alias for desktop shell operations
pub type DesktopResult<T> = Result<T, DesktopError>;
