//! Error types for the Leadline core library.

/// Errors that can occur across the Leadline lead-capture system.
///
/// All error variants are marked with `#[non_exhaustive]` to allow
/// adding new error types without breaking changes.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Form validation error (missing consent, empty required field, etc.)
    #[error("Validation error: {message}")]
    Validation {
        /// Field that failed validation, if attributable to one
        field: Option<String>,
        /// What went wrong
        message: String,
    },

    /// Local persistence failure (quota exceeded, unreadable file, etc.)
    ///
    /// The ledger recovers from these silently; they surface only in logs.
    #[error("Storage error: {message}")]
    Storage {
        /// Human-readable error message
        message: String,
    },

    /// Remote mirror failure (network, auth, malformed response)
    #[error("Remote mirror error: {message}")]
    Remote {
        /// Human-readable error message
        message: String,
        /// Source error if available
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Messaging hand-off failure (browser launch refused)
    #[error("Hand-off error: {message}")]
    Handoff {
        /// Human-readable error message
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },

    /// I/O error (file operations, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience `Result` type alias for Leadline operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns whether this error should be surfaced to the user.
    ///
    /// Only validation failures block the user-visible flow; storage,
    /// remote, and hand-off failures are recovered silently per the
    /// propagation policy.
    pub fn is_user_facing(&self) -> bool {
        matches!(self, Error::Validation { .. })
    }

    /// Creates a new validation error.
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Error::Validation {
            field: None,
            message: message.into(),
        }
    }

    /// Creates a new validation error attributed to a field.
    pub fn validation_field<F, M>(field: F, message: M) -> Self
    where
        F: Into<String>,
        M: Into<String>,
    {
        Error::Validation {
            field: Some(field.into()),
            message: message.into(),
        }
    }

    /// Creates a new storage error.
    pub fn storage<S: Into<String>>(message: S) -> Self {
        Error::Storage {
            message: message.into(),
        }
    }

    /// Creates a new remote mirror error with a message.
    pub fn remote<S: Into<String>>(message: S) -> Self {
        Error::Remote {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a new remote mirror error with a message and source error.
    pub fn remote_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Error::Remote {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates a new hand-off error.
    pub fn handoff<S: Into<String>>(message: S) -> Self {
        Error::Handoff {
            message: message.into(),
        }
    }

    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }
}
