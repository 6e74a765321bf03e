//! Provider adapter error types.
//!
//! One uniform error shape so the orchestration layer can treat every AWS
//! service interchangeably.

use thiserror::Error;

/// Error surfaced by a provider adapter.
///
/// Remote failures carry the provider's fully rendered error text as
/// `message` and retain the original error as `source`; content is never
/// rewritten and nothing is retried at this layer. The resource being
/// processed when a failure occurred is attached through logging fields at
/// the failure site, not by altering the error.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Reading a resource's current tags failed.
    #[error("failed to read tags: {message}")]
    TagRead {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Applying a resource's desired tags failed.
    #[error("failed to apply tags: {message}")]
    TagWrite {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A resource-listing page request failed.
    #[error("resource listing failed: {message}")]
    List {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Provider configuration was rejected.
    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    /// Failure raised by a reconciliation engine or surrounding glue,
    /// never by the adapters themselves.
    #[error("internal error: {message}")]
    Internal {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl ProviderError {
    /// Get a stable error code for log correlation.
    pub fn error_code(&self) -> &'static str {
        match self {
            ProviderError::TagRead { .. } => "TAG_READ_FAILED",
            ProviderError::TagWrite { .. } => "TAG_WRITE_FAILED",
            ProviderError::List { .. } => "LISTING_FAILED",
            ProviderError::InvalidConfiguration { .. } => "INVALID_CONFIG",
            ProviderError::Internal { .. } => "INTERNAL_ERROR",
        }
    }

    // Convenience constructors

    /// Create a tag-read error.
    pub fn tag_read(message: impl Into<String>) -> Self {
        ProviderError::TagRead {
            message: message.into(),
            source: None,
        }
    }

    /// Create a tag-read error retaining the provider error.
    pub fn tag_read_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        ProviderError::TagRead {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a tag-write error.
    pub fn tag_write(message: impl Into<String>) -> Self {
        ProviderError::TagWrite {
            message: message.into(),
            source: None,
        }
    }

    /// Create a tag-write error retaining the provider error.
    pub fn tag_write_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        ProviderError::TagWrite {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a listing error.
    pub fn list(message: impl Into<String>) -> Self {
        ProviderError::List {
            message: message.into(),
            source: None,
        }
    }

    /// Create a listing error retaining the provider error.
    pub fn list_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        ProviderError::List {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a configuration error.
    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        ProviderError::InvalidConfiguration {
            message: message.into(),
        }
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ProviderError::Internal {
            message: message.into(),
            source: None,
        }
    }

    /// Create an internal error with source.
    pub fn internal_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        ProviderError::Internal {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

/// Result type for provider adapter operations.
pub type ProviderResult<T> = Result<T, ProviderError>;
