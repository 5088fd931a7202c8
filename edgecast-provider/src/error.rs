//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use edgecast_api::ApiError;

/// Field-level validation error for provider configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ConfigValidationError {
    /// A required field is missing entirely.
    MissingField {
        /// Machine-readable field key.
        field: String,
    },
    /// A field is present but empty/whitespace-only.
    EmptyField { field: String },
    /// A field has an invalid format.
    InvalidFormat {
        field: String,
        /// Description of what's wrong with the format.
        reason: String,
    },
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField { field } => write!(f, "Missing required field: {field}"),
            Self::EmptyField { field } => write!(f, "Field must not be empty: {field}"),
            Self::InvalidFormat { field, reason } => write!(f, "{field}: {reason}"),
        }
    }
}

impl std::error::Error for ConfigValidationError {}

/// Provider layer error type
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Provider configuration is invalid
    #[error("{0}")]
    Config(#[from] ConfigValidationError),

    /// Resource attributes or a stored ID failed validation
    #[error("Validation error: {0}")]
    Validation(String),

    /// A vendor API call failed; `context` names the call site (e.g. `AddCname`).
    #[error("{context}: {source}")]
    Api {
        context: String,
        #[source]
        source: ApiError,
    },

    /// Attribute (de)serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ProviderError {
    /// Wrap an API error with the name of the failing call.
    pub fn api(context: impl Into<String>, source: ApiError) -> Self {
        Self::Api {
            context: context.into(),
            source,
        }
    }

    /// Whether it is expected behavior (user input, missing object, etc.), used for log levels.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::Config(_) | Self::Validation(_) => true,
            Self::Api { source, .. } => source.is_expected(),
            Self::Serialization(_) => false,
        }
    }
}

/// Adds a call-site prefix to API results.
pub trait ApiResultExt<T> {
    fn context(self, context: &str) -> ProviderResult<T>;
}

impl<T> ApiResultExt<T> for Result<T, ApiError> {
    fn context(self, context: &str) -> ProviderResult<T> {
        self.map_err(|e| ProviderError::api(context, e))
    }
}

/// Provider layer Result type alias
pub type ProviderResult<T> = std::result::Result<T, ProviderError>;
