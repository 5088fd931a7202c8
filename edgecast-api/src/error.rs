use serde::{Deserialize, Serialize};

/// Unified error type for all EdgeCast API operations.
///
/// Each variant carries a `service` field naming the API area that produced
/// the error (`dns`, `cname`, `origin`, `customer`, `rules-engine`, `waf`,
/// `ids`) plus variant-specific context. All variants are serializable for
/// structured error reporting.
///
/// No variant is retried by the client: a failed call is reported to the
/// caller as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ApiError {
    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    NetworkError {
        /// API area that produced the error.
        service: String,
        /// Error details.
        detail: String,
    },

    /// The request timed out.
    Timeout {
        /// API area that produced the error.
        service: String,
        /// Error details.
        detail: String,
    },

    /// The API token or IDS credentials are missing, invalid or expired.
    InvalidCredentials {
        /// API area that produced the error.
        service: String,
        /// Original error message from the API, if available.
        raw_message: Option<String>,
    },

    /// The credentials are valid but lack access to the requested object.
    PermissionDenied {
        /// API area that produced the error.
        service: String,
        /// Original error message from the API, if available.
        raw_message: Option<String>,
    },

    /// The requested object does not exist.
    NotFound {
        /// API area that produced the error.
        service: String,
        /// Description of the missing object (e.g. `zone 1234`).
        resource: String,
        /// Original error message from the API, if available.
        raw_message: Option<String>,
    },

    /// The API rejected a request parameter or payload.
    InvalidParameter {
        /// API area that produced the error.
        service: String,
        /// Name of the invalid parameter, or `"body"` when the payload was rejected.
        param: String,
        /// Description of the validation failure.
        detail: String,
    },

    /// API rate limit exceeded.
    RateLimited {
        /// API area that produced the error.
        service: String,
        /// Seconds to wait before retrying, if the API sent `Retry-After`.
        retry_after: Option<u64>,
        /// Original error message from the API, if available.
        raw_message: Option<String>,
    },

    /// The API answered with a 5xx status.
    ServerError {
        /// API area that produced the error.
        service: String,
        /// HTTP status code.
        status: u16,
        /// Original error message from the API, if available.
        raw_message: Option<String>,
    },

    /// Failed to parse or serialize a JSON payload.
    ParseError {
        /// API area that produced the error.
        service: String,
        /// Error details.
        detail: String,
    },

    /// Fallback for errors that don't map to a specific variant.
    Unknown {
        /// API area that produced the error.
        service: String,
        /// Original error code, if available.
        raw_code: Option<String>,
        /// Original error message.
        raw_message: String,
    },
}

impl ApiError {
    /// Whether this is expected behavior (user input, missing object, etc.), used for log levels.
    ///
    /// Callers should log at `warn` when this returns `true` and `error` otherwise.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::InvalidCredentials { .. }
                | Self::PermissionDenied { .. }
                | Self::NotFound { .. }
                | Self::InvalidParameter { .. }
        )
    }

    /// Whether the API reported that the object does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// The API area that produced this error.
    pub fn service(&self) -> &str {
        match self {
            Self::NetworkError { service, .. }
            | Self::Timeout { service, .. }
            | Self::InvalidCredentials { service, .. }
            | Self::PermissionDenied { service, .. }
            | Self::NotFound { service, .. }
            | Self::InvalidParameter { service, .. }
            | Self::RateLimited { service, .. }
            | Self::ServerError { service, .. }
            | Self::ParseError { service, .. }
            | Self::Unknown { service, .. } => service,
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { service, detail } => {
                write!(f, "[{service}] Network error: {detail}")
            }
            Self::Timeout { service, detail } => {
                write!(f, "[{service}] Request timeout: {detail}")
            }
            Self::InvalidCredentials {
                service,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{service}] Invalid credentials: {msg}")
                } else {
                    write!(f, "[{service}] Invalid credentials")
                }
            }
            Self::PermissionDenied {
                service,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{service}] Permission denied: {msg}")
                } else {
                    write!(f, "[{service}] Permission denied")
                }
            }
            Self::NotFound {
                service,
                resource,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{service}] {resource} not found: {msg}")
                } else {
                    write!(f, "[{service}] {resource} not found")
                }
            }
            Self::InvalidParameter {
                service,
                param,
                detail,
            } => {
                write!(f, "[{service}] Invalid parameter '{param}': {detail}")
            }
            Self::RateLimited {
                service,
                retry_after,
                ..
            } => {
                if let Some(secs) = retry_after {
                    write!(f, "[{service}] Rate limited (retry after {secs}s)")
                } else {
                    write!(f, "[{service}] Rate limited")
                }
            }
            Self::ServerError {
                service,
                status,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{service}] Server error (HTTP {status}): {msg}")
                } else {
                    write!(f, "[{service}] Server error (HTTP {status})")
                }
            }
            Self::ParseError { service, detail } => {
                write!(f, "[{service}] Parse error: {detail}")
            }
            Self::Unknown {
                service,
                raw_code,
                raw_message,
            } => {
                if let Some(code) = raw_code {
                    write!(f, "[{service}] Error {code}: {raw_message}")
                } else {
                    write!(f, "[{service}] {raw_message}")
                }
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Result alias for EdgeCast API operations.
pub type Result<T> = std::result::Result<T, ApiError>;
