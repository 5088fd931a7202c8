//! HTTP status and vendor body to [`ApiError`] mapping
//!
//! Error bodies come in three shapes depending on the API area:
//! - legacy: `{"Message": "..."}`
//! - WAF / rules engine: `{"errors": [{"code": "...", "message": "..."}]}`
//! - IDS: `{"error": "invalid_client", "error_description": "..."}`

use serde_json::Value;

use crate::client::EdgecastClient;
use crate::error::ApiError;
use crate::traits::{ApiErrorMapper, ErrorContext, RawApiError};

/// Extract the vendor code/message from an error response body.
///
/// Falls back to the raw body text (or the status line) when the body is not
/// one of the known shapes.
pub(crate) fn raw_error_from_body(status: u16, body: &str) -> RawApiError {
    let Ok(json) = serde_json::from_str::<Value>(body) else {
        let message = if body.trim().is_empty() {
            format!("HTTP {status}")
        } else {
            body.trim().to_string()
        };
        return RawApiError::new(status, message);
    };

    let str_field = |v: &Value, key: &str| v.get(key).and_then(Value::as_str).map(str::to_string);

    if let Some(first) = json
        .get("errors")
        .and_then(Value::as_array)
        .and_then(|errors| errors.first())
    {
        let message = str_field(first, "message").unwrap_or_else(|| first.to_string());
        let code = first.get("code").and_then(|c| match c {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        });
        return RawApiError {
            status,
            code,
            message,
        };
    }

    if let Some(message) = str_field(&json, "Message").or_else(|| str_field(&json, "message")) {
        return RawApiError::new(status, message);
    }

    if let Some(code) = str_field(&json, "error") {
        let message = str_field(&json, "error_description").unwrap_or_else(|| code.clone());
        return RawApiError::with_code(status, code, message);
    }

    RawApiError::new(status, body.trim().to_string())
}

impl ApiErrorMapper for EdgecastClient {
    fn map_error(&self, service: &str, raw: RawApiError, context: ErrorContext) -> ApiError {
        match raw.status {
            400 | 422 => ApiError::InvalidParameter {
                service: service.to_string(),
                param: raw.code.unwrap_or_else(|| "body".to_string()),
                detail: raw.message,
            },
            401 => ApiError::InvalidCredentials {
                service: service.to_string(),
                raw_message: Some(raw.message),
            },
            403 => ApiError::PermissionDenied {
                service: service.to_string(),
                raw_message: Some(raw.message),
            },
            404 => ApiError::NotFound {
                service: service.to_string(),
                resource: context
                    .resource
                    .unwrap_or_else(|| "<unknown>".to_string()),
                raw_message: Some(raw.message),
            },
            429 => ApiError::RateLimited {
                service: service.to_string(),
                retry_after: None,
                raw_message: Some(raw.message),
            },
            status @ 500..=599 => ApiError::ServerError {
                service: service.to_string(),
                status,
                raw_message: Some(raw.message),
            },
            _ => self.unknown_error(service, raw),
        }
    }
}
